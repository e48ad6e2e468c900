//! Staggered entrance animations.
//!
//! Delays are assigned once, by list position, when the app starts; an
//! element stays hidden until its delay elapses and never re-animates.

use std::time::{Duration, Instant};

/// Per-card entrance step.
pub const CARD_STEP: Duration = Duration::from_millis(100);
/// Per-menu-item entrance step.
pub const MENU_STEP: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct Entrance {
    started: Instant,
    delays: Vec<Duration>,
}

impl Entrance {
    /// Stagger `count` elements `step` apart, starting now.
    pub fn staggered(count: usize, step: Duration) -> Self {
        Self::staggered_at(Instant::now(), count, step)
    }

    pub fn staggered_at(started: Instant, count: usize, step: Duration) -> Self {
        Self {
            started,
            delays: (0..count as u32).map(|i| step * i).collect(),
        }
    }

    pub fn visible(&self, index: usize) -> bool {
        self.visible_at(index, Instant::now())
    }

    /// Elements past the end of the list are always visible.
    pub fn visible_at(&self, index: usize, now: Instant) -> bool {
        match self.delays.get(index) {
            Some(delay) => now.saturating_duration_since(self.started) >= *delay,
            None => true,
        }
    }

    pub fn len(&self) -> usize {
        self.delays.len()
    }
}
