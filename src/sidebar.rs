//! Sidebar visibility state machine.
//!
//! Wide terminals get a collapsible rail whose collapsed flag persists
//! across runs. Narrow terminals get a drawer rendered as an overlay,
//! closed by Escape, a click outside it, or the terminal growing past the
//! breakpoint; while the drawer is open, content scrolling is locked.

/// Width, in columns, separating the wide (desktop-like) layout from the
/// narrow (mobile-like) overlay layout.
pub const BREAKPOINT_COLS: u16 = 100;

/// Rendered rail widths in wide mode.
pub const EXPANDED_WIDTH: u16 = 26;
pub const COLLAPSED_WIDTH: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Wide,
    Narrow,
}

#[derive(Debug, Clone)]
pub struct Sidebar {
    mode: Mode,
    collapsed: bool,
    shown: bool,
    scroll_locked: bool,
}

impl Sidebar {
    pub fn new(width: u16, collapsed: bool) -> Self {
        Self {
            mode: mode_for(width),
            collapsed,
            shown: false,
            scroll_locked: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Wide-mode rail state. Meaningless while narrow.
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Narrow-mode drawer state. Always false while wide.
    pub fn shown(&self) -> bool {
        self.shown
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Whether the rail currently renders icons only.
    pub fn rail_collapsed(&self) -> bool {
        self.mode == Mode::Wide && self.collapsed
    }

    /// Toggle the wide-mode rail. Returns the new flag for persisting, or
    /// `None` when the terminal is narrow and the toggle does not apply.
    pub fn toggle_collapsed(&mut self) -> Option<bool> {
        if self.mode != Mode::Wide {
            return None;
        }
        self.collapsed = !self.collapsed;
        Some(self.collapsed)
    }

    /// Open the narrow-mode drawer. No-op while wide.
    pub fn show_drawer(&mut self) {
        if self.mode != Mode::Narrow {
            return;
        }
        self.shown = true;
        self.scroll_locked = true;
    }

    /// Close the narrow-mode drawer. Safe to call at any time.
    pub fn hide_drawer(&mut self) {
        self.shown = false;
        self.scroll_locked = false;
    }

    /// Track a terminal resize. Growing past the breakpoint force-closes
    /// the drawer and releases the scroll lock.
    pub fn on_resize(&mut self, width: u16) {
        self.mode = mode_for(width);
        if self.mode == Mode::Wide {
            self.hide_drawer();
        }
    }

    /// Rail width in columns for the wide layout.
    pub fn rail_width(&self) -> u16 {
        if self.collapsed {
            COLLAPSED_WIDTH
        } else {
            EXPANDED_WIDTH
        }
    }
}

fn mode_for(width: u16) -> Mode {
    if width >= BREAKPOINT_COLS {
        Mode::Wide
    } else {
        Mode::Narrow
    }
}
