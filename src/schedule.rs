//! Cancellable scheduled tasks.
//!
//! Every delayed UI effect (alert fade-out, tooltip removal, banner
//! expiry) is a task owned by the [`Scheduler`] and pumped from the app
//! tick. Re-interaction cancels the pending task by id instead of letting
//! a stale timer fire against state that has since changed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// What happens when a task comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start an alert's fade-out.
    FadeAlert(u64),
    /// Drop an alert from the stack.
    RemoveAlert(u64),
    /// Drop the tooltip singleton.
    RemoveTooltip,
    /// Drop a notification banner.
    RemoveToast(u64),
    /// Dismiss the full-screen loading overlay.
    HideLoading,
}

#[derive(Debug)]
struct Task {
    id: TaskId,
    due: Instant,
    effect: Effect,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `effect` to fire `after` from now.
    pub fn schedule(&mut self, after: Duration, effect: Effect) -> TaskId {
        self.schedule_at(Instant::now() + after, effect)
    }

    pub fn schedule_at(&mut self, due: Instant, effect: Effect) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task { id, due, effect });
        id
    }

    /// Cancel a single task. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Cancel every pending task whose effect matches `pred`.
    pub fn cancel_where(&mut self, pred: impl Fn(&Effect) -> bool) {
        self.tasks.retain(|t| !pred(&t.effect));
    }

    /// Remove and return every effect due at `now`, in due order.
    pub fn fire_due(&mut self, now: Instant) -> Vec<Effect> {
        let mut due: Vec<Task> = Vec::new();
        let mut i = 0;
        while i < self.tasks.len() {
            if self.tasks[i].due <= now {
                due.push(self.tasks.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|t| t.due);
        due.into_iter().map(|t| t.effect).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_due_tasks_in_order() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        scheduler.schedule_at(now + Duration::from_millis(300), Effect::RemoveAlert(1));
        scheduler.schedule_at(now + Duration::from_millis(100), Effect::FadeAlert(1));
        scheduler.schedule_at(now + Duration::from_secs(5), Effect::RemoveToast(2));

        let fired = scheduler.fire_due(now + Duration::from_millis(400));
        assert_eq!(fired, vec![Effect::FadeAlert(1), Effect::RemoveAlert(1)]);
        assert_eq!(scheduler.tasks.len(), 1);
    }

    #[test]
    fn nothing_fires_before_its_deadline() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        scheduler.schedule_at(now + Duration::from_secs(5), Effect::RemoveTooltip);
        assert!(scheduler.fire_due(now).is_empty());
        assert_eq!(scheduler.tasks.len(), 1);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        let id = scheduler.schedule_at(now + Duration::from_millis(100), Effect::RemoveTooltip);
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.fire_due(now + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn cancel_where_drops_matching_tasks_only() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        scheduler.schedule_at(now + Duration::from_millis(100), Effect::RemoveTooltip);
        scheduler.schedule_at(now + Duration::from_millis(100), Effect::FadeAlert(7));
        scheduler.cancel_where(|e| matches!(e, Effect::RemoveTooltip));

        let fired = scheduler.fire_due(now + Duration::from_secs(1));
        assert_eq!(fired, vec![Effect::FadeAlert(7)]);
    }
}
