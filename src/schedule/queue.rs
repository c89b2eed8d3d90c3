//! Deferred task queue on a logical clock.
//!
//! Tasks are scheduled with a delay in milliseconds relative to the
//! scheduler's current time. Time only moves when the owner pops due tasks
//! or advances the clock, so tests can step through pacing delays exactly.
//!
//! Due tasks come out in `(due, id)` order: earlier deadline first, and
//! scheduling order among tasks due at the same instant.

use serde::{Deserialize, Serialize};

/// Handle for cancelling a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

/// A task waiting for its deadline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTask<T> {
    pub id: TaskId,
    /// Logical time (ms) at which the task fires.
    pub due: u64,
    pub task: T,
}

/// Cancellable deferred-task queue.
///
/// ```
/// use mahjong_table::schedule::Scheduler;
///
/// let mut scheduler = Scheduler::new();
/// let late = scheduler.schedule(500, "draw");
/// scheduler.schedule(100, "think");
///
/// assert!(scheduler.cancel(late));
/// assert_eq!(scheduler.pop_due(1000).map(|t| t.task), Some("think"));
/// assert!(scheduler.pop_due(1000).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    now: u64,
    next_id: u64,
    pending: Vec<ScheduledTask<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time in ms.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedule `task` to fire `delay_ms` after the current time.
    pub fn schedule(&mut self, delay_ms: u64, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledTask {
            id,
            due: self.now.saturating_add(delay_ms),
            task,
        });
        id
    }

    /// Remove a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.pending.iter().position(|t| t.id == id) {
            Some(pos) => {
                self.pending.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove every pending task. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Whether a task is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|t| t.due).min()
    }

    /// Remove and return the next task due at or before `until`.
    ///
    /// Moves the clock forward to the task's deadline (never backwards).
    pub fn pop_due(&mut self, until: u64) -> Option<ScheduledTask<T>> {
        let pos = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i)?;

        let task = self.pending.remove(pos);
        self.now = self.now.max(task.due);
        Some(task)
    }

    /// Move the clock forward to `until` without firing anything.
    pub fn advance_to(&mut self, until: u64) {
        self.now = self.now.max(until);
    }
}
