//! Logical-time scheduler for delayed session work.
//!
//! The session never sleeps and never owns a real timer. Work that must
//! happen "later" is queued here with a due time on a logical clock, and the
//! host moves that clock forward with [`Scheduler::advance`]. Every queued
//! task has a [`TaskHandle`] so it can be cancelled before it fires.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Handle to a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskHandle(pub u64);

impl TaskHandle {
    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

#[derive(Clone, Debug)]
struct ScheduledTask<T> {
    handle: TaskHandle,
    due: Duration,
    payload: T,
}

/// Queue of cancellable tasks keyed by due time.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use memory_match::session::Scheduler;
///
/// let mut scheduler = Scheduler::new();
/// scheduler.schedule_in(Duration::from_millis(1000), "revert");
///
/// assert!(scheduler.advance(Duration::from_millis(999)).is_empty());
/// assert_eq!(scheduler.advance(Duration::from_millis(1)), vec!["revert"]);
/// ```
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_handle: u64,
    tasks: Vec<ScheduledTask<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_handle: 0,
            tasks: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `payload` to fire once `delay` has elapsed.
    pub fn schedule_in(&mut self, delay: Duration, payload: T) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        let due = self.now.saturating_add(delay);
        log::trace!("scheduled {} at {:?}", handle, due);
        self.tasks.push(ScheduledTask {
            handle,
            due,
            payload,
        });
        handle
    }

    /// Cancel a task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.handle != handle);
        let cancelled = self.tasks.len() != before;
        if cancelled {
            log::trace!("cancelled {}", handle);
        }
        cancelled
    }

    /// Move the clock forward and return the payloads that came due,
    /// earliest first. Ties fire in scheduling order.
    ///
    /// The clock saturates at `Duration::MAX`.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        self.now = self.now.saturating_add(elapsed);
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|task| task.due <= now);
        self.tasks = pending;

        due.sort_by_key(|task| (task.due, task.handle.0));
        due.into_iter()
            .map(|task| {
                log::trace!("firing {}", task.handle);
                task.payload
            })
            .collect()
    }

    /// Time until the earliest pending task is due.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.tasks
            .iter()
            .map(|task| task.due.saturating_sub(self.now))
            .min()
    }

    /// Time until a specific task is due, if it is still pending.
    #[must_use]
    pub fn time_until(&self, handle: TaskHandle) -> Option<Duration> {
        self.tasks
            .iter()
            .find(|task| task.handle == handle)
            .map(|task| task.due.saturating_sub(self.now))
    }

    /// Number of tasks waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Check if a task is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|task| task.handle == handle)
    }
}
