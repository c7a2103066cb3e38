//! Deferred, cancellable tasks.
//!
//! A [`Scheduler`] hands back a handle for every task it schedules. Dropping
//! the handle cancels the task if it has not run yet, so whoever owns the
//! handle also owns the task's lifetime.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// A task that runs once on the event loop.
pub type Task = Box<dyn FnOnce() + 'static>;

/// Runs tasks after a delay.
pub trait Scheduler {
    /// Cancels the task when dropped.
    type Handle;

    /// Run `task` once `delay` has elapsed.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;
}

struct Entry {
    due: Duration,
    cancelled: Rc<Cell<bool>>,
    task: Task,
}

/// Scheduler driven by hand instead of a clock.
///
/// Time only moves when [`ManualScheduler::advance`] is called, which makes
/// deferred behaviour deterministic off the browser.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    now: Rc<Cell<Duration>>,
    queue: Rc<RefCell<Vec<Entry>>>,
}

/// Handle returned by [`ManualScheduler`].
#[derive(Debug)]
pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    /// Create a scheduler at time zero with nothing queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of queued tasks that have neither run nor been cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .iter()
            .filter(|entry| !entry.cancelled.get())
            .count()
    }

    /// Move time forward and run every live task that has come due, in due
    /// order. Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let now = self.now.get() + by;
        self.now.set(now);

        let due = {
            let mut queue = self.queue.borrow_mut();
            queue.retain(|entry| !entry.cancelled.get());
            let (mut due, waiting): (Vec<Entry>, Vec<Entry>) =
                queue.drain(..).partition(|entry| entry.due <= now);
            *queue = waiting;
            due.sort_by_key(|entry| entry.due);
            due
        };

        let mut ran = 0;
        for entry in due {
            // An earlier task in this batch may have cancelled a later one.
            if entry.cancelled.get() {
                continue;
            }
            entry.cancelled.set(true);
            (entry.task)();
            ran += 1;
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle {
        let cancelled = Rc::new(Cell::new(false));
        self.queue.borrow_mut().push(Entry {
            due: self.now.get() + delay,
            cancelled: Rc::clone(&cancelled),
            task,
        });
        ManualHandle { cancelled }
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now.get())
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Task) {
        let hits = Rc::new(Cell::new(0));
        let hits_task = Rc::clone(&hits);
        let make = move || -> Task {
            let hits = Rc::clone(&hits_task);
            Box::new(move || hits.set(hits.get() + 1))
        };
        (hits, make)
    }

    #[test]
    fn test_runs_only_when_due() {
        let scheduler = ManualScheduler::new();
        let (hits, task) = counter();
        let _handle = scheduler.schedule(Duration::from_millis(10), task());

        assert_eq!(scheduler.advance(Duration::from_millis(9)), 0);
        assert_eq!(hits.get(), 0);
        assert_eq!(scheduler.pending(), 1);

        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
        assert_eq!(hits.get(), 1);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.now(), Duration::from_millis(10));
    }

    #[test]
    fn test_dropping_handle_cancels() {
        let scheduler = ManualScheduler::new();
        let (hits, task) = counter();
        let handle = scheduler.schedule(Duration::from_millis(10), task());
        drop(handle);

        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.advance(Duration::from_secs(1)), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_runs_in_due_order() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let late = Rc::clone(&order);
        let _a = scheduler.schedule(
            Duration::from_millis(20),
            Box::new(move || late.borrow_mut().push("late")),
        );
        let early = Rc::clone(&order);
        let _b = scheduler.schedule(
            Duration::from_millis(5),
            Box::new(move || early.borrow_mut().push("early")),
        );

        assert_eq!(scheduler.advance(Duration::from_millis(30)), 2);
        assert_eq!(*order.borrow(), ["early", "late"]);
    }

    #[test]
    fn test_task_may_schedule_more_work() {
        let scheduler = ManualScheduler::new();
        let inner = scheduler.clone();
        let handles = Rc::new(RefCell::new(Vec::new()));
        let handles_task = Rc::clone(&handles);
        let (hits, task) = counter();
        let follow_up = task();

        let _handle = scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                let handle = inner.schedule(Duration::from_millis(10), follow_up);
                handles_task.borrow_mut().push(handle);
            }),
        );

        assert_eq!(scheduler.advance(Duration::from_millis(10)), 1);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.advance(Duration::from_millis(10)), 1);
        assert_eq!(hits.get(), 1);
    }
}
