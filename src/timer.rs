//! Timer Queue - Virtual clock and cancellable scheduled tasks.
//!
//! The page runs on cooperative single-threaded timers: the typewriter's tick
//! loop, the email-copy feedback reversion, the preloader fade. All of them
//! schedule against this queue instead of a wall clock, so tests drive time
//! with [`TimerQueue::advance`] and get fully deterministic runs.
//!
//! Callbacks receive the queue itself and may reschedule, which is how the
//! typewriter's self-rescheduling tick loop is built. Every schedule returns a
//! [`TimerHandle`]; cancelled tasks never fire.
//!
//! # Example
//!
//! ```ignore
//! use folio_motion::timer::TimerQueue;
//! use std::time::Duration;
//!
//! let timers = TimerQueue::new();
//! let handle = timers.schedule(Duration::from_millis(500), |_| {
//!     println!("fired at +500ms");
//! });
//!
//! timers.advance(Duration::from_millis(499)); // nothing yet
//! timers.advance(Duration::from_millis(1));   // fires
//! # let _ = handle;
//! ```

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;
use std::time::Duration;

// =============================================================================
// Handle
// =============================================================================

/// Handle to a scheduled task.
///
/// Dropping the handle does NOT cancel the task; call [`TimerHandle::cancel`].
#[derive(Clone)]
pub struct TimerHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle {
    /// Prevent the task from firing. Safe to call after it already fired.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Whether the task has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

// =============================================================================
// Internal Task
// =============================================================================

struct Task {
    deadline: Duration,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    callback: Box<dyn FnOnce(&TimerQueue)>,
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl Eq for Task {}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Task {
    // BinaryHeap is a max-heap; invert so the earliest deadline (then the
    // lowest sequence number, for FIFO among equal deadlines) pops first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

struct QueueInner {
    now: Duration,
    next_seq: u64,
    tasks: BinaryHeap<Task>,
}

// =============================================================================
// Queue
// =============================================================================

/// Single-threaded timer queue over a virtual clock.
///
/// Clones share the same queue.
#[derive(Clone)]
pub struct TimerQueue {
    inner: Rc<RefCell<QueueInner>>,
}

impl TimerQueue {
    /// Create an empty queue with the clock at zero.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(QueueInner {
                now: Duration::ZERO,
                next_seq: 0,
                tasks: BinaryHeap::new(),
            })),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of tasks still queued (cancelled tasks included until they
    /// would have fired).
    pub fn pending(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Schedule `callback` to run `delay` after the current virtual time.
    ///
    /// The callback receives the queue so it can schedule follow-up work.
    pub fn schedule(
        &self,
        delay: Duration,
        callback: impl FnOnce(&TimerQueue) + 'static,
    ) -> TimerHandle {
        let cancelled = Rc::new(Cell::new(false));
        let mut inner = self.inner.borrow_mut();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let deadline = inner.now + delay;
        inner.tasks.push(Task {
            deadline,
            seq,
            cancelled: cancelled.clone(),
            callback: Box::new(callback),
        });
        TimerHandle { cancelled }
    }

    /// Advance the virtual clock by `by`, firing every due task in deadline
    /// order (FIFO among equal deadlines).
    ///
    /// Callbacks run with the clock set to their own deadline, so a callback
    /// that reschedules gets correct relative timing. Tasks scheduled by
    /// callbacks fire within the same `advance` call if they fall inside the
    /// window.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().now + by;

        loop {
            // Pop the next due task without holding the borrow across the
            // callback (callbacks re-enter the queue to reschedule).
            let task = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .tasks
                    .peek()
                    .is_some_and(|t| t.deadline <= target);
                if due {
                    let task = inner.tasks.pop();
                    if let Some(ref t) = task {
                        inner.now = t.deadline;
                    }
                    task
                } else {
                    None
                }
            };

            let Some(task) = task else { break };
            if !task.cancelled.get() {
                (task.callback)(self);
            }
        }

        self.inner.borrow_mut().now = target;
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
