//! Virtual-time queue of deferred callbacks.

use std::fmt;
use std::time::Duration;
use tracing::{debug, trace};

/// Identifier of a scheduled callback, assigned in scheduling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Position of the callback in scheduling order, starting at 0.
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

type Callback<T> = Box<dyn FnOnce() -> T + Send>;

struct Scheduled<T> {
    delay: Duration,
    id: TaskId,
    callback: Callback<T>,
}

/// Deferred callbacks ordered by `(delay, scheduling order)`.
///
/// Nothing sleeps: [`run`](Timeline::run) drains the queue immediately in the
/// order a real timer would fire it.
pub struct Timeline<T> {
    tasks: Vec<Scheduled<T>>,
    next_id: u64,
}

impl<T> Timeline<T> {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `callback` to fire after `delay`.
    pub fn schedule<F>(&mut self, delay: Duration, callback: F) -> TaskId
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        trace!(task = id.0, delay_ms = delay.as_millis() as u64, "scheduled callback");
        self.tasks.push(Scheduled {
            delay,
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Number of callbacks waiting to fire.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Fire every callback and return their outputs in firing order.
    pub fn run(mut self) -> Vec<T> {
        // Stable: equal delays keep scheduling order
        self.tasks.sort_by_key(|task| task.delay);

        let fired = self.tasks.len();
        let outputs = self
            .tasks
            .into_iter()
            .map(|task| {
                trace!(
                    task = task.id.0,
                    delay_ms = task.delay.as_millis() as u64,
                    "firing callback"
                );
                (task.callback)()
            })
            .collect();

        debug!(fired, "timeline drained");
        outputs
    }
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Timeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timeline")
            .field("pending", &self.tasks.len())
            .finish()
    }
}
