// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_runtime::scheduler::Scheduler;
use pacer_runtime::timer::Timer;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Sub;
use std::sync::Arc;
use std::time::Duration;

type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Deterministic single-threaded [`Scheduler`]: callbacks sit in a
/// deadline-ordered queue and run only when the test advances the virtual
/// clock past them.
///
/// Unlike a real runtime there are no detached tasks and no wall-clock
/// rounding: `advance` runs every due callback synchronously, in deadline
/// order, with `now()` reading each callback's own deadline while it runs.
/// Cancellation removes the queue entry outright, so a cancelled callback
/// can never fire.
///
/// ```ignore
/// let scheduler = VirtualScheduler::new();
/// let wrapped = throttle_with_scheduler(f, wait, options, scheduler.clone());
/// wrapped.call(args);
/// scheduler.advance_ms(1000); // trailing edge fires here, exactly
/// ```
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    queue: Arc<Mutex<Queue>>,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_id: u64,
    due: BTreeMap<(Duration, u64), Callback>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the scheduler was created.
    pub fn elapsed(&self) -> Duration {
        self.queue.lock().now
    }

    /// Clock closure reading the virtual time, for
    /// [`Recorder::with_clock`](crate::Recorder::with_clock).
    pub fn clock(&self) -> impl Fn() -> Duration + Send + Sync + 'static {
        let queue = Arc::clone(&self.queue);
        move || queue.lock().now
    }

    /// Advances the virtual clock by `ms` milliseconds, running every
    /// callback whose deadline falls within the advanced span.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Advances the virtual clock by `by`, running due callbacks in
    /// deadline order. The queue lock is released while each callback
    /// runs, so callbacks may schedule, cancel, or read the clock.
    pub fn advance(&self, by: Duration) {
        let target = self.queue.lock().now + by;
        loop {
            let callback = {
                let mut queue = self.queue.lock();
                let due = queue
                    .due
                    .first_key_value()
                    .map(|(&key, _)| key)
                    .filter(|&(deadline, _)| deadline <= target);
                match due {
                    Some(key) => {
                        queue.now = key.0;
                        queue.due.remove(&key)
                    }
                    None => None,
                }
            };
            match callback {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.queue.lock().now = target;
    }

    /// Number of callbacks still waiting for their deadline.
    pub fn pending(&self) -> usize {
        self.queue.lock().due.len()
    }
}

impl fmt::Debug for VirtualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.queue.lock();
        f.debug_struct("VirtualScheduler")
            .field("now", &queue.now)
            .field("pending", &queue.due.len())
            .finish()
    }
}

/// Instant of the virtual clock: time elapsed since scheduler creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct VirtualInstant(Duration);

impl Sub<VirtualInstant> for VirtualInstant {
    type Output = Duration;

    fn sub(self, rhs: VirtualInstant) -> Duration {
        self.0 - rhs.0
    }
}

impl Timer for VirtualScheduler {
    type Instant = VirtualInstant;

    fn now(&self) -> Self::Instant {
        VirtualInstant(self.queue.lock().now)
    }
}

impl Scheduler for VirtualScheduler {
    type Handle = (Duration, u64);

    fn schedule<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        let mut queue = self.queue.lock();
        let deadline = queue.now + delay;
        let id = queue.next_id;
        queue.next_id += 1;
        queue.due.insert((deadline, id), Box::new(callback));
        (deadline, id)
    }

    fn cancel(&self, handle: Self::Handle) {
        self.queue.lock().due.remove(&handle);
    }
}
