// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Records every invocation a limiter forwards, together with how much
/// time had passed when it happened.
///
/// The clock is injected: [`Recorder::with_clock`] pairs the recorder with
/// a [`VirtualScheduler`](crate::VirtualScheduler) for exact timestamps,
/// while [`Recorder::new`] reads `tokio::time::Instant` for tests running
/// on a real runtime.
///
/// ```ignore
/// let scheduler = VirtualScheduler::new();
/// let recorder = Recorder::with_clock(scheduler.clock());
/// let wrapped = throttle_with_scheduler(
///     recorder.callback(),
///     wait,
///     ThrottleOptions::default(),
///     scheduler.clone(),
/// );
/// wrapped.call("a");
/// assert_eq!(recorder.calls(), vec!["a"]);
/// ```
pub struct Recorder<A> {
    clock: Arc<dyn Fn() -> Duration + Send + Sync>,
    invocations: Arc<Mutex<Vec<(Duration, A)>>>,
}

impl<A> Recorder<A>
where
    A: Clone + Send + 'static,
{
    /// Recorder timestamped by `tokio::time::Instant`, for tests that run
    /// inside a tokio runtime.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let started = tokio::time::Instant::now();
        Self::with_clock(move || tokio::time::Instant::now() - started)
    }

    /// Recorder timestamped by an arbitrary elapsed-time clock.
    pub fn with_clock<C>(clock: C) -> Self
    where
        C: Fn() -> Duration + Send + Sync + 'static,
    {
        Self {
            clock: Arc::new(clock),
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a closure suitable as the wrapped function of a limiter.
    pub fn callback(&self) -> impl Fn(A) + Send + Sync + 'static {
        let clock = Arc::clone(&self.clock);
        let invocations = Arc::clone(&self.invocations);
        move |args| {
            invocations.lock().push((clock(), args));
        }
    }

    /// Arguments of every recorded invocation, in order.
    pub fn calls(&self) -> Vec<A> {
        self.invocations
            .lock()
            .iter()
            .map(|(_, args)| args.clone())
            .collect()
    }

    /// Elapsed time of every recorded invocation, in order.
    pub fn times(&self) -> Vec<Duration> {
        self.invocations.lock().iter().map(|(at, _)| *at).collect()
    }

    pub fn count(&self) -> usize {
        self.invocations.lock().len()
    }
}

impl<A> std::fmt::Debug for Recorder<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recorder")
            .field("count", &self.invocations.lock().len())
            .finish_non_exhaustive()
    }
}
