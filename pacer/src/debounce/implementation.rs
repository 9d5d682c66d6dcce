// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::{debug, trace};
use pacer_runtime::scheduler::Scheduler;
use parking_lot::Mutex;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "runtime-tokio")]
use pacer_runtime::TokioScheduler;

/// Stock quiet period for callers with no tuning opinion.
pub const DEFAULT_DEBOUNCE_WAIT: Duration = Duration::from_millis(500);

/// Wraps `f` so that it runs only after calls have stopped for `wait`,
/// using the default tokio scheduler.
///
/// With `immediate` the first call of a burst runs `f` synchronously and
/// the rest of the burst is suppressed instead of deferred.
#[cfg(feature = "runtime-tokio")]
pub fn debounce<A, F>(f: F, wait: Duration, immediate: bool) -> Debounced<A, F, TokioScheduler>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    debounce_with_scheduler(f, wait, immediate, TokioScheduler)
}

/// Like [`debounce`], but with an explicitly injected [`Scheduler`].
pub fn debounce_with_scheduler<A, F, S>(
    f: F,
    wait: Duration,
    immediate: bool,
    scheduler: S,
) -> Debounced<A, F, S>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
    S: Scheduler,
{
    Debounced {
        inner: Arc::new(DebounceInner {
            f,
            wait,
            immediate,
            scheduler,
            state: Mutex::new(DebounceState {
                pending_timer: None,
                epoch: 0,
            }),
            _args: PhantomData,
        }),
    }
}

/// A debounced callable. Cloning shares the quiet-period state.
pub struct Debounced<A, F, S>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
    S: Scheduler,
{
    inner: Arc<DebounceInner<A, F, S>>,
}

struct DebounceInner<A, F, S: Scheduler> {
    f: F,
    wait: Duration,
    immediate: bool,
    scheduler: S,
    state: Mutex<DebounceState<S>>,
    // No shared latest-args slot; each armed timer owns its own call's
    // arguments, so `A` only flows through the scheduled closures.
    _args: PhantomData<fn(A)>,
}

struct DebounceState<S: Scheduler> {
    /// Outstanding deadline timer, at most one at a time.
    pending_timer: Option<S::Handle>,
    /// Bumped on every call; a callback whose epoch is stale was superseded
    /// by a newer call and must not fire (abort can race a callback that
    /// already slept through its delay).
    epoch: u64,
}

impl<A, F, S> Debounced<A, F, S>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
    S: Scheduler,
{
    /// Registers one call, pushing the deadline out by the full wait.
    ///
    /// There is no shared latest-arguments slot: each armed timer owns the
    /// arguments of the call that armed it, and the epoch guard ensures
    /// only the last-armed timer ever fires, so the deferred invocation
    /// still sees the newest arguments.
    pub fn call(&self, args: A) {
        let inner = &self.inner;
        let mut state = inner.state.lock();

        let call_now = inner.immediate && state.pending_timer.is_none();
        state.epoch = state.epoch.wrapping_add(1);
        let epoch = state.epoch;
        if let Some(handle) = state.pending_timer.take() {
            inner.scheduler.cancel(handle);
            trace!("debounce: deadline pushed out");
        }

        if inner.immediate {
            // The timer only closes the suppression window; the deferred
            // path never invokes in immediate mode.
            let shared = Arc::clone(inner);
            let handle = inner.scheduler.schedule(inner.wait, move || {
                let mut state = shared.state.lock();
                if state.epoch == epoch {
                    state.pending_timer = None;
                }
            });
            state.pending_timer = Some(handle);
            drop(state);
            if call_now {
                debug!("debounce: immediate invoke");
                (inner.f)(args);
            } else {
                trace!("debounce: call suppressed");
            }
        } else {
            let shared = Arc::clone(inner);
            let handle = inner.scheduler.schedule(inner.wait, move || {
                let mut state = shared.state.lock();
                if state.epoch != epoch {
                    return;
                }
                state.pending_timer = None;
                drop(state);
                debug!("debounce: deferred invoke");
                (shared.f)(args);
            });
            state.pending_timer = Some(handle);
        }
    }
}

impl<A, F, S> Clone for Debounced<A, F, S>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
    S: Scheduler,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, F, S> fmt::Debug for Debounced<A, F, S>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
    S: Scheduler,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.inner.wait)
            .field("immediate", &self.inner.immediate)
            .finish_non_exhaustive()
    }
}
