// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::{debug, trace};
use pacer_runtime::scheduler::Scheduler;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "runtime-tokio")]
use pacer_runtime::TokioScheduler;

/// Stock window length for callers with no tuning opinion.
pub const DEFAULT_THROTTLE_WAIT: Duration = Duration::from_millis(3000);

/// Edge configuration for a [`Throttled`] callable.
///
/// Defaults to both edges enabled: invoke on the first call of a window
/// and once more at the window boundary if further calls were suppressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThrottleOptions {
    /// Invoke synchronously on the first call of a new window.
    pub leading: bool,
    /// Invoke at the window boundary with the latest suppressed arguments.
    pub trailing: bool,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }
}

/// Wraps `f` so that it runs at most once per `wait` window, using the
/// default tokio scheduler.
///
/// The returned [`Throttled`] exposes a single [`call`](Throttled::call)
/// entry point with the same argument shape as `f` (use `()` for
/// zero-argument callables, a tuple for several).
#[cfg(feature = "runtime-tokio")]
pub fn throttle<A, F>(
    f: F,
    wait: Duration,
    options: ThrottleOptions,
) -> Throttled<A, F, TokioScheduler>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    throttle_with_scheduler(f, wait, options, TokioScheduler)
}

/// Like [`throttle`], but with an explicitly injected [`Scheduler`].
pub fn throttle_with_scheduler<A, F, S>(
    f: F,
    wait: Duration,
    options: ThrottleOptions,
    scheduler: S,
) -> Throttled<A, F, S>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
    S: Scheduler,
{
    Throttled {
        inner: Arc::new(ThrottleInner {
            f,
            wait,
            options,
            scheduler,
            state: Mutex::new(ThrottleState {
                pending_timer: None,
                last_invoked_at: None,
                pending_args: None,
                epoch: 0,
            }),
        }),
    }
}

/// A throttled callable. Cloning shares the window state, like handing the
/// same closure to several call sites.
pub struct Throttled<A, F, S>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
    S: Scheduler,
{
    inner: Arc<ThrottleInner<A, F, S>>,
}

struct ThrottleInner<A, F, S: Scheduler> {
    f: F,
    wait: Duration,
    options: ThrottleOptions,
    scheduler: S,
    state: Mutex<ThrottleState<A, S>>,
}

struct ThrottleState<A, S: Scheduler> {
    /// Outstanding trailing-edge timer, at most one at a time.
    pending_timer: Option<S::Handle>,
    /// When the wrapped function last actually ran.
    last_invoked_at: Option<S::Instant>,
    /// Arguments of the newest call since the last real invocation.
    pending_args: Option<A>,
    /// Bumped whenever a timer is armed or torn down; a trailing callback
    /// whose epoch is stale must not touch the state (abort can race a
    /// callback that already slept through its delay).
    epoch: u64,
}

impl<A, F, S> Throttled<A, F, S>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
    S: Scheduler,
{
    /// Forwards, defers or suppresses one call.
    ///
    /// If the current window has elapsed (or none is open and `leading` is
    /// enabled), the wrapped function runs synchronously on this stack.
    /// Otherwise the arguments become the window's pending arguments and,
    /// with `trailing` enabled, a timer is armed for the window boundary
    /// if one is not already.
    pub fn call(&self, args: A) {
        let inner = &self.inner;
        let now = inner.scheduler.now();
        let mut state = inner.state.lock();

        // A disabled leading edge seeds the window on the very first call
        // instead of invoking.
        if state.last_invoked_at.is_none() && !inner.options.leading {
            state.last_invoked_at = Some(now);
        }

        let elapsed = match state.last_invoked_at {
            Some(at) => now - at,
            None => inner.wait,
        };

        if elapsed >= inner.wait {
            if let Some(handle) = state.pending_timer.take() {
                state.epoch = state.epoch.wrapping_add(1);
                inner.scheduler.cancel(handle);
            }
            state.last_invoked_at = Some(now);
            state.pending_args = None;
            drop(state);
            debug!("throttle: leading invoke");
            (inner.f)(args);
            return;
        }

        state.pending_args = Some(args);
        if state.pending_timer.is_none() && inner.options.trailing {
            let remaining = inner.wait - elapsed;
            state.epoch = state.epoch.wrapping_add(1);
            let epoch = state.epoch;
            let shared = Arc::clone(inner);
            let handle = inner.scheduler.schedule(remaining, move || {
                Self::fire_trailing(&shared, epoch);
            });
            state.pending_timer = Some(handle);
            trace!("throttle: trailing edge armed for {:?}", remaining);
        } else {
            trace!("throttle: call suppressed");
        }
    }

    fn fire_trailing(inner: &Arc<ThrottleInner<A, F, S>>, epoch: u64) {
        let mut state = inner.state.lock();
        if state.epoch != epoch {
            return;
        }
        state.pending_timer = None;
        if let Some(args) = state.pending_args.take() {
            state.last_invoked_at = Some(inner.scheduler.now());
            drop(state);
            debug!("throttle: trailing invoke");
            (inner.f)(args);
        }
    }
}

impl<A, F, S> Clone for Throttled<A, F, S>
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

impl<A, F, S> fmt::Debug for Throttled<A, F, S>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
    S: Scheduler,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("wait", &self.inner.wait)
            .field("options", &self.inner.options)
            .finish_non_exhaustive()
    }
}
