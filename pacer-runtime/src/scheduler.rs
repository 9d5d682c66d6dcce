// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::Timer;
use core::time::Duration;

/// Deferred-callback capability: schedule a callback to run once after a
/// delay, with a handle that can cancel it before it fires.
///
/// A `Scheduler` is also a [`Timer`]; the limiters use the same capability
/// to read the clock and to arm timers, so the two can never disagree about
/// what time it is.
///
/// # Cancellation
///
/// `cancel` is best-effort: a callback that has already started running (or
/// whose delay has already elapsed on a concurrent executor) may still run
/// to completion. Callers that need exactly-once semantics must guard their
/// callbacks with their own state, which is what the pacer limiters do.
pub trait Scheduler: Timer {
    /// Handle to one scheduled callback.
    type Handle: Send + 'static;

    /// Runs `callback` once, `delay` from now. A zero delay fires the
    /// callback at the scheduler's earliest opportunity, never inline.
    fn schedule<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static;

    /// Cancels the scheduled callback behind `handle`, if it has not fired
    /// yet.
    fn cancel(&self, handle: Self::Handle);
}
