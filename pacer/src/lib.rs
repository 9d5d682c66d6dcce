// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Invocation rate-limiting: throttle and debounce wrappers for callables.
//!
//! Both limiters wrap a callable and decide, per call, whether to forward
//! it now, defer it, replace a deferred call's arguments, or drop it:
//!
//! - [`throttle`] - at most one forwarded call per fixed window, firing on
//!   the window's leading and/or trailing edge
//! - [`debounce`] - forward only once the caller has been quiet for the
//!   whole wait, or immediately on the first call of a burst
//!
//! Timing goes through the `Scheduler` trait from `pacer-runtime`; with the
//! default `runtime-tokio` feature the wrappers use [`TokioScheduler`], and
//! any other clock plugs in through `throttle_with_scheduler` /
//! `debounce_with_scheduler`.
//!
//! # Example
//!
//! ```rust,no_run
//! use pacer::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let log = throttle(
//!     |line: &'static str| println!("{line}"),
//!     Duration::from_millis(1000),
//!     ThrottleOptions::default(),
//! );
//!
//! // Only the first of these prints now; the last prints at the window end.
//! log.call("first");
//! log.call("second");
//! log.call("third");
//! # }
//! ```
//!
//! The wrapped function's panics are not intercepted: a leading or
//! immediate invocation panics on the caller's stack, a deferred one
//! panics inside the scheduled task.

mod debounce;
pub(crate) mod logging;
mod throttle;

pub mod prelude;

pub use debounce::{debounce_with_scheduler, Debounced, DEFAULT_DEBOUNCE_WAIT};
pub use throttle::{throttle_with_scheduler, ThrottleOptions, Throttled, DEFAULT_THROTTLE_WAIT};

#[cfg(feature = "runtime-tokio")]
pub use debounce::debounce;
#[cfg(feature = "runtime-tokio")]
pub use throttle::throttle;

#[cfg(feature = "runtime-tokio")]
pub use pacer_runtime::TokioScheduler;
