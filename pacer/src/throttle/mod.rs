// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle limiter: at most one forwarded invocation per fixed window.
//!
//! A throttled callable accepts calls at arbitrary frequency and forwards
//! at most one per `wait`-long window, on whichever window edges are
//! enabled:
//!
//! - **leading** - the first call of a new window invokes the wrapped
//!   function synchronously
//! - **trailing** - if calls were suppressed during the window, one final
//!   invocation fires at the window boundary with the most recent
//!   arguments (last-call-wins)
//!
//! With both edges enabled a burst confined to one window produces at most
//! two real invocations; with one edge, at most one; with neither, none.
//!
//! # Example
//!
//! ```rust,no_run
//! use pacer::{throttle, ThrottleOptions};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let on_scroll = throttle(
//!     |offset: u32| println!("repaint at {offset}"),
//!     Duration::from_millis(200),
//!     ThrottleOptions::default(),
//! );
//!
//! on_scroll.call(10); // invokes now (leading edge)
//! on_scroll.call(20); // suppressed; 20 fires at the window end
//! # }
//! ```

mod implementation;

pub use implementation::{
    throttle_with_scheduler, ThrottleOptions, Throttled, DEFAULT_THROTTLE_WAIT,
};

#[cfg(feature = "runtime-tokio")]
pub use implementation::throttle;
