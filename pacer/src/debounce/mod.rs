// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce limiter: invoke only after a quiet period with no new calls.
//!
//! Every call pushes the deadline out by the full `wait`; the wrapped
//! function runs once the caller has been quiet for that long, with the
//! arguments of the last call (last-call-wins).
//!
//! With `immediate` set the polarity flips: the first call of a burst
//! invokes synchronously and every further call within the window is
//! suppressed outright, not delayed. A new synchronous invocation needs a
//! full `wait` of quiet first.
//!
//! # Example
//!
//! ```rust,no_run
//! use pacer::debounce;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let search = debounce(
//!     |query: String| println!("searching for {query}"),
//!     Duration::from_millis(300),
//!     false,
//! );
//!
//! // One keystroke per call; only the last query is ever searched,
//! // 300ms after typing stops.
//! search.call("r".into());
//! search.call("ru".into());
//! search.call("rust".into());
//! # }
//! ```

mod implementation;

pub use implementation::{debounce_with_scheduler, Debounced, DEFAULT_DEBOUNCE_WAIT};

#[cfg(feature = "runtime-tokio")]
pub use implementation::debounce;
