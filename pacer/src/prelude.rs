// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the limiter constructors and the scheduler
//! seam they plug into.
//!
//! ```ignore
//! use pacer::prelude::*;
//!
//! let wrapped = throttle(on_scroll, Duration::from_millis(200), ThrottleOptions::default());
//! let search = debounce(run_query, DEFAULT_DEBOUNCE_WAIT, false);
//! ```

pub use crate::debounce::{debounce_with_scheduler, Debounced, DEFAULT_DEBOUNCE_WAIT};
pub use crate::throttle::{
    throttle_with_scheduler, ThrottleOptions, Throttled, DEFAULT_THROTTLE_WAIT,
};

#[cfg(feature = "runtime-tokio")]
pub use crate::debounce::debounce;
#[cfg(feature = "runtime-tokio")]
pub use crate::throttle::throttle;

pub use pacer_runtime::scheduler::Scheduler;
pub use pacer_runtime::timer::Timer;
