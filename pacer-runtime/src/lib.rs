// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for the pacer limiters.
//!
//! Limiter logic never talks to a concrete runtime. It consumes two
//! capabilities:
//!
//! - [`timer::Timer`] - a monotonic clock (`now()` plus an associated
//!   `Instant` type with the arithmetic the limiters need)
//! - [`scheduler::Scheduler`] - "run this callback after a delay" with a
//!   cancellable handle
//!
//! The tokio implementation lives in [`impls`] behind the `runtime-tokio`
//! feature (enabled by default). Because the seam is a pair of traits,
//! limiters run unmodified against the deterministic virtual-time
//! scheduler the workspace tests them with.

pub mod impls;
pub mod scheduler;
pub mod timer;

#[cfg(feature = "runtime-tokio")]
pub use impls::TokioScheduler;
