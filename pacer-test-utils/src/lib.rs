// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the pacer workspace: a deterministic virtual-time
//! scheduler, an invocation recorder with injectable timestamps, and
//! small fixtures.

pub mod recorder;
pub mod test_data;
pub mod virtual_scheduler;

pub use recorder::Recorder;
pub use virtual_scheduler::VirtualScheduler;
