// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::cmp::Ord;
use core::fmt::Debug;
use core::marker::{Copy, Send, Sync};
use core::ops::Sub;
use core::time::Duration;

/// Monotonic clock capability.
///
/// The associated `Instant` carries exactly the arithmetic the limiters
/// perform: measuring the `Duration` between two instants.
pub trait Timer: Clone + Send + Sync + Debug + 'static {
    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + 'static
        + Sub<Self::Instant, Output = Duration>;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;
}
