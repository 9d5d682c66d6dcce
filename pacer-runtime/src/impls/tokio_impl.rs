// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod tokio_implementation {
    use crate::scheduler::Scheduler;
    use crate::timer::Timer;
    use std::time::Duration;
    use tokio::task::AbortHandle;
    use tokio::time::{sleep, Instant};

    /// Tokio-backed scheduler.
    ///
    /// Each scheduled callback is one spawned task that sleeps for the
    /// delay and then runs the callback; the handle is the task's
    /// [`AbortHandle`]. Uses `tokio::time`, so it honors the paused test
    /// clock (`tokio::time::pause` / `advance`).
    #[derive(Clone, Copy, Debug, Default)]
    pub struct TokioScheduler;

    impl Timer for TokioScheduler {
        type Instant = Instant;

        fn now(&self) -> Self::Instant {
            Instant::now()
        }
    }

    impl Scheduler for TokioScheduler {
        type Handle = AbortHandle;

        fn schedule<F>(&self, delay: Duration, callback: F) -> Self::Handle
        where
            F: FnOnce() + Send + 'static,
        {
            tokio::spawn(async move {
                sleep(delay).await;
                callback();
            })
            .abort_handle()
        }

        fn cancel(&self, handle: Self::Handle) {
            // No-op if the task already ran; callers guard against that.
            handle.abort();
        }
    }
}
