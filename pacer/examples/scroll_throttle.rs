// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttles a burst of simulated scroll events to one repaint per 250ms
//! window: the first offset paints immediately, the newest one at each
//! window boundary.

use pacer::{throttle, ThrottleOptions};
use std::time::Duration;
use tokio::time::sleep;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let repaint = throttle(
        |offset: u32| println!("repaint at offset {offset}"),
        Duration::from_millis(250),
        ThrottleOptions::default(),
    );

    for offset in (0..1000).step_by(50) {
        repaint.call(offset);
        sleep(Duration::from_millis(30)).await;
    }

    // Let the final trailing edge fire before exiting.
    sleep(Duration::from_millis(300)).await;
}
