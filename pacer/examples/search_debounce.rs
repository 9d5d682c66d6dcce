// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounces a stream of simulated keystrokes: only the final query, typed
//! 80ms before the pause, triggers the "search".

use pacer::debounce;
use std::time::Duration;
use tokio::time::sleep;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let search = debounce(
        |query: String| println!("searching for: {query}"),
        Duration::from_millis(200),
        false,
    );

    for typed in ["t", "th", "thr", "thro", "throttle"] {
        search.call(typed.to_owned());
        sleep(Duration::from_millis(80)).await;
    }

    // Quiet period: the single deferred invocation fires here.
    sleep(Duration::from_millis(300)).await;
}
