// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pacer::{debounce, throttle, ThrottleOptions};
use std::hint::black_box;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::time::{advance, sleep};

pub fn bench_throttle(c: &mut Criterion) {
    let mut group = c.benchmark_group("throttle_call_overhead");
    let waits = [Duration::from_millis(10), Duration::from_secs(1)];

    for &wait in &waits {
        group.throughput(Throughput::Elements(2));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{wait:?}")),
            &wait,
            |bencher, &wait| {
                bencher.iter(|| {
                    // 1. Setup a lightweight, paused runtime
                    let rt = Builder::new_current_thread()
                        .enable_time()
                        .start_paused(true)
                        .build()
                        .unwrap();

                    rt.block_on(async {
                        let throttled = throttle(
                            |value: u64| {
                                black_box(value);
                            },
                            wait,
                            ThrottleOptions::default(),
                        );

                        // 2. Leading invocation, synchronous
                        throttled.call(1);

                        // 3. Clear the window, invoke again
                        advance(wait).await;
                        throttled.call(2);
                    });
                });
            },
        );
    }

    group.finish();
}

pub fn bench_debounce(c: &mut Criterion) {
    let mut group = c.benchmark_group("debounce_call_overhead");
    let waits = [Duration::from_millis(10), Duration::from_secs(1)];

    for &wait in &waits {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{wait:?}")),
            &wait,
            |bencher, &wait| {
                bencher.iter(|| {
                    let rt = Builder::new_current_thread()
                        .enable_time()
                        .start_paused(true)
                        .build()
                        .unwrap();

                    rt.block_on(async {
                        let debounced = debounce(
                            |value: u64| {
                                black_box(value);
                            },
                            wait,
                            false,
                        );

                        // Arm the deadline, then park so the paused
                        // clock auto-advances and the timer task fires
                        debounced.call(1);
                        sleep(wait + Duration::from_millis(1)).await;
                    });
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_throttle, bench_debounce);
criterion_main!(benches);
