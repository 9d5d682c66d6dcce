// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-tokio")]

use pacer_runtime::scheduler::Scheduler;
use pacer_runtime::timer::Timer;
use pacer_runtime::TokioScheduler;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{advance, pause, sleep};

// The paused clock only drives a detached scheduled task while this test
// task is itself parked on a sleep (auto-advance); a manual `advance`
// moves the clock without polling other tasks. These tests therefore
// park on `sleep` to let callbacks run, and assert counts rather than
// exact firing times (auto-advance rounds by up to a millisecond).

#[tokio::test]
async fn callback_fires_after_delay() -> anyhow::Result<()> {
    pause(); // Mock time for instant test execution

    // Arrange
    let scheduler = TokioScheduler;
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);

    // Act
    let _handle = scheduler.schedule(Duration::from_millis(100), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Assert - not yet due
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    sleep(Duration::from_millis(200)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    Ok(())
}

#[tokio::test]
async fn cancel_prevents_firing() -> anyhow::Result<()> {
    pause();

    // Arrange
    let scheduler = TokioScheduler;
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);

    // Act
    let handle = scheduler.schedule(Duration::from_millis(10), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    scheduler.cancel(handle);
    sleep(Duration::from_millis(200)).await;

    // Assert
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    Ok(())
}

#[tokio::test]
async fn zero_delay_fires_but_not_inline() -> anyhow::Result<()> {
    pause();

    // Arrange
    let scheduler = TokioScheduler;
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);

    // Act
    let _handle = scheduler.schedule(Duration::ZERO, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Assert - schedule returned without running the callback inline
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    sleep(Duration::from_millis(1)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    Ok(())
}

#[tokio::test]
async fn now_tracks_the_paused_clock() -> anyhow::Result<()> {
    pause();

    // Arrange
    let scheduler = TokioScheduler;
    let before = scheduler.now();

    // Act
    advance(Duration::from_millis(250)).await;

    // Assert
    assert_eq!(scheduler.now() - before, Duration::from_millis(250));

    Ok(())
}
