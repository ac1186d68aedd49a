//! Integration tests for thread-safe deferred effects.
//!
//! With the `arc` feature enabled a `Deferred` is `Send + Sync`. These tests
//! check that effects can be built on one thread and run on others, and
//! that concurrent runs each execute the computation independently.

#![cfg(all(feature = "arc", feature = "effect"))]

use deferred::effect::Deferred;
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

#[rstest]
fn test_effect_built_here_runs_elsewhere() {
    let effect = Deferred::of(20).map(|x| x + 1).chain(|x| Deferred::of(x * 2));

    let handle = thread::spawn(move || effect.run());

    assert_eq!(handle.join().unwrap(), 42);
}

#[rstest]
fn test_concurrent_runs_are_independent() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = Arc::clone(&counter);
    let effect = Deferred::from(move || counter_clone.fetch_add(1, Ordering::SeqCst));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let effect = effect.clone();
            thread::spawn(move || effect.run())
        })
        .collect();

    let mut observed: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    observed.sort_unstable();

    assert_eq!(observed, (0..8).collect::<Vec<_>>());
    assert_eq!(counter.load(Ordering::SeqCst), 8);
}

#[rstest]
fn test_shared_reference_runs_across_scoped_threads() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = Arc::clone(&counter);
    let effect = Deferred::from(move || {
        counter_clone.fetch_add(1, Ordering::SeqCst);
    })
    .then(Deferred::of("done"));

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(effect.run(), "done"));
        }
    });

    assert_eq!(counter.load(Ordering::SeqCst), 4);
}
