#![cfg(feature = "effect")]
//! Property-based tests for the Deferred Functor and Monad laws.
//!
//! Each law is checked both on results and on the side-effect trace: two
//! observationally equivalent effects must record the same entries in the
//! same order, so the source computation runs the same number of times.

use deferred::effect::Deferred;
use deferred::typeclass::{Applicative, Functor, Monad};
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

type Trace = Arc<Mutex<Vec<i32>>>;

/// An effect that records `value` in `trace` every time it runs.
fn traced(trace: &Trace, value: i32) -> Deferred<i32> {
    let trace = trace.clone();
    Deferred::from(move || {
        trace.lock().unwrap().push(value);
        value
    })
}

/// Runs `effect` against a fresh trace and returns the result with the trace.
fn observe<A: 'static>(build: impl FnOnce(&Trace) -> Deferred<A>) -> (A, Vec<i32>) {
    let trace = Trace::default();
    let effect = build(&trace);
    assert!(trace.lock().unwrap().is_empty(), "building ran an effect");
    let result = effect.run();
    let recorded = trace.lock().unwrap().clone();
    (result, recorded)
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Functor Identity Law: map(id) == id
    #[test]
    fn prop_functor_identity(value: i32) {
        let left = observe(|trace| traced(trace, value).map(|x| x));
        let right = observe(|trace| traced(trace, value));

        prop_assert_eq!(left, right);
    }

    /// Functor Composition Law: map(f).map(g) == map(|x| g(f(x)))
    #[test]
    fn prop_functor_composition(value: i32) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);

        let left = observe(|trace| traced(trace, value).map(function1).map(function2));
        let right = observe(|trace| traced(trace, value).map(move |x| function2(function1(x))));

        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left.1.len(), 1);
    }

    /// fmap is map
    #[test]
    fn prop_fmap_equals_map(value: i32) {
        let left = observe(|trace| traced(trace, value).fmap(|x| x.wrapping_sub(3)));
        let right = observe(|trace| traced(trace, value).map(|x| x.wrapping_sub(3)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity Law: of(a).chain(f) == f(a)
    #[test]
    fn prop_left_identity(value: i32) {
        let left = observe(|trace| {
            let trace = trace.clone();
            Deferred::of(value).chain(move |n| traced(&trace, n.wrapping_mul(2)))
        });
        let right = observe(|trace| traced(trace, value.wrapping_mul(2)));

        prop_assert_eq!(left, right);
    }

    /// Right Identity Law: m.chain(of) == m
    #[test]
    fn prop_right_identity(value: i32) {
        let left = observe(|trace| traced(trace, value).chain(Deferred::of));
        let right = observe(|trace| traced(trace, value));

        prop_assert_eq!(left, right);
    }

    /// Associativity Law: m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
    #[test]
    fn prop_associativity(value: i32, offset: i32, factor: i32) {
        let left = observe(|trace| {
            let trace_f = trace.clone();
            let trace_g = trace.clone();
            traced(trace, value)
                .chain(move |x| traced(&trace_f, x.wrapping_add(offset)))
                .chain(move |y| traced(&trace_g, y.wrapping_mul(factor)))
        });
        let right = observe(|trace| {
            let trace_f = trace.clone();
            let trace_g = trace.clone();
            traced(trace, value).chain(move |x| {
                let trace_g = trace_g.clone();
                traced(&trace_f, x.wrapping_add(offset))
                    .chain(move |y| traced(&trace_g, y.wrapping_mul(factor)))
            })
        });

        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left.1.len(), 3);
    }

    /// flat_map and and_then are chain
    #[test]
    fn prop_flat_map_equals_chain(value: i32) {
        let function = |n: i32| Deferred::of(n.wrapping_add(10));

        let chained = Deferred::of(value).chain(function).run();
        let flat_mapped = Deferred::of(value).flat_map(function).run();
        let and_then = Deferred::of(value).and_then(function).run();

        prop_assert_eq!(chained, flat_mapped);
        prop_assert_eq!(chained, and_then);
    }
}

// =============================================================================
// Applicative Properties
// =============================================================================

proptest! {
    /// ap agrees with chain on the function effect followed by map
    #[test]
    fn prop_ap_equals_chain_then_map(value: i32, addend: i32) {
        let left = observe(|trace| {
            let function = traced(trace, addend).map(|n| move |x: i32| x.wrapping_add(n));
            traced(trace, value).ap(function)
        });
        let right = observe(|trace| {
            let argument = traced(trace, value);
            traced(trace, addend)
                .chain(move |n| argument.clone().map(move |x| x.wrapping_add(n)))
        });

        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left.1, vec![addend, value]);
    }

    /// Homomorphism: pure(f).apply(pure(x)) == pure(f(x))
    #[test]
    fn prop_homomorphism(value: i32) {
        let function = |x: i32| x.wrapping_mul(3);

        let left = <Deferred<()>>::pure(function).apply(Deferred::of(value)).run();
        let right = <Deferred<()>>::pure(function(value)).run();

        prop_assert_eq!(left, right);
    }

    /// map2 is chain followed by map
    #[test]
    fn prop_map2_consistency(a: i32, b: i32) {
        let combine = |x: i32, y: i32| x.wrapping_add(y);

        let left = observe(|trace| traced(trace, a).map2(traced(trace, b), combine));
        let right = observe(|trace| {
            let second = traced(trace, b);
            traced(trace, a).chain(move |x| second.clone().map(move |y| combine(x, y)))
        });

        prop_assert_eq!(left, right);
    }

    /// product is consistent with map2
    #[test]
    fn prop_product_consistency(a: i32, b: i32) {
        let left = Deferred::of(a).product(Deferred::of(b)).run();
        let right = Deferred::of(a).map2(Deferred::of(b), |x, y| (x, y)).run();

        prop_assert_eq!(left, right);
    }

    /// run is repeatable: n runs record the source n times
    #[test]
    fn prop_runs_are_not_cached(value: i32, runs in 1usize..8) {
        let trace = Trace::default();
        let effect = traced(&trace, value).map(|x| x.wrapping_neg());

        for _ in 0..runs {
            prop_assert_eq!(effect.run(), value.wrapping_neg());
        }
        prop_assert_eq!(trace.lock().unwrap().len(), runs);
    }
}
