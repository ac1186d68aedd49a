//! `deferred!` macro for do-notation style syntax.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind: runs an effect and names its result
//! - `let pattern = expression;` - Pure let binding
//! - `yield expression` - Final value, lifted with `Deferred::of`
//! - `expression` - Final expression (already a `Deferred`)
//!
//! `<-` is not a single token in Rust's macro patterns, so `<=` stands in
//! for it.
//!
//! # Expansion
//!
//! ```rust,ignore
//! deferred! { x <= first; rest }
//! // becomes
//! first.chain(move |x| deferred! { rest })
//! ```
//!
//! The continuation is an `Fn` closure that is called once per run, so
//! every bound expression after the first is rebuilt on each run. Clone
//! captured effects into the bound expression (`x <= effect.clone();`)
//! rather than moving them.

#![forbid(unsafe_code)]

/// A macro for monadic do-notation over [`Deferred`](crate::effect::Deferred).
///
/// ```text
/// deferred! {
///     pattern <= effect_expression;    // Bind operation (chain)
///     let pattern = expression;        // Pure let binding
///     yield expression                 // Final value (Deferred::of)
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use deferred::deferred;
/// use deferred::effect::Deferred;
///
/// let effect = deferred! {
///     x <= Deferred::of(5);
///     y <= Deferred::from(move || x * 2);
///     let z = x + y;
///     yield z
/// };
/// assert_eq!(effect.run(), 15);
/// ```
#[macro_export]
macro_rules! deferred {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    // Lift the final value
    (yield $result:expr) => {
        $crate::effect::Deferred::of($result)
    };

    // Final effect, returned as-is
    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind operation: pattern <= effect; rest
    // ==========================================================================

    ($pattern:ident <= $effect:expr ; $($rest:tt)+) => {
        $effect.chain(move |$pattern| {
            $crate::deferred!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $effect:expr ; $($rest:tt)+) => {
        $effect.chain(move |($($pattern)*)| {
            $crate::deferred!($($rest)+)
        })
    };

    (_ <= $effect:expr ; $($rest:tt)+) => {
        $effect.chain(move |_| {
            $crate::deferred!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::deferred!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::deferred!($($rest)+)
        }
    };
}
