//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, which lets the result
//! of one computation choose the next computation. This is the data-dependent
//! sequencing that `fmap` and `apply` cannot express.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use deferred::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;
use crate::shared::Shareable;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + Shareable + 'static,
        B: 'static;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: Fn(Self::Inner) -> Self::WithType<B> + Shareable + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the value of the first.
    ///
    /// The first computation still happens, for its effects.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone + Shareable + 'static,
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> Option<B> + Shareable + 'static,
        B: 'static,
    {
        self.and_then(function)
    }
}
