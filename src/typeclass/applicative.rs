//! Applicative type class - combining independent computations in a context.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value,
//! and with ways of combining several contexts whose computations do not
//! depend on each other's results. Combinations always evaluate left to
//! right; for effects this fixes the order in which side effects happen.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```

use super::functor::Functor;
use crate::shared::Shareable;

/// A type class for functors that can lift values and combine contexts.
///
/// # Examples
///
/// ```rust
/// use deferred::typeclass::Applicative;
///
/// let x: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(x, Some(42));
///
/// let sum = Some(3).map2(Some(4), |x, y| x + y);
/// assert_eq!(sum, Some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// The value is `Clone` because a lifted value may be observed more
    /// than once (an effect hands out a fresh clone every time it runs).
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: Clone + Shareable + 'static;

    /// Combines two applicative values using a binary function.
    ///
    /// `self` is evaluated before `other`.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: Fn(Self::Inner, B) -> C + Shareable + 'static,
        B: 'static,
        C: 'static;

    /// Combines two applicative values into a tuple.
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        B: 'static,
        Self::Inner: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// `self` holds the function and is evaluated first, then `other`
    /// supplies the argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(5)), Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
        B: 'static,
        Output: 'static;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B>
    where
        B: Clone + Shareable + 'static,
    {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: Fn(A, B) -> C + Shareable + 'static,
        B: 'static,
        C: 'static,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        match (self, other) {
            (Some(function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }
}
