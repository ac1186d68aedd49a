//! Functor type class - mapping over the eventual value of a context.
//!
//! For a deferred effect, mapping transforms the value the effect will
//! produce without changing when, or whether, the effect runs.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use deferred::typeclass::Functor;
//!
//! let transformed: Option<String> = Some(5).fmap(|n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//! ```

use super::higher::TypeConstructor;
use crate::shared::Shareable;

/// A type class for types that can have a function mapped over their contents.
///
/// Mapping functions are `Fn` rather than `FnOnce`: an effect may be run
/// many times and applies its mapping function on every run.
///
/// # Examples
///
/// ```rust
/// use deferred::effect::Deferred;
/// use deferred::typeclass::Functor;
///
/// let effect = Deferred::of(20).fmap(|n| n + 1);
/// assert_eq!(effect.run(), 21);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + Shareable + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(move |_| value.clone())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred::typeclass::Functor;
    ///
    /// assert_eq!(Functor::replace(Some(1), "one"), Some("one"));
    /// ```
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: Clone + Shareable + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the value inside the functor, keeping only its effects.
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
        Self::Inner: 'static,
    {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> B + Shareable + 'static,
        B: 'static,
    {
        self.map(function)
    }
}
