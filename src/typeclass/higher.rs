//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over type constructors such as `Option<_>` or
//! `Deferred<_>` directly. The [`TypeConstructor`] trait works around this
//! with a GAT naming "the same constructor applied to another type", which
//! is what [`Functor`](super::Functor), [`Applicative`](super::Applicative)
//! and [`Monad`](super::Monad) are built on.
//!
//! # Example
//!
//! ```rust
//! use deferred::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = transform_type(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Deferred<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The constraint keeps the result a valid type constructor so that
    /// transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}
