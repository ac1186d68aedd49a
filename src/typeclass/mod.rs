//! Type class traits for composing deferred computations.
//!
//! - [`Functor`]: Mapping over the eventual value
//! - [`Applicative`]: Lifting values and combining independent computations
//! - [`Monad`]: Sequencing computations where later steps depend on earlier results
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate
//! them, allowing `Functor` and friends to be defined generically.
//!
//! Function arguments are `Fn` instead of `FnOnce` throughout, because a
//! `Deferred` may be run many times and re-applies its functions on every
//! run.
//!
//! # Examples
//!
//! ```rust
//! use deferred::effect::Deferred;
//! use deferred::typeclass::{Applicative, Functor, Monad};
//!
//! fn double_all<M>(computation: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     computation.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_all(Some(4)), Some(8));
//! assert_eq!(double_all(Deferred::of(4)).run(), 8);
//!
//! let chained = <Deferred<()>>::pure(3).flat_map(|n| Deferred::of(n + 1));
//! assert_eq!(chained.run(), 4);
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
