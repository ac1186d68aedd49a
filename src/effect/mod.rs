//! Deferred effects: side-effecting computations described as values.
//!
//! The [`Deferred`] type represents a computation that may perform side
//! effects. Nothing is executed until [`Deferred::run`] is called, and each
//! call executes the whole computation again.
//!
//! ```rust
//! use deferred::effect::Deferred;
//!
//! // Create and chain effects
//! let effect = Deferred::of(10)
//!     .map(|x| x * 2)
//!     .chain(|x| Deferred::of(x + 1));
//!
//! // Side effects don't occur until run is called
//! assert_eq!(effect.run(), 21);
//! ```
//!
//! # Do-Notation with deferred! Macro
//!
//! ```rust
//! use deferred::deferred;
//! use deferred::effect::Deferred;
//!
//! let effect = deferred! {
//!     x <= Deferred::of(5);
//!     y <= Deferred::of(10);
//!     let z = x + y;
//!     yield z * 2
//! };
//! assert_eq!(effect.run(), 30);
//! ```

mod deferred;
mod do_macro;

#[cfg(feature = "tracing")]
mod tracing;

pub use deferred::Deferred;
