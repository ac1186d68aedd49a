//! # deferred
//!
//! A deferred effect type for Rust: describe a side-effecting computation
//! as a value, compose it, and execute it on demand.
//!
//! ## Overview
//!
//! - **Effect**: [`Deferred`](effect::Deferred) with `of`, `from`, `map`,
//!   `ap`, `chain` and `run`, plus the `deferred!` do-notation macro
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` over GAT-based
//!   higher-kinded type emulation
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `effect`: The `Deferred` type and `deferred!` macro
//! - `arc`: Share thunks through `Arc` so effects are `Send + Sync`
//! - `tracing`: Span instrumentation for effects
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use deferred::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let log_clone = log.clone();
//!
//! let effect = Deferred::from(move || {
//!     log_clone.lock().unwrap().push("ran");
//!     2
//! })
//! .map(|x| x + 1);
//!
//! assert!(log.lock().unwrap().is_empty());
//! assert_eq!(effect.run(), 3);
//! assert_eq!(*log.lock().unwrap(), vec!["ran"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use deferred::prelude::*;
/// ```
pub mod prelude {
    pub use crate::shared::Shareable;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

pub mod shared;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;
