//! Pointer and thread-safety selection for shared thunks.
//!
//! A `Deferred` keeps its thunk behind a reference-counted pointer so
//! that it can be cloned and run any number of times. Which pointer is
//! used, and whether thunks must be thread-safe, is decided by the `arc`
//! feature.

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Shareable
// =============================================================================

/// Marker for values that may be captured inside a shared thunk.
///
/// With the `arc` feature this requires `Send + Sync`; without it every
/// type qualifies. It is blanket-implemented and never needs a manual impl.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> Shareable for T {}

/// Marker for values that may be captured inside a shared thunk.
///
/// With the `arc` feature this requires `Send + Sync`; without it every
/// type qualifies. It is blanket-implemented and never needs a manual impl.
#[cfg(not(feature = "arc"))]
pub trait Shareable {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> Shareable for T {}

/// A zero-argument computation that can be stored in a `Deferred`.
///
/// This exists so the thunk can be used as a single trait object
/// (`dyn Thunk<A>`) while still carrying the [`Shareable`] bound.
pub trait Thunk<A>: Fn() -> A + Shareable {}

impl<A, F> Thunk<A> for F where F: Fn() -> A + Shareable {}
