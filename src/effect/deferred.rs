//! Deferred - a side-effecting computation held as a value.
//!
//! A [`Deferred<A>`] wraps a zero-argument computation (a thunk) that
//! produces an `A`. Building or composing a `Deferred` never executes
//! anything; the thunk runs only when [`Deferred::run`] is called, and it
//! runs again on every call. Results are never cached.
//!
//! # Examples
//!
//! ```rust
//! use deferred::effect::Deferred;
//!
//! let effect = Deferred::of(10)
//!     .map(|x| x * 2)
//!     .chain(|x| Deferred::of(x + 1));
//! assert_eq!(effect.run(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use deferred::effect::Deferred;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let counter = Arc::new(AtomicUsize::new(0));
//! let counter_clone = counter.clone();
//!
//! let effect = Deferred::from(move || counter_clone.fetch_add(1, Ordering::SeqCst) + 1);
//!
//! // Nothing has run yet
//! assert_eq!(counter.load(Ordering::SeqCst), 0);
//!
//! // Every run executes the thunk again
//! assert_eq!(effect.run(), 1);
//! assert_eq!(effect.run(), 2);
//! ```

use std::fmt;
use std::time::Duration;

use crate::shared::{ReferenceCounter, Shareable, Thunk};
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A deferred effect: a computation producing `A` that runs on demand.
///
/// Instances are immutable. Every combinator returns a new `Deferred` that
/// closes over the previous one, and cloning shares the same thunk.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `Deferred::of(a).chain(f) == f(a)`
/// 2. **Right Identity**: `m.chain(Deferred::of) == m`
/// 3. **Associativity**: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
///
/// Equality here means the same result and the same number and order of
/// side effects when run.
pub struct Deferred<A> {
    thunk: ReferenceCounter<dyn Thunk<A>>,
}

impl<A> Clone for Deferred<A> {
    fn clone(&self) -> Self {
        Self {
            thunk: ReferenceCounter::clone(&self.thunk),
        }
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Deferred<i32>: Send, Sync, Clone);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Deferred<i32>: Send, Sync);

impl<A: 'static> Deferred<A> {
    /// Creates a new deferred effect from a thunk.
    ///
    /// The thunk is stored, not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred::effect::Deferred;
    ///
    /// let effect = Deferred::new(|| 10 + 20);
    /// assert_eq!(effect.run(), 30);
    /// ```
    pub fn new<F>(thunk: F) -> Self
    where
        F: Fn() -> A + Shareable + 'static,
    {
        Self {
            thunk: ReferenceCounter::new(thunk),
        }
    }

    /// Wraps an effectful computation.
    ///
    /// Behaves exactly like [`Deferred::new`]. Use `from` for thunks that
    /// perform side effects and [`Deferred::of`] for plain values, so the
    /// call site says which one it means.
    #[allow(clippy::should_implement_trait)]
    pub fn from<F>(thunk: F) -> Self
    where
        F: Fn() -> A + Shareable + 'static,
    {
        Self::new(thunk)
    }

    /// Lifts an already-computed value.
    ///
    /// Each run returns a clone of `value` and performs no side effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred::effect::Deferred;
    ///
    /// let effect = Deferred::of("hello".to_string());
    /// assert_eq!(effect.run(), "hello");
    /// assert_eq!(effect.run(), "hello");
    /// ```
    pub fn of(value: A) -> Self
    where
        A: Clone + Shareable,
    {
        Self::new(move || value.clone())
    }

    /// Executes the wrapped computation and returns its result.
    ///
    /// The thunk runs synchronously on the calling thread, once per call.
    /// A panic raised by the thunk, or by any function composed into it,
    /// unwinds through `run` untouched.
    pub fn run(&self) -> A {
        (self.thunk)()
    }

    /// Transforms the eventual result with `function`.
    ///
    /// Each run of the new effect runs `self` once and applies `function`
    /// to its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred::effect::Deferred;
    ///
    /// let effect = Deferred::of(21).map(|x| x * 2);
    /// assert_eq!(effect.run(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> Deferred<B>
    where
        F: Fn(A) -> B + Shareable + 'static,
        B: 'static,
    {
        Deferred::new(move || function(self.run()))
    }

    /// Applies the function produced by `other` to the value produced by `self`.
    ///
    /// When run, `other` runs first to obtain the function, then `self`
    /// runs to obtain the argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred::effect::Deferred;
    ///
    /// let function = Deferred::new(|| |x: i32| x + 1);
    /// let effect = Deferred::of(41).ap(function);
    /// assert_eq!(effect.run(), 42);
    /// ```
    pub fn ap<B, F>(self, other: Deferred<F>) -> Deferred<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        Deferred::new(move || {
            let function = other.run();
            function(self.run())
        })
    }

    /// Sequences `self` into an effect chosen from its result.
    ///
    /// When run, `self` runs, `function` builds the next effect from its
    /// result, and that effect runs immediately.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred::effect::Deferred;
    ///
    /// let effect = Deferred::of(10).chain(|x| {
    ///     if x > 5 { Deferred::of("big") } else { Deferred::of("small") }
    /// });
    /// assert_eq!(effect.run(), "big");
    /// ```
    pub fn chain<B, F>(self, function: F) -> Deferred<B>
    where
        F: Fn(A) -> Deferred<B> + Shareable + 'static,
        B: 'static,
    {
        Deferred::new(move || function(self.run()).run())
    }

    /// Sequences two effects, discarding the result of the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred::effect::Deferred;
    ///
    /// let effect = Deferred::of(10).then(Deferred::of(20));
    /// assert_eq!(effect.run(), 20);
    /// ```
    pub fn then<B>(self, next: Deferred<B>) -> Deferred<B>
    where
        B: 'static,
    {
        Deferred::new(move || {
            let _ = self.run();
            next.run()
        })
    }

    /// Runs `self` then `other` and combines their results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred::effect::Deferred;
    ///
    /// let effect = Deferred::of(10).map2(Deferred::of(20), |a, b| a + b);
    /// assert_eq!(effect.run(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: Deferred<B>, function: F) -> Deferred<C>
    where
        F: Fn(A, B) -> C + Shareable + 'static,
        B: 'static,
        C: 'static,
    {
        Deferred::new(move || {
            let first = self.run();
            function(first, other.run())
        })
    }

    /// Runs `self` then `other` and pairs their results.
    pub fn product<B>(self, other: Deferred<B>) -> Deferred<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Collections
// =============================================================================

impl<A: 'static> Deferred<Vec<A>> {
    /// Combines effects into one that runs each of them in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred::effect::Deferred;
    ///
    /// let effect = Deferred::sequence(vec![Deferred::of(1), Deferred::of(2)]);
    /// assert_eq!(effect.run(), vec![1, 2]);
    /// ```
    pub fn sequence<I>(effects: I) -> Self
    where
        I: IntoIterator<Item = Deferred<A>>,
    {
        let effects: Vec<Deferred<A>> = effects.into_iter().collect();
        Self::new(move || effects.iter().map(Deferred::run).collect())
    }

    /// Builds one effect per item and sequences them.
    ///
    /// `function` is called here, while building; the effects it returns
    /// run only when the result is run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred::effect::Deferred;
    ///
    /// let effect = Deferred::traverse(1..=3, |n| Deferred::of(n * 10));
    /// assert_eq!(effect.run(), vec![10, 20, 30]);
    /// ```
    pub fn traverse<T, I, F>(items: I, function: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Deferred<A>,
    {
        Self::sequence(items.into_iter().map(function))
    }
}

// =============================================================================
// Convenience Constructors
// =============================================================================

impl Deferred<()> {
    /// Creates an effect that prints a line to standard output.
    ///
    /// ```rust,no_run
    /// use deferred::effect::Deferred;
    ///
    /// let greet = Deferred::print_line("Hello, World!");
    /// greet.run();
    /// ```
    pub fn print_line<S>(message: S) -> Self
    where
        S: fmt::Display + Shareable + 'static,
    {
        Self::new(move || {
            println!("{message}");
        })
    }

    /// Creates an effect that blocks the current thread for `duration`.
    pub fn delay(duration: Duration) -> Self {
        Self::new(move || {
            std::thread::sleep(duration);
        })
    }
}

impl Deferred<std::io::Result<String>> {
    /// Creates an effect that reads a line from standard input.
    ///
    /// I/O errors are returned as the effect's value.
    ///
    /// ```rust,no_run
    /// use deferred::effect::Deferred;
    ///
    /// let line = Deferred::read_line().run().expect("failed to read line");
    /// println!("You entered: {line}");
    /// ```
    pub fn read_line() -> Self {
        Self::new(|| {
            let mut buffer = String::new();
            std::io::stdin().read_line(&mut buffer)?;
            Ok(buffer)
        })
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<A> fmt::Debug for Deferred<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Deferred").finish_non_exhaustive()
    }
}

impl<A> fmt::Display for Deferred<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Deferred>")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Deferred<A> {
    type Inner = A;
    type WithType<B> = Deferred<B>;
}

impl<A: 'static> Functor for Deferred<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Deferred<B>
    where
        F: Fn(A) -> B + Shareable + 'static,
        B: 'static,
    {
        Deferred::map(self, function)
    }
}

impl<A: 'static> Applicative for Deferred<A> {
    #[inline]
    fn pure<B>(value: B) -> Deferred<B>
    where
        B: Clone + Shareable + 'static,
    {
        Deferred::of(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Deferred<B>, function: F) -> Deferred<C>
    where
        F: Fn(A, B) -> C + Shareable + 'static,
        B: 'static,
        C: 'static,
    {
        Deferred::map2(self, other, function)
    }

    /// `self` yields the function and runs first.
    #[inline]
    fn apply<B, Output>(self, other: Deferred<B>) -> Deferred<Output>
    where
        A: FnOnce(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        other.ap(self)
    }
}

impl<A: 'static> Monad for Deferred<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Deferred<B>
    where
        F: Fn(A) -> Deferred<B> + Shareable + 'static,
        B: 'static,
    {
        Deferred::chain(self, function)
    }
}
