//! Tracing support for deferred effects.
//!
//! Feature-gated behind `#[cfg(feature = "tracing")]`.

use crate::effect::Deferred;

impl<A: 'static> Deferred<A> {
    /// Wraps this effect in a tracing span.
    ///
    /// The span is entered for the duration of each run and a `trace`
    /// event is emitted inside it once the run completes. Building the
    /// effect records nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deferred::effect::Deferred;
    /// use tracing::debug_span;
    ///
    /// let order_id = 17;
    /// let effect = Deferred::from(move || order_id * 2)
    ///     .instrument(debug_span!("fetch_order", order_id));
    /// assert_eq!(effect.run(), 34);
    /// ```
    pub fn instrument(self, span: tracing::Span) -> Self {
        Self::new(move || {
            let _entered = span.enter();
            let result = self.run();
            tracing::trace!("deferred effect completed");
            result
        })
    }
}
