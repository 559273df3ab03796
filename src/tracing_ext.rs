//! Tracing integration for error chains.
//!
//! Chains are plain values; this module is how they reach a log. It emits a
//! chain as one structured `tracing` event and can record the active span as
//! an extra layer of context.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::{AnyError, ChainResult, ErrorChain, Location};

impl ErrorChain {
    /// Emits the chain as an `ERROR` event.
    ///
    /// The event carries the depth, the root message and the root location as
    /// fields, and the full rendering as its message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use error_trail::ErrorChain;
    ///
    /// ErrorChain::new("queue full").wrap("enqueueing job 9").log();
    /// ```
    pub fn log(&self) {
        let root = self.msg(0);
        let origin = self.root().map(|entry| entry.location().to_string()).unwrap_or_default();
        tracing::error!(depth = self.depth(), root = %root, origin = %origin, "{}", self);
    }
}

/// Extension trait for logging the error side of a [`ChainResult`].
pub trait ResultLogExt {
    /// Logs the chain if this is an `Err`, then returns `self` unchanged.
    fn log_err(self) -> Self;
}

impl<T> ResultLogExt for ChainResult<T> {
    #[inline]
    fn log_err(self) -> Self {
        if let Err(chain) = &self {
            chain.log();
        }
        self
    }
}

/// Extension trait for `Result` types to add span context to errors.
pub trait ResultSpanExt<T> {
    /// Wraps the error with the name of the current span.
    ///
    /// # Example
    ///
    /// ```rust
    /// use error_trail::tracing_ext::ResultSpanExt;
    /// use std::io;
    ///
    /// let result: Result<(), io::Error> = Err(io::Error::other("reset"));
    /// let err = result.wrap_in_current_span().unwrap_err();
    /// assert!(err.msg(1).starts_with("in span '"));
    /// ```
    fn wrap_in_current_span(self) -> ChainResult<T>;

    /// Wraps the error with the name of `span`.
    fn wrap_in_span(self, span: &Span) -> ChainResult<T>;
}

impl<T, E> ResultSpanExt<T> for Result<T, E>
where
    E: Into<AnyError>,
{
    #[track_caller]
    fn wrap_in_current_span(self) -> ChainResult<T> {
        self.wrap_in_span(&Span::current())
    }

    #[track_caller]
    fn wrap_in_span(self, span: &Span) -> ChainResult<T> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => {
                let location = Location::caller();
                Err(AnyError::chain_at(e, location).wrap_at(location, span_message(span)))
            },
        }
    }
}

/// Describes a span as a context message.
///
/// Disabled spans carry no metadata and are reported as `unknown`.
fn span_message(span: &Span) -> String {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    format!("in span '{}'", name)
}
