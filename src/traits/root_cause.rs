//! Root-cause extraction.
//!
//! [`RootCause`] is implemented for [`ErrorChain`], [`AnyError`] and every
//! foreign `core::error::Error`, so [`cause`](crate::cause) accepts whatever
//! the caller happens to be holding.
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::RootCause;
//! use error_trail::ErrorChain;
//! use std::io;
//!
//! let chain = ErrorChain::new("no such table").wrap("running migration 7");
//! assert_eq!(chain.root_cause().unwrap().to_string(), "no such table");
//!
//! let foreign = io::Error::other("broken pipe");
//! assert_eq!(foreign.root_cause().unwrap().to_string(), "broken pipe");
//! ```

use core::error::Error;

use crate::types::{AnyError, ErrorChain, ErrorEntry};

/// Access to the original failure beneath any added context.
pub trait RootCause {
    /// Returns the root cause, or `None` for an empty chain.
    fn root_cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)>;
}

impl RootCause for ErrorChain {
    /// The backfilled foreign error if there is one, otherwise the root
    /// entry's message as a plain error.
    #[inline]
    fn root_cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.root().map(ErrorEntry::as_error)
    }
}

impl RootCause for AnyError {
    #[inline]
    fn root_cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::Chain(chain) => chain.root_cause(),
            Self::Foreign(foreign) => Some(foreign.as_ref()),
        }
    }
}

impl<E> RootCause for E
where
    E: Error + Send + Sync + 'static,
{
    /// A foreign error is its own cause.
    #[inline]
    fn root_cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        Some(self)
    }
}
