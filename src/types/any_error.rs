//! Sum type separating chains built by this crate from foreign errors.
//!
//! [`wrap`](crate::wrap) needs to know whether it can append to an existing
//! chain or must first backfill a root entry for an error that carries no
//! provenance. [`AnyError`] makes that an exhaustive `match` instead of a
//! runtime type probe.
//!
//! # Examples
//!
//! ```
//! use error_trail::{AnyError, ErrorChain};
//! use std::io;
//!
//! let ours: AnyError = ErrorChain::new("root").into();
//! let theirs: AnyError = io::Error::other("socket closed").into();
//!
//! assert!(ours.is_chain());
//! assert!(!theirs.is_chain());
//! assert_eq!(theirs.to_string(), "socket closed");
//! ```

use core::error::Error;
use core::fmt::{self, Display};

use crate::types::error_chain::BoxedChain;
use crate::types::{BoxError, ErrorChain, Location};

/// Either a chain produced by this crate or an arbitrary foreign error.
#[derive(Debug)]
pub enum AnyError {
    Chain(ErrorChain),
    Foreign(BoxError),
}

impl AnyError {
    /// Classifies an already boxed error.
    ///
    /// A chain that was previously turned into a `Box<dyn Error>` via
    /// [`ErrorChain::into_boxed_error`] is recognized and unboxed again.
    pub fn from_boxed(error: BoxError) -> Self {
        match error.downcast::<BoxedChain>() {
            Ok(boxed) => Self::Chain(boxed.0),
            Err(foreign) => Self::Foreign(foreign),
        }
    }

    #[inline]
    pub fn is_chain(&self) -> bool {
        matches!(self, Self::Chain(_))
    }

    /// Converts `error` and turns it into a chain, see
    /// [`into_chain_at`](Self::into_chain_at).
    #[inline]
    pub(crate) fn chain_at<E: Into<AnyError>>(error: E, location: Location) -> ErrorChain {
        let error: AnyError = error.into();
        error.into_chain_at(location)
    }

    /// Returns the chain as is, or backfills a root entry for a foreign
    /// error, attributed to `location`.
    pub(crate) fn into_chain_at(self, location: Location) -> ErrorChain {
        match self {
            Self::Chain(chain) => chain,
            Self::Foreign(foreign) => ErrorChain::backfilled(location, foreign),
        }
    }
}

impl<E> From<E> for AnyError
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::Foreign(Box::new(error))
    }
}

impl From<ErrorChain> for AnyError {
    #[inline]
    fn from(chain: ErrorChain) -> Self {
        Self::Chain(chain)
    }
}

impl Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chain(chain) => Display::fmt(chain, f),
            Self::Foreign(foreign) => Display::fmt(foreign, f),
        }
    }
}
