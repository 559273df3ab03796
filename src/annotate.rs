//! Free-function entry points: [`new`], [`wrap`] and [`cause`].
//!
//! These are the shortest way to build and inspect a chain. Every function
//! that records a location is `#[track_caller]`, so the entry points at the
//! line that called it.
//!
//! # Examples
//!
//! ```
//! use error_trail::{cause, new, wrap, ErrorChain};
//!
//! let err = new("error cause");
//! let err = wrap(Some(err), "error wrapper #1").unwrap();
//!
//! assert_eq!(err.depth(), 2);
//! assert_eq!(cause(Some(&err)).unwrap().to_string(), "error cause");
//! assert!(wrap(None::<ErrorChain>, "nothing to wrap").is_none());
//! ```

use core::error::Error;
use core::fmt::Display;

use crate::traits::RootCause;
use crate::types::{AnyError, ErrorChain, Location};

/// Creates a chain holding one root-cause entry.
///
/// Use [`trail!`](crate::trail) for `format!`-style arguments.
#[track_caller]
#[inline]
pub fn new(message: impl Display) -> ErrorChain {
    ErrorChain::new_at(Location::caller(), message)
}

/// Adds one layer of context to `err`.
///
/// - `None` stays `None`, so return values can be wrapped unconditionally.
/// - A chain grows by one entry.
/// - A foreign error is backfilled as the root entry, attributed to this call
///   site, and the new entry goes on top of it.
///
/// A `Box<dyn Error + Send + Sync>` must go through [`AnyError::from_boxed`]
/// first, which also recovers a chain boxed by
/// [`ErrorChain::into_boxed_error`].
///
/// # Examples
///
/// ```
/// use error_trail::wrap;
/// use std::io;
///
/// let err = wrap(Some(io::Error::other("eof")), "reading header").unwrap();
/// assert_eq!(err.depth(), 2);
/// assert_eq!(err.msg(0), "eof");
/// assert_eq!(err.header(0).line, err.header(1).line);
/// ```
#[track_caller]
pub fn wrap<E>(err: Option<E>, message: impl Display) -> Option<ErrorChain>
where
    E: Into<AnyError>,
{
    let location = Location::caller();
    err.map(|e| AnyError::chain_at(e, location).wrap_at(location, message))
}

/// Returns the original failure beneath all added context.
///
/// `None` yields `None`, a chain yields its root entry, a foreign error
/// yields itself.
#[inline]
pub fn cause<C>(err: Option<&C>) -> Option<&(dyn Error + Send + Sync + 'static)>
where
    C: RootCause,
{
    err.and_then(RootCause::root_cause)
}
