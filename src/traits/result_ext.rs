//! Extension trait for wrapping the error side of a `Result`.
//!
//! This module provides [`ResultExt`], which turns any `Result` whose error
//! converts into [`AnyError`] into a [`ChainResult`] with one more layer of
//! context, located at the caller.
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::ResultExt;
//! use error_trail::ChainResult;
//!
//! fn load_config() -> ChainResult<String> {
//!     std::fs::read_to_string("config.toml")
//!         .wrap("loading configuration file")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(err.depth(), 2);
//! assert_eq!(err.msg(1), "loading configuration file");
//! ```

use core::fmt::Display;

use crate::types::{AnyError, ChainResult, Location};

/// Extension trait for adding context to `Result` types ergonomically.
///
/// `Ok` values pass through untouched, mirroring how [`wrap`](crate::wrap)
/// absorbs a missing error. On `Err`, a foreign error is first backfilled as
/// the root entry and the context is appended on top; an existing chain just
/// grows by one entry.
///
/// # Examples
///
/// ## Chaining Across Layers
///
/// ```
/// use error_trail::traits::ResultExt;
/// use error_trail::{ChainResult, ErrorChain};
///
/// fn query() -> ChainResult<u32> {
///     Err(ErrorChain::new("row not found"))
/// }
///
/// fn handler(id: u64) -> ChainResult<u32> {
///     query().wrap_with(|| format!("loading order {}", id))
/// }
///
/// let err = handler(7).unwrap_err();
/// assert_eq!(err.msg(0), "row not found");
/// assert_eq!(err.msg(1), "loading order 7");
/// ```
///
/// ## Boxed Errors
///
/// `Box<dyn Error + Send + Sync>` does not convert into [`AnyError`] on its
/// own. Classify it with [`AnyError::from_boxed`] first; a chain that went
/// through [`ErrorChain::into_boxed_error`](crate::ErrorChain::into_boxed_error)
/// is recovered and keeps growing.
///
/// ```
/// use error_trail::traits::ResultExt;
/// use error_trail::{AnyError, BoxError, ErrorChain};
///
/// let boxed: Result<(), BoxError> = Err(ErrorChain::new("disk full").into_boxed_error());
/// let err = boxed.map_err(AnyError::from_boxed).wrap("saving snapshot").unwrap_err();
/// assert_eq!(err.depth(), 2);
/// assert_eq!(err.msg(0), "disk full");
/// ```
pub trait ResultExt<T> {
    /// Wraps the error with `message`.
    fn wrap<M: Display>(self, message: M) -> ChainResult<T>;

    /// Wraps the error with a message produced only on `Err`.
    fn wrap_with<M, F>(self, f: F) -> ChainResult<T>
    where
        M: Display,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AnyError>,
{
    #[track_caller]
    #[inline]
    fn wrap<M: Display>(self, message: M) -> ChainResult<T> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => {
                let location = Location::caller();
                Err(AnyError::chain_at(error, location).wrap_at(location, message))
            },
        }
    }

    #[track_caller]
    #[inline]
    fn wrap_with<M, F>(self, f: F) -> ChainResult<T>
    where
        M: Display,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => {
                let location = Location::caller();
                Err(AnyError::chain_at(error, location).wrap_at(location, f()))
            },
        }
    }
}
