//! `format!`-style shortcuts for building error chains.
//!
//! - [`macro@crate::trail`] - Creates a new chain from a format string, like
//!   [`new`](crate::new).
//! - [`macro@crate::wrap`] - Adds a formatted layer to an optional error, like
//!   [`wrap`](crate::wrap()).
//!
//! Formatting happens once, when the entry is created. The recorded location
//! is the macro invocation.
//!
//! # Examples
//!
//! ```
//! use error_trail::{trail, wrap};
//!
//! let attempt = 3;
//! let err = trail!("handshake failed after {} attempts", attempt);
//! let err = wrap!(Some(err), "connecting to {}", "db-01").unwrap();
//!
//! assert_eq!(err.msg(0), "handshake failed after 3 attempts");
//! assert_eq!(err.msg(1), "connecting to db-01");
//! ```

/// Creates a new [`ErrorChain`](crate::ErrorChain) from `format!` arguments.
///
/// # Examples
///
/// ```
/// use error_trail::trail;
///
/// let user_id = 42;
/// let err = trail!("user {} not found", user_id);
/// assert_eq!(err.depth(), 1);
/// assert_eq!(err.msg(0), "user 42 not found");
/// ```
#[macro_export]
macro_rules! trail {
    ($($arg:tt)*) => {
        $crate::new(format_args!($($arg)*))
    };
}

/// Wraps an `Option` of an error with a formatted message.
///
/// Expands to [`wrap`](crate::wrap()) and returns `Option<ErrorChain>`.
///
/// # Examples
///
/// ```
/// use error_trail::{wrap, ErrorChain};
///
/// let err = wrap!(Some(ErrorChain::new("timeout")), "step {}", 2).unwrap();
/// assert_eq!(err.msg(1), "step 2");
///
/// let none = wrap!(None::<ErrorChain>, "step {}", 3);
/// assert!(none.is_none());
/// ```
#[macro_export]
macro_rules! wrap {
    ($err:expr, $($arg:tt)*) => {
        $crate::wrap($err, format_args!($($arg)*))
    };
}
