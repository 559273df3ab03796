//! Core traits for error chains.
//!
//! - [`ResultExt`]: `.wrap(..)` on any `Result` whose error converts into
//!   [`AnyError`](crate::AnyError)
//! - [`RootCause`]: uniform root-cause access for chains and foreign errors
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::{ResultExt, RootCause};
//! use std::io;
//!
//! let result: Result<(), io::Error> = Err(io::Error::other("refused"));
//! let err = result.wrap("connecting to cache").unwrap_err();
//!
//! assert_eq!(err.depth(), 2);
//! assert_eq!(err.root_cause().unwrap().to_string(), "refused");
//! ```

pub mod result_ext;
pub mod root_cause;

pub use result_ext::ResultExt;
pub use root_cause::RootCause;
