//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Functions**: [`new`], [`wrap`], [`cause`]
//! - **Macros**: [`trail!`], `wrap!`
//! - **Types**: [`ErrorChain`], [`AnyError`], [`ChainResult`]
//! - **Traits**: [`ResultExt`], [`RootCause`]
//!
//! # Examples
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn parse_port(raw: &str) -> ChainResult<u16> {
//!     raw.parse::<u16>().wrap_with(|| format!("parsing port {:?}", raw))
//! }
//!
//! let err = parse_port("http").unwrap_err();
//! assert_eq!(err.msg(1), "parsing port \"http\"");
//! assert_eq!(cause(Some(&err)).unwrap().to_string(), err.msg(0));
//! ```

// Macros and functions (`wrap` names both)
pub use crate::{cause, new, trail, wrap};

// Core types
pub use crate::types::{AnyError, ChainResult, ErrorChain};

// Traits
pub use crate::traits::{ResultExt, RootCause};
