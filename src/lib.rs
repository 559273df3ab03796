//! Append-only error chains that remember where and when each layer of
//! context was added.
//!
//! A chain starts with one root-cause entry and grows by exactly one entry
//! every time it is wrapped on its way up the call stack. Each entry stores
//! the file base name and line of the code that created it, a timestamp and
//! the eagerly rendered message.
//!
//! # Examples
//!
//! ## Building a Chain
//!
//! ```
//! use error_trail::{cause, new};
//!
//! let err = new("error cause")
//!     .wrap("error wrapper #1")
//!     .wrap("error wrapper #2")
//!     .wrap("error wrapper #3");
//!
//! assert_eq!(err.depth(), 4);
//! assert_eq!(err.msg(0), "error cause");
//! assert_eq!(err.msg(3), "error wrapper #3");
//! assert_eq!(cause(Some(&err)).unwrap().to_string(), "error cause");
//! ```
//!
//! ## Wrapping Foreign Errors
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn read_config() -> ChainResult<String> {
//!     std::fs::read_to_string("/definitely/missing.toml")
//!         .wrap("loading configuration")
//! }
//!
//! let err = read_config().unwrap_err();
//! assert_eq!(err.depth(), 2);
//! assert_eq!(err.msg(1), "loading configuration");
//! assert!(err.to_string().contains(" :: "));
//! ```
//!
//! ## Rendering
//!
//! `Display` yields `"<file>:<line> <message>"` per entry, root first, joined
//! by `" :: "`. [`ErrorChain::render`] returns the same string; there is no
//! other textual form.
//!
//! # Concurrency
//!
//! A chain is meant to be built along a single call stack. It is `Send` and
//! `Sync`, but appending requires ownership or `&mut`; sharing one chain
//! between threads that all append needs external locking.

/// Free functions `new`, `wrap` and `cause`
pub mod annotate;
/// `trail!` and `wrap!` macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Root-cause access and `Result` extensions
pub mod traits;
/// ErrorChain and its supporting types
pub mod types;

/// Async extensions for error chains (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use annotate::{cause, new, wrap};
pub use traits::*;
pub use types::{
    AnyError, BoxError, ChainResult, ErrorChain, ErrorEntry, ErrorVec, Header, Location, Message,
};
