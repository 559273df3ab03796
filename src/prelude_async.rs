//! Async prelude - everything from [`prelude`](crate::prelude) plus the
//! future adaptors.
//!
//! ```
//! use error_trail::prelude_async::*;
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use error_trail::prelude_async::*;
//!
//! async fn fetch(id: u64) -> ChainResult<String> {
//!     async { Err::<String, _>(std::io::Error::other("timed out")) }
//!         .wrap(format!("fetching record {}", id))
//!         .await
//! }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{FutureResultExt, WrapFuture};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::{ResultLogExt, ResultSpanExt};
