//! Error chain types.
//!
//! # Examples
//!
//! ```
//! use error_trail::ErrorChain;
//!
//! let err = ErrorChain::new("database connection failed")
//!     .wrap("loading user 42")
//!     .wrap("handling GET /users/42");
//!
//! assert_eq!(err.depth(), 3);
//! println!("{}", err);
//! // Output: db.rs:10 database connection failed :: users.rs:31 loading user 42 :: routes.rs:7 handling GET /users/42
//! ```
use smallvec::SmallVec;

pub mod any_error;
pub mod entry;
pub mod error_chain;
pub mod location;

pub use any_error::*;
pub use entry::*;
pub use error_chain::*;
pub use location::*;

/// SmallVec-backed collection used for chain entries.
///
/// Uses inline storage for one element, so a chain that never gets wrapped
/// does not allocate for its entry list.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Result alias whose failure is an [`ErrorChain`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type ChainResult<T> = Result<T, ErrorChain>;
