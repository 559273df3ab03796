//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides `.wrap()` and `.wrap_with()` for futures, mirroring the sync
//! [`ResultExt`](crate::traits::ResultExt) trait.

use core::fmt::Display;
use core::future::Future;

use crate::types::Location;

use super::wrap_future::WrapFuture;

/// Extension trait for wrapping the error of async Result-returning futures.
///
/// # Examples
///
/// ```rust
/// use error_trail::prelude_async::*;
///
/// #[derive(Debug)]
/// struct Gone;
///
/// impl std::fmt::Display for Gone {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("record gone")
///     }
/// }
///
/// impl std::error::Error for Gone {}
///
/// async fn fetch_from_db(_id: u64) -> Result<String, Gone> {
///     Err(Gone)
/// }
///
/// async fn fetch_user(id: u64) -> ChainResult<String> {
///     fetch_from_db(id)
///         .wrap_with(|| format!("fetching user {}", id))
///         .await
/// }
/// ```
pub trait FutureResultExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Appends `message` to the future's error.
    ///
    /// The location recorded is this call, not the point of polling.
    #[track_caller]
    fn wrap<M>(self, message: M) -> WrapFuture<Self, impl FnOnce() -> M>
    where
        M: Display,
    {
        WrapFuture::new(self, Location::caller(), move || message)
    }

    /// Appends a lazily produced message to the future's error.
    #[track_caller]
    fn wrap_with<F, M>(self, f: F) -> WrapFuture<Self, F>
    where
        F: FnOnce() -> M,
        M: Display,
    {
        WrapFuture::new(self, Location::caller(), f)
    }
}

impl<Fut, T, E> FutureResultExt<T, E> for Fut where Fut: Future<Output = Result<T, E>> {}
