//! Future wrapper that adds a chain entry when the inner future fails.

use core::fmt::Display;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::types::{AnyError, ErrorChain, Location};

pin_project! {
    /// A Future wrapper that appends a chain entry on error.
    ///
    /// The location is fixed when the wrapper is built, so it points at the
    /// `.wrap(..)` call rather than at whatever executor polls the future.
    /// The timestamp and message are produced when the inner future resolves
    /// to an error; the success path never calls `message_fn`.
    ///
    /// # Cancel Safety
    ///
    /// `WrapFuture` is cancel-safe if the inner future is cancel-safe.
    #[must_use = "futures do nothing unless polled"]
    pub struct WrapFuture<Fut, F> {
        #[pin]
        future: Fut,
        location: Location,
        message_fn: Option<F>,
    }
}

impl<Fut, F> WrapFuture<Fut, F> {
    /// Creates a new `WrapFuture` attributed to `location`.
    #[inline]
    pub fn new(future: Fut, location: Location, message_fn: F) -> Self {
        Self { future, location, message_fn: Some(message_fn) }
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }
}

impl<Fut, F, M, T, E> Future for WrapFuture<Fut, F>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<AnyError>,
    F: FnOnce() -> M,
    M: Display,
{
    type Output = Result<T, ErrorChain>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let location = *this.location;

        this.future.poll(cx).map(|res| {
            res.map_err(|err| {
                let chain = AnyError::chain_at(err, location);
                match this.message_fn.take() {
                    Some(message_fn) => chain.wrap_at(location, message_fn()),
                    None => chain,
                }
            })
        })
    }
}

impl<Fut, F, M, T, E> FusedFuture for WrapFuture<Fut, F>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    E: Into<AnyError>,
    F: FnOnce() -> M,
    M: Display,
{
    fn is_terminated(&self) -> bool {
        self.message_fn.is_none() || self.future.is_terminated()
    }
}
