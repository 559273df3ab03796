use core::error::Error;
use core::fmt::{self, Debug, Display};

use super::ErrorChain;
use crate::types::{AnyError, BoxError, Location};

const SEPARATOR: &str = " :: ";

impl Display for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            Display::fmt(entry, f)?;
        }
        Ok(())
    }
}

/// Foreign errors become a one-entry chain located where the conversion
/// happens, which for `?` is the `?` itself.
impl<E> From<E> for ErrorChain
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    #[inline]
    fn from(error: E) -> Self {
        AnyError::from_boxed(Box::new(error)).into_chain_at(Location::caller())
    }
}

impl From<AnyError> for ErrorChain {
    #[track_caller]
    #[inline]
    fn from(error: AnyError) -> Self {
        error.into_chain_at(Location::caller())
    }
}

impl From<ErrorChain> for BoxError {
    #[inline]
    fn from(chain: ErrorChain) -> Self {
        chain.into_boxed_error()
    }
}

/// `core::error::Error` view of a chain.
///
/// `ErrorChain` itself does not implement `Error`, which keeps the blanket
/// `From<E: Error>` conversion coherent.
pub(crate) struct BoxedChain(pub(crate) ErrorChain);

impl Debug for BoxedChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for BoxedChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Error for BoxedChain {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        if self.0.depth() < 2 {
            return None;
        }
        self.0.root().map(|entry| entry.as_error() as &(dyn Error + 'static))
    }
}
