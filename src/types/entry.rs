//! A single layer of an [`ErrorChain`](crate::ErrorChain).

use core::error::Error;
use core::fmt::{self, Display};
use std::time::SystemTime;

use crate::types::Location;

/// Boxed foreign error as stored on a backfilled root entry.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Rendered text of one entry, usable as a plain error value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Message(String);

impl Message {
    /// Renders `text` once and stores the result.
    #[inline]
    pub fn new(text: impl Display) -> Self {
        Self(text.to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for Message {}

/// One recorded layer: where, when, and what.
///
/// Entries are created by the chain and never handed out mutably.
#[derive(Debug)]
pub struct ErrorEntry {
    pub(crate) timestamp: SystemTime,
    pub(crate) location: Location,
    pub(crate) message: Message,
    pub(crate) source: Option<BoxError>,
}

impl ErrorEntry {
    #[inline]
    pub(crate) fn new(location: Location, message: Message) -> Self {
        Self { timestamp: SystemTime::now(), location, message, source: None }
    }

    /// Root entry standing in for an error this crate did not create.
    pub(crate) fn backfill(location: Location, foreign: BoxError) -> Self {
        let message = Message::new(&foreign);
        Self { timestamp: SystemTime::now(), location, message, source: Some(foreign) }
    }

    #[inline]
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// The foreign error this entry was backfilled from, if any.
    #[inline]
    pub fn source(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// This entry as an error value: the original foreign error when
    /// backfilled, the rendered [`Message`] otherwise.
    #[inline]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        match &self.source {
            Some(foreign) => foreign.as_ref(),
            None => &self.message,
        }
    }

    /// Location and timestamp in the shape returned by
    /// [`ErrorChain::header`](crate::ErrorChain::header).
    #[inline]
    pub fn header(&self) -> Header<'_> {
        Header {
            file: self.location.file(),
            line: i64::from(self.location.line()),
            timestamp: self.timestamp,
        }
    }
}

impl Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.location, self.message)
    }
}

/// Provenance of an entry: file base name, line and creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header<'a> {
    pub file: &'a str,
    pub line: i64,
    pub timestamp: SystemTime,
}

impl Header<'_> {
    /// Returned for indices outside the chain.
    pub const NONE: Self = Self { file: "", line: -1, timestamp: SystemTime::UNIX_EPOCH };

    #[inline]
    pub fn is_none(&self) -> bool {
        self.line < 0
    }
}
