//! Append-only error chain with per-entry provenance.
//!
//! An [`ErrorChain`] is one logical failure plus every layer of context that
//! was added while it travelled up the call stack:
//! - entry `0` is the root cause, the last entry is the outermost context
//! - every entry records the file base name, line and time it was created
//! - entries are never mutated, dropped or reordered once appended
//!
//! Chains move by value; [`ErrorChain::wrap`] consumes the chain and hands it
//! back one entry longer. The type has no internal synchronization, so a chain
//! shared across threads must be guarded by the caller.

use core::fmt::Display;

use crate::types::entry::{BoxError, ErrorEntry, Header, Message};
use crate::types::{ErrorVec, Location};

mod traits;

pub(crate) use traits::BoxedChain;

/// Ordered history of one failure, root cause first.
#[must_use]
#[derive(Debug, Default)]
pub struct ErrorChain {
    pub(crate) entries: ErrorVec<ErrorEntry>,
}

impl ErrorChain {
    /// Creates a chain holding a single root-cause entry located at the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::ErrorChain;
    ///
    /// let err = ErrorChain::new("disk full");
    /// assert_eq!(err.depth(), 1);
    /// assert_eq!(err.msg(0), "disk full");
    /// ```
    #[track_caller]
    #[inline]
    pub fn new(message: impl Display) -> Self {
        Self::new_at(Location::caller(), message)
    }

    /// Creates a single-entry chain attributed to an explicit location.
    pub fn new_at(location: Location, message: impl Display) -> Self {
        let mut entries = ErrorVec::new();
        entries.push(ErrorEntry::new(location, Message::new(message)));
        Self { entries }
    }

    /// Creates a chain whose root entry stands in for a foreign error.
    ///
    /// The foreign error carries no provenance of its own, so the entry takes
    /// the location of the code doing the conversion.
    pub(crate) fn backfilled(location: Location, foreign: BoxError) -> Self {
        let mut entries = ErrorVec::new();
        entries.push(ErrorEntry::backfill(location, foreign));
        Self { entries }
    }

    /// Appends one layer of context located at the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::ErrorChain;
    ///
    /// let err = ErrorChain::new("connection reset").wrap("fetching user 42");
    /// assert_eq!(err.depth(), 2);
    /// assert_eq!(err.msg(1), "fetching user 42");
    /// ```
    #[track_caller]
    #[inline]
    pub fn wrap(self, message: impl Display) -> Self {
        self.wrap_at(Location::caller(), message)
    }

    /// Appends one layer of context attributed to an explicit location.
    #[inline]
    pub fn wrap_at(mut self, location: Location, message: impl Display) -> Self {
        self.push_at(location, message);
        self
    }

    /// In-place form of [`wrap`](Self::wrap).
    #[track_caller]
    #[inline]
    pub fn push(&mut self, message: impl Display) {
        self.push_at(Location::caller(), message);
    }

    /// In-place form of [`wrap_at`](Self::wrap_at).
    pub fn push_at(&mut self, location: Location, message: impl Display) {
        self.entries.push(ErrorEntry::new(location, Message::new(message)));
    }

    /// Number of entries. Zero only for a `Default` chain.
    #[inline]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, or `None` when the index is negative or past the end.
    #[inline]
    pub fn get<I: TryInto<usize>>(&self, index: I) -> Option<&ErrorEntry> {
        index.try_into().ok().and_then(|i| self.entries.get(i))
    }

    /// Provenance of the entry at `index`.
    ///
    /// Out-of-range indices, negative ones included, yield [`Header::NONE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::{ErrorChain, Header};
    ///
    /// let err = ErrorChain::new("boom");
    /// assert_eq!(err.header(0).line, i64::from(line!()) - 1);
    /// assert_eq!(err.header(-1), Header::NONE);
    /// assert_eq!(err.header(err.depth()), Header::NONE);
    /// ```
    #[inline]
    pub fn header<I: TryInto<usize>>(&self, index: I) -> Header<'_> {
        self.get(index).map_or(Header::NONE, ErrorEntry::header)
    }

    /// Message of the entry at `index`, or `""` when out of range.
    #[inline]
    pub fn msg<I: TryInto<usize>>(&self, index: I) -> &str {
        self.get(index).map_or("", ErrorEntry::message)
    }

    /// The root-cause entry.
    #[inline]
    pub fn root(&self) -> Option<&ErrorEntry> {
        self.entries.first()
    }

    /// The most recently added entry, i.e. the outermost context.
    #[inline]
    pub fn last(&self) -> Option<&ErrorEntry> {
        self.entries.last()
    }

    /// Iterates entries from the root cause outwards.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ErrorEntry> {
        self.entries.iter()
    }

    /// Renders every entry as `"<file>:<line> <message>"`, root first,
    /// joined by `" :: "`. An empty chain renders as `""`.
    ///
    /// This is the only textual form of a chain; `Display` writes the same
    /// string, alternate flag or not.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::{ErrorChain, Location};
    ///
    /// let err = ErrorChain::new_at(Location::new("src/store.rs", 12), "key missing")
    ///     .wrap_at(Location::new("src/api.rs", 40), "GET /items/7");
    /// assert_eq!(err.render(), "store.rs:12 key missing :: api.rs:40 GET /items/7");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Converts the chain into a standard boxed error.
    ///
    /// The boxed error displays as [`render`](Self::render) and reports the
    /// root cause as its `source()` when the chain has more than one entry.
    #[inline]
    pub fn into_boxed_error(self) -> BoxError {
        Box::new(BoxedChain(self))
    }
}

impl<'a> IntoIterator for &'a ErrorChain {
    type Item = &'a ErrorEntry;
    type IntoIter = core::slice::Iter<'a, ErrorEntry>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
