//! Call-site capture for error entries.
//!
//! [`Location`] records the source file *base name* and line of the code that
//! created an entry. Capture relies on `#[track_caller]`, so every public
//! entry point of this crate that records a location is itself annotated and
//! the reported site is the user's call, not a line inside the library.
//!
//! # Examples
//!
//! ```
//! use error_trail::Location;
//!
//! let here = Location::caller();
//! assert_eq!(here.line(), line!() - 1);
//! assert!(!here.file().contains('/'));
//! ```

use core::fmt::{self, Display};

/// Source position of the code that produced an error entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    file: &'static str,
    line: u32,
}

impl Location {
    /// Builds a location from an explicit path and line.
    ///
    /// Any directory components of `file` are stripped.
    #[inline]
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file: base_name(file), line }
    }

    /// Captures the location of the function calling this one.
    ///
    /// Inside a `#[track_caller]` function this resolves to *that* function's
    /// caller, which is how the crate skips its own frames.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from(core::panic::Location::caller())
    }

    /// File base name, e.g. `"server.rs"`.
    #[inline]
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// One-based line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static core::panic::Location<'static>> for Location {
    #[inline]
    fn from(loc: &'static core::panic::Location<'static>) -> Self {
        Self::new(loc.file(), loc.line())
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Strips everything up to the last path separator.
fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
