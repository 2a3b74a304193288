//! Backing stores for fixture content.
//!
//! The loader reads fixtures through the [`FixtureStore`] capability: a
//! read-only view offering "read file as text" and "list directory entries
//! matching a fixture pattern". Production code uses [`OsStore`] over the
//! real filesystem; suites substitute an in-memory stand-in from the
//! `test_support` crate.

use crate::resolve::FixturePattern;
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Failures raised by a backing store.
///
/// Absence is reported distinctly from other I/O failures so the loader can
/// surface the stable "File does not exist" message for missing fixtures
/// while still propagating genuine I/O problems.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// No entry exists at the requested path.
    #[error("no such file: {path}")]
    NotFound {
        /// Path that was requested.
        path: Utf8PathBuf,
    },
    /// The entry exists but could not be read.
    #[error("i/o failure on {path}")]
    Io {
        /// Path that was requested.
        path: Utf8PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
    /// A glob pattern could not be compiled.
    #[error("invalid glob pattern: {pattern}")]
    Pattern {
        /// The offending pattern text.
        pattern: String,
        /// Underlying pattern error.
        #[source]
        source: glob::PatternError,
    },
}

/// Read-only capability over fixture content.
pub trait FixtureStore {
    /// Read the file at `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no entry exists at `path` and
    /// [`StoreError::Io`] for any other read failure.
    fn read_to_string(&self, path: &Utf8Path) -> Result<String, StoreError>;

    /// List filenames in the pattern's directory that match the pattern.
    ///
    /// Returns bare filenames, not full paths, in whatever order the store
    /// yields them; callers own any ordering guarantee.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Pattern`] when the pattern cannot be compiled
    /// and [`StoreError::Io`] when the directory cannot be scanned.
    fn glob(&self, pattern: &FixturePattern) -> Result<Vec<String>, StoreError>;
}

mod os;

pub use os::OsStore;
