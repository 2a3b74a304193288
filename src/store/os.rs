//! Filesystem-backed fixture store.

use super::{FixtureStore, StoreError};
use crate::format::Format;
use crate::resolve::FixturePattern;
use camino::{Utf8Path, Utf8PathBuf};
use glob::{MatchOptions, glob_with};

/// Fixture store over the real filesystem.
///
/// Glob evaluation runs one compiled pattern per supported extension so the
/// base name may itself contain shell-glob metacharacters; separators are
/// always literal.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsStore;

impl OsStore {
    /// Construct a filesystem store.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

impl FixtureStore for OsStore {
    fn read_to_string(&self, path: &Utf8Path) -> Result<String, StoreError> {
        std::fs::read_to_string(path.as_std_path()).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound {
                    path: path.to_owned(),
                }
            } else {
                StoreError::Io {
                    path: path.to_owned(),
                    source,
                }
            }
        })
    }

    fn glob(&self, pattern: &FixturePattern) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for format in Format::ALL {
            let candidate = pattern.candidate(format);
            let entries = glob_with(candidate.as_str(), MATCH_OPTIONS).map_err(|source| {
                StoreError::Pattern {
                    pattern: candidate.to_string(),
                    source,
                }
            })?;
            for entry in entries {
                match entry {
                    Ok(path) if path.is_file() => match Utf8PathBuf::try_from(path) {
                        Ok(matched) => {
                            if let Some(name) = matched.file_name() {
                                names.push(name.to_owned());
                            }
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "skipping non-UTF-8 glob match");
                        }
                    },
                    Ok(_) => {}
                    Err(err) => {
                        tracing::warn!(error = %err, "skipping unreadable glob entry");
                    }
                }
            }
        }
        Ok(names)
    }
}
