//! In-memory fixture store.

use camino::{Utf8Path, Utf8PathBuf};
use scenario_fixtures::resolve::FixturePattern;
use scenario_fixtures::store::{FixtureStore, StoreError};
use std::collections::BTreeMap;

/// Fixture store backed by an in-memory path-to-content map.
///
/// Globbing scans the map for entries whose parent directory equals the
/// pattern's directory and whose filename the pattern classifies; filenames
/// come back in map (lexicographic) order.
///
/// # Examples
/// ```rust
/// use camino::Utf8Path;
/// use scenario_fixtures::store::FixtureStore;
/// use test_support::MemStore;
///
/// let store = MemStore::new().with_file("fixtures/a.txt", "hello");
/// let text = store.read_to_string(Utf8Path::new("fixtures/a.txt")).unwrap();
/// assert_eq!(text, "hello");
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    files: BTreeMap<Utf8PathBuf, String>,
}

impl MemStore {
    /// Construct an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: BTreeMap::new(),
        }
    }

    /// Add a file, builder style.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<Utf8PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Add or replace a file.
    pub fn insert(&mut self, path: impl Into<Utf8PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Remove every file.
    pub fn clear(&mut self) {
        self.files.clear();
    }
}

impl FixtureStore for MemStore {
    fn read_to_string(&self, path: &Utf8Path) -> Result<String, StoreError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                path: path.to_owned(),
            })
    }

    fn glob(&self, pattern: &FixturePattern) -> Result<Vec<String>, StoreError> {
        let names = self
            .files
            .keys()
            .filter(|path| path.parent() == Some(pattern.dir()))
            .filter_map(|path| path.file_name())
            .filter(|name| pattern.classify(name).is_some())
            .map(str::to_owned)
            .collect();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> MemStore {
        MemStore::new()
            .with_file("multi/fixture.yaml", "a: 1")
            .with_file("multi/fixture.json", "{}")
            .with_file("multi/other.yaml", "b: 2")
            .with_file("deep/multi/fixture.yaml", "c: 3")
    }

    #[rstest]
    fn glob_lists_only_matching_entries_in_dir(store: MemStore) {
        let pattern = FixturePattern::new(Utf8PathBuf::from("multi"), "fixture");

        let names = store.glob(&pattern).unwrap();
        assert_eq!(names, vec!["fixture.json", "fixture.yaml"]);
    }

    #[rstest]
    #[case("multi/fixture.yaml", "a: 1")]
    #[case("deep/multi/fixture.yaml", "c: 3")]
    fn read_returns_exact_entry(store: MemStore, #[case] path: &str, #[case] expected: &str) {
        let text = store.read_to_string(Utf8Path::new(path)).unwrap();
        assert_eq!(text, expected);
    }
}
