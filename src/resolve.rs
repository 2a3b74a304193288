//! Path resolution and glob pattern construction for generic loads.
//!
//! A generic load is scoped to the executing scenario: the fixture directory
//! is the feature file's own directory joined with the configured fixtures
//! root. The pattern over that directory covers every supported extension,
//! rendered in extglob form (`dir/base.@(yaml|yml|js|json|txt)`) for
//! diagnostics.

use crate::format::Format;
use camino::{Utf8Path, Utf8PathBuf};

/// Compute the fixture directory for a scenario.
///
/// Strips the filename from `feature_uri` and joins the remaining directory
/// with `fixtures_dir`. Join semantics come from [`camino`], so separators
/// are never doubled or dropped.
///
/// # Examples
/// ```rust
/// use camino::Utf8Path;
/// use scenario_fixtures::resolve::fixture_dir;
/// let dir = fixture_dir(Utf8Path::new("features/login.feature"), "fixtures");
/// assert_eq!(dir, Utf8Path::new("features/fixtures"));
/// ```
#[must_use]
pub fn fixture_dir(feature_uri: &Utf8Path, fixtures_dir: &str) -> Utf8PathBuf {
    let parent = feature_uri.parent().unwrap_or_else(|| Utf8Path::new(""));
    parent.join(fixtures_dir)
}

/// Glob pattern for one base name over the supported extension set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixturePattern {
    dir: Utf8PathBuf,
    base: String,
}

impl FixturePattern {
    /// Build the pattern for `base` inside `dir`.
    #[must_use]
    pub fn new(dir: Utf8PathBuf, base: impl Into<String>) -> Self {
        Self {
            dir,
            base: base.into(),
        }
    }

    /// Directory the pattern is evaluated in.
    #[must_use]
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// Base name the pattern was built from.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Candidate path for one supported extension, e.g. `dir/base.yaml`.
    #[must_use]
    pub fn candidate(&self, format: Format) -> Utf8PathBuf {
        self.dir
            .join(format!("{}.{}", self.base, format.extension()))
    }

    /// Classify a directory entry against this pattern.
    ///
    /// Returns the matched [`Format`] when `filename` is exactly the base
    /// name plus one supported extension, `None` otherwise.
    #[must_use]
    pub fn classify(&self, filename: &str) -> Option<Format> {
        let rest = filename.strip_prefix(self.base.as_str())?;
        let ext = rest.strip_prefix('.')?;
        Format::from_extension(ext)
    }
}

impl std::fmt::Display for FixturePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let extensions = Format::ALL
            .iter()
            .map(|format| format.extension())
            .collect::<Vec<_>>()
            .join("|");
        write!(f, "{}/{}.@({extensions})", self.dir, self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("features/login.feature", "fixtures", "features/fixtures")]
    #[case("login.feature", "fixtures", "fixtures")]
    #[case("a/b/c.feature", "data", "a/b/data")]
    fn fixture_dir_joins_without_duplicating_separators(
        #[case] uri: &str,
        #[case] root: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(fixture_dir(Utf8Path::new(uri), root), Utf8Path::new(expected));
    }

    #[test]
    fn pattern_renders_every_supported_extension() {
        let pattern = FixturePattern::new(Utf8PathBuf::from("multi"), "fixture");
        assert_eq!(pattern.to_string(), "multi/fixture.@(yaml|yml|js|json|txt)");
    }

    #[rstest]
    #[case("fixture.yaml", Some(Format::Yaml))]
    #[case("fixture.js", Some(Format::Module))]
    #[case("fixture.toml", None)]
    #[case("other.yaml", None)]
    #[case("fixture.yaml.bak", None)]
    fn classify_matches_exact_base_and_extension(
        #[case] filename: &str,
        #[case] expected: Option<Format>,
    ) {
        let pattern = FixturePattern::new(Utf8PathBuf::from("dir"), "fixture");
        assert_eq!(pattern.classify(filename), expected);
    }
}
