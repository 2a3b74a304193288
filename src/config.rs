//! Loader configuration.
//!
//! Configuration is owned by the [`FixtureLoader`](crate::loader::FixtureLoader)
//! rather than stored in process-wide mutable state; the test runner holds a
//! single loader for the lifetime of a run, set once at suite start and
//! restored to defaults by `reset`.

/// Directory name used when no `fixtures_dir` has been configured.
pub const DEFAULT_FIXTURES_DIR: &str = "fixtures";

/// Active fixture loader configuration.
///
/// # Examples
/// ```rust
/// use scenario_fixtures::FixtureConfig;
/// let config = FixtureConfig::default();
/// assert_eq!(config.fixtures_dir, "fixtures");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Fixtures root directory, relative to each feature file's directory
    /// for generic loads and to the working directory for explicit loads.
    pub fixtures_dir: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            fixtures_dir: DEFAULT_FIXTURES_DIR.to_owned(),
        }
    }
}

/// Options accepted by [`FixtureLoader::configure`](crate::loader::FixtureLoader::configure).
///
/// Unset fields leave the corresponding configuration value untouched, so
/// repeated `configure` calls merge rather than replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FixtureOptions {
    /// Replacement fixtures root directory.
    pub fixtures_dir: Option<String>,
}

impl FixtureOptions {
    /// Build options that set the fixtures root directory.
    #[must_use]
    pub fn fixtures_dir(dir: impl Into<String>) -> Self {
        Self {
            fixtures_dir: Some(dir.into()),
        }
    }
}

impl FixtureConfig {
    /// Merge `options` into the current configuration.
    pub fn merge(&mut self, options: FixtureOptions) {
        if let Some(dir) = options.fixtures_dir {
            self.fixtures_dir = dir;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_replaces_only_set_fields() {
        let mut config = FixtureConfig::default();
        config.merge(FixtureOptions::fixtures_dir("data"));
        assert_eq!(config.fixtures_dir, "data");

        config.merge(FixtureOptions::default());
        assert_eq!(config.fixtures_dir, "data");
    }
}
