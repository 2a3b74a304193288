//! Fixture loader orchestration.
//!
//! [`FixtureLoader`] owns the run-wide configuration, the current scenario
//! context, the backing store, and the computed-fixture registry. The test
//! runner drives it strictly sequentially: set the feature URI before each
//! scenario, load fixtures while the scenario runs, `reset` afterwards.
//! Nothing is cached between loads; every call re-reads and re-parses from
//! the backing store.

use crate::config::{FixtureConfig, FixtureOptions};
use crate::error::FixtureError;
use crate::format::{self, Format};
use crate::module::{ModuleExport, ModuleRegistry};
use crate::resolve::{self, FixturePattern};
use crate::store::{FixtureStore, OsStore, StoreError};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;

/// A resolved fixture value.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureValue {
    /// Structured data from a YAML, JSON, or module fixture.
    Data(Value),
    /// Raw contents of a text fixture, trailing whitespace included.
    Text(String),
}

impl FixtureValue {
    /// View the structured payload, if this is a data fixture.
    #[must_use]
    pub const fn as_data(&self) -> Option<&Value> {
        match self {
            Self::Data(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// View the raw text, if this is a text fixture.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Data(_) => None,
        }
    }
}

/// Scenario-scoped fixture loader.
///
/// Generic over the backing [`FixtureStore`] so suites can substitute an
/// in-memory store; production code uses the [`OsStore`] default.
///
/// # Examples
/// ```rust,no_run
/// use scenario_fixtures::{FixtureLoader, FixtureOptions};
///
/// let mut loader = FixtureLoader::new();
/// loader.configure(FixtureOptions::fixtures_dir("testdata"));
/// loader.set_feature_uri(Some("features/login.feature"));
/// let user = loader.load("user")?;
/// loader.reset();
/// # Ok::<(), scenario_fixtures::FixtureError>(())
/// ```
#[derive(Debug)]
pub struct FixtureLoader<S = OsStore> {
    config: FixtureConfig,
    feature_uri: Option<Utf8PathBuf>,
    store: S,
    modules: ModuleRegistry,
}

impl FixtureLoader<OsStore> {
    /// Construct a loader over the real filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(OsStore::new())
    }
}

impl Default for FixtureLoader<OsStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FixtureStore> FixtureLoader<S> {
    /// Construct a loader over an explicit backing store.
    #[must_use]
    pub fn with_store(store: S) -> Self {
        Self {
            config: FixtureConfig::default(),
            feature_uri: None,
            store,
            modules: ModuleRegistry::new(),
        }
    }

    /// Merge `options` into the loader configuration.
    ///
    /// Idempotent; unset options leave current values untouched.
    pub fn configure(&mut self, options: FixtureOptions) {
        self.config.merge(options);
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// Record the executing scenario's feature file, or clear it with `None`.
    pub fn set_feature_uri(&mut self, uri: Option<impl Into<Utf8PathBuf>>) {
        self.feature_uri = uri.map(Into::into);
    }

    /// The current scenario context, if any.
    #[must_use]
    pub fn feature_uri(&self) -> Option<&Utf8Path> {
        self.feature_uri.as_deref()
    }

    /// Restore default configuration and clear the scenario context.
    ///
    /// Registered fixture modules survive a reset; they are suite wiring,
    /// not per-scenario state.
    pub fn reset(&mut self) {
        self.config = FixtureConfig::default();
        self.feature_uri = None;
    }

    /// Registered fixture modules.
    #[must_use]
    pub const fn modules(&self) -> &ModuleRegistry {
        &self.modules
    }

    /// Mutable access to the fixture module registry.
    pub const fn modules_mut(&mut self) -> &mut ModuleRegistry {
        &mut self.modules
    }

    /// Load and parse a YAML fixture by filename.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::FileNotFound`] for an absent file,
    /// [`FixtureError::EmptyFixture`] for blank content, and
    /// [`FixtureError::Parse`] for malformed syntax.
    pub fn load_yaml(&self, name: &str) -> Result<Value, FixtureError> {
        self.yaml_at(&self.base_dir(), name)
    }

    /// Load and parse a JSON fixture by filename.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::FileNotFound`] for an absent file and
    /// [`FixtureError::Parse`] for malformed syntax.
    pub fn load_json(&self, name: &str) -> Result<Value, FixtureError> {
        self.json_at(&self.base_dir(), name)
    }

    /// Load a plain-text fixture by filename, contents unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::FileNotFound`] for an absent file.
    pub fn load_text(&self, name: &str) -> Result<String, FixtureError> {
        self.text_at(&self.base_dir(), name)
    }

    /// Resolve a computed fixture by invoking its registered factory.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::ModuleLoad`] when no module is registered at
    /// the resolved path and [`FixtureError::InvalidFixtureModule`] when the
    /// registered export is not invocable.
    pub fn load_module(&self, name: &str) -> Result<Value, FixtureError> {
        self.module_at(&self.base_dir(), name)
    }

    /// Generic load: resolve `base` to exactly one fixture file in the
    /// scenario's fixture directory and dispatch on its extension.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NoContext`] when no feature URI is set,
    /// [`FixtureError::NoFixtureFound`] when nothing matches,
    /// [`FixtureError::AmbiguousFixture`] when several files match, and
    /// otherwise propagates the matched format's own failures.
    pub fn load(&self, base: &str) -> Result<FixtureValue, FixtureError> {
        let Some(uri) = self.feature_uri.as_deref() else {
            return Err(FixtureError::NoContext {
                base: base.to_owned(),
            });
        };
        let dir = resolve::fixture_dir(uri, &self.config.fixtures_dir);
        let pattern = FixturePattern::new(dir, base);
        tracing::debug!(%pattern, "searching for fixture");

        let names = self
            .store
            .glob(&pattern)
            .map_err(|source| FixtureError::Io {
                name: pattern.to_string(),
                source: Box::new(source),
            })?;
        let mut found: Vec<(String, Format)> = names
            .into_iter()
            .filter_map(|name| pattern.classify(&name).map(|f| (name, f)))
            .collect();

        if found.len() > 1 {
            return Err(FixtureError::ambiguous(
                base,
                found.into_iter().map(|(name, _)| name).collect(),
            ));
        }
        match found.pop() {
            Some((name, matched)) => {
                tracing::debug!(%name, format = matched.label(), "fixture resolved");
                self.load_in(pattern.dir(), &name, matched)
            }
            None => Err(FixtureError::NoFixtureFound {
                base: base.to_owned(),
                pattern: pattern.to_string(),
            }),
        }
    }

    fn load_in(
        &self,
        dir: &Utf8Path,
        name: &str,
        matched: Format,
    ) -> Result<FixtureValue, FixtureError> {
        match matched {
            Format::Yaml | Format::Yml => self.yaml_at(dir, name).map(FixtureValue::Data),
            Format::Json => self.json_at(dir, name).map(FixtureValue::Data),
            Format::Module => self.module_at(dir, name).map(FixtureValue::Data),
            Format::Text => self.text_at(dir, name).map(FixtureValue::Text),
        }
    }

    fn yaml_at(&self, dir: &Utf8Path, name: &str) -> Result<Value, FixtureError> {
        let text = self.read_at(dir, name)?;
        format::parse_yaml(name, &text)
    }

    fn json_at(&self, dir: &Utf8Path, name: &str) -> Result<Value, FixtureError> {
        let text = self.read_at(dir, name)?;
        format::parse_json(name, &text)
    }

    fn text_at(&self, dir: &Utf8Path, name: &str) -> Result<String, FixtureError> {
        self.read_at(dir, name)
    }

    fn module_at(&self, dir: &Utf8Path, name: &str) -> Result<Value, FixtureError> {
        let path = dir.join(name);
        match self.modules.resolve(&path) {
            Some(ModuleExport::Factory(factory)) => Ok(factory()),
            Some(ModuleExport::Value(_)) => Err(FixtureError::InvalidFixtureModule {
                name: name.to_owned(),
            }),
            None => Err(FixtureError::ModuleLoad {
                name: name.to_owned(),
                detail: format!("Cannot find module '{path}' in the fixture module registry"),
            }),
        }
    }

    fn read_at(&self, dir: &Utf8Path, name: &str) -> Result<String, FixtureError> {
        let path = dir.join(name);
        self.store.read_to_string(&path).map_err(|source| match source {
            StoreError::NotFound { .. } => FixtureError::FileNotFound {
                name: name.to_owned(),
            },
            other => FixtureError::Io {
                name: name.to_owned(),
                source: Box::new(other),
            },
        })
    }

    fn base_dir(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.config.fixtures_dir.as_str())
    }
}
