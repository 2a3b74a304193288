//! Computed fixtures backed by registered factories.
//!
//! A `.js` fixture in the original tooling was a code module exporting a
//! no-argument factory; here the same contract is expressed as a registry
//! keyed by resolved fixture path. Suites register either a factory (the
//! valid shape) or a plain value (a module with no invocable export, kept so
//! the invalid-module failure class stays observable).

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use std::collections::BTreeMap;

/// Factory invoked with no arguments to produce a fixture value.
pub type FixtureFactory = Box<dyn Fn() -> Value + Send + Sync>;

/// What a registered fixture module exports.
pub enum ModuleExport {
    /// A no-argument factory; the valid export shape.
    Factory(FixtureFactory),
    /// A non-invocable export; resolving it is an error.
    Value(Value),
}

impl std::fmt::Debug for ModuleExport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Factory(_) => f.write_str("ModuleExport::Factory"),
            Self::Value(value) => f.debug_tuple("ModuleExport::Value").field(value).finish(),
        }
    }
}

/// Registry of fixture modules, keyed by resolved path.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    entries: BTreeMap<Utf8PathBuf, ModuleExport>,
}

impl ModuleRegistry {
    /// Construct an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register a factory for the module at `path`.
    pub fn register_factory(
        &mut self,
        path: impl Into<Utf8PathBuf>,
        factory: impl Fn() -> Value + Send + Sync + 'static,
    ) {
        self.entries
            .insert(path.into(), ModuleExport::Factory(Box::new(factory)));
    }

    /// Register a non-invocable export for the module at `path`.
    ///
    /// Useful in suites that assert the invalid-module diagnostic.
    pub fn register_value(&mut self, path: impl Into<Utf8PathBuf>, value: Value) {
        self.entries.insert(path.into(), ModuleExport::Value(value));
    }

    /// Look up the export registered at `path`.
    #[must_use]
    pub fn resolve(&self, path: &Utf8Path) -> Option<&ModuleExport> {
        self.entries.get(path)
    }

    /// Remove every registered module.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_returns_registered_factory() {
        let mut registry = ModuleRegistry::new();
        registry.register_factory("fixtures/fixture.js", || json!({ "testing": true }));

        match registry.resolve(Utf8Path::new("fixtures/fixture.js")) {
            Some(ModuleExport::Factory(factory)) => {
                assert_eq!(factory(), json!({ "testing": true }));
            }
            other => panic!("expected factory, got {other:?}"),
        }
    }

    #[test]
    fn resolve_misses_unregistered_paths() {
        let registry = ModuleRegistry::new();
        assert!(registry.resolve(Utf8Path::new("fixtures/noent.js")).is_none());
    }
}
