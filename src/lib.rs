//! Scenario-scoped fixture resolution and loading.
//!
//! This library locates, disambiguates, parses, and resolves per-scenario
//! test-data files for BDD suites. Fixtures live next to the feature file
//! that uses them, under a configurable directory, and are addressed either
//! by exact filename (format-specific loads) or by extension-less base name
//! (generic loads, where the engine discovers the format via directory
//! search).
//!
//! The entry point is [`loader::FixtureLoader`], which composes the path
//! resolver and glob matcher in [`resolve`], the per-format parsers in
//! [`format`], the backing [`store::FixtureStore`], and the computed-fixture
//! registry in [`module`].

pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod module;
pub mod resolve;
pub mod store;

pub use config::{FixtureConfig, FixtureOptions};
pub use error::FixtureError;
pub use loader::{FixtureLoader, FixtureValue};
