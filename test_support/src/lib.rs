//! Test doubles for the `scenario-fixtures` crate.
//!
//! Provides [`mem_store::MemStore`], an in-memory [`FixtureStore`]
//! stand-in, so suites can exercise resolution and parsing without touching
//! the real filesystem.
//!
//! [`FixtureStore`]: scenario_fixtures::store::FixtureStore

pub mod mem_store;

pub use mem_store::MemStore;
