//! Error types for fixture resolution and loading.
//!
//! Every failure class carries a stable, human-readable message; step
//! definitions and suite assertions match on these strings verbatim, so the
//! `Display` text here is part of the public contract.

// Scoped suppression for version-dependent lint false positives from
// miette/thiserror derive macros. The unused_assignments lint fires in some
// Rust versions but not others. Since `#[expect]` fails when the lint doesn't
// fire, and `unfulfilled_lint_expectations` cannot be expected, we must use
// `#[allow]` here.
// FIXME(rust-lang/rust#130021): remove once upstream is fixed.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while resolving or loading a fixture.
#[derive(Debug, Error, Diagnostic)]
#[non_exhaustive]
pub enum FixtureError {
    /// The requested fixture file is absent from the backing store.
    #[error("File does not exist ({name})")]
    #[diagnostic(code(scenario_fixtures::file_not_found))]
    FileNotFound {
        /// Filename as requested by the caller.
        name: String,
    },

    /// The backing store failed for a reason other than absence.
    #[error("Unable to read fixture file: {name}")]
    #[diagnostic(code(scenario_fixtures::io))]
    Io {
        /// Filename or pattern the store was asked about.
        name: String,
        /// Underlying store failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Structured-data parsing yielded no content.
    #[error(
        "Fixture file is invalid, yaml parsing resulted in undefined data for file: {name}"
    )]
    #[diagnostic(code(scenario_fixtures::empty_fixture))]
    EmptyFixture {
        /// Filename of the empty fixture.
        name: String,
    },

    /// The fixture file content is malformed for its format.
    #[error("Unable to parse {format} fixture file: {name}")]
    #[diagnostic(code(scenario_fixtures::parse))]
    Parse {
        /// Format label, e.g. `yaml` or `json`.
        format: &'static str,
        /// Filename of the malformed fixture.
        name: String,
        /// Parser diagnostic for the malformed content.
        #[help]
        detail: String,
    },

    /// Resolution of a fixture module failed.
    #[error("An error occurred while loading fixture file: {name}\nerror: {detail}")]
    #[diagnostic(code(scenario_fixtures::module_load))]
    ModuleLoad {
        /// Filename of the module fixture.
        name: String,
        /// Underlying resolution failure.
        detail: String,
    },

    /// A fixture module resolved but offers no invocable factory.
    #[error(
        "fixture module should provide a factory function.\nMake sure you registered a no-argument factory for {name}"
    )]
    #[diagnostic(code(scenario_fixtures::invalid_fixture_module))]
    InvalidFixtureModule {
        /// Filename of the offending module fixture.
        name: String,
    },

    /// A generic load was attempted before any feature URI was set.
    #[error("Cannot load fixture: {base}, no feature uri defined")]
    #[diagnostic(
        code(scenario_fixtures::no_context),
        help("set the feature URI before the scenario runs")
    )]
    NoContext {
        /// Base name the caller asked for.
        base: String,
    },

    /// A generic load's directory search matched no file.
    #[error("No fixture found for: {base} ({pattern})")]
    #[diagnostic(code(scenario_fixtures::no_fixture_found))]
    NoFixtureFound {
        /// Base name the caller asked for.
        base: String,
        /// The exact glob pattern that was evaluated.
        pattern: String,
    },

    /// A generic load's directory search matched more than one file.
    #[error(
        "Found {count} matching fixture files, you should have only one matching '{base}':\n{listing}"
    )]
    #[diagnostic(code(scenario_fixtures::ambiguous_fixture))]
    AmbiguousFixture {
        /// Base name the caller asked for.
        base: String,
        /// Number of matched files.
        count: usize,
        /// Bulleted, lexicographically sorted filenames, one per line.
        listing: String,
    },
}

impl FixtureError {
    /// Build an [`FixtureError::AmbiguousFixture`] from the raw match list.
    ///
    /// Filenames are sorted lexicographically so the message is stable
    /// regardless of the order the backing store yields matches in.
    #[must_use]
    pub fn ambiguous(base: impl Into<String>, mut matches: Vec<String>) -> Self {
        matches.sort_unstable();
        let listing = matches
            .iter()
            .map(|name| format!("  - {name}"))
            .collect::<Vec<_>>()
            .join("\n");
        Self::AmbiguousFixture {
            base: base.into(),
            count: matches.len(),
            listing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_listing_is_sorted_and_bulleted() {
        let err = FixtureError::ambiguous(
            "fixture",
            vec!["fixture.yaml".to_owned(), "fixture.json".to_owned()],
        );
        assert_eq!(
            err.to_string(),
            "Found 2 matching fixture files, you should have only one matching 'fixture':\n  - fixture.json\n  - fixture.yaml"
        );
    }

    #[test]
    fn file_not_found_names_the_requested_file() {
        let err = FixtureError::FileNotFound {
            name: "noent.yaml".to_owned(),
        };
        assert_eq!(err.to_string(), "File does not exist (noent.yaml)");
    }
}
