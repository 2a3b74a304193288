//! Fixture formats and per-format parsers.
//!
//! Each supported extension maps to exactly one [`Format`] tag, and each tag
//! to exactly one parse routine. Structured formats (`yaml`, `yml`, `json`)
//! parse into [`serde_json::Value`] trees; `txt` fixtures are returned
//! verbatim; `js` fixtures are computed fixtures resolved through the
//! [`module`](crate::module) registry rather than parsed from file content.

use crate::error::FixtureError;
use serde_json::Value;

/// A recognised fixture format, keyed by file extension.
///
/// The ordering of [`Format::ALL`] is the ordering of the supported
/// extension set used for glob construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Structured-data markup, `.yaml` spelling.
    Yaml,
    /// Structured-data markup, `.yml` spelling.
    Yml,
    /// Computed fixture backed by a registered factory, `.js`.
    Module,
    /// Strict JSON, `.json`.
    Json,
    /// Plain text returned unmodified, `.txt`.
    Text,
}

impl Format {
    /// Every supported format, in extension-set order.
    pub const ALL: [Self; 5] = [
        Self::Yaml,
        Self::Yml,
        Self::Module,
        Self::Json,
        Self::Text,
    ];

    /// The file extension associated with this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Yml => "yml",
            Self::Module => "js",
            Self::Json => "json",
            Self::Text => "txt",
        }
    }

    /// Look up the format for a file extension, if supported.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }

    /// Label used in parse diagnostics, e.g. `yaml` for both spellings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yaml | Self::Yml => "yaml",
            Self::Module => "module",
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

/// Parse YAML fixture content into a value tree.
///
/// Whitespace-only content and documents that parse to `null` are rejected
/// as empty rather than malformed, so suites get a distinct diagnostic for
/// accidentally blank files.
///
/// # Errors
///
/// Returns [`FixtureError::EmptyFixture`] for blank or null content and
/// [`FixtureError::Parse`] for malformed syntax, both naming `name`.
pub fn parse_yaml(name: &str, text: &str) -> Result<Value, FixtureError> {
    if text.trim().is_empty() {
        return Err(FixtureError::EmptyFixture {
            name: name.to_owned(),
        });
    }
    let value: Value = serde_saphyr::from_str(text).map_err(|e| FixtureError::Parse {
        format: Format::Yaml.label(),
        name: name.to_owned(),
        detail: e.to_string(),
    })?;
    if value.is_null() {
        return Err(FixtureError::EmptyFixture {
            name: name.to_owned(),
        });
    }
    Ok(value)
}

/// Parse JSON fixture content into a value tree.
///
/// # Errors
///
/// Returns [`FixtureError::Parse`] naming `name` when the content is not
/// strict JSON.
pub fn parse_json(name: &str, text: &str) -> Result<Value, FixtureError> {
    serde_json::from_str(text).map_err(|e| FixtureError::Parse {
        format: Format::Json.label(),
        name: name.to_owned(),
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("yaml", Some(Format::Yaml))]
    #[case("yml", Some(Format::Yml))]
    #[case("js", Some(Format::Module))]
    #[case("json", Some(Format::Json))]
    #[case("txt", Some(Format::Text))]
    #[case("toml", None)]
    fn extension_lookup(#[case] ext: &str, #[case] expected: Option<Format>) {
        assert_eq!(Format::from_extension(ext), expected);
    }

    #[test]
    fn yaml_round_trips_mappings() {
        let value = parse_yaml("fixture.yaml", "type: yaml\ntesting: true\n").expect("parse");
        assert_eq!(value, serde_json::json!({ "type": "yaml", "testing": true }));
    }

    #[rstest]
    #[case("")]
    #[case("   \n\t\n")]
    #[case("null\n")]
    fn yaml_rejects_empty_documents(#[case] text: &str) {
        let err = parse_yaml("fixture.yaml.empty", text).expect_err("empty");
        assert_eq!(
            err.to_string(),
            "Fixture file is invalid, yaml parsing resulted in undefined data for file: fixture.yaml.empty"
        );
    }

    #[test]
    fn yaml_reports_malformed_syntax() {
        let err = parse_yaml("fixture.yaml.invalid", ":\ninvalid").expect_err("invalid");
        assert_eq!(
            err.to_string(),
            "Unable to parse yaml fixture file: fixture.yaml.invalid"
        );
    }

    #[test]
    fn json_reports_malformed_syntax() {
        let err = parse_json("fixture.json.invalid", "invalid").expect_err("invalid");
        assert_eq!(
            err.to_string(),
            "Unable to parse json fixture file: fixture.json.invalid"
        );
    }
}
