#![forbid(unsafe_code)]

//! Core domain types for verbump
//!
//! This module defines the fundamental types shared by the version bumper,
//! the manifest updaters and the configuration layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Which semantic version component a run increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpKind {
    Major,
    Minor,
    #[default]
    Patch,
}

impl BumpKind {
    /// Interprets a command-line token
    ///
    /// Matching is case-sensitive. `major` and `minor` select those
    /// components; every other token, including typos, means `patch`.
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "major" => BumpKind::Major,
            "minor" => BumpKind::Minor,
            _ => BumpKind::Patch,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured text format of a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestFormat {
    Json,
    Toml,
}

impl ManifestFormat {
    /// Guesses the format from a file name
    ///
    /// `*.json` is JSON; `*.toml` and `*.lock` are TOML. Anything else is
    /// left to the configuration to spell out.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(ManifestFormat::Json),
            Some("toml") | Some("lock") => Some(ManifestFormat::Toml),
            _ => None,
        }
    }

    /// Where the version lives when the configuration does not say
    pub fn default_field(&self) -> FieldPath {
        match self {
            ManifestFormat::Json => FieldPath::top_level("version"),
            ManifestFormat::Toml => FieldPath::nested("package", "version"),
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestFormat::Json => f.write_str("JSON"),
            ManifestFormat::Toml => f.write_str("TOML"),
        }
    }
}

/// Dotted location of the version value inside a manifest
///
/// `version` is a top-level key; `package.version` is the `version` key of
/// the `package` table. Segments are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Parses a dotted path, returning None if any segment is empty
    pub fn new(path: &str) -> Option<Self> {
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return None;
        }
        Some(FieldPath(segments))
    }

    pub(crate) fn top_level(key: &str) -> Self {
        FieldPath(vec![key.to_string()])
    }

    pub(crate) fn nested(table: &str, key: &str) -> Self {
        FieldPath(vec![table.to_string(), key.to_string()])
    }

    /// Tables or objects to descend through before the final key
    pub fn parents(&self) -> &[String] {
        &self.0[..self.0.len() - 1]
    }

    /// The key holding the version string
    pub fn key(&self) -> &str {
        &self.0[self.0.len() - 1]
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl TryFrom<String> for FieldPath {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FieldPath::new(&value).ok_or_else(|| format!("Invalid field path '{}'", value))
    }
}

impl From<FieldPath> for String {
    fn from(field: FieldPath) -> Self {
        field.to_string()
    }
}
