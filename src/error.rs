//! Error types for verbump
//!
//! Per-file failures never abort a run; they are carried back to the
//! synchronizer as `ManifestError` values and reported alongside the
//! successful updates. Only configuration errors are fatal.

use crate::types::ManifestFormat;
use std::path::PathBuf;

/// Version parse or bump failures
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// Not of the form `MAJOR.MINOR.PATCH[-pre][+build]`
    #[error("Invalid version format: {input}")]
    Parse {
        input: String,
        #[source]
        source: semver::Error,
    },

    /// The component to increment is already `u64::MAX`
    #[error("Cannot bump {component} of {version}: component is at its maximum")]
    Overflow {
        version: String,
        component: &'static str,
    },
}

/// Broad category of a per-file failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The version key is absent from the expected location
    MissingField,
    /// The key is present but its value is not a semantic version
    InvalidVersion,
    /// The file could not be read, parsed as JSON/TOML, or written
    Io,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::MissingField => "missing_field",
            FailureKind::InvalidVersion => "invalid_version",
            FailureKind::Io => "io_error",
        }
    }
}

/// Failure to update a single manifest
///
/// The display strings are the diagnostics printed for a skipped file.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("No '{field}' field found in {}", path.display())]
    MissingField { path: PathBuf, field: String },

    #[error("Invalid version format: {value}")]
    InvalidVersion { path: PathBuf, value: String },

    #[error("Cannot bump version {value} in {}: {component} is at its maximum", path.display())]
    VersionOverflow {
        path: PathBuf,
        value: String,
        component: &'static str,
    },

    #[error("Failed to load {format} from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        format: ManifestFormat,
        source: std::io::Error,
    },

    #[error("Failed to load {format} from {}: {message}", path.display())]
    Parse {
        path: PathBuf,
        format: ManifestFormat,
        message: String,
    },

    #[error("Failed to write updated {format} to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        format: ManifestFormat,
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Collapse the variant into one of the three reported failure kinds
    pub fn kind(&self) -> FailureKind {
        match self {
            ManifestError::MissingField { .. } => FailureKind::MissingField,
            ManifestError::InvalidVersion { .. } | ManifestError::VersionOverflow { .. } => {
                FailureKind::InvalidVersion
            }
            ManifestError::Read { .. }
            | ManifestError::Parse { .. }
            | ManifestError::Write { .. } => FailureKind::Io,
        }
    }
}

/// Manifest list configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML or has the wrong shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but describes an unusable manifest list
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Logging initialization errors
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ManifestError::MissingField {
            path: PathBuf::from("package.json"),
            field: "version".to_string(),
        };
        assert_eq!(err.to_string(), "No 'version' field found in package.json");
        assert_eq!(err.kind(), FailureKind::MissingField);
    }

    #[test]
    fn test_invalid_version_message() {
        let err = ManifestError::InvalidVersion {
            path: PathBuf::from("package.json"),
            value: "not-a-version".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid version format: not-a-version");
        assert_eq!(err.kind(), FailureKind::InvalidVersion);
    }

    #[test]
    fn test_io_variants_share_kind() {
        let read = ManifestError::Read {
            path: PathBuf::from("Cargo.toml"),
            format: ManifestFormat::Toml,
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let parse = ManifestError::Parse {
            path: PathBuf::from("Cargo.toml"),
            format: ManifestFormat::Toml,
            message: "expected `=`".to_string(),
        };
        assert_eq!(read.kind(), FailureKind::Io);
        assert_eq!(parse.kind(), FailureKind::Io);
        assert_eq!(
            read.to_string(),
            "Failed to load TOML from Cargo.toml: gone"
        );
        assert_eq!(FailureKind::Io.as_str(), "io_error");
    }

    #[test]
    fn test_write_failure_message() {
        let err = ManifestError::Write {
            path: PathBuf::from("src-tauri/Cargo.toml"),
            format: ManifestFormat::Toml,
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert_eq!(err.kind(), FailureKind::Io);
        assert_eq!(
            err.to_string(),
            "Failed to write updated TOML to src-tauri/Cargo.toml: read-only"
        );
    }

    #[test]
    fn test_overflow_counts_as_invalid_version() {
        let err = ManifestError::VersionOverflow {
            path: PathBuf::from("package.json"),
            value: "18446744073709551615.0.0".to_string(),
            component: "major",
        };
        assert_eq!(err.kind(), FailureKind::InvalidVersion);
        assert_eq!(
            err.to_string(),
            "Cannot bump version 18446744073709551615.0.0 in package.json: major is at its maximum"
        );
    }
}
