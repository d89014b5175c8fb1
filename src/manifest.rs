//! Manifest updaters
//!
//! Each updater reads one file, locates the version value at the configured
//! field path, bumps it and writes the file back. Everything except the
//! version value is kept as close to the original as the format allows.

pub mod json_file;
pub mod toml_file;

use crate::config::ManifestTarget;
use crate::error::{ManifestError, VersionError};
use crate::types::{BumpKind, ManifestFormat};
use std::path::Path;

/// Old and new version of a successfully updated manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    pub old: String,
    pub new: String,
}

/// Bump the version of one manifest
///
/// `root` is the directory the target's path is relative to. Errors carry
/// the target's path as written in the configuration, not the joined path.
pub fn update_manifest(
    root: &Path,
    target: &ManifestTarget,
    bump: BumpKind,
) -> Result<VersionChange, ManifestError> {
    let location = root.join(&target.path);
    let file = ManifestFile {
        location: &location,
        display: &target.path,
    };

    match target.format {
        ManifestFormat::Json => json_file::update(&file, &target.field, bump),
        ManifestFormat::Toml => toml_file::update(&file, &target.field, bump),
    }
}

/// Where a manifest lives on disk and how it is named in diagnostics
#[derive(Debug, Clone, Copy)]
pub(crate) struct ManifestFile<'a> {
    pub location: &'a Path,
    pub display: &'a Path,
}

impl ManifestFile<'_> {
    pub(crate) fn read(&self, format: ManifestFormat) -> Result<String, ManifestError> {
        tracing::debug!(path = %self.location.display(), "reading manifest");
        std::fs::read_to_string(self.location).map_err(|source| ManifestError::Read {
            path: self.display.to_path_buf(),
            format,
            source,
        })
    }

    pub(crate) fn write(
        &self,
        format: ManifestFormat,
        content: &str,
    ) -> Result<(), ManifestError> {
        std::fs::write(self.location, content).map_err(|source| ManifestError::Write {
            path: self.display.to_path_buf(),
            format,
            source,
        })
    }

    pub(crate) fn missing_field(&self, field: impl ToString) -> ManifestError {
        ManifestError::MissingField {
            path: self.display.to_path_buf(),
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid_version(&self, value: impl Into<String>) -> ManifestError {
        ManifestError::InvalidVersion {
            path: self.display.to_path_buf(),
            value: value.into(),
        }
    }
}

/// Parse `old`, bump it, and package the result
///
/// Shared tail of both updaters once the raw version string is in hand.
pub(crate) fn next_version(
    file: &ManifestFile<'_>,
    old: &str,
    bump: BumpKind,
) -> Result<VersionChange, ManifestError> {
    let parsed = crate::version::parse(old).map_err(|e| {
        tracing::debug!(path = %file.display.display(), error = %e, "version did not parse");
        file.invalid_version(old)
    })?;
    let new = match crate::version::bump(&parsed, bump) {
        Ok(next) => next.to_string(),
        Err(VersionError::Overflow { component, .. }) => {
            return Err(ManifestError::VersionOverflow {
                path: file.display.to_path_buf(),
                value: old.to_string(),
                component,
            });
        }
        Err(VersionError::Parse { .. }) => return Err(file.invalid_version(old)),
    };
    tracing::debug!(path = %file.display.display(), %old, %new, "computed next version");

    Ok(VersionChange {
        old: old.to_string(),
        new,
    })
}
