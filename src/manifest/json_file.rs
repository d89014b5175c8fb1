//! JSON manifests (package.json, package-lock.json, tauri.conf.json)
//!
//! The document is parsed into a `serde_json::Value` with key order
//! preserved and re-serialized with 2-space indentation. Whitespace inside
//! the original is not kept; a trailing newline is.

use super::{ManifestFile, VersionChange};
use crate::error::ManifestError;
use crate::types::{BumpKind, FieldPath, ManifestFormat};
use serde_json::Value;

const FORMAT: ManifestFormat = ManifestFormat::Json;

/// Bump the version stored at `field` and rewrite the file
pub(crate) fn update(
    file: &ManifestFile<'_>,
    field: &FieldPath,
    bump: BumpKind,
) -> Result<VersionChange, ManifestError> {
    let raw = file.read(FORMAT)?;
    let mut document: Value = serde_json::from_str(&raw).map_err(|e| ManifestError::Parse {
        path: file.display.to_path_buf(),
        format: FORMAT,
        message: e.to_string(),
    })?;

    let slot = locate(&mut document, field).ok_or_else(|| file.missing_field(field))?;
    let old = match &*slot {
        Value::String(s) if s.is_empty() => return Err(file.missing_field(field)),
        Value::String(s) => s.clone(),
        other => return Err(file.invalid_version(other.to_string())),
    };

    let change = super::next_version(file, &old, bump)?;
    *slot = Value::String(change.new.clone());

    let rendered = render(&document, raw.ends_with('\n')).map_err(|e| ManifestError::Write {
        path: file.display.to_path_buf(),
        format: FORMAT,
        source: std::io::Error::other(e),
    })?;
    file.write(FORMAT, &rendered)?;

    Ok(change)
}

/// Walk the object tree down to the version slot
fn locate<'a>(document: &'a mut Value, field: &FieldPath) -> Option<&'a mut Value> {
    let mut current = document;
    for segment in field.parents() {
        current = current.as_object_mut()?.get_mut(segment.as_str())?;
    }
    current.as_object_mut()?.get_mut(field.key())
}

fn render(document: &Value, trailing_newline: bool) -> Result<String, serde_json::Error> {
    let mut rendered = serde_json::to_string_pretty(document)?;
    if trailing_newline {
        rendered.push('\n');
    }
    Ok(rendered)
}
