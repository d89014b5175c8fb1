//! TOML manifests (Cargo.toml, Cargo.lock)
//!
//! Edited through `toml_edit` so comments, ordering and whitespace survive.
//! Only the version value itself is replaced; its surrounding decor is kept.

use super::{ManifestFile, VersionChange};
use crate::error::ManifestError;
use crate::types::{BumpKind, FieldPath, ManifestFormat};
use toml_edit::{DocumentMut, Item, Value};

const FORMAT: ManifestFormat = ManifestFormat::Toml;

/// Bump the version stored at `field` and rewrite the file
pub(crate) fn update(
    file: &ManifestFile<'_>,
    field: &FieldPath,
    bump: BumpKind,
) -> Result<VersionChange, ManifestError> {
    let raw = file.read(FORMAT)?;
    let mut document: DocumentMut = raw.parse().map_err(|e: toml_edit::TomlError| {
        ManifestError::Parse {
            path: file.display.to_path_buf(),
            format: FORMAT,
            message: e.to_string(),
        }
    })?;

    let value = locate(&mut document, field).ok_or_else(|| file.missing_field(field))?;
    let old = match value.as_str() {
        Some("") => return Err(file.missing_field(field)),
        Some(s) => s.to_string(),
        None => return Err(file.invalid_version(value.to_string().trim())),
    };

    let change = super::next_version(file, &old, bump)?;
    replace_keeping_decor(value, &change.new);

    file.write(FORMAT, &document.to_string())?;
    Ok(change)
}

/// Walk tables (standard or inline) down to the version value
///
/// A key that resolves to a table or array of tables rather than a plain
/// value is treated as absent.
fn locate<'a>(document: &'a mut DocumentMut, field: &FieldPath) -> Option<&'a mut Value> {
    let mut item: &mut Item = document.as_item_mut();
    for segment in field.parents() {
        item = item.as_table_like_mut()?.get_mut(segment)?;
    }
    item.as_table_like_mut()?.get_mut(field.key())?.as_value_mut()
}

fn replace_keeping_decor(value: &mut Value, new: &str) {
    let decor = value.decor().clone();
    *value = Value::from(new);
    *value.decor_mut() = decor;
}
