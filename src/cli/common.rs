//! Common helpers shared by the CLI entry points

use crate::config::SyncConfig;
use crate::error::ConfigError;
use std::path::Path;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

pub const USAGE: &str = "Usage: verbump [patch|minor|major]";

/// Resolve the manifest list for a run rooted at `root`
///
/// An explicit path must exist and be valid. Without one, `verbump.toml`
/// in `root` is used if present, otherwise the built-in list.
pub(crate) fn load_config(
    root: &Path,
    explicit: Option<&Path>,
) -> Result<SyncConfig, ConfigError> {
    match explicit {
        Some(path) => SyncConfig::load(root.join(path)),
        None => SyncConfig::discover(root),
    }
}
