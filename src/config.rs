//! Manifest list configuration

pub mod manifests;

pub use manifests::{CONFIG_FILE_NAME, ManifestTarget, SyncConfig};
