#![forbid(unsafe_code)]

//! verbump: keep one semantic version in sync across project manifests
//!
//! Bumps the major, minor or patch component of the version stored in each
//! configured manifest (package.json, package-lock.json, tauri.conf.json,
//! Cargo.toml, Cargo.lock by default) and rewrites only that value.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod sync;
pub mod types;
pub mod version;

// Re-export error types for convenient access
pub use error::{ConfigError, FailureKind, ManifestError, VersionError};

// Re-export core domain types for convenient access
pub use config::{ManifestTarget, SyncConfig};
pub use sync::{ManifestReport, SyncReport, Synchronizer};
pub use types::{BumpKind, FieldPath, ManifestFormat};
