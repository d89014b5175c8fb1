#![forbid(unsafe_code)]

//! Version synchronizer
//!
//! Runs the manifest updaters over every configured target, in order. A
//! failing target never stops the run; its error is recorded and the next
//! target is processed.

use crate::config::{ManifestTarget, SyncConfig};
use crate::error::{FailureKind, ManifestError};
use crate::manifest::{self, VersionChange};
use crate::types::BumpKind;
use std::path::PathBuf;

/// Outcome for a single manifest
#[derive(Debug)]
pub struct ManifestReport {
    pub target: ManifestTarget,
    pub result: Result<VersionChange, ManifestError>,
}

impl ManifestReport {
    pub fn updated(&self) -> bool {
        self.result.is_ok()
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.result.as_ref().err().map(ManifestError::kind)
    }
}

/// Aggregated outcome of one run
#[derive(Debug)]
pub struct SyncReport {
    pub bump: BumpKind,
    pub manifests: Vec<ManifestReport>,
}

impl SyncReport {
    pub fn updated_count(&self) -> usize {
        self.manifests.iter().filter(|m| m.updated()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.manifests.len() - self.updated_count()
    }

    /// True when every manifest was updated
    pub fn all_updated(&self) -> bool {
        self.skipped_count() == 0
    }
}

/// Applies one bump to every configured manifest under a project root
pub struct Synchronizer {
    root: PathBuf,
    config: SyncConfig,
}

impl Synchronizer {
    pub fn new(root: impl Into<PathBuf>, config: SyncConfig) -> Self {
        Synchronizer {
            root: root.into(),
            config,
        }
    }

    /// Process every target and collect the results
    pub fn run(&self, bump: BumpKind) -> SyncReport {
        self.run_with(bump, |_| {})
    }

    /// Like [`Synchronizer::run`], calling `on_report` as each target finishes
    ///
    /// Files already written stay written if a later target fails.
    pub fn run_with<F>(&self, bump: BumpKind, mut on_report: F) -> SyncReport
    where
        F: FnMut(&ManifestReport),
    {
        let mut manifests = Vec::with_capacity(self.config.manifests.len());

        for target in &self.config.manifests {
            let result = manifest::update_manifest(&self.root, target, bump);
            match &result {
                Ok(change) => tracing::info!(
                    path = %target.path.display(),
                    old = %change.old,
                    new = %change.new,
                    "updated manifest"
                ),
                Err(e) => tracing::info!(
                    path = %target.path.display(),
                    kind = e.kind().as_str(),
                    error = %e,
                    "manifest left unchanged"
                ),
            }

            let report = ManifestReport {
                target: target.clone(),
                result,
            };
            on_report(&report);
            manifests.push(report);
        }

        SyncReport { bump, manifests }
    }
}
