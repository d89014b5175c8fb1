#![forbid(unsafe_code)]

//! Human-readable output
//!
//! One line per manifest, printed as soon as the manifest is processed,
//! then a one-line summary.

use crate::sync::{ManifestReport, SyncReport};

/// Human-readable formatter
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Diagnostic or success line for one manifest
    pub fn format_manifest(&self, report: &ManifestReport) -> String {
        match &report.result {
            Ok(change) => format!(
                "Updated version {}: {} → {}",
                report.target.path.display(),
                change.old,
                change.new
            ),
            Err(e) => e.to_string(),
        }
    }

    pub fn format_summary(&self, report: &SyncReport) -> String {
        format!(
            "Updated {} of {} manifests ({} skipped)",
            report.updated_count(),
            report.manifests.len(),
            report.skipped_count()
        )
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}
