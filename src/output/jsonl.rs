#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! One `manifest` record per target in processing order, then one
//! `summary` record.

use crate::sync::{ManifestReport, SyncReport};
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    pub fn new() -> Self {
        JsonlFormatter
    }

    pub fn format(&self, report: &SyncReport) -> String {
        let mut output = String::new();

        for manifest in &report.manifests {
            if let Ok(json) = serde_json::to_string(&ManifestRecord::from(manifest)) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        let summary = SummaryRecord {
            record_type: "summary",
            bump: report.bump.as_str(),
            updated: report.updated_count() as u64,
            skipped: report.skipped_count() as u64,
            total: report.manifests.len() as u64,
        };
        if let Ok(json) = serde_json::to_string(&summary) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct ManifestRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    path: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    old: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl From<&ManifestReport> for ManifestRecord {
    fn from(report: &ManifestReport) -> Self {
        let path = report.target.path.to_string_lossy().to_string();
        match &report.result {
            Ok(change) => ManifestRecord {
                record_type: "manifest",
                path,
                status: "updated",
                old: Some(change.old.clone()),
                new: Some(change.new.clone()),
                message: None,
            },
            Err(e) => ManifestRecord {
                record_type: "manifest",
                path,
                status: e.kind().as_str(),
                old: None,
                new: None,
                message: Some(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct SummaryRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    bump: &'static str,
    updated: u64,
    skipped: u64,
    total: u64,
}
