//! Bump command implementation
//!
//! This module implements the `verbump [BUMP]` run, which:
//! - Prints usage and touches nothing when no bump kind is given
//! - Resolves the manifest list (explicit config, verbump.toml, or built-in)
//! - Bumps every manifest in order, reporting each as it finishes
//! - Prints a summary in the requested format

use crate::cli::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, USAGE};
use crate::error::ConfigError;
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::sync::{SyncReport, Synchronizer};
use crate::types::BumpKind;
use std::path::Path;

/// Run the bump command
///
/// # Arguments
///
/// * `bump` - Raw bump token from the command line, if any
/// * `root` - Directory manifest paths are relative to
/// * `config_path` - Explicit manifest list file
/// * `format` - Output format for the per-manifest lines and summary
///
/// # Returns
///
/// Exit code:
/// - 0: Run completed, or usage printed. Skipped manifests do not change this.
/// - 2: The manifest list could not be loaded
pub fn run_bump(
    bump: Option<&str>,
    root: &Path,
    config_path: Option<&Path>,
    format: OutputFormat,
) -> i32 {
    let Some(token) = bump else {
        println!("{}", USAGE);
        return EXIT_SUCCESS;
    };

    match run_bump_inner(parse_bump(token), root, config_path, format) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn parse_bump(token: &str) -> BumpKind {
    let kind = BumpKind::from_arg(token);
    if kind.as_str() != token {
        tracing::warn!(token, "unrecognized bump kind, bumping patch");
    }
    kind
}

/// Internal implementation of the bump command
fn run_bump_inner(
    bump: BumpKind,
    root: &Path,
    config_path: Option<&Path>,
    format: OutputFormat,
) -> Result<SyncReport, ConfigError> {
    let config = super::common::load_config(root, config_path)?;
    tracing::debug!(
        bump = bump.as_str(),
        manifests = config.manifests.len(),
        "starting version sync"
    );

    let synchronizer = Synchronizer::new(root, config);

    let report = match format {
        OutputFormat::Human => {
            let formatter = HumanFormatter::new();
            let report = synchronizer.run_with(bump, |manifest| {
                println!("{}", formatter.format_manifest(manifest));
            });
            println!("{}", formatter.format_summary(&report));
            report
        }
        OutputFormat::Jsonl => {
            let report = synchronizer.run(bump);
            print!("{}", JsonlFormatter::new().format(&report));
            report
        }
    };

    Ok(report)
}
