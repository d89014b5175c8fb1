//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// verbump CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "verbump")]
#[command(about = "Bump one semantic version across package.json, Cargo.toml and friends")]
#[command(version)]
pub struct Cli {
    /// Component to bump: major, minor or patch (anything else means patch)
    #[arg(value_name = "BUMP")]
    pub bump: Option<String>,

    /// Manifest list to use instead of verbump.toml or the built-in list
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Log each step to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
