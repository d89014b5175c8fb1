//! verbump CLI entry point

use clap::Parser;
use std::path::Path;
use std::process;
use verbump::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = verbump::logging::init(cli.verbose) {
        eprintln!("Logging disabled: {}", e);
    }

    let exit_code = verbump::cli::bump::run_bump(
        cli.bump.as_deref(),
        Path::new("."),
        cli.config.as_deref(),
        cli.format,
    );

    process::exit(exit_code);
}
