//! Logging setup
//!
//! Installs a global tracing subscriber writing to stderr, so stdout carries
//! only the per-manifest lines and the summary. A valid `RUST_LOG` takes
//! precedence over the level chosen from the command line; an invalid one is
//! ignored.

use crate::error::LoggingError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Level used when neither `RUST_LOG` nor `--verbose` is given
const DEFAULT_DIRECTIVE: &str = "warn";
const VERBOSE_DIRECTIVE: &str = "verbump=debug";

pub fn init(verbose: bool) -> Result<(), LoggingError> {
    let filter = build_filter(verbose, std::env::var("RUST_LOG").ok().as_deref());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init()?;

    Ok(())
}

fn build_filter(verbose: bool, env_directives: Option<&str>) -> EnvFilter {
    let fallback = if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };

    env_directives
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = build_filter(false, None);
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_verbose_filter() {
        let filter = build_filter(true, None);
        assert_eq!(filter.to_string(), "verbump=debug");
    }

    #[test]
    fn test_env_overrides_verbose() {
        let filter = build_filter(true, Some("info"));
        assert_eq!(filter.to_string(), "info");

        let filter = build_filter(false, Some("  "));
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_invalid_env_directive_falls_back() {
        let filter = build_filter(false, Some("verbump=loud"));
        assert_eq!(filter.to_string(), "warn");

        let filter = build_filter(true, Some("verbump=loud"));
        assert_eq!(filter.to_string(), "verbump=debug");
    }
}
