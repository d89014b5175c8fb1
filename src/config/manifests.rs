//! Parsing and validation for verbump.toml
//!
//! A config file replaces the built-in manifest list entirely:
//!
//! ```toml
//! [[manifest]]
//! path = "core/Cargo.toml"
//! format = "toml"            # optional, inferred from the extension
//! field = "package.version"  # optional, defaults per format
//! ```

use crate::error::ConfigError;
use crate::types::{FieldPath, ManifestFormat};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name picked up from the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "verbump.toml";

/// One manifest whose version is kept in sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestTarget {
    /// Path relative to the project root
    pub path: PathBuf,
    pub format: ManifestFormat,
    pub field: FieldPath,
}

impl ManifestTarget {
    /// Target using the format's default field location
    pub fn new(path: impl Into<PathBuf>, format: ManifestFormat) -> Self {
        ManifestTarget {
            path: path.into(),
            field: format.default_field(),
            format,
        }
    }

    pub fn with_field(mut self, field: FieldPath) -> Self {
        self.field = field;
        self
    }
}

/// Ordered list of manifests processed by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub manifests: Vec<ManifestTarget>,
}

impl Default for SyncConfig {
    /// The npm package, its lockfile, the Tauri config, and the native
    /// crate's manifest and lockfile, in that order
    fn default() -> Self {
        SyncConfig {
            manifests: vec![
                ManifestTarget::new("package.json", ManifestFormat::Json),
                ManifestTarget::new("package-lock.json", ManifestFormat::Json),
                ManifestTarget::new("src-tauri/tauri.conf.json", ManifestFormat::Json),
                ManifestTarget::new("src-tauri/Cargo.toml", ManifestFormat::Toml),
                ManifestTarget::new("src-tauri/Cargo.lock", ManifestFormat::Toml),
            ],
        }
    }
}

/// On-disk shape of verbump.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default, rename = "manifest")]
    manifests: Vec<RawManifest>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    path: PathBuf,
    #[serde(default)]
    format: Option<ManifestFormat>,
    #[serde(default)]
    field: Option<FieldPath>,
}

impl SyncConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Load the config file from `dir` if there is one, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using manifest config");
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(s)?;

        if raw.manifests.is_empty() {
            return Err(ConfigError::Validation(
                "No manifests configured. Add at least one [[manifest]] entry.".to_string(),
            ));
        }

        let manifests = raw
            .manifests
            .into_iter()
            .map(RawManifest::resolve)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SyncConfig { manifests })
    }
}

impl RawManifest {
    fn resolve(self) -> Result<ManifestTarget, ConfigError> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "Manifest path must not be empty".to_string(),
            ));
        }

        let format = match self.format.or_else(|| ManifestFormat::from_path(&self.path)) {
            Some(format) => format,
            None => {
                return Err(ConfigError::Validation(format!(
                    "Cannot infer format of '{}'. Set format = \"json\" or \"toml\"",
                    self.path.display()
                )));
            }
        };

        let target = ManifestTarget::new(self.path, format);
        Ok(match self.field {
            Some(field) => target.with_field(field),
            None => target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_in_order() {
        let config = SyncConfig::default();
        let paths: Vec<_> = config
            .manifests
            .iter()
            .map(|m| m.path.to_string_lossy().to_string())
            .collect();
        assert_eq!(
            paths,
            vec![
                "package.json",
                "package-lock.json",
                "src-tauri/tauri.conf.json",
                "src-tauri/Cargo.toml",
                "src-tauri/Cargo.lock",
            ]
        );

        assert_eq!(config.manifests[0].field.to_string(), "version");
        assert_eq!(config.manifests[3].format, ManifestFormat::Toml);
        assert_eq!(config.manifests[4].field.to_string(), "package.version");
    }

    #[test]
    fn test_parse_infers_format_and_field() {
        let config = SyncConfig::parse(
            r#"
[[manifest]]
path = "package.json"

[[manifest]]
path = "core/Cargo.toml"
"#,
        )
        .unwrap();

        assert_eq!(
            config.manifests,
            vec![
                ManifestTarget::new("package.json", ManifestFormat::Json),
                ManifestTarget::new("core/Cargo.toml", ManifestFormat::Toml),
            ]
        );
    }

    #[test]
    fn test_parse_explicit_format_and_field() {
        let config = SyncConfig::parse(
            r#"
[[manifest]]
path = "app.manifest"
format = "json"
field = "app.version"
"#,
        )
        .unwrap();

        let target = &config.manifests[0];
        assert_eq!(target.format, ManifestFormat::Json);
        assert_eq!(target.field, FieldPath::new("app.version").unwrap());
    }

    #[test]
    fn test_parse_rejects_empty_list() {
        let result = SyncConfig::parse("");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_extension() {
        let result = SyncConfig::parse("[[manifest]]\npath = \"VERSION\"\n");
        match result {
            Err(ConfigError::Validation(msg)) => assert!(msg.contains("VERSION")),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_empty_path() {
        let result = SyncConfig::parse("[[manifest]]\npath = \"\"\nformat = \"json\"\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_parse_rejects_bad_field() {
        let result = SyncConfig::parse("[[manifest]]\npath = \"a.json\"\nfield = \"package.\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let result = SyncConfig::parse("[[manifest]]\npath = \"a.json\"\nformat = \"yaml\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let result = SyncConfig::parse("[[manifest]]\npath = \"a.json\"\nglob = \"*\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = SyncConfig::discover(temp_dir.path()).unwrap();
        assert_eq!(config, SyncConfig::default());
    }

    #[test]
    fn test_discover_reads_config_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[[manifest]]\npath = \"core/Cargo.toml\"\n",
        )
        .unwrap();

        let config = SyncConfig::discover(temp_dir.path()).unwrap();
        assert_eq!(config.manifests.len(), 1);
        assert_eq!(config.manifests[0].path, PathBuf::from("core/Cargo.toml"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = SyncConfig::load("/nonexistent/verbump.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
