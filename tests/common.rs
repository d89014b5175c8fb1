//! Test utilities for verbump integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub const PACKAGE_JSON: &str =
    "{\n  \"name\": \"demo-app\",\n  \"version\": \"1.2.3\",\n  \"private\": true\n}\n";

pub const PACKAGE_LOCK: &str = r#"{
  "name": "demo-app",
  "version": "1.2.3",
  "lockfileVersion": 3,
  "packages": {
    "": {
      "name": "demo-app",
      "version": "1.2.3"
    }
  }
}
"#;

pub const TAURI_CONF: &str = r#"{
  "productName": "demo-app",
  "version": "1.2.3",
  "identifier": "com.example.demo"
}
"#;

pub const CARGO_TOML: &str = r#"[package]
name = "demo-app"
version = "1.2.3" # synced by verbump
edition = "2021"

[dependencies]
serde = { version = "1.0", features = ["derive"] }
"#;

pub const CARGO_LOCK: &str = r#"[package]
name = "demo-app"
version = "1.2.3"
"#;

/// Lay out the five default manifests, all at 1.2.3
pub fn write_default_project(root: &Path) -> TestResult {
    fs::create_dir_all(root.join("src-tauri"))?;
    fs::write(root.join("package.json"), PACKAGE_JSON)?;
    fs::write(root.join("package-lock.json"), PACKAGE_LOCK)?;
    fs::write(root.join("src-tauri/tauri.conf.json"), TAURI_CONF)?;
    fs::write(root.join("src-tauri/Cargo.toml"), CARGO_TOML)?;
    fs::write(root.join("src-tauri/Cargo.lock"), CARGO_LOCK)?;
    Ok(())
}

/// Read a JSON manifest's top-level version
pub fn json_version(path: &Path) -> TestResult<String> {
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path)?)?;
    Ok(value["version"].as_str().unwrap_or_default().to_string())
}
