//! Release artifact location and status reporting.

#![allow(clippy::cast_precision_loss)] // File sizes don't need u64 precision for display

use crate::builder::project::{self, Project};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Relative path of the release binary under the project root.
pub fn release_binary_rel(bin: &str) -> PathBuf {
    let mut name = bin.to_string();
    if cfg!(windows) {
        name.push_str(".exe");
    }
    PathBuf::from("target").join("release").join(name)
}

/// Absolute path of the release binary produced for `project`.
pub fn release_binary(project: &Project) -> PathBuf {
    project.root.join(release_binary_rel(&project.bin))
}

/// How to start a built binary from the project root.
pub fn run_hint(bin: &str) -> String {
    let rel = release_binary_rel(bin);
    if cfg!(windows) {
        rel.display().to_string()
    } else {
        format!("./{}", rel.display())
    }
}

/// Release artifact status, as printed by `status`.
#[derive(Serialize)]
pub struct ArtifactStatus {
    pub package: String,
    pub binary: String,
    pub built: bool,
    pub size_mb: Option<f64>,
    pub modified: Option<String>,
}

/// Report whether a release artifact exists, and how big and old it is.
pub fn status(json: bool) -> Result<()> {
    let project = project::locate()?;
    let path = release_binary(&project);
    let status = inspect(&project, &path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("Artifact status:\n");
    if status.built {
        println!(
            "  {:12} [built] {:.1} MB",
            status.package,
            status.size_mb.unwrap_or(0.0)
        );
        println!("  Binary: {}", path.display());
        if let Some(modified) = &status.modified {
            println!("  Modified: {modified}");
        }
    } else {
        println!("  {:12} [missing] run a build first", status.package);
    }

    Ok(())
}

fn inspect(project: &Project, path: &Path) -> Result<ArtifactStatus> {
    if !path.exists() {
        return Ok(ArtifactStatus {
            package: project.package.clone(),
            binary: path.display().to_string(),
            built: false,
            size_mb: None,
            modified: None,
        });
    }

    let meta = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?;
    let modified = meta
        .modified()
        .ok()
        .map(|t| chrono::DateTime::<chrono::Utc>::from(t).to_rfc3339());

    Ok(ArtifactStatus {
        package: project.package.clone(),
        binary: path.display().to_string(),
        built: true,
        size_mb: Some(meta.len() as f64 / 1_000_000.0),
        modified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn test_release_binary_path() {
        assert_eq!(
            release_binary_rel("colorant_rust"),
            PathBuf::from("target/release/colorant_rust")
        );
    }

    #[cfg(windows)]
    #[test]
    fn test_release_binary_path_has_exe_suffix() {
        assert_eq!(
            release_binary_rel("colorant_rust"),
            PathBuf::from("target/release/colorant_rust.exe")
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_run_hint_is_relative_invocation() {
        assert_eq!(run_hint("colorant_rust"), "./target/release/colorant_rust");
    }

    #[test]
    fn test_status_serializes_with_stable_fields() -> Result<()> {
        let status = ArtifactStatus {
            package: "colorant_rust".to_string(),
            binary: "target/release/colorant_rust".to_string(),
            built: true,
            size_mb: Some(4.2),
            modified: None,
        };

        let value = serde_json::to_value(&status)?;
        for key in ["package", "binary", "built", "size_mb", "modified"] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }
        assert_eq!(value["built"], true);
        Ok(())
    }
}
