//! Project discovery and manifest reading.
//!
//! The builder operates on the Cargo project in the current directory and
//! only needs two facts from its manifest: the package name and the name of
//! the binary a release build will produce.

use crate::builder::config::BuildConfig;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A located Cargo project to build.
pub struct Project {
    pub root: PathBuf,
    /// Package name from Cargo.toml.
    pub package: String,
    /// Name of the binary artifact a release build produces.
    pub bin: String,
    pub config: BuildConfig,
}

#[derive(Deserialize)]
struct Manifest {
    package: Option<ManifestPackage>,
    #[serde(default)]
    bin: Vec<ManifestBin>,
}

#[derive(Deserialize)]
struct ManifestPackage {
    name: String,
}

#[derive(Deserialize)]
struct ManifestBin {
    name: Option<String>,
}

/// Locate the project in the current directory.
pub fn locate() -> Result<Project> {
    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    locate_in(&cwd)
}

/// Locate the project rooted at `dir`, failing if no manifest is present.
pub fn locate_in(dir: &Path) -> Result<Project> {
    let manifest_path = dir.join("Cargo.toml");
    if !manifest_path.exists() {
        bail!(
            "No Cargo.toml in {}. Run from the Colorant project root.",
            dir.display()
        );
    }

    let raw = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    let manifest: Manifest = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;

    let Some(package) = manifest.package else {
        bail!("{} has no [package] section", manifest_path.display());
    };

    let config = BuildConfig::load(dir)?;

    // An explicit [[bin]] name wins over the package name; builder.toml
    // wins over both.
    let bin = config
        .bin
        .clone()
        .or_else(|| manifest.bin.iter().find_map(|b| b.name.clone()))
        .unwrap_or_else(|| package.name.clone());

    Ok(Project {
        root: dir.to_path_buf(),
        package: package.name,
        bin,
        config,
    })
}
