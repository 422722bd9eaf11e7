//! Optional build overrides from `builder.toml`.
//!
//! The file lives next to the project's Cargo.toml. Every field has a
//! default, so the file may be absent or partial.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "builder.toml";

/// Overrides for the release build.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Binary artifact name, when it differs from the manifest.
    pub bin: Option<String>,
    /// Pass --locked to cargo.
    pub locked: bool,
    /// Extra arguments appended to `cargo build --release`.
    pub cargo_args: Vec<String>,
}

impl BuildConfig {
    /// Load overrides from `dir/builder.toml`, falling back to defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_file_means_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = BuildConfig::load(dir.path())?;
        assert_eq!(config.bin, None);
        assert!(!config.locked);
        assert!(config.cargo_args.is_empty());
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(CONFIG_FILE), "locked = true\n")?;

        let config = BuildConfig::load(dir.path())?;
        assert!(config.locked);
        assert_eq!(config.bin, None);
        Ok(())
    }

    #[test]
    fn test_unknown_keys_are_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(CONFIG_FILE), "binn = \"typo\"\n")?;

        assert!(BuildConfig::load(dir.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_cargo_args_parse() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "cargo_args = [\"--features\", \"overlay\"]\n",
        )?;

        let config = BuildConfig::load(dir.path())?;
        assert_eq!(config.cargo_args, ["--features", "overlay"]);
        Ok(())
    }
}
