//! Build orchestration for the Colorant program.
//!
//! Structure:
//! - `cargo` - external build tool invocations (clean, release build)
//! - `project` - project discovery and manifest reading
//! - `config` - optional builder.toml overrides
//! - `artifact` - release artifact location and status reporting
//! - `run` - build then execute the produced binary
//! - `doctor` - toolchain checks

pub mod artifact;
pub mod cargo;
pub mod config;
pub mod doctor;
pub mod project;
pub mod run;

use anyhow::Result;
use clap::Subcommand;

/// Build commands for the CLI.
#[derive(Subcommand)]
pub enum BuildCommands {
    /// Clean previous outputs, then build in release mode (default)
    All,
    /// Remove previous build outputs
    Clean,
    /// Build in release mode without cleaning first
    Build,
    /// Clean, build, then execute the produced binary
    Run {
        /// Arguments passed through to the binary
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Show release artifact status
    Status {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that the toolchain is usable
    Doctor,
}

/// Pipeline steps for a full build, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Clean,
    BuildRelease,
}

/// The full pipeline. The clean step always precedes the build step.
pub const PIPELINE: &[Step] = &[Step::Clean, Step::BuildRelease];

/// Clean previous outputs, then build the release binary.
pub fn build_all() -> Result<()> {
    println!("=== Building Colorant ===\n");

    let project = project::locate()?;
    for step in PIPELINE {
        match step {
            Step::Clean => cargo::clean(&project)?,
            Step::BuildRelease => cargo::build_release(&project)?,
        }
    }

    report_success(&project);
    Ok(())
}

/// Build the release binary without cleaning first.
pub fn build() -> Result<()> {
    let project = project::locate()?;
    cargo::build_release(&project)?;

    report_success(&project);
    Ok(())
}

/// Tell the user where the binary landed and how to start it.
fn report_success(project: &project::Project) {
    println!("\n=== Build complete ===");
    println!("  Binary: {}", artifact::release_binary(project).display());
    println!("  Run with: {}", artifact::run_hint(&project.bin));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_cleans_before_building() {
        let clean = PIPELINE.iter().position(|s| *s == Step::Clean);
        let build = PIPELINE.iter().position(|s| *s == Step::BuildRelease);
        assert_eq!(clean, Some(0));
        assert!(clean < build);
    }

    #[test]
    fn test_pipeline_has_no_extra_steps() {
        assert_eq!(PIPELINE.len(), 2);
    }
}
