//! External build tool invocations.
//!
//! Compilation is wholly delegated to Cargo; this module only spawns it,
//! blocks on completion, and checks exit statuses.

use crate::builder::project::Project;
use anyhow::{Context, Result, bail};
use std::process::{Command, ExitStatus};

/// Remove previous build outputs.
pub fn clean(project: &Project) -> Result<()> {
    println!("=== Cleaning previous outputs ===");
    run_cargo(project, &["clean"])
}

/// Build the release binary.
pub fn build_release(project: &Project) -> Result<()> {
    println!("=== Compiling (release) ===");

    let mut args = vec!["build".to_string(), "--release".to_string()];
    if project.config.locked {
        args.push("--locked".to_string());
    }
    args.extend(project.config.cargo_args.iter().cloned());

    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    run_cargo(project, &args)
}

fn run_cargo(project: &Project, args: &[&str]) -> Result<()> {
    log::debug!("cargo {} (in {})", args.join(" "), project.root.display());

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&project.root)
        .status()
        .context("Failed to run cargo. Is it installed and on PATH?")?;

    check_status(status, &format!("cargo {}", args.join(" ")))
}

/// Map an exit status to a result: zero is success, anything else fails.
fn check_status(status: ExitStatus, what: &str) -> Result<()> {
    if !status.success() {
        bail!("{what} failed ({status})");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn exit_status(raw: i32) -> ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(raw)
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_status_is_success() {
        assert!(check_status(exit_status(0), "cargo build").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_status_fails_with_context() {
        // Raw wait status 0x100 is exit code 1.
        let err = match check_status(exit_status(0x100), "cargo build --release") {
            Ok(()) => String::new(),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("cargo build --release failed"));
    }
}
