//! Toolchain checks.
//!
//! Verifies that the external build tool is present before anyone wastes a
//! build cycle on a broken environment.

use anyhow::{Result, bail};
use std::process::Command;

const TOOLS: &[&str] = &["cargo", "rustc"];

/// Check that every required tool resolves on PATH and reports a version.
pub fn run() -> Result<()> {
    let mut ok = true;

    for &tool in TOOLS {
        if which::which(tool).is_err() {
            eprintln!("[FAIL] missing `{tool}` in PATH");
            ok = false;
            continue;
        }

        match version(tool) {
            Some(v) => eprintln!("[OK] {v}"),
            None => {
                eprintln!("[FAIL] `{tool} --version` failed");
                ok = false;
            }
        }
    }

    if !ok {
        bail!("doctor checks failed");
    }
    Ok(())
}

/// First line of `tool --version`, if the tool runs at all.
fn version(tool: &str) -> Option<String> {
    let output = Command::new(tool).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(str::to_string)
}
