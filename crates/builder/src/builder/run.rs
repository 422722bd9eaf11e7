//! Build then execute the produced binary.

use crate::builder::{artifact, project};
use anyhow::{Context, Result, bail};
use std::process::Command;

/// Full pipeline, then run the release binary with `args` passed through.
pub fn run(args: &[String]) -> Result<()> {
    crate::builder::build_all()?;

    let project = project::locate()?;
    let binary = artifact::release_binary(&project);

    println!("\n=== Running {} ===", project.bin);
    log::debug!("exec {} {}", binary.display(), args.join(" "));

    let status = Command::new(&binary)
        .args(args)
        .current_dir(&project.root)
        .status()
        .with_context(|| format!("Failed to execute {}", binary.display()))?;

    if !status.success() {
        bail!("{} exited with {status}", project.bin);
    }
    Ok(())
}
