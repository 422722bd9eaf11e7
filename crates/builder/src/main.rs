//! # Colorant Builder
//!
//! Release build orchestration for the Colorant program.
//!
//! ## Usage
//!
//! ```bash
//! colorant-builder           # Clean + release build + report (default)
//! colorant-builder clean     # Remove previous build outputs
//! colorant-builder build     # Release build without cleaning first
//! colorant-builder run       # Clean + build + execute the binary
//! colorant-builder status    # Inspect the built artifact
//! colorant-builder doctor    # Check the toolchain
//! ```
//!
//! Compilation itself is wholly delegated to Cargo; this tool only sequences
//! the clean and release-build steps and reports the outcome.

use anyhow::Result;
use clap::Parser;

mod builder;

#[derive(Parser)]
#[command(name = "colorant-builder", about = "Colorant release build orchestrator")]
struct Cli {
    #[command(subcommand)]
    command: Option<builder::BuildCommands>,
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();

    match cli.command.unwrap_or(builder::BuildCommands::All) {
        builder::BuildCommands::All => builder::build_all()?,
        builder::BuildCommands::Clean => builder::cargo::clean(&builder::project::locate()?)?,
        builder::BuildCommands::Build => builder::build()?,
        builder::BuildCommands::Run { args } => builder::run::run(&args)?,
        builder::BuildCommands::Status { json } => builder::artifact::status(json)?,
        builder::BuildCommands::Doctor => builder::doctor::run()?,
    }

    Ok(())
}

/// Diagnostic logging on stderr, off unless RUST_LOG asks for it.
fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}
