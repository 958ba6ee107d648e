//! # Shwe Command-Line Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Load configuration from the environment
//! 3. Initialize tracing (stderr)
//! 4. Run the command against shwe-core
//! 5. Print JSON (stdout on success, stderr on failure)

use std::process::ExitCode;

use clap::Parser;

use shwe_cli::cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    // The actual setup is in lib.rs for better testability
    shwe_cli::run(Cli::parse())
}
