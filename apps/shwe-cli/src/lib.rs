//! # Shwe CLI Library
//!
//! Everything behind the `shwe` binary. `main.rs` only parses arguments and
//! calls [`run`].
//!
//! ## Module Organization
//! ```text
//! shwe_cli/
//! ├── lib.rs          ◄─── You are here (startup & output)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── AppConfig from SHWE_* environment variables
//! ├── input.rs        ◄─── "K,P,Y" and amount parsing (lenient / strict)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Context + dispatch
//! │   ├── weight.rs   ◄─── normalize, decimal, grams, to-grams, switch, net
//! │   ├── sale.rs     ◄─── sale (+ history record)
//! │   ├── purity.rs   ◄─── purity, yield
//! │   ├── gem.rs      ◄─── gem
//! │   └── price.rs    ◄─── price
//! └── error.rs        ◄─── ApiError envelope printed on failure
//! ```
//!
//! ## Output Channels
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdout  ◄── pretty JSON result (exit 0)                                │
//! │  stderr  ◄── {"code": "...", "message": "..."} (exit 1)                 │
//! │  stderr  ◄── tracing output (RUST_LOG / SHWE_LOG)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::anyhow;
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::commands::Context;
use crate::config::AppConfig;
use crate::error::ApiError;

/// Log filter used when neither `RUST_LOG` nor `SHWE_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,shwe=info";

/// Runs one CLI invocation.
///
/// Domain failures are reported as an [`ApiError`] on stderr with exit code
/// 1. The `Err` path is reserved for failures of the process itself
/// (logging setup, writing to stdout).
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load();

    init_tracing(config.as_ref().ok().and_then(|c| c.log_filter.as_deref()))?;

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Invalid configuration");
            return report_error(&ApiError::from(e));
        }
    };

    debug!(standard = %config.standard, strict = cli.strict, "Configuration loaded");

    let ctx = Context::new(&config, cli.strict);
    match commands::execute(&cli.command, &ctx) {
        Ok(value) => {
            write_json(io::stdout().lock(), &value)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => report_error(&e),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages from every crate
/// - `SHWE_LOG=shwe=debug` - Used when `RUST_LOG` is unset
/// - Default: [`DEFAULT_LOG_FILTER`]
pub fn init_tracing(fallback: Option<&str>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

fn report_error(error: &ApiError) -> anyhow::Result<ExitCode> {
    write_json(io::stderr().lock(), error)?;
    Ok(ExitCode::FAILURE)
}

fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_write_json_ends_with_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &ApiError::new(ErrorCode::Internal, "boom")).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\"code\": \"INTERNAL\""));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
