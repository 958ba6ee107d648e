//! # CLI Commands Module
//!
//! One function per subcommand. Each takes its parsed arguments and a
//! [`Context`], calls into shwe-core and returns a serializable report.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (Context + dispatch)
//! ├── weight.rs   ◄─── normalize, decimal, grams, to-grams, switch, net
//! ├── sale.rs     ◄─── sale
//! ├── purity.rs   ◄─── purity, yield
//! ├── gem.rs      ◄─── gem
//! └── price.rs    ◄─── price
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  shwe sale --weight 1,0,0 --price 100                                   │
//! │         │                                                               │
//! │         │ (clap)                                                        │
//! │         ▼                                                               │
//! │  Command::Sale(SaleArgs)                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  sale::sale(&args, &ctx) -> Result<SaleReport, ApiError>                │
//! │         │                    ▲                                          │
//! │         │                    └── ctx: configured standard, currency,    │
//! │         │                             lenient/strict input mode         │
//! │         ▼                                                               │
//! │  serde_json::Value ──► stdout                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod gem;
pub mod price;
pub mod purity;
pub mod sale;
pub mod weight;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use shwe_core::money::format_amount;
use shwe_core::{GramStandard, Weight};

use crate::cli::Command;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::input::{self, Mode};

/// What every command may read besides its own arguments.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub config: &'a AppConfig,
    pub mode: Mode,
}

impl<'a> Context<'a> {
    pub fn new(config: &'a AppConfig, strict: bool) -> Self {
        Context {
            config,
            mode: Mode::from_flag(strict),
        }
    }

    /// The `--standard` given, else the configured default.
    pub fn standard(&self, requested: Option<GramStandard>) -> GramStandard {
        requested.unwrap_or(self.config.standard)
    }

    pub fn amount(&self, field: &str, input: &str) -> Result<f64, ApiError> {
        Ok(input::amount(field, input, self.mode)?)
    }

    pub fn optional_amount(&self, field: &str, input: Option<&str>) -> Result<f64, ApiError> {
        Ok(input::optional_amount(field, input, self.mode)?)
    }

    pub fn weight(&self, field: &str, input: &str) -> Result<Weight, ApiError> {
        Ok(input::weight(field, input, self.mode)?)
    }

    pub fn optional_weight(&self, field: &str, input: Option<&str>) -> Result<Weight, ApiError> {
        Ok(input::optional_weight(field, input, self.mode)?)
    }

    pub fn is_strict(&self) -> bool {
        self.mode == Mode::Strict
    }

    /// Formats an amount with the configured currency suffix.
    pub fn format(&self, amount: f64) -> String {
        format_amount(amount, &self.config.currency_suffix)
    }
}

/// Runs a parsed command.
pub fn execute(command: &Command, ctx: &Context<'_>) -> Result<Value, ApiError> {
    match command {
        Command::Normalize(args) => to_json(weight::normalize(args, ctx)?),
        Command::Decimal(args) => to_json(weight::decimal(args, ctx)?),
        Command::Grams(args) => to_json(weight::grams(args, ctx)?),
        Command::ToGrams(args) => to_json(weight::to_grams(args, ctx)?),
        Command::Switch(args) => to_json(weight::switch(args, ctx)?),
        Command::Net(args) => to_json(weight::net(args, ctx)?),
        Command::Sale(args) => to_json(sale::sale(args, ctx)?),
        Command::Purity(args) => to_json(purity::purity(args, ctx)?),
        Command::Yield(args) => to_json(purity::expected_yield(args, ctx)?),
        Command::Gem(args) => to_json(gem::gem(args, ctx)?),
        Command::Price(args) => to_json(price::price(args, ctx)?),
        Command::Config => {
            debug!("config command");
            to_json(ctx.config)
        }
    }
}

fn to_json<T: Serialize>(report: T) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(report)?)
}
