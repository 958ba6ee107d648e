//! # Price Command
//!
//! Re-quotes a per-kyat price under the other gram standard.

use serde::Serialize;
use tracing::debug;

use shwe_core::price::price_per_gram;
use shwe_core::{convert_price, GramStandard, Ks};

use super::Context;
use crate::cli::PriceArgs;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceReport {
    pub from: GramStandard,
    pub to: GramStandard,
    pub price: f64,
    /// Unrounded converted price.
    pub converted: f64,
    /// Whole currency units, serialized as a plain number.
    pub rounded: Ks,
    pub formatted: String,
    /// Price of one gram; equal under both standards.
    pub price_per_gram: f64,
}

/// `shwe price`
pub fn price(args: &PriceArgs, ctx: &Context<'_>) -> Result<PriceReport, ApiError> {
    let price = ctx.amount("price", &args.price)?;
    let from = ctx.standard(args.from);
    let to = args.to.unwrap_or(from.other());

    let converted = convert_price(price, from, to);
    debug!(price, %from, %to, converted, "price command");

    Ok(PriceReport {
        from,
        to,
        price,
        converted,
        rounded: Ks::from_amount(converted),
        formatted: ctx.format(converted),
        price_per_gram: price_per_gram(price, from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn args(price: &str, from: Option<GramStandard>, to: Option<GramStandard>) -> PriceArgs {
        PriceArgs {
            price: price.to_string(),
            from,
            to,
        }
    }

    #[test]
    fn test_old_to_new() {
        let config = AppConfig::default();
        let report = price(&args("1,000,000", None, None), &Context::new(&config, false)).unwrap();

        assert_eq!(report.from, GramStandard::Old);
        assert_eq!(report.to, GramStandard::New);
        assert_eq!(report.rounded.whole(), 983_319);
        assert_eq!(report.formatted, "983,319 Ks");
    }

    #[test]
    fn test_round_trip() {
        let config = AppConfig::default();
        let ctx = Context::new(&config, false);
        let there = price(&args("1000000", Some(GramStandard::Old), None), &ctx).unwrap();
        let back = price(&args(&there.rounded.whole().to_string(), Some(GramStandard::New), None), &ctx).unwrap();
        assert!((back.rounded.whole() - 1_000_000).abs() <= 1);
    }

    #[test]
    fn test_same_standard_is_identity() {
        let config = AppConfig::default();
        let report = price(
            &args("4250000", Some(GramStandard::New), Some(GramStandard::New)),
            &Context::new(&config, false),
        )
        .unwrap();
        assert_eq!(report.converted, 4_250_000.0);
    }
}
