//! # Gem Command
//!
//! Carat and ratti/bee/point in both directions, with optional pricing.

use serde::Serialize;
use tracing::debug;

use shwe_core::money::round_display;
use shwe_core::{carat_to_units, GemQuote, GemWeight};

use super::Context;
use crate::cli::GemArgs;
use crate::error::ApiError;
use crate::input;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GemReport {
    pub carat: f64,
    pub units: GemWeight,
    pub display: String,
    pub total_ratti: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<GemPricing>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GemPricing {
    pub quote: GemQuote,
    /// The same price quoted per the other unit.
    pub equivalent: GemQuote,
    /// Equivalent price rounded to whole currency units.
    pub equivalent_rounded: i64,
    pub total: f64,
    pub total_formatted: String,
}

/// `shwe gem`
pub fn gem(args: &GemArgs, ctx: &Context<'_>) -> Result<GemReport, ApiError> {
    let (carat, units) = match (&args.carat, &args.units) {
        (_, Some(units)) => {
            let units = input::gem_units("units", units, ctx.mode)?.normalize();
            (units.to_carat(), units)
        }
        (Some(carat), None) => {
            let carat = ctx.amount("carat", carat)?;
            (carat, carat_to_units(carat))
        }
        (None, None) => (0.0, GemWeight::ZERO),
    };
    debug!(carat, units = %units, "gem command");

    let pricing = match &args.price {
        Some(price) => {
            let quote = GemQuote::new(ctx.amount("price", price)?, args.per);
            let total = if args.units.is_some() {
                quote.total_for_units(&units)
            } else {
                quote.total_for_carat(carat)
            };
            let equivalent = quote.equivalent();

            Some(GemPricing {
                quote,
                equivalent,
                equivalent_rounded: round_display(equivalent.price),
                total,
                total_formatted: ctx.format(total),
            })
        }
        None => None,
    };

    Ok(GemReport {
        carat,
        display: units.to_string(),
        total_ratti: units.total_ratti(),
        units,
        pricing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use shwe_core::GemPriceUnit;

    fn args(carat: Option<&str>, units: Option<&str>, price: Option<&str>, per: GemPriceUnit) -> GemArgs {
        GemArgs {
            carat: carat.map(str::to_string),
            units: units.map(str::to_string),
            price: price.map(str::to_string),
            per,
        }
    }

    #[test]
    fn test_carat_to_units() {
        let config = AppConfig::default();
        let report = gem(&args(Some("2.2"), None, None, GemPriceUnit::Carat), &Context::new(&config, false)).unwrap();
        assert_eq!(report.units, GemWeight::new(2.0, 8.0, 3.0));
        assert_eq!(report.display, "2R 8B 3P");
        assert!(report.pricing.is_none());
    }

    #[test]
    fn test_units_to_carat() {
        let config = AppConfig::default();
        let report = gem(&args(None, Some("11,0,0"), None, GemPriceUnit::Carat), &Context::new(&config, false)).unwrap();
        assert!((report.carat - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_price_per_ratti() {
        let config = AppConfig::default();
        let report = gem(
            &args(None, Some("2,10,0"), Some("1000"), GemPriceUnit::Ratti),
            &Context::new(&config, false),
        )
        .unwrap();

        let pricing = report.pricing.unwrap();
        assert_eq!(pricing.total, 2_500.0);
        assert_eq!(pricing.total_formatted, "2,500 Ks");
        assert_eq!(pricing.equivalent.unit, GemPriceUnit::Carat);
        assert_eq!(pricing.equivalent_rounded, 1_100);
    }

    #[test]
    fn test_price_per_carat() {
        let config = AppConfig::default();
        let report = gem(
            &args(Some("2"), None, Some("1,100,000"), GemPriceUnit::Carat),
            &Context::new(&config, false),
        )
        .unwrap();

        let pricing = report.pricing.unwrap();
        assert_eq!(pricing.total, 2_200_000.0);
        assert_eq!(pricing.equivalent_rounded, 1_000_000);
    }

    #[test]
    fn test_negative_price_totals_zero() {
        let config = AppConfig::default();
        let report = gem(
            &args(Some("1"), None, Some("-5"), GemPriceUnit::Carat),
            &Context::new(&config, false),
        )
        .unwrap();
        assert_eq!(report.pricing.unwrap().total, 0.0);
    }
}
