//! # Sale Command
//!
//! Prices a sale and, with `--record`, produces the history entry the caller
//! is expected to keep.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use shwe_core::validation::validate_sale;
use shwe_core::{GramStandard, HistoryEntry, SaleInput, SalesBreakdown};

use super::Context;
use crate::cli::SaleArgs;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleReport {
    pub input: SaleInput,
    pub breakdown: SalesBreakdown,
    pub formatted: FormattedBreakdown,
    pub standard: GramStandard,
    /// Item weight in grams under `standard`.
    pub grams: f64,
    pub waste_grams: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<HistoryEntry>,
}

/// Breakdown amounts rounded and formatted for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedBreakdown {
    pub pure_gold_value: String,
    pub waste_value: String,
    pub handmade_fee: String,
    pub stone_fee: String,
    pub total_amount: String,
}

/// `shwe sale`
pub fn sale(args: &SaleArgs, ctx: &Context<'_>) -> Result<SaleReport, ApiError> {
    let input = SaleInput {
        weight: ctx.weight("weight", &args.weight)?,
        waste: ctx.optional_weight("waste", args.waste.as_deref())?,
        price_per_kyat: ctx.amount("price", &args.price)?,
        handmade_fee: ctx.optional_amount("handmade fee", args.handmade.as_deref())?,
        stone_fee: ctx.optional_amount("stone fee", args.stone.as_deref())?,
    };

    if ctx.is_strict() {
        validate_sale(&input)?;
    }

    let breakdown = input.breakdown();
    debug!(total = breakdown.total_amount, "sale command");

    let history = if args.record {
        let entry = HistoryEntry::record(&input, Utc::now())?;
        info!(id = %entry.id, total = entry.total_price, "Sale recorded");
        Some(entry)
    } else {
        None
    };

    let standard = ctx.standard(args.standard);

    Ok(SaleReport {
        formatted: FormattedBreakdown {
            pure_gold_value: ctx.format(breakdown.pure_gold_value),
            waste_value: ctx.format(breakdown.waste_value),
            handmade_fee: ctx.format(breakdown.handmade_fee),
            stone_fee: ctx.format(breakdown.stone_fee),
            total_amount: ctx.format(breakdown.total_amount),
        },
        grams: input.weight.to_grams(standard),
        waste_grams: input.waste.to_grams(standard),
        standard,
        input,
        breakdown,
        history,
    })
}
