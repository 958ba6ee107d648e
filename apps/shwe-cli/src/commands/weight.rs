//! # Weight Commands
//!
//! Conversions between kyat/pae/yway, decimal kyat and grams.

use serde::Serialize;
use tracing::debug;

use shwe_core::{GramStandard, Weight};

use super::Context;
use crate::cli::{DecimalArgs, GramsArgs, NetArgs, NormalizeArgs, SwitchArgs, ToGramsArgs};
use crate::error::ApiError;

/// A normalized weight with its decimal and gram forms.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightReport {
    pub weight: Weight,
    pub display: String,
    pub decimal_kyat: f64,
    pub grams: f64,
    pub standard: GramStandard,
}

impl WeightReport {
    pub fn new(weight: Weight, standard: GramStandard) -> Self {
        let weight = weight.normalize();
        WeightReport {
            display: weight.to_string(),
            decimal_kyat: weight.to_decimal(),
            grams: weight.to_grams(standard),
            weight,
            standard,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchReport {
    pub from: WeightReport,
    pub to: WeightReport,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetReport {
    pub gross: WeightReport,
    pub deduct: WeightReport,
    pub net: WeightReport,
}

/// `shwe normalize`
pub fn normalize(args: &NormalizeArgs, ctx: &Context<'_>) -> Result<WeightReport, ApiError> {
    let weight = ctx.weight("weight", &args.weight)?;
    debug!(%weight, "normalize command");
    Ok(WeightReport::new(weight, ctx.standard(args.standard)))
}

/// `shwe decimal`
pub fn decimal(args: &DecimalArgs, ctx: &Context<'_>) -> Result<WeightReport, ApiError> {
    let decimal = ctx.amount("decimal kyat", &args.decimal)?;
    debug!(decimal, "decimal command");
    Ok(WeightReport::new(Weight::from_decimal(decimal), ctx.standard(args.standard)))
}

/// `shwe grams`
pub fn grams(args: &GramsArgs, ctx: &Context<'_>) -> Result<WeightReport, ApiError> {
    let grams = ctx.amount("grams", &args.grams)?;
    let standard = ctx.standard(args.standard);
    debug!(grams, %standard, "grams command");
    Ok(WeightReport::new(Weight::from_grams(grams, standard), standard))
}

/// `shwe to-grams`
pub fn to_grams(args: &ToGramsArgs, ctx: &Context<'_>) -> Result<WeightReport, ApiError> {
    let weight = ctx.weight("weight", &args.weight)?;
    Ok(WeightReport::new(weight, ctx.standard(args.standard)))
}

/// `shwe switch`
///
/// The metal on the scale stays the same; only its kyat reading changes.
pub fn switch(args: &SwitchArgs, ctx: &Context<'_>) -> Result<SwitchReport, ApiError> {
    let weight = ctx.weight("weight", &args.weight)?;
    let from = ctx.standard(args.from);
    let to = args.to.unwrap_or(from.other());
    debug!(%weight, %from, %to, "switch command");

    Ok(SwitchReport {
        from: WeightReport::new(weight, from),
        to: WeightReport::new(weight.convert_standard(from, to), to),
    })
}

/// `shwe net`
pub fn net(args: &NetArgs, ctx: &Context<'_>) -> Result<NetReport, ApiError> {
    let gross = ctx.weight("gross", &args.gross)?;
    let deduct = ctx.weight("deduct", &args.deduct)?;
    let standard = ctx.standard(args.standard);

    if deduct.to_decimal() > gross.to_decimal() {
        debug!(%gross, %deduct, "Deduction exceeds gross weight, net floored at zero");
    }

    Ok(NetReport {
        gross: WeightReport::new(gross, standard),
        deduct: WeightReport::new(deduct, standard),
        net: WeightReport::new(gross.subtract(&deduct), standard),
    })
}
