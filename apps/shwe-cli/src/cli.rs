//! # Command-Line Arguments
//!
//! Numbers are taken as text so the lenient/strict choice stays with
//! [`crate::input`] rather than with clap.

use clap::{Args, Parser, Subcommand};

use shwe_core::{GemPriceUnit, GramStandard};

/// Kyat/pae/yway gold weights, gem weights and pricing.
#[derive(Debug, Parser)]
#[command(name = "shwe", version, about)]
pub struct Cli {
    /// Reject malformed numbers and negative magnitudes instead of
    /// treating them as zero
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Carry yway into pae and pae into kyat
    Normalize(NormalizeArgs),

    /// Split decimal kyat into kyat, pae and yway
    Decimal(DecimalArgs),

    /// Convert grams to kyat, pae and yway
    Grams(GramsArgs),

    /// Convert kyat, pae and yway to grams
    ToGrams(ToGramsArgs),

    /// Re-read the same gram mass under the other standard
    Switch(SwitchArgs),

    /// Gross weight minus a deduction, never below zero
    Net(NetArgs),

    /// Price a sale (waste is billed on top)
    Sale(SaleArgs),

    /// Fineness from a scrap sample and the pure gold refined from it
    Purity(PurityArgs),

    /// Expected pure gold from scrap of a known grade or density
    Yield(YieldArgs),

    /// Carat and ratti/bee/point conversion and pricing
    Gem(GemArgs),

    /// Convert a per-kyat price between standards
    Price(PriceArgs),

    /// Show the effective configuration
    Config,
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Weight as K,P,Y
    #[arg(long, allow_hyphen_values = true)]
    pub weight: String,

    /// Standard for the gram equivalent
    #[arg(long)]
    pub standard: Option<GramStandard>,
}

#[derive(Debug, Args)]
pub struct DecimalArgs {
    /// Weight in decimal kyat
    #[arg(allow_hyphen_values = true)]
    pub decimal: String,

    #[arg(long)]
    pub standard: Option<GramStandard>,
}

#[derive(Debug, Args)]
pub struct GramsArgs {
    #[arg(allow_hyphen_values = true)]
    pub grams: String,

    #[arg(long)]
    pub standard: Option<GramStandard>,
}

#[derive(Debug, Args)]
pub struct ToGramsArgs {
    /// Weight as K,P,Y
    #[arg(long, allow_hyphen_values = true)]
    pub weight: String,

    #[arg(long)]
    pub standard: Option<GramStandard>,
}

#[derive(Debug, Args)]
pub struct SwitchArgs {
    /// Weight as K,P,Y under `--from`
    #[arg(long, allow_hyphen_values = true)]
    pub weight: String,

    /// Standard the weight was read under (default: configured standard)
    #[arg(long)]
    pub from: Option<GramStandard>,

    /// Standard to re-read it under (default: the other one)
    #[arg(long)]
    pub to: Option<GramStandard>,
}

#[derive(Debug, Args)]
pub struct NetArgs {
    /// Gross weight as K,P,Y
    #[arg(long, allow_hyphen_values = true)]
    pub gross: String,

    /// Deduction (stones, solder) as K,P,Y
    #[arg(long, allow_hyphen_values = true)]
    pub deduct: String,

    #[arg(long)]
    pub standard: Option<GramStandard>,
}

#[derive(Debug, Args)]
pub struct SaleArgs {
    /// Item weight as K,P,Y
    #[arg(long, allow_hyphen_values = true)]
    pub weight: String,

    /// Waste weight as K,P,Y, billed on top of the item
    #[arg(long, allow_hyphen_values = true)]
    pub waste: Option<String>,

    /// Market price of one kyat
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,

    /// Workmanship fee
    #[arg(long, allow_hyphen_values = true)]
    pub handmade: Option<String>,

    /// Fee for set stones
    #[arg(long, allow_hyphen_values = true)]
    pub stone: Option<String>,

    /// Also emit a history entry for the sale
    #[arg(long)]
    pub record: bool,

    /// Standard for the gram equivalents
    #[arg(long)]
    pub standard: Option<GramStandard>,
}

#[derive(Debug, Args)]
pub struct PurityArgs {
    /// Scrap weight before refining, as K,P,Y
    #[arg(long, allow_hyphen_values = true)]
    pub scrap: String,

    /// Pure gold after refining, as K,P,Y
    #[arg(long, allow_hyphen_values = true)]
    pub pure: String,
}

#[derive(Debug, Args)]
pub struct YieldArgs {
    /// Scrap weight as K,P,Y
    #[arg(long, allow_hyphen_values = true)]
    pub scrap: String,

    /// Known pae grade (0-16)
    #[arg(long, allow_hyphen_values = true)]
    pub pae: Option<String>,

    /// Measured density in g/cm³; wins over --pae unless --strict
    #[arg(long, allow_hyphen_values = true)]
    pub density: Option<String>,

    #[arg(long)]
    pub standard: Option<GramStandard>,
}

#[derive(Debug, Args)]
pub struct GemArgs {
    /// Weight in carat
    #[arg(long, allow_hyphen_values = true, conflicts_with = "units", required_unless_present = "units")]
    pub carat: Option<String>,

    /// Weight as R,B,P (ratti, bee, point)
    #[arg(long, allow_hyphen_values = true)]
    pub units: Option<String>,

    /// Price per `--per` unit
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Unit the price is quoted in
    #[arg(long, default_value = "carat")]
    pub per: GemPriceUnit,
}

#[derive(Debug, Args)]
pub struct PriceArgs {
    /// Price of one kyat under `--from`
    #[arg(allow_hyphen_values = true)]
    pub price: String,

    /// Standard the price is quoted under (default: configured standard)
    #[arg(long)]
    pub from: Option<GramStandard>,

    /// Standard to quote it under (default: the other one)
    #[arg(long)]
    pub to: Option<GramStandard>,
}
