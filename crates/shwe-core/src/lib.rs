//! # shwe-core: Pure Weight & Pricing Logic for Shwe
//!
//! This crate is the **heart** of Shwe. It converts traditional kyat/pae/yway
//! gold weights and ratti/bee/point gem weights, and prices sales, refining
//! yields and price quotes, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Shwe Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Caller (shwe-cli, or any UI layer)                 │   │
//! │  │   forms ──► primitive numbers ──► engine ──► render results     │   │
//! │  │   owns: history storage, price feeds, the selected standard     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shwe-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌───────┐ │   │
//! │  │  │  weight  │ │  sales   │ │  purity  │ │   gem    │ │ price │ │   │
//! │  │  │ K/P/Y    │ │ totals   │ │ grade &  │ │ ct ↔ R/B/P│ │ OLD ↔ │ │   │
//! │  │  │ ↔ grams  │ │ + waste  │ │ yield    │ │ pricing  │ │ NEW   │ │   │
//! │  │  └──────────┘ └──────────┘ └──────────┘ └──────────┘ └───────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • STANDARD PASSED EXPLICITLY         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`weight`] - Kyat/pae/yway weight, normalization, decimal & gram forms
//! - [`standard`] - The OLD and NEW grams-per-kyat standards
//! - [`sales`] - Sale breakdown (waste is billed on top)
//! - [`purity`] - Fineness from two samples, yield from grade or density
//! - [`gem`] - Carat ↔ ratti/bee/point and gem pricing
//! - [`price`] - Per-kyat price conversion between standards
//! - [`money`] - Display rounding and formatting
//! - [`history`] - Immutable record of a completed sale
//! - [`validation`] - Lenient parsing and opt-in strict validators
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **Total**: Bad numbers become zero, negatives clamp, divisions by zero
//!    give degenerate results; nothing panics on user input
//! 3. **Explicit Standard**: No conversion reads a "current" gram standard
//! 4. **Unrounded Math**: Rounding happens only in [`money`], for display
//!
//! ## Example Usage
//!
//! ```rust
//! use shwe_core::{calculate_sale, GramStandard, Weight};
//!
//! let weight = Weight::new(0.0, 17.0, 9.0).normalize(); // 1K 2P 1Y
//! let grams = weight.to_grams(GramStandard::Old);
//! assert!((grams - 18.8115).abs() < 0.001);
//!
//! let sale = calculate_sale(&weight, 4_000_000.0, 50_000.0, 0.0, &Weight::ZERO);
//! assert_eq!(sale.total_amount, 4_581_250.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod gem;
pub mod history;
pub mod money;
pub mod price;
pub mod purity;
pub mod sales;
pub mod standard;
pub mod validation;
pub mod weight;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shwe_core::Weight` instead of
// `use shwe_core::weight::Weight`

pub use error::{CoreError, CoreResult, ValidationError};
pub use gem::{carat_to_units, units_to_carat, GemPriceUnit, GemQuote, GemWeight};
pub use history::HistoryEntry;
pub use money::Ks;
pub use price::convert_price;
pub use purity::{analyze_purity, expected_yield, PurityResult, YieldBasis, YieldResult};
pub use sales::{calculate_sale, SaleInput, SalesBreakdown};
pub use standard::GramStandard;
pub use weight::Weight;
