//! # Sales Module
//!
//! Turns a gold weight, a waste weight, a per-kyat market price and two flat
//! fees into a priced breakdown.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  pure_gold_value = decimal(weight) × price_per_kyat                     │
//! │  waste_value     = decimal(waste)  × price_per_kyat    (ADDED)          │
//! │  total_amount    = pure_gold_value + waste_value                        │
//! │                  + handmade_fee    + stone_fee                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Waste Is Billed, Not Deducted
//! In this market the stated waste ("လျော့တွက်") is extra weight the customer
//! pays for on top of the item's own weight. It is **added** to the total.
//! Reading it as a loss to subtract gives the wrong bill.
//!
//! ## Usage
//! ```rust
//! use shwe_core::sales::calculate_sale;
//! use shwe_core::weight::Weight;
//!
//! let b = calculate_sale(
//!     &Weight::new(1.0, 0.0, 0.0),
//!     100.0,
//!     5.0,
//!     10.0,
//!     &Weight::new(0.0, 1.0, 0.0),
//! );
//! assert_eq!(b.pure_gold_value, 100.0);
//! assert_eq!(b.waste_value, 6.25);
//! assert_eq!(b.total_amount, 121.25);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::validation::finite_or_zero;
use crate::weight::Weight;

// =============================================================================
// Sale Input
// =============================================================================

/// Everything the sales form collects.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleInput {
    /// Weight of the item.
    pub weight: Weight,
    /// Waste weight billed on top of the item.
    pub waste: Weight,
    /// Market price of one kyat of gold.
    pub price_per_kyat: f64,
    /// Workmanship fee.
    pub handmade_fee: f64,
    /// Fee for set stones.
    pub stone_fee: f64,
}

impl SaleInput {
    /// Prices this input. Same as calling [`calculate_sale`].
    pub fn breakdown(&self) -> SalesBreakdown {
        calculate_sale(
            &self.weight,
            self.price_per_kyat,
            self.handmade_fee,
            self.stone_fee,
            &self.waste,
        )
    }
}

// =============================================================================
// Sales Breakdown
// =============================================================================

/// Priced result of a sale. Derived, never stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SalesBreakdown {
    /// Value of the item's own gold weight.
    pub pure_gold_value: f64,
    /// Value of the billed waste weight.
    pub waste_value: f64,
    pub handmade_fee: f64,
    pub stone_fee: f64,
    /// Sum of the four components above.
    pub total_amount: f64,
    /// Item weight in decimal kyat.
    pub total_weight_kyat: f64,
    /// Waste weight in decimal kyat.
    pub waste_weight_kyat: f64,
}

/// Prices a sale.
///
/// Weights are normalized (so negative fields clamp to zero). NaN or infinite
/// price and fees count as zero; otherwise they are used as given. Callers that must refuse negative fees validate with
/// [`crate::validation::validate_sale`] first.
///
/// ## User Workflow
/// ```text
/// Weight: 1K 0P 0Y   Waste: 0K 1P 0Y   Price: 100/kyat
/// Handmade: 5        Stone: 10
///      │
///      ▼
/// calculate_sale(...) ← THIS FUNCTION
///      │
///      ▼
/// Gold 100 + Waste 6.25 + Handmade 5 + Stone 10 = 121.25
/// ```
pub fn calculate_sale(
    weight: &Weight,
    price_per_kyat: f64,
    handmade_fee: f64,
    stone_fee: f64,
    waste: &Weight,
) -> SalesBreakdown {
    let price_per_kyat = finite_or_zero(price_per_kyat);
    let handmade_fee = finite_or_zero(handmade_fee);
    let stone_fee = finite_or_zero(stone_fee);

    let total_weight_kyat = weight.to_decimal();
    let waste_weight_kyat = waste.to_decimal();

    let pure_gold_value = total_weight_kyat * price_per_kyat;
    let waste_value = waste_weight_kyat * price_per_kyat;

    let total_amount = pure_gold_value + waste_value + handmade_fee + stone_fee;

    SalesBreakdown {
        pure_gold_value,
        waste_value,
        handmade_fee,
        stone_fee,
        total_amount,
        total_weight_kyat,
        waste_weight_kyat,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sale() {
        let b = calculate_sale(
            &Weight::new(1.0, 0.0, 0.0),
            100.0,
            5.0,
            10.0,
            &Weight::new(0.0, 1.0, 0.0),
        );
        assert_eq!(b.pure_gold_value, 100.0);
        assert_eq!(b.waste_value, 6.25);
        assert_eq!(b.handmade_fee, 5.0);
        assert_eq!(b.stone_fee, 10.0);
        assert_eq!(b.total_amount, 121.25);
        assert_eq!(b.total_weight_kyat, 1.0);
        assert_eq!(b.waste_weight_kyat, 0.0625);
    }

    #[test]
    fn test_waste_is_added_not_subtracted() {
        let weight = Weight::new(2.0, 0.0, 0.0);
        let without = calculate_sale(&weight, 1000.0, 0.0, 0.0, &Weight::ZERO);
        let with = calculate_sale(&weight, 1000.0, 0.0, 0.0, &Weight::new(0.0, 8.0, 0.0));
        assert!(with.total_amount > without.total_amount);
        assert_eq!(with.total_amount - without.total_amount, 500.0);
    }

    #[test]
    fn test_zero_inputs() {
        let b = calculate_sale(&Weight::ZERO, 0.0, 0.0, 0.0, &Weight::ZERO);
        assert_eq!(b, SalesBreakdown::default());
    }

    #[test]
    fn test_unnormalized_weight_priced_like_normalized() {
        let raw = Weight::new(0.0, 17.0, 9.0);
        let a = calculate_sale(&raw, 3_200_000.0, 0.0, 0.0, &Weight::ZERO);
        let b = calculate_sale(&raw.normalize(), 3_200_000.0, 0.0, 0.0, &Weight::ZERO);
        assert_eq!(a, b);
    }

    #[test]
    fn test_negative_weight_clamped() {
        let b = calculate_sale(&Weight::new(-1.0, 0.0, 0.0), 100.0, 0.0, 0.0, &Weight::ZERO);
        assert_eq!(b.pure_gold_value, 0.0);
        assert_eq!(b.total_weight_kyat, 0.0);
    }

    #[test]
    fn test_malformed_price_and_fees_count_as_zero() {
        let kyat = Weight::new(1.0, 0.0, 0.0);

        let b = calculate_sale(&kyat, f64::NAN, 5.0, 10.0, &Weight::ZERO);
        assert_eq!(b.pure_gold_value, 0.0);
        assert_eq!(b.waste_value, 0.0);
        assert_eq!(b.total_amount, 15.0);

        let b = calculate_sale(&kyat, 100.0, f64::INFINITY, f64::NEG_INFINITY, &Weight::ZERO);
        assert_eq!(b.handmade_fee, 0.0);
        assert_eq!(b.stone_fee, 0.0);
        assert_eq!(b.total_amount, 100.0);
    }

    #[test]
    fn test_negative_fee_kept() {
        let b = calculate_sale(&Weight::new(1.0, 0.0, 0.0), 100.0, -5.0, 0.0, &Weight::ZERO);
        assert_eq!(b.handmade_fee, -5.0);
        assert_eq!(b.total_amount, 95.0);
    }

    #[test]
    fn test_sale_input_breakdown() {
        let input = SaleInput {
            weight: Weight::new(1.0, 0.0, 0.0),
            waste: Weight::new(0.0, 1.0, 0.0),
            price_per_kyat: 100.0,
            handmade_fee: 5.0,
            stone_fee: 10.0,
        };
        assert_eq!(input.breakdown().total_amount, 121.25);
    }

    #[test]
    fn test_breakdown_json_is_camel_case() {
        let b = calculate_sale(&Weight::new(1.0, 0.0, 0.0), 10.0, 0.0, 0.0, &Weight::ZERO);
        let json = serde_json::to_value(b).unwrap();
        assert_eq!(json["pureGoldValue"], 10.0);
        assert_eq!(json["totalWeightKyat"], 1.0);
    }
}
