//! # History Module
//!
//! The record of one completed sale, handed to the caller for safekeeping.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  shwe-core                           caller                             │
//! │  ─────────                           ──────                             │
//! │  SaleInput ──► HistoryEntry::record ──► stores / lists / deletes        │
//! │                                                                         │
//! │  The core builds an entry once and never reads stored entries back.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries use the snapshot pattern: inputs are frozen at the moment of sale
//! so later price changes never rewrite history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::sales::{calculate_sale, SaleInput, SalesBreakdown};
use crate::weight::Weight;

/// One completed sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// When the sale was recorded.
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,

    /// Item weight at time of sale (normalized, frozen).
    pub weight: Weight,

    /// Billed waste weight at time of sale (normalized, frozen).
    pub waste: Weight,

    /// Market price per kyat at time of sale (frozen).
    pub price_per_kyat: f64,

    pub handmade_fee: f64,

    pub stone_fee: f64,

    /// Total the customer paid.
    pub total_price: f64,
}

impl HistoryEntry {
    /// Records a sale.
    ///
    /// ## Errors
    /// [`CoreError::NothingToRecord`] when the sale total is not positive,
    /// e.g. the form was saved before a weight or price was entered.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::Utc;
    /// use shwe_core::history::HistoryEntry;
    /// use shwe_core::sales::SaleInput;
    /// use shwe_core::weight::Weight;
    ///
    /// let input = SaleInput {
    ///     weight: Weight::new(0.0, 17.0, 9.0),
    ///     price_per_kyat: 128.0,
    ///     ..SaleInput::default()
    /// };
    /// let entry = HistoryEntry::record(&input, Utc::now()).unwrap();
    /// assert_eq!(entry.weight, Weight::new(1.0, 2.0, 1.0));
    /// assert_eq!(entry.total_price, 145.0);
    ///
    /// assert!(HistoryEntry::record(&SaleInput::default(), Utc::now()).is_err());
    /// ```
    pub fn record(input: &SaleInput, at: DateTime<Utc>) -> CoreResult<HistoryEntry> {
        let breakdown = input.breakdown();
        let total = breakdown.total_amount;

        if total.is_nan() || total <= 0.0 {
            return Err(CoreError::NothingToRecord { total });
        }

        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: at,
            weight: input.weight.normalize(),
            waste: input.waste.normalize(),
            price_per_kyat: input.price_per_kyat,
            handmade_fee: input.handmade_fee,
            stone_fee: input.stone_fee,
            total_price: total,
        };

        debug!(id = %entry.id, total = entry.total_price, "Recorded sale");
        Ok(entry)
    }

    /// The inputs this entry was recorded from.
    pub fn input(&self) -> SaleInput {
        SaleInput {
            weight: self.weight,
            waste: self.waste,
            price_per_kyat: self.price_per_kyat,
            handmade_fee: self.handmade_fee,
            stone_fee: self.stone_fee,
        }
    }

    /// Re-derives the full breakdown from the frozen inputs.
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_input() -> SaleInput {
        SaleInput {
            weight: Weight::new(1.0, 0.0, 0.0),
            waste: Weight::new(0.0, 1.0, 0.0),
            price_per_kyat: 100.0,
            handmade_fee: 5.0,
            stone_fee: 10.0,
        }
    }

    #[test]
    fn test_record_snapshot() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let entry = HistoryEntry::record(&sample_input(), at).unwrap();

        assert_eq!(entry.timestamp, at);
        assert_eq!(entry.total_price, 121.25);
        assert_eq!(entry.input(), sample_input());
        assert_eq!(entry.breakdown(), sample_input().breakdown());
        assert!(Uuid::parse_str(&entry.id).is_ok());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = HistoryEntry::record(&sample_input(), Utc::now()).unwrap();
        let b = HistoryEntry::record(&sample_input(), Utc::now()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_refuses_empty_sale() {
        let err = HistoryEntry::record(&SaleInput::default(), Utc::now()).unwrap_err();
        assert!(matches!(err, CoreError::NothingToRecord { total } if total == 0.0));
    }

    #[test]
    fn test_refuses_negative_total() {
        let input = SaleInput {
            weight: Weight::new(1.0, 0.0, 0.0),
            price_per_kyat: 100.0,
            handmade_fee: -200.0,
            ..SaleInput::default()
        };
        assert!(HistoryEntry::record(&input, Utc::now()).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let entry = HistoryEntry::record(&sample_input(), Utc::now()).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"pricePerKyat\":100.0"));
        let parsed: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
