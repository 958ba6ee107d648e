//! # Price Module
//!
//! Rescales a per-kyat price from one gram standard to the other.
//!
//! ## Why Prices Differ
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A price per kyat is really a price per N grams.                       │
//! │                                                                         │
//! │  OLD: 1,000,000 per 16.606 g  ──►  60,219.2 per gram                   │
//! │  NEW:   983,319 per 16.329 g  ──►  60,219.2 per gram                   │
//! │                                                                         │
//! │  price_new = price_old / 16.606 × 16.329                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Results are unrounded; round with [`crate::money::round_display`] when
//! showing them.
//!
//! ## Usage
//! ```rust
//! use shwe_core::price::convert_price;
//! use shwe_core::standard::GramStandard;
//! use shwe_core::money::round_display;
//!
//! let new = convert_price(1_000_000.0, GramStandard::Old, GramStandard::New);
//! assert_eq!(round_display(new), 983_319);
//! ```

use tracing::debug;

use crate::standard::{usable_grams_per_kyat, GramStandard};
use crate::validation::finite_or_zero;

/// Converts a per-kyat price between the two gram standards.
#[inline]
pub fn convert_price(price: f64, from: GramStandard, to: GramStandard) -> f64 {
    rescale_price(price, from.grams_per_kyat(), to.grams_per_kyat())
}

/// Rescales a per-kyat price between arbitrary grams-per-kyat constants.
///
/// A zero, negative or non-finite `from_grams` cannot be divided by and
/// yields `0.0`, as does a NaN or infinite price or `to_grams`.
pub fn rescale_price(price: f64, from_grams: f64, to_grams: f64) -> f64 {
    match usable_grams_per_kyat(from_grams) {
        Some(from) => finite_or_zero(price) / from * finite_or_zero(to_grams),
        None => {
            debug!(price, from_grams, to_grams, "Unusable gram constant, price unavailable");
            0.0
        }
    }
}

/// Price of one gram of gold under the given standard.
#[inline]
pub fn price_per_gram(price_per_kyat: f64, standard: GramStandard) -> f64 {
    finite_or_zero(price_per_kyat) / standard.grams_per_kyat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::round_display;

    #[test]
    fn test_old_to_new() {
        let new = convert_price(1_000_000.0, GramStandard::Old, GramStandard::New);
        assert!((new - 983_319.28).abs() < 0.01);
        assert!(new < 1_000_000.0);
    }

    #[test]
    fn test_new_to_old() {
        let old = convert_price(1_000_000.0, GramStandard::New, GramStandard::Old);
        assert!(old > 1_000_000.0);
    }

    #[test]
    fn test_same_standard_is_identity() {
        assert_eq!(convert_price(4_250_000.0, GramStandard::New, GramStandard::New), 4_250_000.0);
    }

    #[test]
    fn test_round_trip_within_rounding() {
        for price in [1.0, 999.0, 1_000_000.0, 4_321_987.0] {
            let there = round_display(convert_price(price, GramStandard::Old, GramStandard::New));
            let back = round_display(convert_price(there as f64, GramStandard::New, GramStandard::Old));
            assert!((back - price as i64).abs() <= 1, "price {price} came back as {back}");
        }
    }

    #[test]
    fn test_unusable_constant() {
        assert_eq!(rescale_price(1_000_000.0, 0.0, 16.329), 0.0);
        assert_eq!(rescale_price(1_000_000.0, f64::NAN, 16.329), 0.0);
    }

    #[test]
    fn test_malformed_price_is_zero() {
        assert_eq!(convert_price(f64::NAN, GramStandard::Old, GramStandard::New), 0.0);
        assert_eq!(convert_price(f64::INFINITY, GramStandard::New, GramStandard::Old), 0.0);
        assert_eq!(rescale_price(1_000_000.0, 16.606, f64::NAN), 0.0);
        assert_eq!(price_per_gram(f64::NEG_INFINITY, GramStandard::Old), 0.0);
    }

    #[test]
    fn test_price_per_gram_equal_across_standards() {
        let old = 1_000_000.0;
        let new = convert_price(old, GramStandard::Old, GramStandard::New);
        let a = price_per_gram(old, GramStandard::Old);
        let b = price_per_gram(new, GramStandard::New);
        assert!((a - b).abs() < 1e-6);
    }
}
