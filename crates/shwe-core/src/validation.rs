//! # Validation Module
//!
//! Input parsing and validation utilities for Shwe.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Ways In                                        │
//! │                                                                         │
//! │  Lenient (default)                                                      │
//! │  ├── parse_amount("abc")  → 0.0                                         │
//! │  ├── Weight::normalize    → negatives clamp to 0                        │
//! │  └── The engine never fails on a bad number                             │
//! │                                                                         │
//! │  Strict (opt-in, for callers that must reject bad input)               │
//! │  ├── parse_amount_strict  → InvalidNumber / Required                    │
//! │  ├── validate_sale        → MustBeNonNegative                           │
//! │  └── validate_pae_grade / validate_density → OutOfRange                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shwe_core::validation::{parse_amount, parse_amount_strict};
//!
//! assert_eq!(parse_amount("4,250,000"), 4_250_000.0);
//! assert_eq!(parse_amount("not a price"), 0.0);
//! assert!(parse_amount_strict("price", "not a price").is_err());
//! ```

use crate::error::ValidationError;
use crate::purity::{FULL_FINENESS_PAE, MAX_GOLD_DENSITY};
use crate::sales::SaleInput;
use crate::weight::Weight;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Lenient Parsing
// =============================================================================

/// Parses a user-entered amount, treating anything malformed as zero.
///
/// Thousands separators (`,` and `_`) are ignored. When the whole string is
/// not a number, a leading numeric prefix is used (`"12g"` → 12). NaN and
/// infinities are malformed. The sign is kept; clamping is the job of the
/// weight normalization.
pub fn parse_amount(input: &str) -> f64 {
    let cleaned = strip_separators(input);
    cleaned
        .parse::<f64>()
        .ok()
        .or_else(|| leading_number(&cleaned))
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// NaN and infinities are malformed input and count as zero. The sign is kept.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Clamps a number to the non-negative finite range; anything else is zero.
#[inline]
pub fn non_negative_or_zero(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

// =============================================================================
// Strict Parsing
// =============================================================================

/// Parses an amount, rejecting empty and malformed input.
///
/// ## Example
/// ```rust
/// use shwe_core::validation::parse_amount_strict;
///
/// assert_eq!(parse_amount_strict("fee", " 5000 ").unwrap(), 5000.0);
/// assert!(parse_amount_strict("fee", "").is_err());
/// assert!(parse_amount_strict("fee", "NaN").is_err());
/// ```
pub fn parse_amount_strict(field: &str, input: &str) -> ValidationResult<f64> {
    let cleaned = strip_separators(input);

    if cleaned.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::InvalidNumber {
            field: field.to_string(),
            value: input.trim().to_string(),
        }),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that a value is finite and not negative.
pub fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates every field of a weight before it reaches the engine.
pub fn validate_weight(field: &str, weight: &Weight) -> ValidationResult<()> {
    validate_non_negative(&format!("{field} kyat"), weight.kyat)?;
    validate_non_negative(&format!("{field} pae"), weight.pae)?;
    validate_non_negative(&format!("{field} yway"), weight.yway)?;
    Ok(())
}

/// Validates all inputs of a sale.
///
/// The calculator itself accepts negative fees; callers that want to refuse
/// them run this first.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Sale form submitted                                                    │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_sale(&input) ← THIS FUNCTION                                 │
/// │       │                                                                 │
/// │       ├── weight/waste field < 0?   → MustBeNonNegative                │
/// │       ├── price or fee < 0?         → MustBeNonNegative                │
/// │       │                                                                 │
/// │       └── OK → calculate_sale(...)                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_sale(input: &SaleInput) -> ValidationResult<()> {
    validate_weight("weight", &input.weight)?;
    validate_weight("waste", &input.waste)?;
    validate_non_negative("price per kyat", input.price_per_kyat)?;
    validate_non_negative("handmade fee", input.handmade_fee)?;
    validate_non_negative("stone fee", input.stone_fee)?;
    Ok(())
}

/// Validates a pae grade on the 0–16 fineness scale.
pub fn validate_pae_grade(pae: f64) -> ValidationResult<()> {
    if !pae.is_finite() || !(0.0..=FULL_FINENESS_PAE).contains(&pae) {
        return Err(ValidationError::OutOfRange {
            field: "pae grade".to_string(),
            min: 0.0,
            max: FULL_FINENESS_PAE,
        });
    }

    Ok(())
}

/// Validates a measured density against the top of the purity table.
pub fn validate_density(density: f64) -> ValidationResult<()> {
    if !density.is_finite() || !(0.0..=MAX_GOLD_DENSITY).contains(&density) {
        return Err(ValidationError::OutOfRange {
            field: "density".to_string(),
            min: 0.0,
            max: MAX_GOLD_DENSITY,
        });
    }

    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

fn strip_separators(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect()
}

/// Longest leading `[+-]digits[.digits]` run, if it parses.
fn leading_number(s: &str) -> Option<f64> {
    let mut seen_dot = false;
    let mut end = 0;

    for (i, c) in s.char_indices() {
        let accepted = match c {
            '0'..='9' => true,
            '+' | '-' => i == 0,
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        };
        if !accepted {
            break;
        }
        end = i + c.len_utf8();
    }

    s[..end].parse().ok()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_lenient() {
        assert_eq!(parse_amount("100"), 100.0);
        assert_eq!(parse_amount("  2.5 "), 2.5);
        assert_eq!(parse_amount("1,000,000"), 1_000_000.0);
        assert_eq!(parse_amount("12g"), 12.0);
        assert_eq!(parse_amount("1.2.3"), 1.2);
        assert_eq!(parse_amount("-4"), -4.0);

        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
    }

    #[test]
    fn test_finite_or_zero_keeps_sign() {
        assert_eq!(finite_or_zero(-3.5), -3.5);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_non_negative_or_zero() {
        assert_eq!(non_negative_or_zero(3.5), 3.5);
        assert_eq!(non_negative_or_zero(-3.5), 0.0);
        assert_eq!(non_negative_or_zero(f64::NAN), 0.0);
        assert_eq!(non_negative_or_zero(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_parse_amount_strict() {
        assert_eq!(parse_amount_strict("price", "4,500").unwrap(), 4500.0);
        assert!(matches!(
            parse_amount_strict("price", "   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_amount_strict("price", "12g"),
            Err(ValidationError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight("weight", &Weight::new(1.0, 17.0, 9.5)).is_ok());
        let err = validate_weight("waste", &Weight::new(0.0, -1.0, 0.0)).unwrap_err();
        assert_eq!(err.to_string(), "waste pae must not be negative");
        assert!(validate_weight("weight", &Weight::new(f64::NAN, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_validate_sale() {
        let mut input = SaleInput {
            weight: Weight::new(1.0, 0.0, 0.0),
            price_per_kyat: 4_000_000.0,
            handmade_fee: 20_000.0,
            ..SaleInput::default()
        };
        assert!(validate_sale(&input).is_ok());

        input.stone_fee = -1.0;
        let err = validate_sale(&input).unwrap_err();
        assert_eq!(err.to_string(), "stone fee must not be negative");
    }

    #[test]
    fn test_validate_pae_grade() {
        assert!(validate_pae_grade(0.0).is_ok());
        assert!(validate_pae_grade(14.25).is_ok());
        assert!(validate_pae_grade(16.0).is_ok());
        assert!(validate_pae_grade(16.5).is_err());
        assert!(validate_pae_grade(-1.0).is_err());
    }

    #[test]
    fn test_validate_density() {
        assert!(validate_density(19.25).is_ok());
        assert!(validate_density(19.3).is_ok());
        assert!(validate_density(21.0).is_err());
        assert!(validate_density(f64::NAN).is_err());
    }
}
