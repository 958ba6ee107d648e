//! # Input Parsing
//!
//! Turns command-line text into engine values.
//!
//! ## Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Weight      "K,P,Y"   "1,2,3.5"   "0,17,9"   "2" (kyat only)           │
//! │  Gem units   "R,B,P"   "2,8,3"                                          │
//! │  Amount      "4250000"  "4,250,000"  "4_250_000"                        │
//! │                                                                         │
//! │  Lenient (default): malformed numbers become 0, negatives are left     │
//! │                     for the engine to clamp                             │
//! │  Strict (--strict): malformed numbers and negatives are errors          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shwe_core::error::ValidationError;
use shwe_core::validation::{
    parse_amount, parse_amount_strict, validate_non_negative, validate_weight, ValidationResult,
};
use shwe_core::{GemWeight, Weight};

/// How malformed input is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Malformed numbers count as zero.
    #[default]
    Lenient,
    /// Malformed numbers and negative magnitudes are rejected.
    Strict,
}

impl Mode {
    pub fn from_flag(strict: bool) -> Self {
        if strict {
            Mode::Strict
        } else {
            Mode::Lenient
        }
    }
}

/// Parses a single amount.
pub fn amount(field: &str, input: &str, mode: Mode) -> ValidationResult<f64> {
    match mode {
        Mode::Lenient => Ok(parse_amount(input)),
        Mode::Strict => {
            let value = parse_amount_strict(field, input)?;
            validate_non_negative(field, value)?;
            Ok(value)
        }
    }
}

/// Parses an optional amount; absent means zero.
pub fn optional_amount(field: &str, input: Option<&str>, mode: Mode) -> ValidationResult<f64> {
    input.map_or(Ok(0.0), |s| amount(field, s, mode))
}

/// Parses a `K,P,Y` weight. Missing trailing parts are zero.
pub fn weight(field: &str, input: &str, mode: Mode) -> ValidationResult<Weight> {
    let [kyat, pae, yway] = triple(field, input, mode)?;
    let weight = Weight::new(kyat, pae, yway);

    if mode == Mode::Strict {
        validate_weight(field, &weight)?;
    }

    Ok(weight)
}

/// Parses an optional weight; absent means the zero weight.
pub fn optional_weight(field: &str, input: Option<&str>, mode: Mode) -> ValidationResult<Weight> {
    input.map_or(Ok(Weight::ZERO), |s| weight(field, s, mode))
}

/// Parses an `R,B,P` gem weight. Missing trailing parts are zero.
pub fn gem_units(field: &str, input: &str, mode: Mode) -> ValidationResult<GemWeight> {
    let [ratti, bee, point] = triple(field, input, mode)?;

    if mode == Mode::Strict {
        validate_non_negative(&format!("{field} ratti"), ratti)?;
        validate_non_negative(&format!("{field} bee"), bee)?;
        validate_non_negative(&format!("{field} point"), point)?;
    }

    Ok(GemWeight::new(ratti, bee, point))
}

fn triple(field: &str, input: &str, mode: Mode) -> ValidationResult<[f64; 3]> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();

    if parts.len() > 3 {
        return Err(ValidationError::InvalidNumber {
            field: field.to_string(),
            value: input.trim().to_string(),
        });
    }

    let mut values = [0.0; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = match mode {
            Mode::Lenient => parse_amount(part),
            Mode::Strict => parse_amount_strict(field, part)?,
        };
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_full_triple() {
        let w = weight("weight", "1, 2, 3.5", Mode::Lenient).unwrap();
        assert_eq!(w, Weight::new(1.0, 2.0, 3.5));
    }

    #[test]
    fn test_weight_short_forms() {
        assert_eq!(weight("weight", "2", Mode::Strict).unwrap(), Weight::new(2.0, 0.0, 0.0));
        assert_eq!(weight("weight", "0,17", Mode::Lenient).unwrap(), Weight::new(0.0, 17.0, 0.0));
    }

    #[test]
    fn test_weight_lenient_malformed_is_zero() {
        let w = weight("weight", "1,abc,", Mode::Lenient).unwrap();
        assert_eq!(w, Weight::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_weight_strict_rejects_malformed() {
        assert!(matches!(
            weight("weight", "1,abc,0", Mode::Strict),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(matches!(
            weight("weight", "1,,0", Mode::Strict),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_weight_strict_rejects_negative() {
        let err = weight("waste", "0,-1,0", Mode::Strict).unwrap_err();
        assert_eq!(err.to_string(), "waste pae must not be negative");
        // Lenient keeps the sign; normalization clamps later.
        assert_eq!(weight("waste", "0,-1,0", Mode::Lenient).unwrap().pae, -1.0);
    }

    #[test]
    fn test_too_many_parts() {
        assert!(weight("weight", "1,2,3,4", Mode::Lenient).is_err());
    }

    #[test]
    fn test_amount_modes() {
        assert_eq!(amount("price", "4,250,000", Mode::Strict).unwrap(), 4_250_000.0);
        assert_eq!(amount("price", "oops", Mode::Lenient).unwrap(), 0.0);
        assert!(amount("price", "oops", Mode::Strict).is_err());
        assert!(amount("price", "-5", Mode::Strict).is_err());
        assert_eq!(amount("price", "-5", Mode::Lenient).unwrap(), -5.0);
    }

    #[test]
    fn test_optional_inputs() {
        assert_eq!(optional_amount("fee", None, Mode::Strict).unwrap(), 0.0);
        assert_eq!(optional_weight("waste", None, Mode::Strict).unwrap(), Weight::ZERO);
    }

    #[test]
    fn test_gem_units() {
        assert_eq!(gem_units("units", "2,8,3", Mode::Lenient).unwrap(), GemWeight::new(2.0, 8.0, 3.0));
        assert!(gem_units("units", "2,-8,3", Mode::Strict).is_err());
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(Mode::from_flag(true), Mode::Strict);
        assert_eq!(Mode::from_flag(false), Mode::Lenient);
    }
}
