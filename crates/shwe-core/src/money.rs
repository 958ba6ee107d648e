//! # Money Module
//!
//! Display rounding for amounts produced by the engine.
//!
//! ## Unrounded Inside, Rounded At The Edge
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every formula in this crate works on unrounded f64 amounts:           │
//! │                                                                         │
//! │    convert_price(1,000,000, OLD, NEW) = 983,319.2821871612              │
//! │                                                                         │
//! │  Rounding to whole currency units happens ONLY when showing a value:   │
//! │                                                                         │
//! │    round_display(983,319.28…)  = 983,319                                │
//! │    Ks::from_amount(983,319.28…) → "983,319 Ks"                          │
//! │                                                                         │
//! │  Feeding a rounded value back into a formula is the caller's choice.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shwe_core::money::{round_display, Ks};
//!
//! assert_eq!(round_display(121.25), 121);
//! assert_eq!(Ks::from_amount(4_250_000.4).to_string(), "4,250,000 Ks");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Default suffix for formatted amounts.
pub const DEFAULT_CURRENCY_SUFFIX: &str = "Ks";

/// Rounds an amount to whole currency units for display.
///
/// Halves round away from zero. NaN and infinities show as zero.
#[inline]
pub fn round_display(amount: f64) -> i64 {
    if amount.is_finite() {
        amount.round() as i64
    } else {
        0
    }
}

/// Formats an amount as whole units with thousands separators and a suffix.
///
/// ## Example
/// ```rust
/// use shwe_core::money::format_amount;
///
/// assert_eq!(format_amount(983_319.28, "Ks"), "983,319 Ks");
/// assert_eq!(format_amount(-1500.0, "MMK"), "-1,500 MMK");
/// ```
pub fn format_amount(amount: f64, suffix: &str) -> String {
    let whole = round_display(amount);
    let grouped = group_thousands(whole.unsigned_abs());
    let sign = if whole < 0 { "-" } else { "" };

    if suffix.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped} {suffix}")
    }
}

// =============================================================================
// Ks Type
// =============================================================================

/// A display amount in whole kyat currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Ks(i64);

impl Ks {
    /// Rounds an engine amount for display.
    #[inline]
    pub fn from_amount(amount: f64) -> Self {
        Ks(round_display(amount))
    }

    /// Whole units.
    #[inline]
    pub const fn whole(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Ks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.0 as f64, DEFAULT_CURRENCY_SUFFIX))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_display() {
        assert_eq!(round_display(0.0), 0);
        assert_eq!(round_display(121.25), 121);
        assert_eq!(round_display(121.5), 122);
        assert_eq!(round_display(-2.5), -3);
        assert_eq!(round_display(f64::NAN), 0);
        assert_eq!(round_display(f64::INFINITY), 0);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(983_319), "983,319");
        assert_eq!(group_thousands(12_345_678), "12,345,678");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(121.25, "Ks"), "121 Ks");
        assert_eq!(format_amount(1_000_000.0, ""), "1,000,000");
        assert_eq!(format_amount(-0.4, "Ks"), "0 Ks");
    }

    #[test]
    fn test_ks_display() {
        assert_eq!(Ks::from_amount(983_319.28).to_string(), "983,319 Ks");
        assert_eq!(Ks::from_amount(983_319.28).whole(), 983_319);
        assert_eq!(Ks::default().to_string(), "0 Ks");
    }
}
