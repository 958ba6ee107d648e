//! # Weight Module
//!
//! The mixed-radix kyat/pae/yway weight and its conversions.
//!
//! ## The Radix
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   1 kyat  =  16 pae  =  128 yway                                        │
//! │              1 pae   =    8 yway                                        │
//! │                                                                         │
//! │   { kyat: 0, pae: 17, yway: 9 }                                         │
//! │        │                                                                │
//! │        ▼  9 yway  → 1 pae 1 yway                                        │
//! │   { kyat: 0, pae: 18, yway: 1 }                                         │
//! │        │                                                                │
//! │        ▼  18 pae  → 1 kyat 2 pae                                        │
//! │   { kyat: 1, pae: 2,  yway: 1 }                                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Representations
//! A [`Weight`] can be held as the three-unit triple or as a single
//! "decimal kyat". Grams are always derived through decimal kyat and an
//! explicit [`GramStandard`].
//!
//! ## Rounding Policy
//! Any path that builds a weight *from a decimal* (`from_decimal`,
//! `from_grams`, `subtract`, `convert_standard`) rounds yway to
//! [`YWAY_DECIMALS`] places to absorb floating-point noise. `normalize` on raw
//! user input does not round.
//!
//! ## Usage
//! ```rust
//! use shwe_core::weight::Weight;
//! use shwe_core::standard::GramStandard;
//!
//! let w = Weight::new(0.0, 17.0, 9.0).normalize();
//! assert_eq!(w, Weight::new(1.0, 2.0, 1.0));
//!
//! let grams = Weight::new(1.0, 0.0, 0.0).to_grams(GramStandard::Old);
//! assert!((grams - 16.606).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use ts_rs::TS;

use crate::standard::{usable_grams_per_kyat, GramStandard};
use crate::validation::{finite_or_zero, non_negative_or_zero};

// =============================================================================
// Radix Constants
// =============================================================================

/// Pae in one kyat.
pub const PAE_PER_KYAT: f64 = 16.0;

/// Yway in one pae.
pub const YWAY_PER_PAE: f64 = 8.0;

/// Yway in one kyat.
pub const YWAY_PER_KYAT: f64 = PAE_PER_KYAT * YWAY_PER_PAE;

/// Decimal places kept on yway when a weight is rebuilt from a decimal.
pub const YWAY_DECIMALS: i32 = 3;

// =============================================================================
// Weight Type
// =============================================================================

/// A gold weight in kyat, pae and yway.
///
/// Fields are public and may hold anything a form can produce: fractions,
/// overflowing pae/yway, negatives or NaN. Call [`Weight::normalize`] to get
/// the canonical form:
///
/// - `kyat >= 0`
/// - `0 <= pae < 16`
/// - `0 <= yway < 8`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Weight {
    pub kyat: f64,
    pub pae: f64,
    pub yway: f64,
}

impl Weight {
    /// The zero weight.
    pub const ZERO: Weight = Weight::new(0.0, 0.0, 0.0);

    /// Creates a weight from raw fields. Nothing is normalized.
    #[inline]
    pub const fn new(kyat: f64, pae: f64, yway: f64) -> Self {
        Weight { kyat, pae, yway }
    }

    /// Carries yway overflow into pae and pae overflow into kyat.
    ///
    /// Non-finite fields count as zero. A field that is still negative after
    /// carrying is clamped to zero; no borrowing happens across units.
    /// Idempotent: `w.normalize().normalize() == w.normalize()`.
    ///
    /// ## Example
    /// ```rust
    /// use shwe_core::weight::Weight;
    ///
    /// assert_eq!(Weight::new(0.0, 17.0, 9.0).normalize(), Weight::new(1.0, 2.0, 1.0));
    /// assert_eq!(Weight::new(2.0, -3.0, 4.0).normalize(), Weight::new(2.0, 0.0, 4.0));
    /// ```
    pub fn normalize(&self) -> Weight {
        let mut kyat = finite_or_zero(self.kyat);
        let mut pae = finite_or_zero(self.pae);
        let mut yway = finite_or_zero(self.yway);

        if yway >= YWAY_PER_PAE {
            pae += (yway / YWAY_PER_PAE).floor();
            yway %= YWAY_PER_PAE;
        } else if yway < 0.0 {
            yway = 0.0;
        }

        if pae >= PAE_PER_KYAT {
            kyat += (pae / PAE_PER_KYAT).floor();
            pae %= PAE_PER_KYAT;
        } else if pae < 0.0 {
            pae = 0.0;
        }

        // A huge pae carry can overflow kyat to infinity.
        Weight {
            kyat: finite_or_zero(kyat).max(0.0),
            pae: pae.max(0.0),
            yway: yway.max(0.0),
        }
    }

    /// Checks the canonical-form bounds.
    pub fn is_normalized(&self) -> bool {
        self.kyat >= 0.0
            && (0.0..PAE_PER_KYAT).contains(&self.pae)
            && (0.0..YWAY_PER_PAE).contains(&self.yway)
    }

    /// The weight as decimal kyat: `kyat + (pae + yway / 8) / 16`.
    ///
    /// Computed on the normalized weight, so negative fields never leak into
    /// the result.
    ///
    /// ## Example
    /// ```rust
    /// use shwe_core::weight::Weight;
    ///
    /// assert_eq!(Weight::new(1.0, 8.0, 4.0).to_decimal(), 1.53125);
    /// ```
    pub fn to_decimal(&self) -> f64 {
        let w = self.normalize();
        w.kyat + (w.pae + w.yway / YWAY_PER_PAE) / PAE_PER_KYAT
    }

    /// Rebuilds a normalized weight from decimal kyat.
    ///
    /// `kyat = floor(decimal)`, the remainder goes to whole pae, and what is
    /// left becomes yway rounded to three places. Negative and non-finite
    /// input gives the zero weight.
    ///
    /// ## Example
    /// ```rust
    /// use shwe_core::weight::Weight;
    ///
    /// assert_eq!(Weight::from_decimal(1.53125), Weight::new(1.0, 8.0, 4.0));
    /// assert_eq!(Weight::from_decimal(-2.0), Weight::ZERO);
    /// ```
    pub fn from_decimal(decimal: f64) -> Weight {
        let decimal = non_negative_or_zero(decimal);

        let kyat = decimal.floor();
        let remaining_pae = (decimal - kyat) * PAE_PER_KYAT;
        let pae = remaining_pae.floor();
        let yway = round_yway((remaining_pae - pae) * YWAY_PER_PAE);

        Weight { kyat, pae, yway }.normalize()
    }

    /// Grams under the given standard.
    #[inline]
    pub fn to_grams(&self, standard: GramStandard) -> f64 {
        self.to_decimal() * standard.grams_per_kyat()
    }

    /// Rebuilds a normalized weight from grams under the given standard.
    ///
    /// ## Example
    /// ```rust
    /// use shwe_core::weight::Weight;
    /// use shwe_core::standard::GramStandard;
    ///
    /// let w = Weight::from_grams(16.329, GramStandard::New);
    /// assert_eq!(w, Weight::new(1.0, 0.0, 0.0));
    /// ```
    #[inline]
    pub fn from_grams(grams: f64, standard: GramStandard) -> Weight {
        Weight::from_grams_per_kyat(grams, standard.grams_per_kyat())
    }

    /// Rebuilds a weight from grams with an arbitrary grams-per-kyat constant.
    ///
    /// A zero, negative or non-finite constant cannot be divided by and gives
    /// the zero weight.
    pub fn from_grams_per_kyat(grams: f64, grams_per_kyat: f64) -> Weight {
        match usable_grams_per_kyat(grams_per_kyat) {
            Some(per_kyat) => Weight::from_decimal(grams / per_kyat),
            None => {
                debug!(grams, grams_per_kyat, "Unusable gram constant, yielding zero weight");
                Weight::ZERO
            }
        }
    }

    /// Net weight: `self - other`, floored at zero.
    ///
    /// A deduction larger than the gross weight is discarded, never carried
    /// as a negative.
    ///
    /// ## Example
    /// ```rust
    /// use shwe_core::weight::Weight;
    ///
    /// let gross = Weight::new(2.0, 0.0, 0.0);
    /// let stones = Weight::new(0.0, 3.0, 4.0);
    /// assert_eq!(gross.subtract(&stones), Weight::new(1.0, 12.0, 4.0));
    /// assert_eq!(stones.subtract(&gross), Weight::ZERO);
    /// ```
    pub fn subtract(&self, other: &Weight) -> Weight {
        let diff = (self.to_decimal() - other.to_decimal()).max(0.0);
        Weight::from_decimal(diff)
    }

    /// Re-expresses the same gram mass under another standard.
    ///
    /// This is what switching the active standard on a filled-in form does:
    /// the metal on the scale stays the same, its kyat reading changes.
    ///
    /// ## Example
    /// ```rust
    /// use shwe_core::weight::Weight;
    /// use shwe_core::standard::GramStandard;
    ///
    /// let old = Weight::new(1.0, 0.0, 0.0);
    /// let new = old.convert_standard(GramStandard::Old, GramStandard::New);
    /// assert!(new.to_decimal() > old.to_decimal());
    /// ```
    pub fn convert_standard(&self, from: GramStandard, to: GramStandard) -> Weight {
        if from == to {
            return Weight::from_decimal(self.to_decimal());
        }
        Weight::from_grams(self.to_grams(from), to)
    }
}

/// Shows the weight as `1K 2P 3Y`.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K {}P {}Y", self.kyat, self.pae, self.yway)
    }
}

// =============================================================================
// Helpers
// =============================================================================

#[inline]
fn round_yway(yway: f64) -> f64 {
    let scale = 10f64.powi(YWAY_DECIMALS);
    (yway * scale).round() / scale
}

// =============================================================================
// Unit Tests
// =============================================================================
