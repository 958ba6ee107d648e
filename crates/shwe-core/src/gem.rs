//! # Gem Module
//!
//! Carat and the ratti/bee/point gem-weight system.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   1 carat = 1.1 ratti                                                   │
//! │   1 ratti = 20 bee  = 160 point                                         │
//! │   1 bee   =  8 point                                                    │
//! │                                                                         │
//! │   2.2 ct ─► 2.42 ratti ─► 2 ratti + 0.42 × 160 = 67.2 point             │
//! │                           67.2 / 8 = 8 bee, 67.2 % 8 = 3.2 ≈ 3 point    │
//! │                        ─► (2 ratti, 8 bee, 3 point)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Points are whole numbers: converting carat to units rounds to the nearest
//! point, so carat → units → carat is exact only to within half a point.
//! Units → carat → units is exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::{finite_or_zero, non_negative_or_zero};

/// Ratti in one carat.
pub const RATTI_PER_CARAT: f64 = 1.1;

/// Bee in one ratti.
pub const BEE_PER_RATTI: f64 = 20.0;

/// Points in one bee.
pub const POINT_PER_BEE: f64 = 8.0;

/// Points in one ratti.
pub const POINT_PER_RATTI: f64 = BEE_PER_RATTI * POINT_PER_BEE;

// =============================================================================
// Gem Weight
// =============================================================================

/// A gem weight in ratti, bee and point.
///
/// Canonical form: `ratti >= 0`, `0 <= bee < 20`, `0 <= point < 8`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GemWeight {
    pub ratti: f64,
    pub bee: f64,
    pub point: f64,
}

impl GemWeight {
    pub const ZERO: GemWeight = GemWeight::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(ratti: f64, bee: f64, point: f64) -> Self {
        GemWeight { ratti, bee, point }
    }

    /// Carries point overflow into bee and bee overflow into ratti, clamping
    /// negative and malformed fields to zero.
    pub fn normalize(&self) -> GemWeight {
        let mut ratti = non_negative_or_zero(self.ratti);
        let mut bee = non_negative_or_zero(self.bee);
        let mut point = non_negative_or_zero(self.point);

        if point >= POINT_PER_BEE {
            bee += (point / POINT_PER_BEE).floor();
            point %= POINT_PER_BEE;
        }

        if bee >= BEE_PER_RATTI {
            ratti += (bee / BEE_PER_RATTI).floor();
            bee %= BEE_PER_RATTI;
        }

        GemWeight { ratti, bee, point }
    }

    /// Total weight in ratti: `ratti + bee / 20 + point / 160`.
    pub fn total_ratti(&self) -> f64 {
        let w = self.normalize();
        w.ratti + w.bee / BEE_PER_RATTI + w.point / POINT_PER_RATTI
    }

    /// Total weight in carat.
    #[inline]
    pub fn to_carat(&self) -> f64 {
        self.total_ratti() / RATTI_PER_CARAT
    }
}

/// Shows the weight as `2R 8B 3P`.
impl fmt::Display for GemWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}R {}B {}P", self.ratti, self.bee, self.point)
    }
}

/// Splits a carat weight into ratti, bee and whole points.
///
/// ## Example
/// ```rust
/// use shwe_core::gem::{carat_to_units, GemWeight};
///
/// assert_eq!(carat_to_units(2.2), GemWeight::new(2.0, 8.0, 3.0));
/// ```
pub fn carat_to_units(carat: f64) -> GemWeight {
    let total_ratti = non_negative_or_zero(carat) * RATTI_PER_CARAT;

    let ratti = total_ratti.floor();
    let points = (total_ratti - ratti) * POINT_PER_RATTI;
    let bee = (points / POINT_PER_BEE).floor();
    let point = (points % POINT_PER_BEE).round();

    // A point that rounds up to 8 carries into bee.
    GemWeight { ratti, bee, point }.normalize()
}

/// Carat weight of a ratti/bee/point triple.
///
/// ## Example
/// ```rust
/// use shwe_core::gem::units_to_carat;
///
/// assert!((units_to_carat(11.0, 0.0, 0.0) - 10.0).abs() < 1e-9);
/// ```
#[inline]
pub fn units_to_carat(ratti: f64, bee: f64, point: f64) -> f64 {
    GemWeight::new(ratti, bee, point).to_carat()
}

// =============================================================================
// Pricing
// =============================================================================

/// Which unit a gem price is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum GemPriceUnit {
    #[default]
    Carat,
    Ratti,
}

impl FromStr for GemPriceUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "carat" | "ct" => Ok(GemPriceUnit::Carat),
            "ratti" | "r" => Ok(GemPriceUnit::Ratti),
            other => Err(ValidationError::UnknownPriceUnit(other.to_string())),
        }
    }
}

/// A price for one unit of gem weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GemQuote {
    pub price: f64,
    pub unit: GemPriceUnit,
}

impl GemQuote {
    #[inline]
    pub const fn new(price: f64, unit: GemPriceUnit) -> Self {
        GemQuote { price, unit }
    }

    /// Total for a weight given in carat.
    ///
    /// A zero, negative or malformed price totals zero.
    pub fn total_for_carat(&self, carat: f64) -> f64 {
        let carat = non_negative_or_zero(carat);
        match self.unit {
            GemPriceUnit::Carat => self.usable_price() * carat,
            GemPriceUnit::Ratti => self.usable_price() * carat * RATTI_PER_CARAT,
        }
    }

    /// Total for a weight given in ratti/bee/point.
    pub fn total_for_units(&self, units: &GemWeight) -> f64 {
        match self.unit {
            GemPriceUnit::Carat => self.usable_price() * units.to_carat(),
            GemPriceUnit::Ratti => self.usable_price() * units.total_ratti(),
        }
    }

    /// The same price quoted per the other unit. Unrounded.
    ///
    /// ## Example
    /// ```rust
    /// use shwe_core::gem::{GemPriceUnit, GemQuote};
    ///
    /// let per_ratti = GemQuote::new(1_100_000.0, GemPriceUnit::Carat).equivalent();
    /// assert_eq!(per_ratti.unit, GemPriceUnit::Ratti);
    /// assert!((per_ratti.price - 1_000_000.0).abs() < 1e-6);
    /// ```
    pub fn equivalent(&self) -> GemQuote {
        let price = finite_or_zero(self.price);
        match self.unit {
            GemPriceUnit::Carat => GemQuote::new(price / RATTI_PER_CARAT, GemPriceUnit::Ratti),
            GemPriceUnit::Ratti => GemQuote::new(price * RATTI_PER_CARAT, GemPriceUnit::Carat),
        }
    }

    #[inline]
    fn usable_price(&self) -> f64 {
        non_negative_or_zero(self.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
