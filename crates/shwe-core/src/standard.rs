//! # Gram Standards
//!
//! The two grams-per-kyat constants in concurrent use in the market.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1 kyat = 16.606 g   (OLD, traditional academy standard)               │
//! │  1 kyat = 16.329 g   (NEW, modern standard)                            │
//! │                                                                         │
//! │  The same piece of gold is therefore "heavier" in kyat under NEW,      │
//! │  and a per-kyat price quoted under OLD is higher than under NEW.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no "current" standard anywhere in this crate. Every gram
//! conversion takes a [`GramStandard`] argument.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

/// Grams in one kyat under the traditional (old) standard.
pub const OLD_GRAMS_PER_KYAT: f64 = 16.606;

/// Grams in one kyat under the modern (new) standard.
pub const NEW_GRAMS_PER_KYAT: f64 = 16.329;

/// Which grams-per-kyat constant a conversion uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GramStandard {
    /// 16.606 g per kyat.
    #[default]
    Old,
    /// 16.329 g per kyat.
    New,
}

impl GramStandard {
    /// Both standards, old first.
    pub const ALL: [GramStandard; 2] = [GramStandard::Old, GramStandard::New];

    /// Grams in one kyat under this standard.
    #[inline]
    pub const fn grams_per_kyat(self) -> f64 {
        match self {
            GramStandard::Old => OLD_GRAMS_PER_KYAT,
            GramStandard::New => NEW_GRAMS_PER_KYAT,
        }
    }

    /// The other standard.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            GramStandard::Old => GramStandard::New,
            GramStandard::New => GramStandard::Old,
        }
    }

    /// Short lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            GramStandard::Old => "old",
            GramStandard::New => "new",
        }
    }
}

impl fmt::Display for GramStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} g/kyat)", self.as_str(), self.grams_per_kyat())
    }
}

impl FromStr for GramStandard {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "old" => Ok(GramStandard::Old),
            "new" => Ok(GramStandard::New),
            other => Err(ValidationError::UnknownStandard(other.to_string())),
        }
    }
}

/// Returns `grams_per_kyat` when it can be divided by, `None` otherwise.
///
/// Zero, negative and non-finite constants are all unusable.
#[inline]
pub(crate) fn usable_grams_per_kyat(grams_per_kyat: f64) -> Option<f64> {
    (grams_per_kyat.is_finite() && grams_per_kyat > 0.0).then_some(grams_per_kyat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(GramStandard::Old.grams_per_kyat(), 16.606);
        assert_eq!(GramStandard::New.grams_per_kyat(), 16.329);
        assert_eq!(GramStandard::default(), GramStandard::Old);
    }

    #[test]
    fn test_other() {
        assert_eq!(GramStandard::Old.other(), GramStandard::New);
        assert_eq!(GramStandard::New.other(), GramStandard::Old);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("old".parse::<GramStandard>().unwrap(), GramStandard::Old);
        assert_eq!(" NEW ".parse::<GramStandard>().unwrap(), GramStandard::New);
        assert!(matches!(
            "academy".parse::<GramStandard>(),
            Err(ValidationError::UnknownStandard(_))
        ));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&GramStandard::Old).unwrap(), "\"OLD\"");
        let parsed: GramStandard = serde_json::from_str("\"NEW\"").unwrap();
        assert_eq!(parsed, GramStandard::New);
    }

    #[test]
    fn test_usable_grams_per_kyat() {
        assert_eq!(usable_grams_per_kyat(16.606), Some(16.606));
        assert_eq!(usable_grams_per_kyat(0.0), None);
        assert_eq!(usable_grams_per_kyat(-1.0), None);
        assert_eq!(usable_grams_per_kyat(f64::NAN), None);
        assert_eq!(usable_grams_per_kyat(f64::INFINITY), None);
    }
}
