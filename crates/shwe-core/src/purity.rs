//! # Purity Module
//!
//! Fineness and yield analysis for refining scrap gold.
//!
//! ## Two Directions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FORWARD  (analyze_purity)                                              │
//! │                                                                         │
//! │    scrap weight ─┐                                                      │
//! │                  ├─► ratio = pure / scrap ─┬─► pae grade = ratio × 16   │
//! │    pure weight ──┘                         └─► density = ratio × 19.25  │
//! │                                                      │                  │
//! │                                                      ▼                  │
//! │                                           PURITY_TABLE lookup           │
//! │                                                                         │
//! │  INVERSE  (expected_yield)                                              │
//! │                                                                         │
//! │    scrap weight + pae grade   ─► pure = pae / 16      × scrap           │
//! │    scrap weight + density     ─► pure = density/19.25 × scrap           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shwe_core::purity::analyze_purity;
//! use shwe_core::weight::Weight;
//!
//! let r = analyze_purity(&Weight::new(1.0, 0.0, 0.0), &Weight::new(0.0, 15.0, 0.0));
//! assert_eq!(r.pae_grade, 15.0);
//! assert_eq!(r.density, 18.046875);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::standard::GramStandard;
use crate::validation::{non_negative_or_zero, ValidationResult};
use crate::weight::Weight;

// =============================================================================
// Constants
// =============================================================================

/// Pae grade of fully fine gold.
pub const FULL_FINENESS_PAE: f64 = 16.0;

/// Density (g/cm³) taken for fully fine gold.
pub const PURE_GOLD_DENSITY: f64 = 19.25;

/// Highest density the purity table describes.
pub const MAX_GOLD_DENSITY: f64 = 19.30;

// =============================================================================
// Purity Table
// =============================================================================

/// One row of the density grading table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurityGrade {
    #[ts(type = "string")]
    pub label: &'static str,
    /// Label as written in the trade.
    #[ts(type = "string")]
    pub label_my: &'static str,
    /// Lowest density that still earns this grade.
    pub min_density: f64,
    /// Top of the typical density range.
    pub max_density: f64,
    /// Gold content as usually quoted.
    #[ts(type = "string")]
    pub fineness: &'static str,
}

/// Grades ordered from densest to lightest. The first row whose
/// `min_density` the measured density meets wins.
pub static PURITY_TABLE: [PurityGrade; 8] = [
    PurityGrade {
        label: "16 Pae (pure)",
        label_my: "၁၆ ပဲရည် (အခေါက်)",
        min_density: 19.25,
        max_density: 19.30,
        fineness: "99.9% - 100%",
    },
    PurityGrade {
        label: "15 Pae 2 Yway (academy)",
        label_my: "၁၅ ပဲ ၂ ရွေး (အကယ်ဒမီ)",
        min_density: 18.50,
        max_density: 18.70,
        fineness: "95.3%",
    },
    PurityGrade {
        label: "15 Pae",
        label_my: "၁၅ ပဲရည်",
        min_density: 17.80,
        max_density: 18.00,
        fineness: "93.75%",
    },
    PurityGrade {
        label: "14 Pae",
        label_my: "၁၄ ပဲရည်",
        min_density: 16.50,
        max_density: 16.80,
        fineness: "87.5%",
    },
    PurityGrade {
        label: "13 Pae",
        label_my: "၁၃ ပဲရည်",
        min_density: 15.40,
        max_density: 15.70,
        fineness: "81.25%",
    },
    PurityGrade {
        label: "12 Pae (75% gold)",
        label_my: "၁၂ ပဲရည် (၇၅% ရွှေ)",
        min_density: 14.50,
        max_density: 14.80,
        fineness: "75.0%",
    },
    PurityGrade {
        label: "11 Pae",
        label_my: "၁၁ ပဲရည်",
        min_density: 13.60,
        max_density: 13.90,
        fineness: "68.75%",
    },
    PurityGrade {
        label: "10 Pae",
        label_my: "၁၀ ပဲရည်",
        min_density: 12.80,
        max_density: 13.10,
        fineness: "62.5%",
    },
];

/// Outcome of the table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GradeMatch {
    /// Scrap weight was zero; nothing was measured.
    Unavailable,
    /// Lighter than the lowest table row.
    BelowScale,
    /// Matched a table row.
    Grade(&'static PurityGrade),
}

impl GradeMatch {
    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            GradeMatch::Unavailable => "-",
            GradeMatch::BelowScale => "Low grade",
            GradeMatch::Grade(grade) => grade.label,
        }
    }

    /// Label for display, in the trade's own wording.
    pub fn label_my(&self) -> &'static str {
        match self {
            GradeMatch::Unavailable => "-",
            GradeMatch::BelowScale => "အရည်အသွေးနိမ့်",
            GradeMatch::Grade(grade) => grade.label_my,
        }
    }
}

/// Looks up the grade for a density. Rows are checked densest first, so a
/// density sitting exactly on a boundary gets the finer grade.
pub fn grade_for_density(density: f64) -> GradeMatch {
    PURITY_TABLE
        .iter()
        .find(|grade| density >= grade.min_density)
        .map_or(GradeMatch::BelowScale, GradeMatch::Grade)
}

// =============================================================================
// Forward: Purity From Two Samples
// =============================================================================

/// Fineness measured from a scrap sample and the pure gold refined from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurityResult {
    /// `pure / scrap` in decimal kyat.
    pub ratio: f64,
    /// Fineness on the 0–16 pae scale.
    pub pae_grade: f64,
    /// Equivalent density in g/cm³.
    pub density: f64,
    pub grade: GradeMatch,
    #[ts(type = "string")]
    pub matched_grade_label: &'static str,
}

impl PurityResult {
    /// The degenerate result for a zero scrap weight.
    pub const UNAVAILABLE: PurityResult = PurityResult {
        ratio: 0.0,
        pae_grade: 0.0,
        density: 0.0,
        grade: GradeMatch::Unavailable,
        matched_grade_label: "-",
    };

    /// Gold content as a percentage.
    pub fn fineness_percent(&self) -> f64 {
        self.pae_grade / FULL_FINENESS_PAE * 100.0
    }
}

/// Measures fineness from the weight before (`scrap`) and after (`pure`)
/// refining.
///
/// A zero scrap weight gives [`PurityResult::UNAVAILABLE`] instead of
/// dividing by zero.
pub fn analyze_purity(scrap: &Weight, pure: &Weight) -> PurityResult {
    let scrap_decimal = scrap.to_decimal();
    let pure_decimal = pure.to_decimal();

    if scrap_decimal <= 0.0 {
        debug!(pure_decimal, "Zero scrap weight, purity unavailable");
        return PurityResult::UNAVAILABLE;
    }

    let ratio = pure_decimal / scrap_decimal;
    let density = ratio * PURE_GOLD_DENSITY;
    let grade = grade_for_density(density);

    PurityResult {
        ratio,
        pae_grade: ratio * FULL_FINENESS_PAE,
        density,
        grade,
        matched_grade_label: grade.label(),
    }
}

// =============================================================================
// Inverse: Expected Yield
// =============================================================================

/// What the scrap's purity is known by. One or the other, never both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "method", content = "value", rename_all = "snake_case")]
pub enum YieldBasis {
    /// Known pae grade (0–16).
    Pae(f64),
    /// Measured density in g/cm³.
    Density(f64),
}

impl YieldBasis {
    /// Picks a basis from two optional form fields.
    ///
    /// The pae field is used only while the density field is empty; once a
    /// density is entered it takes over.
    pub fn from_inputs(pae: Option<f64>, density: Option<f64>) -> Option<YieldBasis> {
        match (pae, density) {
            (_, Some(d)) => Some(YieldBasis::Density(d)),
            (Some(p), None) => Some(YieldBasis::Pae(p)),
            (None, None) => None,
        }
    }

    /// Like [`YieldBasis::from_inputs`] but refuses both fields at once.
    pub fn exclusive(pae: Option<f64>, density: Option<f64>) -> ValidationResult<Option<YieldBasis>> {
        if pae.is_some() && density.is_some() {
            return Err(ValidationError::Conflicting {
                first: "pae".to_string(),
                second: "density".to_string(),
            });
        }
        Ok(YieldBasis::from_inputs(pae, density))
    }

    /// Share of the scrap expected to come out as pure gold.
    pub fn pure_fraction(&self) -> f64 {
        match *self {
            YieldBasis::Pae(pae) => non_negative_or_zero(pae) / FULL_FINENESS_PAE,
            YieldBasis::Density(density) => non_negative_or_zero(density) / PURE_GOLD_DENSITY,
        }
    }
}

/// Expected pure gold from refining a scrap weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct YieldResult {
    pub basis: Option<YieldBasis>,
    pub standard: GramStandard,
    pub weight: Weight,
    pub decimal_kyat: f64,
    pub grams: f64,
}

/// Expected pure yield of `scrap` given its grade or density.
///
/// No basis (both form fields empty) yields zero.
///
/// ## Example
/// ```rust
/// use shwe_core::purity::{expected_yield, YieldBasis};
/// use shwe_core::standard::GramStandard;
/// use shwe_core::weight::Weight;
///
/// let scrap = Weight::new(2.0, 0.0, 0.0);
/// let r = expected_yield(&scrap, Some(YieldBasis::Pae(12.0)), GramStandard::Old);
/// assert_eq!(r.weight, Weight::new(1.0, 8.0, 0.0));
/// ```
pub fn expected_yield(
    scrap: &Weight,
    basis: Option<YieldBasis>,
    standard: GramStandard,
) -> YieldResult {
    let fraction = basis.map_or(0.0, |b| b.pure_fraction());
    let decimal_kyat = fraction * scrap.to_decimal();

    YieldResult {
        basis,
        standard,
        weight: Weight::from_decimal(decimal_kyat),
        decimal_kyat,
        grams: decimal_kyat * standard.grams_per_kyat(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
