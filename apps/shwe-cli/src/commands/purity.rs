//! # Purity Commands
//!
//! `purity` measures fineness from a refining run; `yield` predicts a
//! refining run from a known fineness.

use serde::Serialize;
use tracing::debug;

use shwe_core::error::ValidationError;
use shwe_core::validation::{validate_density, validate_pae_grade};
use shwe_core::{analyze_purity, expected_yield as core_expected_yield, PurityResult, Weight, YieldBasis, YieldResult};

use super::Context;
use crate::cli::{PurityArgs, YieldArgs};
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurityReport {
    pub scrap: Weight,
    pub pure: Weight,
    pub result: PurityResult,
    pub fineness_percent: f64,
    /// Grade label in the trade's own wording.
    pub grade_label_my: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldReport {
    pub scrap: Weight,
    pub result: YieldResult,
    pub display: String,
}

/// `shwe purity`
pub fn purity(args: &PurityArgs, ctx: &Context<'_>) -> Result<PurityReport, ApiError> {
    let scrap = ctx.weight("scrap", &args.scrap)?.normalize();
    let pure = ctx.weight("pure", &args.pure)?.normalize();

    let result = analyze_purity(&scrap, &pure);
    debug!(pae_grade = result.pae_grade, density = result.density, "purity command");

    Ok(PurityReport {
        scrap,
        pure,
        fineness_percent: result.fineness_percent(),
        grade_label_my: result.grade.label_my(),
        result,
    })
}

/// `shwe yield`
///
/// Lenient mode follows the form's precedence: a density, when given, wins
/// over a pae grade. Strict mode refuses both at once and range-checks the
/// one given.
pub fn expected_yield(args: &YieldArgs, ctx: &Context<'_>) -> Result<YieldReport, ApiError> {
    let scrap = ctx.weight("scrap", &args.scrap)?.normalize();
    let pae = args.pae.as_deref().map(|s| ctx.amount("pae grade", s)).transpose()?;
    let density = args.density.as_deref().map(|s| ctx.amount("density", s)).transpose()?;

    let basis = if ctx.is_strict() {
        let basis = YieldBasis::exclusive(pae, density)?;
        match basis {
            Some(YieldBasis::Pae(p)) => validate_pae_grade(p)?,
            Some(YieldBasis::Density(d)) => validate_density(d)?,
            None => {
                return Err(ValidationError::Required {
                    field: "pae grade or density".to_string(),
                }
                .into())
            }
        }
        basis
    } else {
        if pae.is_some() && density.is_some() {
            debug!("Both pae grade and density given, using density");
        }
        YieldBasis::from_inputs(pae, density)
    };

    let result = core_expected_yield(&scrap, basis, ctx.standard(args.standard));

    Ok(YieldReport {
        scrap,
        display: result.weight.to_string(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::error::ErrorCode;
    use shwe_core::GramStandard;

    fn yield_args(pae: Option<&str>, density: Option<&str>) -> YieldArgs {
        YieldArgs {
            scrap: "2,0,0".to_string(),
            pae: pae.map(str::to_string),
            density: density.map(str::to_string),
            standard: None,
        }
    }

    #[test]
    fn test_purity_report() {
        let config = AppConfig::default();
        let args = PurityArgs {
            scrap: "1,0,0".to_string(),
            pure: "0,15,0".to_string(),
        };
        let report = purity(&args, &Context::new(&config, false)).unwrap();

        assert_eq!(report.result.pae_grade, 15.0);
        assert_eq!(report.result.density, 18.046875);
        assert_eq!(report.result.matched_grade_label, "15 Pae");
        assert_eq!(report.fineness_percent, 93.75);
        assert_eq!(report.grade_label_my, "၁၅ ပဲရည်");
    }

    #[test]
    fn test_purity_zero_scrap() {
        let config = AppConfig::default();
        let args = PurityArgs {
            scrap: "0".to_string(),
            pure: "1".to_string(),
        };
        let report = purity(&args, &Context::new(&config, false)).unwrap();
        assert_eq!(report.result, PurityResult::UNAVAILABLE);
        assert_eq!(report.grade_label_my, "-");
    }

    #[test]
    fn test_yield_by_pae() {
        let config = AppConfig::default();
        let report = expected_yield(&yield_args(Some("12"), None), &Context::new(&config, false)).unwrap();
        assert_eq!(report.result.weight, Weight::new(1.0, 8.0, 0.0));
        assert_eq!(report.result.standard, GramStandard::Old);
        assert_eq!(report.display, "1K 8P 0Y");
    }

    #[test]
    fn test_yield_lenient_density_wins() {
        let config = AppConfig::default();
        let report =
            expected_yield(&yield_args(Some("12"), Some("19.25")), &Context::new(&config, false)).unwrap();
        assert_eq!(report.result.basis, Some(YieldBasis::Density(19.25)));
        assert_eq!(report.result.weight, Weight::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_yield_strict_refuses_both() {
        let config = AppConfig::default();
        let err = expected_yield(&yield_args(Some("12"), Some("19.25")), &Context::new(&config, true)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "pae and density cannot both be given");
    }

    #[test]
    fn test_yield_strict_range_checks() {
        let config = AppConfig::default();
        let ctx = Context::new(&config, true);
        assert!(expected_yield(&yield_args(Some("17"), None), &ctx).is_err());
        assert!(expected_yield(&yield_args(None, Some("20")), &ctx).is_err());
        assert!(expected_yield(&yield_args(None, None), &ctx).is_err());
    }

    #[test]
    fn test_yield_lenient_without_basis_is_zero() {
        let config = AppConfig::default();
        let report = expected_yield(&yield_args(None, None), &Context::new(&config, false)).unwrap();
        assert_eq!(report.result.weight, Weight::ZERO);
        assert!(report.result.basis.is_none());
    }
}
