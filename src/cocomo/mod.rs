//! COCOMO II cost model
//!
//! Pure mapping from aggregate code size to effort, schedule, team
//! size, and cost. Tier selection uses the classic KLOC thresholds;
//! boundaries are closed on the lower tier (exactly 50 KLOC is still
//! Organic, exactly 300 is still Semi-detached).

use crate::config::AnalysisConfig;
use crate::errors::CostwiseError;
use crate::models::{CocomoEstimate, ComplexityTier, ProjectMetrics};

/// Coefficient quadruple for one complexity tier:
/// effort = a * KLOC^b, time = c * effort^d.
#[derive(Debug, Clone, Copy)]
struct Coefficients {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

const ORGANIC: Coefficients = Coefficients { a: 2.4, b: 1.05, c: 2.5, d: 0.38 };
const SEMI_DETACHED: Coefficients = Coefficients { a: 3.0, b: 1.12, c: 2.5, d: 0.35 };
const EMBEDDED: Coefficients = Coefficients { a: 3.6, b: 1.20, c: 2.5, d: 0.32 };

/// KLOC thresholds between tiers.
const ORGANIC_MAX_KLOC: f64 = 50.0;
const SEMI_DETACHED_MAX_KLOC: f64 = 300.0;

/// Maintenance team as a fraction of the development team.
const MAINTENANCE_RATIO: f64 = 0.18;
/// Expansion team as a fraction of the development team.
const EXPANSION_RATIO: f64 = 0.30;

/// Select the complexity tier for a code size.
pub fn tier_for_kloc(kloc: f64) -> ComplexityTier {
    if kloc <= ORGANIC_MAX_KLOC {
        ComplexityTier::Organic
    } else if kloc <= SEMI_DETACHED_MAX_KLOC {
        ComplexityTier::SemiDetached
    } else {
        ComplexityTier::Embedded
    }
}

fn coefficients(tier: ComplexityTier) -> Coefficients {
    match tier {
        ComplexityTier::Organic => ORGANIC,
        ComplexityTier::SemiDetached => SEMI_DETACHED,
        ComplexityTier::Embedded => EMBEDDED,
    }
}

/// Compute the COCOMO II estimate for a scanned project.
///
/// A project with zero code lines yields a degenerate all-zero
/// estimate (tier Organic) so that empty projects can still be
/// reported instead of failing.
pub fn estimate(
    metrics: &ProjectMetrics,
    config: &AnalysisConfig,
) -> Result<CocomoEstimate, CostwiseError> {
    let salary = config.monthly_salary;
    if !salary.is_finite() || salary <= 0.0 {
        return Err(CostwiseError::InvalidSalary(salary));
    }

    let kloc = metrics.code_lines as f64 / 1000.0;
    let tier = tier_for_kloc(kloc);

    if metrics.code_lines == 0 {
        return Ok(CocomoEstimate {
            kloc: 0.0,
            effort_person_months: 0.0,
            time_months: 0.0,
            people_required: 0.0,
            maintenance_people: 0.0,
            expansion_people: 0.0,
            productivity: 0.0,
            cost_estimate: 0.0,
            complexity_level: tier,
        });
    }

    let coef = coefficients(tier);
    let effort = coef.a * kloc.powf(coef.b);
    let time = coef.c * effort.powf(coef.d);
    let people = if time > 0.0 { effort / time } else { 0.0 };
    let productivity = if effort > 0.0 {
        metrics.code_lines as f64 / effort
    } else {
        0.0
    };

    Ok(CocomoEstimate {
        kloc,
        effort_person_months: effort,
        time_months: time,
        people_required: people,
        maintenance_people: people * MAINTENANCE_RATIO,
        expansion_people: people * EXPANSION_RATIO,
        productivity,
        cost_estimate: effort * salary,
        complexity_level: tier,
    })
}
