// src/services/scoring.rs
use serde::Serialize;

use super::scenarios::ensure_non_negative;
use crate::error::ScenarioError;

/// Points available per dimension; four dimensions make 100.
const POINTS_PER_DIMENSION: f64 = 25.0;

const GHG_CAP_PCT: f64 = 30.0;
const WATER_CAP_M: f64 = 50.0;
const SOLAR_CAP_MW: f64 = 50.0;
const WASTE_CAP_K: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub ghg: f64,
    pub water: f64,
    pub solar: f64,
    pub waste: f64,
    /// Sum of the four contributions, rounded to 2 decimals.
    pub total: f64,
}

fn contribution(value: f64, cap: f64) -> f64 {
    (value / cap).clamp(0.0, 1.0) * POINTS_PER_DIMENSION
}

// Formatting rounds the exact binary value half-to-even; scaling by 100
// first would not.
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Per-dimension contributions of a combined scenario.
///
/// A negative GHG percentage is a legal scenario (an increase) but earns no
/// points. Negative water, solar or waste inputs are rejected.
pub fn score_breakdown(
    ghg_reduction_pct: f64,
    water_investment_m: f64,
    solar_mw: f64,
    waste_reuse_k: f64,
) -> Result<ScoreBreakdown, ScenarioError> {
    if !ghg_reduction_pct.is_finite() {
        return Err(ScenarioError::non_finite("ghg_reduction_pct", ghg_reduction_pct));
    }
    let water_investment_m = ensure_non_negative("water_investment_m", water_investment_m)?;
    let solar_mw = ensure_non_negative("solar_mw", solar_mw)?;
    let waste_reuse_k = ensure_non_negative("waste_reuse_k", waste_reuse_k)?;

    let ghg = contribution(ghg_reduction_pct, GHG_CAP_PCT);
    let water = contribution(water_investment_m, WATER_CAP_M);
    let solar = contribution(solar_mw, SOLAR_CAP_MW);
    let waste = contribution(waste_reuse_k, WASTE_CAP_K);

    Ok(ScoreBreakdown {
        ghg,
        water,
        solar,
        waste,
        total: round2(ghg + water + solar + waste),
    })
}

/// Combined scenario score in [0, 100], higher is better.
pub fn score(
    ghg_reduction_pct: f64,
    water_investment_m: f64,
    solar_mw: f64,
    waste_reuse_k: f64,
) -> Result<f64, ScenarioError> {
    score_breakdown(ghg_reduction_pct, water_investment_m, solar_mw, waste_reuse_k)
        .map(|breakdown| breakdown.total)
}
