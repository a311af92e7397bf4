//! Ideal body weight

use super::require_gender;
use crate::errors::CalcResult;
use crate::health_metrics::calculate_ideal_weight;
use crate::types::{IdealWeightRequest, IdealWeightResult, WeightRange};
use crate::units::{round_1, UnitPreferences, WeightUnit};
use crate::validation::require_measurement;
use tracing::debug;

/// Margin added around the formula spread, per weight unit
fn range_margin(unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => 5.0,
        WeightUnit::Lbs => 11.0,
    }
}

/// Compute the four ideal-weight formulas, their average and a healthy range
pub fn compute_ideal_weight(
    request: &IdealWeightRequest,
    prefs: &UnitPreferences,
) -> CalcResult<IdealWeightResult> {
    let height = require_measurement("height", request.height)?;
    let gender = require_gender(request.gender)?;

    let estimates_kg = calculate_ideal_weight(prefs.height.to_cm(height), gender);
    let estimates = estimates_kg.map(|kg| prefs.weight.from_kg(kg));
    let margin = range_margin(prefs.weight);

    debug!(%gender, average_kg = estimates_kg.average(), "Computed ideal weight");

    Ok(IdealWeightResult {
        devine: round_1(estimates.devine),
        robinson: round_1(estimates.robinson),
        miller: round_1(estimates.miller),
        hamwi: round_1(estimates.hamwi),
        average: round_1(estimates.average()),
        range: WeightRange {
            min: round_1(estimates.min() - margin),
            max: round_1(estimates.max() + margin),
        },
        weight_unit: prefs.weight,
    })
}
