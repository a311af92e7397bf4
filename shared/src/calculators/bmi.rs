//! Body Mass Index

use crate::category::{classify, normal_bmi_range, BMI_CATEGORIES};
use crate::errors::CalcResult;
use crate::health_metrics::{calculate_bmi, distance_from_range, healthy_weight_range_kg};
use crate::types::{BmiRequest, BmiResult, WeightRange};
use crate::units::{round_1, UnitPreferences};
use crate::validation::require_measurement;
use tracing::debug;

/// Compute BMI, its category and the healthy weight range for the height
pub fn compute_bmi(request: &BmiRequest, prefs: &UnitPreferences) -> CalcResult<BmiResult> {
    let weight = require_measurement("weight", request.weight)?;
    let height = require_measurement("height", request.height)?;

    let weight_kg = prefs.weight.to_kg(weight);
    let height_cm = prefs.height.to_cm(height);
    let bmi = calculate_bmi(weight_kg, height_cm);
    let category = classify(bmi, &BMI_CATEGORIES);

    let normal = normal_bmi_range();
    let (min_kg, max_kg) = healthy_weight_range_kg(height_cm, normal.min, normal.max);
    let healthy = (prefs.weight.from_kg(min_kg), prefs.weight.from_kg(max_kg));

    debug!(bmi, category = category.label, "Computed BMI");

    Ok(BmiResult {
        bmi: round_1(bmi),
        category: *category,
        healthy_range: WeightRange {
            min: round_1(healthy.0),
            max: round_1(healthy.1),
        },
        distance_from_healthy: round_1(distance_from_range(weight, healthy)),
        weight_unit: prefs.weight,
    })
}
