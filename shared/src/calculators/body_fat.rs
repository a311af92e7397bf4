//! Body fat percentage (US Navy method)

use super::require_gender;
use crate::category::{body_fat_categories, classify};
use crate::errors::CalcResult;
use crate::health_metrics::{calculate_body_fat_navy, Gender};
use crate::types::{BodyFatRequest, BodyFatResult};
use crate::units::{round_1, UnitPreferences};
use crate::validation::{optional_measurement, require_measurement};
use tracing::debug;

/// Estimate body fat from circumferences given in the caller's height unit
pub fn compute_body_fat(
    request: &BodyFatRequest,
    prefs: &UnitPreferences,
) -> CalcResult<BodyFatResult> {
    let gender = require_gender(request.gender)?;
    let height = require_measurement("height", request.height)?;
    let waist = require_measurement("waist", request.waist)?;
    let neck = require_measurement("neck", request.neck)?;
    let hip = match gender {
        Gender::Female => optional_measurement("hip", request.hip)?,
        Gender::Male => None,
    };

    let to_cm = |value: f64| prefs.height.to_cm(value);
    let body_fat = calculate_body_fat_navy(
        gender,
        to_cm(height),
        to_cm(waist),
        to_cm(neck),
        hip.map(to_cm),
    )?;
    let category = classify(body_fat, body_fat_categories(gender));

    debug!(%gender, body_fat, category = category.label, "Computed body fat");

    Ok(BodyFatResult {
        body_fat_percentage: round_1(body_fat),
        category: *category,
        height_unit: prefs.height,
    })
}
