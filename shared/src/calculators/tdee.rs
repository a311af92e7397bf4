//! Total Daily Energy Expenditure

use super::{display_energy, require_gender};
use crate::activity::CustomActivity;
use crate::category::{classify, TDEE_CATEGORIES};
use crate::errors::CalcResult;
use crate::health_metrics::{calculate_bmr_mifflin, calculate_tdee};
use crate::types::{CalorieGuidance, TdeeRequest, TdeeResult};
use crate::units::UnitPreferences;
use crate::validation::{require_age, require_measurement};
use tracing::debug;

/// Daily adjustment for the loss and gain suggestions (about 0.5 kg/week)
pub const GUIDANCE_ADJUSTMENT_KCAL: f64 = 500.0;

/// Compute TDEE from Mifflin-St Jeor BMR and the selected activity
///
/// `custom_activities` is the caller's own list; it is only read when the
/// request selects a custom activity.
pub fn compute_tdee(
    request: &TdeeRequest,
    custom_activities: &[CustomActivity],
    prefs: &UnitPreferences,
) -> CalcResult<TdeeResult> {
    let weight = require_measurement("weight", request.weight)?;
    let height = require_measurement("height", request.height)?;
    let age = require_age(request.age)?;
    let gender = require_gender(request.gender)?;
    let activity_factor = request.activity.resolve_factor(custom_activities)?;

    let bmr = calculate_bmr_mifflin(
        prefs.weight.to_kg(weight),
        prefs.height.to_cm(height),
        age,
        gender,
    );
    let tdee = calculate_tdee(bmr, activity_factor);
    let category = classify(tdee, &TDEE_CATEGORIES);

    debug!(bmr, tdee, activity_factor, category = category.label, "Computed TDEE");

    Ok(TdeeResult {
        bmr: display_energy(bmr, prefs),
        tdee: display_energy(tdee, prefs),
        activity_factor,
        category: *category,
        guidance: CalorieGuidance {
            maintenance: display_energy(tdee, prefs),
            weight_loss: display_energy(tdee - GUIDANCE_ADJUSTMENT_KCAL, prefs),
            weight_gain: display_energy(tdee + GUIDANCE_ADJUSTMENT_KCAL, prefs),
        },
        energy_unit: prefs.energy,
    })
}
