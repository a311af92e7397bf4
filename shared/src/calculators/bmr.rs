//! Basal Metabolic Rate

use super::{display_energy, require_gender};
use crate::activity::ActivityLevel;
use crate::category::{classify, BMR_CATEGORIES};
use crate::errors::CalcResult;
use crate::health_metrics::calculate_bmr_estimates;
use crate::types::{ActivityCalories, BmrRequest, BmrResult};
use crate::units::UnitPreferences;
use crate::validation::{require_age, require_measurement};
use tracing::debug;

/// Compute all BMR estimates and the daily calories at each activity level
///
/// The category is taken from the Mifflin-St Jeor estimate in kcal. Energy
/// values are returned in the caller's energy unit.
pub fn compute_bmr(request: &BmrRequest, prefs: &UnitPreferences) -> CalcResult<BmrResult> {
    let weight = require_measurement("weight", request.weight)?;
    let height = require_measurement("height", request.height)?;
    let age = require_age(request.age)?;
    let gender = require_gender(request.gender)?;

    let weight_kg = prefs.weight.to_kg(weight);
    let height_cm = prefs.height.to_cm(height);
    let estimates = calculate_bmr_estimates(weight_kg, height_cm, age, gender, request.body_fat);
    let category = classify(estimates.mifflin_st_jeor, &BMR_CATEGORIES);

    let daily_calories_by_activity = ActivityLevel::ALL
        .iter()
        .map(|level| ActivityCalories {
            level: *level,
            label: level.label(),
            factor: level.multiplier(),
            calories: display_energy(estimates.mifflin_st_jeor * level.multiplier(), prefs),
        })
        .collect();

    debug!(
        mifflin_st_jeor = estimates.mifflin_st_jeor,
        harris_benedict = estimates.harris_benedict,
        katch_mcardle = ?estimates.katch_mcardle,
        category = category.label,
        "Computed BMR"
    );

    Ok(BmrResult {
        mifflin_st_jeor: display_energy(estimates.mifflin_st_jeor, prefs),
        harris_benedict: display_energy(estimates.harris_benedict, prefs),
        katch_mcardle: estimates.katch_mcardle.map(|bmr| display_energy(bmr, prefs)),
        category: *category,
        daily_calories_by_activity,
        energy_unit: prefs.energy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::health_metrics::Gender;
    use crate::units::EnergyUnit;

    fn request(body_fat: Option<f64>) -> BmrRequest {
        BmrRequest {
            weight: 70.0,
            height: 170.0,
            age: 30,
            gender: Some(Gender::Male),
            body_fat,
        }
    }

    #[test]
    fn test_metric_bmr() {
        let result = compute_bmr(&request(None), &UnitPreferences::metric()).unwrap();
        assert_eq!(result.mifflin_st_jeor, 1618.0);
        assert_eq!(result.harris_benedict, 1672.0);
        assert_eq!(result.katch_mcardle, None);
        assert_eq!(result.category.label, "Average");
    }

    #[test]
    fn test_daily_calories_by_activity() {
        let result = compute_bmr(&request(None), &UnitPreferences::metric()).unwrap();
        let calories: Vec<f64> = result
            .daily_calories_by_activity
            .iter()
            .map(|row| row.calories)
            .collect();
        assert_eq!(calories, vec![1941.0, 2224.0, 2507.0, 2790.0, 3073.0]);
        assert_eq!(
            result.daily_calories_by_activity[0].label,
            "Sedentary (little/no exercise)"
        );
    }

    #[test]
    fn test_katch_mcardle_only_with_usable_body_fat() {
        let result = compute_bmr(&request(Some(15.0)), &UnitPreferences::metric()).unwrap();
        assert_eq!(result.katch_mcardle, Some(1655.0));

        let result = compute_bmr(&request(Some(55.0)), &UnitPreferences::metric()).unwrap();
        assert_eq!(result.katch_mcardle, None);
        assert_eq!(result.mifflin_st_jeor, 1618.0);
    }

    #[test]
    fn test_kilojoule_output_keeps_kcal_category() {
        let prefs = UnitPreferences::metric().with_energy(EnergyUnit::Kj);
        let result = compute_bmr(&request(None), &prefs).unwrap();
        assert_eq!(result.mifflin_st_jeor, 6768.0);
        assert_eq!(result.category.label, "Average");
        assert_eq!(result.energy_unit, EnergyUnit::Kj);
    }

    #[test]
    fn test_validation() {
        let prefs = UnitPreferences::metric();
        let mut missing_gender = request(None);
        missing_gender.gender = None;
        assert_eq!(compute_bmr(&missing_gender, &prefs), Err(CalcError::missing("gender")));

        let mut too_old = request(None);
        too_old.age = 121;
        assert!(!compute_bmr(&too_old, &prefs).unwrap_err().is_missing_input());
    }
}
