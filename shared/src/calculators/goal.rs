//! Weight goal projection

use super::{display_energy, require_gender};
use crate::activity::CustomActivity;
use crate::errors::CalcResult;
use crate::goal::{GoalInputs, GoalPlanner, GoalType};
use crate::types::{GoalRequest, GoalResult};
use crate::units::{round_1, round_2, UnitPreferences};
use crate::validation::{require_age, require_measurement, require_timeframe_weeks};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// Project a weight goal starting today
pub fn compute_goal(
    request: &GoalRequest,
    custom_activities: &[CustomActivity],
    prefs: &UnitPreferences,
) -> CalcResult<GoalResult> {
    compute_goal_from(request, custom_activities, prefs, Local::now().date_naive())
}

/// Project a weight goal starting on `start`
pub fn compute_goal_from(
    request: &GoalRequest,
    custom_activities: &[CustomActivity],
    prefs: &UnitPreferences,
    start: NaiveDate,
) -> CalcResult<GoalResult> {
    let current_weight = require_measurement("current_weight", request.current_weight)?;
    let target_weight = require_measurement("target_weight", request.target_weight)?;
    let height = require_measurement("height", request.height)?;
    let age = require_age(request.age)?;
    let gender = require_gender(request.gender)?;
    let timeframe_weeks = require_timeframe_weeks(request.timeframe_weeks)?;
    let activity_factor = request.activity.resolve_factor(custom_activities)?;

    let inputs = GoalInputs {
        current_weight_kg: prefs.weight.to_kg(current_weight),
        target_weight_kg: prefs.weight.to_kg(target_weight),
        height_cm: prefs.height.to_cm(height),
        age_years: age,
        gender,
        activity_factor,
        timeframe_weeks,
    };
    let projection = GoalPlanner::project(&inputs, start);

    let goal_type = GoalType::from_weights(current_weight, target_weight);
    let weekly_rate = GoalPlanner::weekly_rate(current_weight, target_weight, timeframe_weeks);
    let target_calories = prefs.energy.from_kcal(projection.target_calories);
    let warning = GoalPlanner::safety_warning(goal_type, weekly_rate, target_calories, prefs);

    debug!(
        goal = goal_type.label(),
        tdee = projection.tdee,
        daily_deficit = projection.daily_deficit,
        target_calories = projection.target_calories,
        target_date = %projection.target_date,
        "Computed goal projection"
    );
    if let Some(warning) = warning {
        warn!(?warning, weekly_rate, target_calories, "Goal projection raised a safety warning");
    }

    Ok(GoalResult {
        goal_type,
        goal_label: goal_type.label(),
        current_bmr: display_energy(projection.bmr, prefs),
        current_tdee: display_energy(projection.tdee, prefs),
        target_calories: target_calories.round(),
        daily_deficit: display_energy(projection.daily_deficit.abs(), prefs),
        weekly_deficit: display_energy(projection.weekly_deficit, prefs),
        total_change: round_1((current_weight - target_weight).abs()),
        weekly_rate: round_2(weekly_rate),
        timeframe_weeks,
        target_date: projection.target_date,
        warning,
        warning_message: warning.map(|w| w.message()),
        weight_unit: prefs.weight,
        energy_unit: prefs.energy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{ActivityLevel, ActivitySelection};
    use crate::errors::CalcError;
    use crate::goal::SafetyWarning;
    use crate::health_metrics::Gender;
    use crate::units::EnergyUnit;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn request(current: f64, target: f64, weeks: u32) -> GoalRequest {
        GoalRequest {
            current_weight: current,
            target_weight: target,
            height: 170.0,
            age: 30,
            gender: Some(Gender::Male),
            activity: ActivitySelection::Preset(ActivityLevel::ModeratelyActive),
            timeframe_weeks: weeks,
        }
    }

    #[test]
    fn test_loss_goal() {
        let result =
            compute_goal_from(&request(80.0, 75.0, 10), &[], &UnitPreferences::metric(), start())
                .unwrap();
        assert_eq!(result.goal_type, GoalType::Loss);
        assert_eq!(result.goal_label, "Weight Loss");
        assert_eq!(result.current_bmr, 1718.0);
        assert_eq!(result.current_tdee, 2662.0);
        assert_eq!(result.daily_deficit, 550.0);
        assert_eq!(result.weekly_deficit, 3850.0);
        assert_eq!(result.target_calories, 2112.0);
        assert_eq!(result.total_change, 5.0);
        assert_eq!(result.weekly_rate, 0.5);
        assert_eq!(result.target_date, NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
        assert_eq!(result.warning, None);
    }

    #[test]
    fn test_maintenance_goal() {
        let result =
            compute_goal_from(&request(70.0, 70.0, 12), &[], &UnitPreferences::metric(), start())
                .unwrap();
        assert_eq!(result.goal_type, GoalType::Maintain);
        assert_eq!(result.weekly_deficit, 0.0);
        assert_eq!(result.target_calories, result.current_tdee);
    }

    #[test]
    fn test_gain_reports_deficit_magnitude() {
        let result =
            compute_goal_from(&request(70.0, 75.0, 10), &[], &UnitPreferences::metric(), start())
                .unwrap();
        assert_eq!(result.goal_type, GoalType::Gain);
        assert_eq!(result.daily_deficit, 550.0);
        assert_eq!(result.weekly_deficit, -3850.0);
        assert!(result.target_calories > result.current_tdee);
    }

    #[test]
    fn test_aggressive_rate_warning() {
        let result =
            compute_goal_from(&request(90.0, 70.0, 10), &[], &UnitPreferences::metric(), start())
                .unwrap();
        assert_eq!(result.warning, Some(SafetyWarning::AggressiveRate));
        assert!(result.warning_message.unwrap().contains("too aggressive"));
    }

    #[test]
    fn test_imperial_rate_threshold() {
        // 2 lbs/week is under the 2.2 lbs/week limit
        let mut imperial = request(176.0, 156.0, 10);
        imperial.height = 67.0;
        let result =
            compute_goal_from(&imperial, &[], &UnitPreferences::imperial(), start()).unwrap();
        assert_eq!(result.weekly_rate, 2.0);
        assert_eq!(result.warning, None);
        assert_eq!(result.total_change, 20.0);
    }

    #[test]
    fn test_low_calorie_warning_in_kilojoules() {
        let mut small = request(50.0, 45.0, 6);
        small.height = 150.0;
        small.age = 60;
        small.gender = Some(Gender::Female);
        small.activity = ActivitySelection::Preset(ActivityLevel::Sedentary);
        let prefs = UnitPreferences::metric().with_energy(EnergyUnit::Kj);
        let result = compute_goal_from(&small, &[], &prefs, start()).unwrap();
        assert!(result.target_calories < 5000.0);
        assert_eq!(result.warning, Some(SafetyWarning::LowCalories));
    }

    #[test]
    fn test_timeframe_validation() {
        let prefs = UnitPreferences::metric();
        let err = compute_goal_from(&request(80.0, 75.0, 0), &[], &prefs, start()).unwrap_err();
        assert_eq!(err, CalcError::missing("timeframe_weeks"));
        let err = compute_goal_from(&request(80.0, 75.0, 105), &[], &prefs, start()).unwrap_err();
        assert!(!err.is_missing_input());
    }

    #[test]
    fn test_compute_goal_uses_today() {
        let result =
            compute_goal(&request(80.0, 75.0, 1), &[], &UnitPreferences::metric()).unwrap();
        assert!(result.target_date > Local::now().date_naive());
    }
}
