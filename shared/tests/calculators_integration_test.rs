//! Integration tests for the calculator facades

mod common;

use chrono::NaiveDate;
use common::{body_fat_request, both_unit_systems, TestPerson};
use fitness_calculator_shared::{
    compute_bmi, compute_bmr, compute_body_fat, compute_goal_from, compute_ideal_weight,
    compute_one_rm, compute_tdee, ActivityLevel, ActivitySelection, BmiRequest, CalcError,
    CustomActivityRegistry, EnergyUnit, Gender, GoalType, IdealWeightResult, OneRepMaxRequest,
    SafetyWarning, UnitPreferences, WeightUnit,
};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

#[test]
fn test_bmi_agrees_across_unit_systems() {
    let person = TestPerson::reference();
    for prefs in both_unit_systems() {
        let result = compute_bmi(&person.bmi_request(&prefs), &prefs).unwrap();
        assert_eq!(result.bmi, 24.2, "BMI for {:?}", prefs);
        assert_eq!(result.category.label, "Normal Weight");
        assert_eq!(result.distance_from_healthy, 0.0);
        assert_eq!(result.weight_unit, prefs.weight);
    }
}

#[test]
fn test_bmi_category_boundaries() {
    let prefs = UnitPreferences::metric();
    // 18.5 and 18.4 kg/m² at 1 m tall
    let normal = compute_bmi(&BmiRequest { weight: 18.5, height: 100.0 }, &prefs).unwrap();
    assert_eq!(normal.category.label, "Normal Weight");
    let under = compute_bmi(&BmiRequest { weight: 18.4, height: 100.0 }, &prefs).unwrap();
    assert_eq!(under.category.label, "Underweight");
    assert!(under.distance_from_healthy < 0.0);
}

#[test]
fn test_bmr_mifflin_reference_value() {
    let person = TestPerson::reference();
    let prefs = UnitPreferences::metric();
    let result = compute_bmr(&person.bmr_request(&prefs), &prefs).unwrap();
    // 10·70 + 6.25·170 − 5·30 + 5
    assert_eq!(result.mifflin_st_jeor, 1618.0);
    assert_eq!(result.category.label, "Average");
    assert_eq!(result.daily_calories_by_activity.len(), 5);
}

#[test]
fn test_bmr_agrees_across_unit_systems() {
    let person = TestPerson::reference();
    let metric = UnitPreferences::metric();
    let imperial = UnitPreferences::imperial();
    let a = compute_bmr(&person.bmr_request(&metric), &metric).unwrap();
    let b = compute_bmr(&person.bmr_request(&imperial), &imperial).unwrap();
    assert!((a.mifflin_st_jeor - b.mifflin_st_jeor).abs() <= 1.0);
    assert!((a.harris_benedict - b.harris_benedict).abs() <= 1.0);
    assert_eq!(a.category, b.category);
}

#[test]
fn test_tdee_with_caller_owned_custom_activity() {
    let person = TestPerson::reference();
    let prefs = UnitPreferences::metric();
    let mut registry = CustomActivityRegistry::new();
    let id = registry.add("Warehouse shifts", 1.65).unwrap().id.clone();

    let mut request = person.tdee_request(&prefs, ActivityLevel::Sedentary);
    request.activity = ActivitySelection::Custom { custom: id.clone() };
    let custom = compute_tdee(&request, registry.as_slice(), &prefs).unwrap();
    assert_eq!(custom.activity_factor, 1.65);

    registry.remove(&id);
    let fallback = compute_tdee(&request, registry.as_slice(), &prefs).unwrap();
    assert_eq!(fallback.activity_factor, 1.2);
}

#[test]
fn test_tdee_energy_units() {
    let person = TestPerson::reference();
    let kcal = UnitPreferences::metric();
    let kj = UnitPreferences::metric().with_energy(EnergyUnit::Kj);
    let a = compute_tdee(
        &person.tdee_request(&kcal, ActivityLevel::LightlyActive),
        &[],
        &kcal,
    )
    .unwrap();
    let b =
        compute_tdee(&person.tdee_request(&kj, ActivityLevel::LightlyActive), &[], &kj).unwrap();
    assert!((a.tdee * 4.184 - b.tdee).abs() <= 3.0);
    assert_eq!(a.category, b.category);
    assert_eq!(b.energy_unit, EnergyUnit::Kj);
}

#[test]
fn test_body_fat_male_reference() {
    for prefs in both_unit_systems() {
        let request = body_fat_request(&prefs, Gender::Male, 175.0, 85.0, 38.0, None);
        let result = compute_body_fat(&request, &prefs).unwrap();
        assert_eq!(result.body_fat_percentage, 23.5);
        assert_eq!(result.category.label, "Average");
    }
}

#[test]
fn test_body_fat_log_domain() {
    let prefs = UnitPreferences::metric();
    let request = body_fat_request(&prefs, Gender::Male, 175.0, 40.0, 40.0, None);
    let err = compute_body_fat(&request, &prefs).unwrap_err();
    assert!(matches!(err, CalcError::DomainViolation { .. }));
}

fn spread(result: &IdealWeightResult) -> f64 {
    let values = [result.devine, result.robinson, result.miller, result.hamwi];
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    max - min
}

#[test]
fn test_ideal_weight_in_both_systems() {
    let person = TestPerson::reference();
    let metric = compute_ideal_weight(
        &person.ideal_weight_request(&UnitPreferences::metric()),
        &UnitPreferences::metric(),
    )
    .unwrap();
    let imperial = compute_ideal_weight(
        &person.ideal_weight_request(&UnitPreferences::imperial()),
        &UnitPreferences::imperial(),
    )
    .unwrap();

    assert!((metric.average * 2.20462 - imperial.average).abs() < 0.5);
    assert_eq!(imperial.weight_unit, WeightUnit::Lbs);
    // Margins are independent literals, not conversions of each other
    assert!((metric.range.max - metric.range.min - spread(&metric) - 10.0).abs() < 0.2);
    assert!((imperial.range.max - imperial.range.min - spread(&imperial) - 22.0).abs() < 0.2);
}

#[test]
fn test_one_rep_max_reference() {
    let request = OneRepMaxRequest { weight: 100.0, reps: 5 };
    let result = compute_one_rm(&request, &UnitPreferences::metric()).unwrap();
    assert_eq!(result.one_rep_max, 116.7);
    assert_eq!(result.percentages.last().map(|row| row.weight), Some(116.7));
}

#[test]
fn test_goal_maintenance_keeps_tdee() {
    let person = TestPerson::reference();
    for prefs in both_unit_systems() {
        let request = person.goal_request(&prefs, person.weight_kg, 12);
        let result = compute_goal_from(&request, &[], &prefs, start()).unwrap();
        assert_eq!(result.goal_type, GoalType::Maintain);
        assert_eq!(result.weekly_deficit, 0.0);
        assert_eq!(result.target_calories, result.current_tdee);
        assert_eq!(result.warning, None);
    }
}

#[test]
fn test_goal_target_date() {
    let person = TestPerson::reference();
    let prefs = UnitPreferences::metric();
    let request = person.goal_request(&prefs, 65.0, 10);
    let result = compute_goal_from(&request, &[], &prefs, start()).unwrap();
    assert_eq!(result.target_date, NaiveDate::from_ymd_opt(2025, 8, 10).unwrap());
    assert_eq!(result.timeframe_weeks, 10);
}

#[test]
fn test_goal_rate_warning_in_pounds() {
    let person = TestPerson::reference();
    let prefs = UnitPreferences::imperial();
    // 10 kg in 4 weeks is about 5.5 lbs/week
    let request = person.goal_request(&prefs, 60.0, 4);
    let result = compute_goal_from(&request, &[], &prefs, start()).unwrap();
    assert_eq!(result.goal_type, GoalType::Loss);
    assert_eq!(result.warning, Some(SafetyWarning::AggressiveRate));
}

#[test]
fn test_incomplete_inputs_yield_no_result() {
    let prefs = UnitPreferences::metric();
    let mut request = TestPerson::reference().bmr_request(&prefs);
    request.weight = 0.0;
    assert!(compute_bmr(&request, &prefs).ok().is_none());
}
