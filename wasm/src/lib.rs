//! Fitness Calculator WASM Module
//!
//! This crate provides WebAssembly bindings so the browser can run the
//! calculation engine directly. Requests, unit preferences and results cross
//! the boundary as JSON strings; incomplete or invalid input returns
//! `undefined` rather than throwing.

use fitness_calculator_shared::{
    self as engine, ActivityLevel, CalcError, CalcResult, CategoryTable, CustomActivity,
    CustomActivityRegistry, EnergyUnit, ErrorResponse, Gender, GoalRequest, HeightUnit,
    TdeeRequest, UnitPreferences, WeightUnit,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Parse a JSON argument; an empty string means "use the default"
fn parse_or_default<T: DeserializeOwned + Default>(json: &str) -> Option<T> {
    if json.trim().is_empty() {
        return Some(T::default());
    }
    serde_json::from_str(json).ok()
}

fn to_json<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_string(value).ok()
}

/// Run a calculator over JSON input, returning the result as JSON
fn run<Req, Res>(
    request_json: &str,
    prefs_json: &str,
    calculate: impl FnOnce(&Req, &UnitPreferences) -> CalcResult<Res>,
) -> Option<String>
where
    Req: DeserializeOwned,
    Res: Serialize,
{
    let request: Req = serde_json::from_str(request_json).ok()?;
    let prefs: UnitPreferences = parse_or_default(prefs_json)?;
    to_json(&calculate(&request, &prefs).ok()?)
}

// ============================================================================
// Calculators
// ============================================================================

#[wasm_bindgen]
pub fn compute_bmi(request_json: &str, prefs_json: &str) -> Option<String> {
    run(request_json, prefs_json, engine::compute_bmi)
}

#[wasm_bindgen]
pub fn compute_bmr(request_json: &str, prefs_json: &str) -> Option<String> {
    run(request_json, prefs_json, engine::compute_bmr)
}

/// `custom_activities_json` is the caller's list as returned by
/// [`add_custom_activity`]
#[wasm_bindgen]
pub fn compute_tdee(
    request_json: &str,
    custom_activities_json: &str,
    prefs_json: &str,
) -> Option<String> {
    let custom: Vec<CustomActivity> = parse_or_default(custom_activities_json)?;
    run(request_json, prefs_json, |request: &TdeeRequest, prefs: &UnitPreferences| {
        engine::compute_tdee(request, &custom, prefs)
    })
}

#[wasm_bindgen]
pub fn compute_body_fat(request_json: &str, prefs_json: &str) -> Option<String> {
    run(request_json, prefs_json, engine::compute_body_fat)
}

#[wasm_bindgen]
pub fn compute_ideal_weight(request_json: &str, prefs_json: &str) -> Option<String> {
    run(request_json, prefs_json, engine::compute_ideal_weight)
}

#[wasm_bindgen]
pub fn compute_one_rm(request_json: &str, prefs_json: &str) -> Option<String> {
    run(request_json, prefs_json, engine::compute_one_rm)
}

/// Goal projection starting from the browser's current date
#[wasm_bindgen]
pub fn compute_goal(
    request_json: &str,
    custom_activities_json: &str,
    prefs_json: &str,
) -> Option<String> {
    let custom: Vec<CustomActivity> = parse_or_default(custom_activities_json)?;
    run(request_json, prefs_json, |request: &GoalRequest, prefs: &UnitPreferences| {
        engine::compute_goal(request, &custom, prefs)
    })
}

/// Explain why a calculator produced no result
///
/// Returns an error payload as JSON, or `undefined` when the input is complete.
#[wasm_bindgen]
pub fn explain_input(calculator: &str, request_json: &str, prefs_json: &str) -> Option<String> {
    let error = match calculator {
        "bmi" => check(request_json, prefs_json, engine::compute_bmi),
        "bmr" => check(request_json, prefs_json, engine::compute_bmr),
        "tdee" => check(request_json, prefs_json, |request: &TdeeRequest, prefs: &UnitPreferences| {
            engine::compute_tdee(request, &[], prefs)
        }),
        "body_fat" => check(request_json, prefs_json, engine::compute_body_fat),
        "ideal_weight" => check(request_json, prefs_json, engine::compute_ideal_weight),
        "one_rm" => check(request_json, prefs_json, engine::compute_one_rm),
        "goal" => check(request_json, prefs_json, |request: &GoalRequest, prefs: &UnitPreferences| {
            engine::compute_goal(request, &[], prefs)
        }),
        other => Some(CalcError::domain("calculator", format!("unknown calculator: {}", other))),
    }?;
    to_json(&ErrorResponse::from(&error))
}

fn check<Req, Res>(
    request_json: &str,
    prefs_json: &str,
    calculate: impl FnOnce(&Req, &UnitPreferences) -> CalcResult<Res>,
) -> Option<CalcError>
where
    Req: DeserializeOwned,
{
    let request: Req = match serde_json::from_str(request_json) {
        Ok(request) => request,
        Err(e) => return Some(CalcError::domain("request", e.to_string())),
    };
    let prefs: UnitPreferences = match parse_or_default(prefs_json) {
        Some(prefs) => prefs,
        None => {
            return Some(CalcError::InvalidUnit(format!(
                "Invalid unit preferences: {}",
                prefs_json
            )))
        }
    };
    calculate(&request, &prefs).err()
}

// ============================================================================
// Unit Conversion
// ============================================================================

#[wasm_bindgen]
pub fn convert_weight(value: f64, from: &str, to: &str) -> Option<f64> {
    let from: WeightUnit = from.parse().ok()?;
    let to: WeightUnit = to.parse().ok()?;
    Some(engine::convert_weight(value, from, to))
}

#[wasm_bindgen]
pub fn convert_height(value: f64, from: &str, to: &str) -> Option<f64> {
    let from: HeightUnit = from.parse().ok()?;
    let to: HeightUnit = to.parse().ok()?;
    Some(engine::convert_height(value, from, to))
}

#[wasm_bindgen]
pub fn convert_energy(value: f64, from: &str, to: &str) -> Option<f64> {
    let from: EnergyUnit = from.parse().ok()?;
    let to: EnergyUnit = to.parse().ok()?;
    Some(engine::convert_energy(value, from, to))
}

// ============================================================================
// Activities and Reference Data
// ============================================================================

/// Add a custom activity to the caller's list, returning the new list
#[wasm_bindgen]
pub fn add_custom_activity(list_json: &str, name: &str, factor: f64) -> Option<String> {
    let mut registry: CustomActivityRegistry = parse_or_default(list_json)?;
    registry.add(name, factor).ok()?;
    to_json(&registry)
}

/// Remove a custom activity from the caller's list, returning the new list
#[wasm_bindgen]
pub fn remove_custom_activity(list_json: &str, id: &str) -> Option<String> {
    let mut registry: CustomActivityRegistry = parse_or_default(list_json)?;
    registry.remove(id);
    to_json(&registry)
}

#[derive(Serialize)]
struct ActivityOption {
    key: &'static str,
    label: &'static str,
    factor: f64,
}

/// The five preset activity levels
#[wasm_bindgen]
pub fn activity_levels() -> Option<String> {
    let options: Vec<ActivityOption> = ActivityLevel::ALL
        .iter()
        .map(|level| ActivityOption {
            key: level.key(),
            label: level.label(),
            factor: level.multiplier(),
        })
        .collect();
    to_json(&options)
}

/// Category reference rows for `bmi`, `body_fat`, `bmr` or `tdee`
#[wasm_bindgen]
pub fn category_reference(metric: &str, gender: &str) -> Option<String> {
    let gender: Option<Gender> = gender.parse().ok();
    let table = CategoryTable::from_name(metric, gender).ok()?;
    to_json(&table.reference())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_goal_in_browser() {
        let request = r#"{"current_weight": 80, "target_weight": 75, "height": 170,
            "age": 30, "gender": "male", "activity": "moderate", "timeframe_weeks": 10}"#;
        assert!(compute_goal(request, "", "").is_some());
    }
}
