//! Calculator request and result types
//!
//! Requests carry raw values in the caller's units. A zero or absent number
//! means the field has not been filled in. Results carry values already
//! converted to the caller's units and rounded for display.

use crate::activity::{ActivityLevel, ActivitySelection};
use crate::category::CategoryRange;
use crate::errors::CalcError;
use crate::goal::{GoalType, SafetyWarning};
use crate::health_metrics::{Gender, TrainingIntensity};
use crate::units::{EnergyUnit, HeightUnit, WeightUnit};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Requests
// ============================================================================

/// BMI request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BmiRequest {
    pub weight: f64,
    pub height: f64,
}

/// BMR request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BmrRequest {
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub gender: Option<Gender>,
    /// Enables the Katch-McArdle estimate when in (0, 50) %
    pub body_fat: Option<f64>,
}

/// TDEE request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TdeeRequest {
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub gender: Option<Gender>,
    pub activity: ActivitySelection,
}

/// Body fat request; circumferences use the caller's height unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyFatRequest {
    pub gender: Option<Gender>,
    pub height: f64,
    pub waist: f64,
    pub neck: f64,
    /// Required for women, ignored for men
    pub hip: Option<f64>,
}

/// Ideal weight request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdealWeightRequest {
    pub height: f64,
    pub gender: Option<Gender>,
}

/// One-rep max request; weight is in the caller's unit and never converted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OneRepMaxRequest {
    pub weight: f64,
    pub reps: u32,
}

/// Goal projection request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalRequest {
    pub current_weight: f64,
    pub target_weight: f64,
    pub height: f64,
    pub age: u32,
    pub gender: Option<Gender>,
    pub activity: ActivitySelection,
    pub timeframe_weeks: u32,
}

// ============================================================================
// Results
// ============================================================================

/// Closed weight interval in the caller's weight unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

/// BMI result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: CategoryRange,
    /// Weights whose BMI falls in the "Normal Weight" bracket
    pub healthy_range: WeightRange,
    /// Negative below the healthy range, positive above, zero inside
    pub distance_from_healthy: f64,
    pub weight_unit: WeightUnit,
}

/// Daily calories at one activity level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityCalories {
    pub level: ActivityLevel,
    pub label: &'static str,
    pub factor: f64,
    pub calories: f64,
}

/// BMR result, energy in the caller's unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmrResult {
    pub mifflin_st_jeor: f64,
    pub harris_benedict: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub katch_mcardle: Option<f64>,
    pub category: CategoryRange,
    pub daily_calories_by_activity: Vec<ActivityCalories>,
    pub energy_unit: EnergyUnit,
}

/// Daily intake suggestions derived from TDEE
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieGuidance {
    pub maintenance: f64,
    pub weight_loss: f64,
    pub weight_gain: f64,
}

/// TDEE result, energy in the caller's unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TdeeResult {
    pub bmr: f64,
    pub tdee: f64,
    pub activity_factor: f64,
    pub category: CategoryRange,
    pub guidance: CalorieGuidance,
    pub energy_unit: EnergyUnit,
}

/// Body fat result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyFatResult {
    pub body_fat_percentage: f64,
    pub category: CategoryRange,
    pub height_unit: HeightUnit,
}

/// Ideal weight result in the caller's weight unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdealWeightResult {
    pub devine: f64,
    pub robinson: f64,
    pub miller: f64,
    pub hamwi: f64,
    pub average: f64,
    pub range: WeightRange,
    pub weight_unit: WeightUnit,
}

/// One row of the training-load table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingLoad {
    pub percentage: u8,
    pub weight: f64,
    pub intensity: TrainingIntensity,
    pub label: &'static str,
}

/// One-rep max result in the caller's weight unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OneRepMaxResult {
    pub one_rep_max: f64,
    pub percentages: Vec<TrainingLoad>,
    pub weight_unit: WeightUnit,
}

/// Goal projection result
///
/// Energy figures are in the caller's energy unit, weights in the caller's
/// weight unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalResult {
    pub goal_type: GoalType,
    pub goal_label: &'static str,
    pub current_bmr: f64,
    pub current_tdee: f64,
    pub target_calories: f64,
    /// Magnitude of the daily deficit or surplus
    pub daily_deficit: f64,
    /// Signed: negative for a weight gain goal
    pub weekly_deficit: f64,
    pub total_change: f64,
    pub weekly_rate: f64,
    pub timeframe_weeks: u32,
    pub target_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<SafetyWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_message: Option<&'static str>,
    pub weight_unit: WeightUnit,
    pub energy_unit: EnergyUnit,
}

// ============================================================================
// Errors
// ============================================================================

/// Error payload for front ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&CalcError> for ErrorResponse {
    fn from(err: &CalcError) -> Self {
        let code = match err {
            CalcError::MissingInput { .. } => "missing_input",
            CalcError::DomainViolation { .. } => "domain_violation",
            CalcError::InvalidUnit(_) => "invalid_unit",
        };
        ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: err.user_message(),
                field: err.field().map(str::to_string),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_default_missing_fields() {
        let request: BmrRequest = serde_json::from_str(r#"{"weight": 70, "height": 170}"#).unwrap();
        assert_eq!(request.age, 0);
        assert_eq!(request.gender, None);
        assert_eq!(request.body_fat, None);
    }

    #[test]
    fn test_goal_request_accepts_activity_forms() {
        let request: GoalRequest = serde_json::from_str(
            r#"{"current_weight": 80, "target_weight": 75, "activity": "very_active", "timeframe_weeks": 10}"#,
        )
        .unwrap();
        assert_eq!(request.activity, ActivitySelection::Preset(ActivityLevel::VeryActive));
        assert_eq!(request.timeframe_weeks, 10);
    }

    #[test]
    fn test_error_response_from_calc_error() {
        let response = ErrorResponse::from(&CalcError::missing("neck"));
        assert_eq!(response.error.code, "missing_input");
        assert_eq!(response.error.message, "Neck Circumference: required");
        assert_eq!(response.error.field.as_deref(), Some("neck"));

        let response = ErrorResponse::from(&CalcError::InvalidUnit("stone".to_string()));
        assert_eq!(response.error.code, "invalid_unit");
        assert!(response.error.field.is_none());
    }
}
