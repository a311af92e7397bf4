//! Goal projection engine
//!
//! Works out the daily energy budget that reaches a target weight within a
//! timeframe, using the 7700 kcal per kg of body fat rule of thumb:
//! - BMR (Mifflin-St Jeor) and TDEE from the current weight
//! - Total energy surplus or deficit for the weight change
//! - Weekly and daily deficits, target calories and target date
//! - Advisory safety warnings that never block the result

use crate::health_metrics::{calculate_bmr_mifflin, calculate_tdee, Gender};
use crate::units::{EnergyUnit, UnitPreferences, WeightUnit};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Energy stored in one kg of body fat
pub const KCAL_PER_KG_FAT: f64 = 7700.0;

/// Fastest loss considered safe, per week
pub const MAX_SAFE_WEEKLY_LOSS_KG: f64 = 1.0;
pub const MAX_SAFE_WEEKLY_LOSS_LBS: f64 = 2.2;

/// Daily intake floor below which a warning is raised
pub const MIN_DAILY_KCAL: f64 = 1200.0;
pub const MIN_DAILY_KJ: f64 = 5000.0;

/// Direction of a weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Loss,
    Gain,
    Maintain,
}

impl GoalType {
    pub fn from_weights(current: f64, target: f64) -> Self {
        if current > target {
            GoalType::Loss
        } else if current < target {
            GoalType::Gain
        } else {
            GoalType::Maintain
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalType::Loss => "Weight Loss",
            GoalType::Gain => "Weight Gain",
            GoalType::Maintain => "Weight Maintenance",
        }
    }
}

/// Advisory attached to an otherwise valid projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyWarning {
    AggressiveRate,
    LowCalories,
}

impl SafetyWarning {
    pub fn message(&self) -> &'static str {
        match self {
            SafetyWarning::AggressiveRate => {
                "Warning: This rate of weight loss may be too aggressive. Consider a longer timeframe."
            }
            SafetyWarning::LowCalories => {
                "Warning: Target calories are very low. Consult a healthcare professional."
            }
        }
    }
}

/// Validated goal inputs in canonical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalInputs {
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub gender: Gender,
    pub activity_factor: f64,
    pub timeframe_weeks: u32,
}

/// Unrounded projection, energy in kcal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProjection {
    pub bmr: f64,
    pub tdee: f64,
    /// Positive for loss, negative for gain
    pub weight_difference_kg: f64,
    pub total_energy: f64,
    pub weekly_deficit: f64,
    pub daily_deficit: f64,
    pub target_calories: f64,
    pub target_date: NaiveDate,
}

/// Goal projection logic
pub struct GoalPlanner;

impl GoalPlanner {
    /// Project the energy budget for a goal starting on `start`
    ///
    /// Gains produce a negative deficit, so target calories end up above TDEE.
    pub fn project(inputs: &GoalInputs, start: NaiveDate) -> GoalProjection {
        let bmr = calculate_bmr_mifflin(
            inputs.current_weight_kg,
            inputs.height_cm,
            inputs.age_years,
            inputs.gender,
        );
        let tdee = calculate_tdee(bmr, inputs.activity_factor);

        let weight_difference_kg = inputs.current_weight_kg - inputs.target_weight_kg;
        let total_energy = weight_difference_kg * KCAL_PER_KG_FAT;
        let weekly_deficit = total_energy / f64::from(inputs.timeframe_weeks);
        let daily_deficit = weekly_deficit / 7.0;

        GoalProjection {
            bmr,
            tdee,
            weight_difference_kg,
            total_energy,
            weekly_deficit,
            daily_deficit,
            target_calories: tdee - daily_deficit,
            target_date: Self::target_date(start, inputs.timeframe_weeks),
        }
    }

    pub fn target_date(start: NaiveDate, timeframe_weeks: u32) -> NaiveDate {
        start + Duration::days(i64::from(timeframe_weeks) * 7)
    }

    /// Weekly weight change in the caller's weight unit
    pub fn weekly_rate(current: f64, target: f64, timeframe_weeks: u32) -> f64 {
        (current - target).abs() / f64::from(timeframe_weeks)
    }

    /// Pick at most one advisory for a projection
    ///
    /// `weekly_rate` is in the caller's weight unit and `target_calories` in
    /// the caller's energy unit; the thresholds follow those units.
    pub fn safety_warning(
        goal_type: GoalType,
        weekly_rate: f64,
        target_calories: f64,
        prefs: &UnitPreferences,
    ) -> Option<SafetyWarning> {
        let max_weekly_loss = match prefs.weight {
            WeightUnit::Kg => MAX_SAFE_WEEKLY_LOSS_KG,
            WeightUnit::Lbs => MAX_SAFE_WEEKLY_LOSS_LBS,
        };
        if goal_type == GoalType::Loss && weekly_rate > max_weekly_loss {
            return Some(SafetyWarning::AggressiveRate);
        }

        let min_daily = match prefs.energy {
            EnergyUnit::Kcal => MIN_DAILY_KCAL,
            EnergyUnit::Kj => MIN_DAILY_KJ,
        };
        if target_calories < min_daily {
            return Some(SafetyWarning::LowCalories);
        }

        None
    }
}
