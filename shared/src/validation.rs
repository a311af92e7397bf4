//! Input validation functions
//!
//! Every calculator runs its raw inputs through these checks before any unit
//! conversion. A zero or non-numeric value means the field has not been
//! filled in yet; a negative, infinite or out-of-range value is outside the
//! formula's domain.

use crate::errors::{CalcError, CalcResult};

/// Oldest age accepted by the BMR-based calculators
pub const MAX_AGE_YEARS: u32 = 120;

/// Highest repetition count for which the Epley estimate is trusted
pub const MAX_REPS: u32 = 15;

/// Longest goal timeframe (two years)
pub const MAX_TIMEFRAME_WEEKS: u32 = 104;

/// Custom activity multiplier bounds
pub const MIN_ACTIVITY_FACTOR: f64 = 1.0;
pub const MAX_ACTIVITY_FACTOR: f64 = 3.0;

/// Exclusive body-fat bounds for the Katch-McArdle equation
pub const KATCH_MCARDLE_BODY_FAT_RANGE: (f64, f64) = (0.0, 50.0);

/// Validate a required positive measurement (weight, height, circumference)
pub fn require_measurement(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_nan() || value == 0.0 {
        return Err(CalcError::missing(field));
    }
    if value.is_infinite() {
        return Err(CalcError::domain(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalcError::domain(field, "cannot be negative"));
    }
    Ok(value)
}

/// Validate an optional measurement, treating zero/NaN as not supplied
pub fn optional_measurement(field: &'static str, value: Option<f64>) -> CalcResult<Option<f64>> {
    match value {
        None => Ok(None),
        Some(v) if v.is_nan() || v == 0.0 => Ok(None),
        Some(v) => require_measurement(field, v).map(Some),
    }
}

/// Validate age in years
pub fn require_age(age_years: u32) -> CalcResult<u32> {
    if age_years == 0 {
        return Err(CalcError::missing("age"));
    }
    if age_years > MAX_AGE_YEARS {
        return Err(CalcError::domain(
            "age",
            format!("cannot exceed {} years", MAX_AGE_YEARS),
        ));
    }
    Ok(age_years)
}

/// Validate a repetition count for one-rep max estimation
pub fn require_reps(reps: u32) -> CalcResult<u32> {
    if reps == 0 {
        return Err(CalcError::missing("reps"));
    }
    if reps > MAX_REPS {
        return Err(CalcError::domain(
            "reps",
            format!("must be between 1 and {}", MAX_REPS),
        ));
    }
    Ok(reps)
}

/// Validate a goal timeframe in weeks
pub fn require_timeframe_weeks(weeks: u32) -> CalcResult<u32> {
    if weeks == 0 {
        return Err(CalcError::missing("timeframe_weeks"));
    }
    if weeks > MAX_TIMEFRAME_WEEKS {
        return Err(CalcError::domain(
            "timeframe_weeks",
            format!("cannot exceed {} weeks", MAX_TIMEFRAME_WEEKS),
        ));
    }
    Ok(weeks)
}

/// Validate a user-defined activity multiplier
pub fn validate_activity_factor(factor: f64) -> CalcResult<f64> {
    if factor.is_nan() {
        return Err(CalcError::missing("activity_factor"));
    }
    if !(MIN_ACTIVITY_FACTOR..=MAX_ACTIVITY_FACTOR).contains(&factor) {
        return Err(CalcError::domain(
            "activity_factor",
            format!(
                "must be between {:.1} and {:.1}",
                MIN_ACTIVITY_FACTOR, MAX_ACTIVITY_FACTOR
            ),
        ));
    }
    Ok(factor)
}

/// Body fat usable by Katch-McArdle, or `None` when it would not apply
pub fn katch_mcardle_body_fat(body_fat_percent: Option<f64>) -> Option<f64> {
    let (low, high) = KATCH_MCARDLE_BODY_FAT_RANGE;
    body_fat_percent.filter(|bf| *bf > low && *bf < high)
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" => "Weight",
        "current_weight" => "Current Weight",
        "target_weight" => "Target Weight",
        "height" | "height_cm" => "Height",
        "age" => "Age",
        "gender" => "Gender",
        "body_fat" => "Body Fat",
        "waist" => "Waist Circumference",
        "neck" => "Neck Circumference",
        "hip" => "Hip Circumference",
        "reps" => "Repetitions",
        "activity_level" => "Activity Level",
        "activity_factor" => "Activity Factor",
        "activity_name" => "Activity Name",
        "timeframe_weeks" => "Timeframe",
        _ => field_name,
    }
}
