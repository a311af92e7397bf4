//! Health metrics formula library
//!
//! Provides the raw formulas for BMI, BMR, TDEE, body fat, ideal weight and
//! one-rep max. Every function takes canonical metric inputs (kg, cm, years)
//! and returns metric outputs; unit conversion, rounding and classification
//! happen in the calculators.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Published formulas, constants used verbatim
//! 3. **Domain Aware**: Out-of-domain inputs yield `None` or a `CalcError`, never a bogus number
//! 4. **Type Safety**: Strong typing prevents unit confusion

use crate::errors::{CalcError, CalcResult};
use crate::units::CM_PER_INCH;
use crate::validation::{katch_mcardle_body_fat, MAX_REPS};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Profile Types
// ============================================================================

/// Gender for physiological calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "" => Err(CalcError::missing("gender")),
            _ => Err(CalcError::domain("gender", "must be male or female")),
        }
    }
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Calculate the weight range whose BMI lies within `[bmi_min, bmi_max]`
pub fn healthy_weight_range_kg(height_cm: f64, bmi_min: f64, bmi_max: f64) -> (f64, f64) {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    (bmi_min * height_m_sq, bmi_max * height_m_sq)
}

/// Distance from a weight range (negative = under, positive = over, 0 = in range)
pub fn distance_from_range(weight: f64, range: (f64, f64)) -> f64 {
    if weight < range.0 {
        weight - range.0
    } else if weight > range.1 {
        weight - range.1
    } else {
        0.0
    }
}

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    gender: Gender,
) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Calculate BMR using Harris-Benedict equation (revised)
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn calculate_bmr_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    gender: Gender,
) -> f64 {
    let age = f64::from(age_years);
    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Calculate BMR using Katch-McArdle equation (requires lean body mass)
///
/// BMR = 370 + 21.6 × LBM(kg)
/// LBM = weight × (1 - body_fat_percent/100)
///
/// Returns `None` unless body fat is strictly between 0 and 50 %.
pub fn calculate_bmr_katch_mcardle(weight_kg: f64, body_fat_percent: f64) -> Option<f64> {
    let body_fat_percent = katch_mcardle_body_fat(Some(body_fat_percent))?;
    let lean_body_mass = weight_kg * (1.0 - body_fat_percent / 100.0);
    Some(370.0 + 21.6 * lean_body_mass)
}

/// All BMR estimates for one person, in kcal/day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmrEstimates {
    pub mifflin_st_jeor: f64,
    pub harris_benedict: f64,
    /// Only present when a usable body fat percentage was supplied
    pub katch_mcardle: Option<f64>,
}

/// Calculate every BMR variant the inputs allow
pub fn calculate_bmr_estimates(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    gender: Gender,
    body_fat_percent: Option<f64>,
) -> BmrEstimates {
    BmrEstimates {
        mifflin_st_jeor: calculate_bmr_mifflin(weight_kg, height_cm, age_years, gender),
        harris_benedict: calculate_bmr_harris_benedict(weight_kg, height_cm, age_years, gender),
        katch_mcardle: body_fat_percent
            .and_then(|bf| calculate_bmr_katch_mcardle(weight_kg, bf)),
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: f64, activity_factor: f64) -> f64 {
    bmr * activity_factor
}

// ============================================================================
// Body Fat Estimation
// ============================================================================

/// Estimate body fat percentage with the US Navy circumference method
///
/// Men: 86.010 × log10(waist - neck) - 70.041 × log10(height) + 36.76
/// Women: 163.205 × log10(waist + hip - neck) - 97.684 × log10(height) - 78.387
///
/// All measurements in cm. The result is clamped to 0-100 %.
pub fn calculate_body_fat_navy(
    gender: Gender,
    height_cm: f64,
    waist_cm: f64,
    neck_cm: f64,
    hip_cm: Option<f64>,
) -> CalcResult<f64> {
    let raw = match gender {
        Gender::Male => {
            let girth = waist_cm - neck_cm;
            if girth <= 0.0 {
                return Err(CalcError::domain("waist", "must be larger than the neck measurement"));
            }
            86.01 * girth.log10() - 70.041 * height_cm.log10() + 36.76
        }
        Gender::Female => {
            let hip_cm = hip_cm.ok_or(CalcError::missing("hip"))?;
            let girth = waist_cm + hip_cm - neck_cm;
            if girth <= 0.0 {
                return Err(CalcError::domain(
                    "waist",
                    "waist plus hip must be larger than the neck measurement",
                ));
            }
            163.205 * girth.log10() - 97.684 * height_cm.log10() - 78.387
        }
    };

    Ok(raw.clamp(0.0, 100.0))
}

// ============================================================================
// Ideal Weight Calculations
// ============================================================================

/// Ideal body weight estimates in kg
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdealWeightEstimates {
    /// Devine formula result
    pub devine: f64,
    /// Robinson formula result
    pub robinson: f64,
    /// Miller formula result
    pub miller: f64,
    /// Hamwi formula result
    pub hamwi: f64,
}

impl IdealWeightEstimates {
    pub fn values(&self) -> [f64; 4] {
        [self.devine, self.robinson, self.miller, self.hamwi]
    }

    /// Apply a conversion to every estimate
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            devine: f(self.devine),
            robinson: f(self.robinson),
            miller: f(self.miller),
            hamwi: f(self.hamwi),
        }
    }

    /// Arithmetic mean of the four formulas
    pub fn average(&self) -> f64 {
        self.values().iter().sum::<f64>() / 4.0
    }

    pub fn min(&self) -> f64 {
        self.values().into_iter().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values().into_iter().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// (base kg, kg per inch over 5 ft) for Devine, Robinson, Miller, Hamwi
fn ideal_weight_coefficients(gender: Gender) -> [(f64, f64); 4] {
    match gender {
        Gender::Male => [(50.0, 2.3), (52.0, 1.9), (56.2, 1.41), (48.0, 2.7)],
        Gender::Female => [(45.5, 2.3), (49.0, 1.7), (53.1, 1.36), (45.5, 2.2)],
    }
}

/// Calculate ideal body weight using multiple formulas
///
/// Each formula is floored at its own base constant, so statures under five
/// feet never produce a weight below the formula's intercept.
pub fn calculate_ideal_weight(height_cm: f64, gender: Gender) -> IdealWeightEstimates {
    let inches_over_5ft = height_cm / CM_PER_INCH - 60.0;
    let [devine, robinson, miller, hamwi] = ideal_weight_coefficients(gender)
        .map(|(base, per_inch)| (base + per_inch * inches_over_5ft).max(base));

    IdealWeightEstimates {
        devine,
        robinson,
        miller,
        hamwi,
    }
}

// ============================================================================
// Strength Calculations
// ============================================================================

/// Training percentages of the one-rep max shown in the load table
pub const TRAINING_PERCENTAGES: [u8; 10] = [50, 60, 65, 70, 75, 80, 85, 90, 95, 100];

/// Estimate one-repetition max with the Epley formula
///
/// 1RM = weight × (1 + reps/30), in the same unit as `weight`.
/// Returns `None` outside 1-15 reps.
pub fn calculate_one_rep_max(weight: f64, reps: u32) -> Option<f64> {
    if weight <= 0.0 || reps == 0 || reps > MAX_REPS {
        return None;
    }
    Some(weight * (1.0 + f64::from(reps) / 30.0))
}

/// Training intensity zone for a percentage of the one-rep max
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingIntensity {
    WarmUp,
    Light,
    Moderate,
    Heavy,
    MaxEffort,
}

impl TrainingIntensity {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            90.. => TrainingIntensity::MaxEffort,
            80..=89 => TrainingIntensity::Heavy,
            70..=79 => TrainingIntensity::Moderate,
            60..=69 => TrainingIntensity::Light,
            _ => TrainingIntensity::WarmUp,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrainingIntensity::WarmUp => "Warm-up",
            TrainingIntensity::Light => "Light",
            TrainingIntensity::Moderate => "Moderate",
            TrainingIntensity::Heavy => "Heavy",
            TrainingIntensity::MaxEffort => "Max Effort",
        }
    }
}

/// Weight to lift at each training percentage, unrounded
pub fn training_loads(one_rep_max: f64) -> Vec<(u8, f64)> {
    TRAINING_PERCENTAGES
        .iter()
        .map(|&percentage| (percentage, one_rep_max * f64::from(percentage) / 100.0))
        .collect()
}
