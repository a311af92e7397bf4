//! Calculator facades
//!
//! Each facade validates raw caller input, converts it to canonical metric
//! units, runs the formula library, classifies the raw metric value and only
//! then converts and rounds the outputs back to the caller's units.

pub mod bmi;
pub mod bmr;
pub mod body_fat;
pub mod goal;
pub mod ideal_weight;
pub mod one_rm;
pub mod tdee;

pub use bmi::compute_bmi;
pub use bmr::compute_bmr;
pub use body_fat::compute_body_fat;
pub use goal::{compute_goal, compute_goal_from};
pub use ideal_weight::compute_ideal_weight;
pub use one_rm::compute_one_rm;
pub use tdee::compute_tdee;

use crate::errors::{CalcError, CalcResult};
use crate::health_metrics::Gender;
use crate::units::UnitPreferences;

fn require_gender(gender: Option<Gender>) -> CalcResult<Gender> {
    gender.ok_or(CalcError::missing("gender"))
}

/// Convert kcal to the caller's energy unit, rounded to a whole number
fn display_energy(kcal: f64, prefs: &UnitPreferences) -> f64 {
    prefs.energy.from_kcal(kcal).round()
}
