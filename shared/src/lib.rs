//! Fitness Calculator Shared Library
//!
//! This crate contains the unit-aware calculation engine used by the WASM
//! bindings and the command line: unit conversion, category tables, the
//! formula library, activity multipliers, goal projection and one facade per
//! calculator.

pub mod activity;
pub mod calculators;
pub mod category;
pub mod errors;
pub mod goal;
pub mod health_metrics;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use activity::{ActivityLevel, ActivitySelection, CustomActivity, CustomActivityRegistry};
pub use calculators::{
    compute_bmi, compute_bmr, compute_body_fat, compute_goal, compute_goal_from,
    compute_ideal_weight, compute_one_rm, compute_tdee,
};
pub use category::{classify, reference_table, CategoryRange, CategoryReference, CategoryTable};
pub use errors::*;
pub use goal::{GoalType, SafetyWarning};
pub use health_metrics::{Gender, TrainingIntensity};
pub use types::*;

// Export units module items (canonical source for unit types)
pub use units::*;
