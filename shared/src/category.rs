//! Category classification
//!
//! A single generic range lookup shared by every metric. Each metric owns an
//! ordered, static table of [`CategoryRange`]s; the classifier returns the
//! first range containing the value and never reorders the table.

use crate::errors::{CalcError, CalcResult};
use crate::health_metrics::Gender;
use serde::Serialize;

/// How a range treats its own `max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    /// `value <= max` (tables authored with explicit .4/.5 boundaries)
    Inclusive,
    /// `value < max` (tables derived from strict thresholds)
    Exclusive,
}

/// A labeled bracket of a metric's value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryRange {
    pub min: f64,
    /// Display maximum. The last range of a table is unbounded regardless.
    pub max: f64,
    pub label: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub upper: UpperBound,
}

impl CategoryRange {
    /// Range whose `max` belongs to it
    pub const fn inclusive(
        min: f64,
        max: f64,
        label: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            min,
            max,
            label,
            description,
            upper: UpperBound::Inclusive,
        }
    }

    /// Range whose `max` belongs to the next range
    pub const fn below(min: f64, max: f64, label: &'static str, description: &'static str) -> Self {
        Self {
            min,
            max,
            label,
            description,
            upper: UpperBound::Exclusive,
        }
    }

    fn contains(&self, value: f64, unbounded: bool) -> bool {
        if value.is_nan() || value < self.min {
            return false;
        }
        if unbounded {
            return true;
        }
        match self.upper {
            UpperBound::Inclusive => value <= self.max,
            UpperBound::Exclusive => value < self.max,
        }
    }

    /// Whether this is the "Unknown" sentinel
    pub fn is_unknown(&self) -> bool {
        self.label == UNKNOWN_CATEGORY.label
    }
}

/// Returned when no range of a table contains the value
pub static UNKNOWN_CATEGORY: CategoryRange = CategoryRange {
    min: f64::NAN,
    max: f64::NAN,
    label: "Unknown",
    description: "",
    upper: UpperBound::Inclusive,
};

/// Return the first range containing `value`, or [`UNKNOWN_CATEGORY`]
///
/// The last range's `max` is treated as +∞.
pub fn classify(value: f64, ranges: &[CategoryRange]) -> &CategoryRange {
    let last = ranges.len().saturating_sub(1);
    ranges
        .iter()
        .enumerate()
        .find(|(index, range)| range.contains(value, *index == last))
        .map(|(_, range)| range)
        .unwrap_or(&UNKNOWN_CATEGORY)
}

/// One row of a category reference table, formatted for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReference {
    pub label: &'static str,
    pub description: &'static str,
    pub range: String,
}

/// Format a table for display, e.g. `"18.5 - 24.9"` and `"30 - ∞"`
pub fn reference_table(ranges: &[CategoryRange], suffix: &str) -> Vec<CategoryReference> {
    let last = ranges.len().saturating_sub(1);
    ranges
        .iter()
        .enumerate()
        .map(|(index, range)| {
            let upper = if index == last {
                "∞".to_string()
            } else {
                format!("{}{}", range.max, suffix)
            };
            CategoryReference {
                label: range.label,
                description: range.description,
                range: format!("{}{} - {}", range.min, suffix, upper),
            }
        })
        .collect()
}

// ============================================================================
// Category Tables
// ============================================================================

/// BMI categories (kg/m²)
pub static BMI_CATEGORIES: [CategoryRange; 4] = [
    CategoryRange::inclusive(0.0, 18.4, "Underweight", "Below normal weight"),
    CategoryRange::inclusive(18.5, 24.9, "Normal Weight", "Healthy weight range"),
    CategoryRange::inclusive(25.0, 29.9, "Overweight", "Above normal weight"),
    CategoryRange::inclusive(30.0, 100.0, "Obese", "Significantly above normal weight"),
];

/// The healthy BMI bracket
pub fn normal_bmi_range() -> &'static CategoryRange {
    &BMI_CATEGORIES[1]
}

const ESSENTIAL_FAT: &str = "Minimum fat needed for basic physical and physiological health";
const FITNESS: &str = "Fit, non-athlete individuals";
const OBESE: &str = "Above average, may indicate health risks";

/// Body fat categories for men (%)
pub static BODY_FAT_CATEGORIES_MALE: [CategoryRange; 5] = [
    CategoryRange::inclusive(2.0, 5.0, "Essential Fat", ESSENTIAL_FAT),
    CategoryRange::inclusive(6.0, 13.0, "Athletes", "Typical range for male athletes"),
    CategoryRange::inclusive(14.0, 17.0, "Fitness", FITNESS),
    CategoryRange::inclusive(18.0, 24.0, "Average", "Acceptable range for average men"),
    CategoryRange::inclusive(25.0, 100.0, "Obese", OBESE),
];

/// Body fat categories for women (%)
pub static BODY_FAT_CATEGORIES_FEMALE: [CategoryRange; 5] = [
    CategoryRange::inclusive(10.0, 13.0, "Essential Fat", ESSENTIAL_FAT),
    CategoryRange::inclusive(14.0, 20.0, "Athletes", "Typical range for female athletes"),
    CategoryRange::inclusive(21.0, 24.0, "Fitness", FITNESS),
    CategoryRange::inclusive(25.0, 31.0, "Average", "Acceptable range for average women"),
    CategoryRange::inclusive(32.0, 100.0, "Obese", OBESE),
];

/// Body fat table for the given gender
pub fn body_fat_categories(gender: Gender) -> &'static [CategoryRange] {
    match gender {
        Gender::Male => &BODY_FAT_CATEGORIES_MALE,
        Gender::Female => &BODY_FAT_CATEGORIES_FEMALE,
    }
}

/// BMR categories (Mifflin-St Jeor, kcal/day)
pub static BMR_CATEGORIES: [CategoryRange; 5] = [
    CategoryRange::below(0.0, 1200.0, "Low Metabolic Rate", "Resting needs under 1200 kcal/day"),
    CategoryRange::below(
        1200.0,
        1500.0,
        "Below Average",
        "Resting needs between 1200 and 1500 kcal/day",
    ),
    CategoryRange::below(1500.0, 1800.0, "Average", "Resting needs between 1500 and 1800 kcal/day"),
    CategoryRange::below(
        1800.0,
        2200.0,
        "Above Average",
        "Resting needs between 1800 and 2200 kcal/day",
    ),
    CategoryRange::below(
        2200.0,
        f64::INFINITY,
        "High Metabolic Rate",
        "Resting needs of 2200 kcal/day or more",
    ),
];

/// TDEE categories (kcal/day)
pub static TDEE_CATEGORIES: [CategoryRange; 4] = [
    CategoryRange::below(0.0, 1500.0, "Low Energy Needs", "Under 1500 kcal/day"),
    CategoryRange::below(1500.0, 2000.0, "Moderate Energy Needs", "Between 1500 and 2000 kcal/day"),
    CategoryRange::below(2000.0, 2500.0, "High Energy Needs", "Between 2000 and 2500 kcal/day"),
    CategoryRange::below(2500.0, f64::INFINITY, "Very High Energy Needs", "2500 kcal/day or more"),
];

/// A metric's category table, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryTable {
    Bmi,
    BodyFat(Gender),
    Bmr,
    Tdee,
}

impl CategoryTable {
    /// Look up a table by metric name; body fat also needs a gender
    pub fn from_name(name: &str, gender: Option<Gender>) -> CalcResult<Self> {
        match name.to_lowercase().replace('-', "_").as_str() {
            "bmi" => Ok(CategoryTable::Bmi),
            "body_fat" | "bodyfat" => gender
                .map(CategoryTable::BodyFat)
                .ok_or(CalcError::missing("gender")),
            "bmr" => Ok(CategoryTable::Bmr),
            "tdee" => Ok(CategoryTable::Tdee),
            _ => Err(CalcError::domain("metric", "must be one of: bmi, body_fat, bmr, tdee")),
        }
    }

    pub fn ranges(&self) -> &'static [CategoryRange] {
        match self {
            CategoryTable::Bmi => &BMI_CATEGORIES,
            CategoryTable::BodyFat(gender) => body_fat_categories(*gender),
            CategoryTable::Bmr => &BMR_CATEGORIES,
            CategoryTable::Tdee => &TDEE_CATEGORIES,
        }
    }

    /// Display rows for the table
    pub fn reference(&self) -> Vec<CategoryReference> {
        let suffix = match self {
            CategoryTable::BodyFat(_) => "%",
            _ => "",
        };
        reference_table(self.ranges(), suffix)
    }
}
