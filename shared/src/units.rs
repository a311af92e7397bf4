//! Unit conversion module
//!
//! Every calculator works on canonical metric values (kg, cm, kcal) and only
//! converts on the way in and on the way out.
//!
//! # Design Principles
//!
//! 1. **Canonical Metric**: formulas only ever see kg, cm and kcal
//! 2. **Type Safety**: Units are explicit in types, not just f64
//! 3. **Conversion at Boundaries**: Convert on input/output, not in business logic
//! 4. **No Rounding**: Conversions are exact; rounding happens once, for display

use crate::errors::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pounds in one kilogram
pub const LBS_PER_KG: f64 = 2.20462;

/// Centimeters in one inch
pub const CM_PER_INCH: f64 = 2.54;

/// Kilojoules in one kilocalorie
pub const KJ_PER_KCAL: f64 = 4.184;

// ============================================================================
// Weight Units
// ============================================================================

/// Weight unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value / LBS_PER_KG,
        }
    }

    /// Convert from kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg * LBS_PER_KG,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Ok(WeightUnit::Lbs),
            _ => Err(CalcError::InvalidUnit(format!("Unknown weight unit: {}", s))),
        }
    }
}

/// Convert a weight between two units
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    if from == to {
        return value;
    }
    to.from_kg(from.to_kg(value))
}

// ============================================================================
// Height/Length Units
// ============================================================================

/// Height (and body circumference) unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Inches,
}

impl HeightUnit {
    /// Convert from this unit to centimeters
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::Inches => value * CM_PER_INCH,
        }
    }

    /// Convert from centimeters to this unit
    pub fn from_cm(&self, cm: f64) -> f64 {
        match self {
            HeightUnit::Cm => cm,
            HeightUnit::Inches => cm / CM_PER_INCH,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Inches => "in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for HeightUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Cm),
            "in" | "inch" | "inches" => Ok(HeightUnit::Inches),
            _ => Err(CalcError::InvalidUnit(format!("Unknown height unit: {}", s))),
        }
    }
}

/// Convert a height or circumference between two units
pub fn convert_height(value: f64, from: HeightUnit, to: HeightUnit) -> f64 {
    if from == to {
        return value;
    }
    to.from_cm(from.to_cm(value))
}

// ============================================================================
// Energy Units
// ============================================================================

/// Energy unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EnergyUnit {
    #[default]
    #[serde(rename = "kcal")]
    Kcal,
    #[serde(rename = "kJ", alias = "kj")]
    Kj,
}

impl EnergyUnit {
    /// Convert from this unit to kcal
    pub fn to_kcal(&self, value: f64) -> f64 {
        match self {
            EnergyUnit::Kcal => value,
            EnergyUnit::Kj => value / KJ_PER_KCAL,
        }
    }

    /// Convert from kcal to this unit
    pub fn from_kcal(&self, kcal: f64) -> f64 {
        match self {
            EnergyUnit::Kcal => kcal,
            EnergyUnit::Kj => kcal * KJ_PER_KCAL,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            EnergyUnit::Kcal => "kcal",
            EnergyUnit::Kj => "kJ",
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for EnergyUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kcal" | "cal" | "calories" => Ok(EnergyUnit::Kcal),
            "kj" | "kilojoule" | "kilojoules" => Ok(EnergyUnit::Kj),
            _ => Err(CalcError::InvalidUnit(format!("Unknown energy unit: {}", s))),
        }
    }
}

/// Convert an energy amount between two units
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    if from == to {
        return value;
    }
    to.from_kcal(from.to_kcal(value))
}

// ============================================================================
// Caller Unit Preferences
// ============================================================================

/// Unit preferences supplied by the caller with every calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UnitPreferences {
    pub weight: WeightUnit,
    pub height: HeightUnit,
    pub energy: EnergyUnit,
}

impl UnitPreferences {
    /// Create metric preferences (kg, cm, kcal)
    pub fn metric() -> Self {
        Self::default()
    }

    /// Create imperial preferences (lbs, inches, kcal)
    pub fn imperial() -> Self {
        Self {
            weight: WeightUnit::Lbs,
            height: HeightUnit::Inches,
            energy: EnergyUnit::Kcal,
        }
    }

    /// Override the energy unit
    pub fn with_energy(mut self, energy: EnergyUnit) -> Self {
        self.energy = energy;
        self
    }
}

// ============================================================================
// Display Rounding
// ============================================================================

/// Round to one decimal place for display
pub fn round_1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places for display
pub fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
