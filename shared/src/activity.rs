//! Activity multipliers for TDEE and goal projections
//!
//! Five fixed lifestyle levels plus user-defined custom activities. Custom
//! activities belong to the caller: the engine only reads them when resolving
//! a selection and never stores them.

use crate::errors::{CalcError, CalcResult};
use crate::validation::validate_activity_factor;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;
use validator::Validate;

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    #[serde(alias = "light")]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[serde(alias = "moderate")]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    #[serde(alias = "active")]
    VeryActive,
    /// Very hard exercise, physical job
    #[serde(alias = "very_active_job", alias = "veryActive")]
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Stable key used in serialized output
    pub fn key(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }

    /// Get a human-readable description
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little/no exercise)",
            ActivityLevel::LightlyActive => "Light (light exercise 1-3 days/week)",
            ActivityLevel::ModeratelyActive => "Moderate (moderate exercise 3-5 days/week)",
            ActivityLevel::VeryActive => "Active (hard exercise 6-7 days/week)",
            ActivityLevel::ExtraActive => "Very Active (very hard exercise, physical job)",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" | "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "moderate" | "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "active" | "very_active" => Ok(ActivityLevel::VeryActive),
            "veryactive" | "extra_active" => Ok(ActivityLevel::ExtraActive),
            "" => Err(CalcError::missing("activity_level")),
            _ => Err(CalcError::domain(
                "activity_level",
                "must be one of: sedentary, lightly_active, moderately_active, very_active, extra_active",
            )),
        }
    }
}

// ============================================================================
// Custom Activities
// ============================================================================

/// User-defined activity multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CustomActivity {
    pub id: String,
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(range(min = 1.0, max = 3.0))]
    pub factor: f64,
}

/// Session-scoped list of custom activities, owned by the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomActivityRegistry {
    activities: Vec<CustomActivity>,
}

impl CustomActivityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add a custom activity, returning the stored entry
    pub fn add(&mut self, name: &str, factor: f64) -> CalcResult<&CustomActivity> {
        let factor = validate_activity_factor(factor)?;
        let activity = CustomActivity {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            factor,
        };

        if let Err(errors) = activity.validate() {
            if errors.field_errors().contains_key("name") && activity.name.is_empty() {
                return Err(CalcError::missing("activity_name"));
            }
            return Err(CalcError::domain("activity_name", "must be at most 64 characters"));
        }

        self.activities.push(activity);
        Ok(&self.activities[self.activities.len() - 1])
    }

    /// Remove a custom activity by id
    pub fn remove(&mut self, id: &str) -> Option<CustomActivity> {
        let index = self.activities.iter().position(|a| a.id == id)?;
        Some(self.activities.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&CustomActivity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn as_slice(&self) -> &[CustomActivity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

// ============================================================================
// Activity Selection
// ============================================================================

/// The activity multiplier a caller picked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivitySelection {
    /// One of the five fixed levels
    Preset(ActivityLevel),
    /// A raw multiplier in [1.0, 3.0]
    Factor(f64),
    /// A custom activity looked up by id
    Custom { custom: String },
}

impl Default for ActivitySelection {
    fn default() -> Self {
        ActivitySelection::Preset(ActivityLevel::default())
    }
}

impl From<ActivityLevel> for ActivitySelection {
    fn from(level: ActivityLevel) -> Self {
        ActivitySelection::Preset(level)
    }
}

impl ActivitySelection {
    /// Resolve the selection to a multiplier
    ///
    /// Custom factors are checked like raw ones. An unknown custom id falls
    /// back to the sedentary multiplier.
    pub fn resolve_factor(&self, custom_activities: &[CustomActivity]) -> CalcResult<f64> {
        match self {
            ActivitySelection::Preset(level) => Ok(level.multiplier()),
            ActivitySelection::Factor(factor) => validate_activity_factor(*factor),
            ActivitySelection::Custom { custom } => {
                match custom_activities.iter().find(|a| &a.id == custom) {
                    Some(activity) => validate_activity_factor(activity.factor),
                    None => {
                        warn!(
                            custom_id = %custom,
                            "Custom activity not found, using sedentary multiplier"
                        );
                        Ok(ActivityLevel::Sedentary.multiplier())
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_multipliers() {
        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|l| l.multiplier()).collect();
        assert_eq!(factors, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[rstest]
    #[case("sedentary", ActivityLevel::Sedentary)]
    #[case("light", ActivityLevel::LightlyActive)]
    #[case("Moderately_Active", ActivityLevel::ModeratelyActive)]
    #[case("very-active", ActivityLevel::VeryActive)]
    #[case("veryActive", ActivityLevel::ExtraActive)]
    fn test_activity_level_parsing(#[case] input: &str, #[case] expected: ActivityLevel) {
        assert_eq!(input.parse::<ActivityLevel>().unwrap(), expected);
    }

    #[test]
    fn test_invalid_activity_level() {
        assert!("".parse::<ActivityLevel>().unwrap_err().is_missing_input());
        assert!(!"couch".parse::<ActivityLevel>().unwrap_err().is_missing_input());
    }

    #[test]
    fn test_registry_add_and_remove() {
        let mut registry = CustomActivityRegistry::new();
        let id = registry.add("Construction Worker", 1.8).unwrap().id.clone();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&id).unwrap().name, "Construction Worker");

        let second = registry.add("Marathon block", 2.2).unwrap().id.clone();
        assert_ne!(id, second);

        let removed = registry.remove(&id).unwrap();
        assert_eq!(removed.factor, 1.8);
        assert!(registry.get(&id).is_none());
        assert!(registry.remove(&id).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[rstest]
    #[case("Too low", 0.9)]
    #[case("Too high", 3.1)]
    fn test_registry_rejects_out_of_range_factor(#[case] name: &str, #[case] factor: f64) {
        let mut registry = CustomActivityRegistry::new();
        let err = registry.add(name, factor).unwrap_err();
        assert_eq!(err.field(), Some("activity_factor"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_rejects_nan_factor() {
        let mut registry = CustomActivityRegistry::new();
        let err = registry.add("Nap", f64::NAN).unwrap_err();
        assert_eq!(err.field(), Some("activity_factor"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_rejects_long_name() {
        let mut registry = CustomActivityRegistry::new();
        let err = registry.add(&"x".repeat(65), 1.5).unwrap_err();
        assert_eq!(err.field(), Some("activity_name"));
        assert!(!err.is_missing_input());
    }

    #[test]
    fn test_registry_rejects_blank_name() {
        let mut registry = CustomActivityRegistry::new();
        let err = registry.add("   ", 1.5).unwrap_err();
        assert_eq!(err, CalcError::missing("activity_name"));
    }

    #[test]
    fn test_registry_accepts_bounds() {
        let mut registry = CustomActivityRegistry::new();
        assert!(registry.add("Floor", 1.0).is_ok());
        assert!(registry.add("Ceiling", 3.0).is_ok());
    }

    #[test]
    fn test_resolve_selection() {
        let mut registry = CustomActivityRegistry::new();
        let id = registry.add("Rowing", 2.0).unwrap().id.clone();

        let preset = ActivitySelection::from(ActivityLevel::VeryActive);
        assert_eq!(preset.resolve_factor(registry.as_slice()), Ok(1.725));

        let custom = ActivitySelection::Custom { custom: id };
        assert_eq!(custom.resolve_factor(registry.as_slice()), Ok(2.0));

        let unknown = ActivitySelection::Custom { custom: "gone".to_string() };
        assert_eq!(unknown.resolve_factor(registry.as_slice()), Ok(1.2));

        assert_eq!(ActivitySelection::Factor(1.6).resolve_factor(&[]), Ok(1.6));
        assert!(ActivitySelection::Factor(3.5).resolve_factor(&[]).is_err());
    }

    #[rstest]
    #[case(10.0)]
    #[case(0.5)]
    #[case(f64::NAN)]
    fn test_resolve_rejects_invalid_caller_factor(#[case] factor: f64) {
        let list = vec![CustomActivity {
            id: "x".to_string(),
            name: "Edited by hand".to_string(),
            factor,
        }];
        let selection = ActivitySelection::Custom { custom: "x".to_string() };
        let err = selection.resolve_factor(&list).unwrap_err();
        assert_eq!(err.field(), Some("activity_factor"));
    }

    #[test]
    fn test_selection_serde_forms() {
        let preset: ActivitySelection = serde_json::from_str(r#""moderate""#).unwrap();
        assert_eq!(preset, ActivitySelection::Preset(ActivityLevel::ModeratelyActive));

        let factor: ActivitySelection = serde_json::from_str("1.55").unwrap();
        assert_eq!(factor, ActivitySelection::Factor(1.55));

        let custom: ActivitySelection = serde_json::from_str(r#"{"custom":"abc"}"#).unwrap();
        assert_eq!(custom, ActivitySelection::Custom { custom: "abc".to_string() });
    }
}
