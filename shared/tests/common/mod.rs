//! Common fixtures for integration tests
//!
//! One reference person described in both unit systems, so every calculator
//! can be checked for agreement between metric and imperial input.

#![allow(dead_code)]

use fitness_calculator_shared::{
    ActivityLevel, BmiRequest, BmrRequest, BodyFatRequest, Gender, GoalRequest,
    IdealWeightRequest, TdeeRequest, UnitPreferences,
};

/// Reference person in metric units
pub struct TestPerson {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
}

impl TestPerson {
    pub fn reference() -> Self {
        Self {
            weight_kg: 70.0,
            height_cm: 170.0,
            age: 30,
            gender: Gender::Male,
        }
    }

    /// Weight and height in the units of `prefs`
    pub fn measurements(&self, prefs: &UnitPreferences) -> (f64, f64) {
        (
            prefs.weight.from_kg(self.weight_kg),
            prefs.height.from_cm(self.height_cm),
        )
    }

    pub fn bmi_request(&self, prefs: &UnitPreferences) -> BmiRequest {
        let (weight, height) = self.measurements(prefs);
        BmiRequest { weight, height }
    }

    pub fn bmr_request(&self, prefs: &UnitPreferences) -> BmrRequest {
        let (weight, height) = self.measurements(prefs);
        BmrRequest {
            weight,
            height,
            age: self.age,
            gender: Some(self.gender),
            body_fat: None,
        }
    }

    pub fn tdee_request(&self, prefs: &UnitPreferences, level: ActivityLevel) -> TdeeRequest {
        let (weight, height) = self.measurements(prefs);
        TdeeRequest {
            weight,
            height,
            age: self.age,
            gender: Some(self.gender),
            activity: level.into(),
        }
    }

    pub fn ideal_weight_request(&self, prefs: &UnitPreferences) -> IdealWeightRequest {
        IdealWeightRequest {
            height: prefs.height.from_cm(self.height_cm),
            gender: Some(self.gender),
        }
    }

    pub fn goal_request(
        &self,
        prefs: &UnitPreferences,
        target_kg: f64,
        timeframe_weeks: u32,
    ) -> GoalRequest {
        let (current_weight, height) = self.measurements(prefs);
        GoalRequest {
            current_weight,
            target_weight: prefs.weight.from_kg(target_kg),
            height,
            age: self.age,
            gender: Some(self.gender),
            activity: ActivityLevel::ModeratelyActive.into(),
            timeframe_weeks,
        }
    }
}

/// Navy method request from centimetre measurements
pub fn body_fat_request(
    prefs: &UnitPreferences,
    gender: Gender,
    height_cm: f64,
    waist_cm: f64,
    neck_cm: f64,
    hip_cm: Option<f64>,
) -> BodyFatRequest {
    let length = |cm: f64| prefs.height.from_cm(cm);
    BodyFatRequest {
        gender: Some(gender),
        height: length(height_cm),
        waist: length(waist_cm),
        neck: length(neck_cm),
        hip: hip_cm.map(length),
    }
}

/// Both unit systems, for table-driven tests
pub fn both_unit_systems() -> [UnitPreferences; 2] {
    [UnitPreferences::metric(), UnitPreferences::imperial()]
}
