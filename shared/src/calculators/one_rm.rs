//! One-rep max (Epley)

use crate::errors::{CalcError, CalcResult};
use crate::health_metrics::{calculate_one_rep_max, training_loads, TrainingIntensity};
use crate::types::{OneRepMaxRequest, OneRepMaxResult, TrainingLoad};
use crate::units::{round_1, UnitPreferences};
use crate::validation::{require_measurement, require_reps};
use tracing::debug;

/// Estimate the one-rep max and its training-load table
///
/// The lifted weight stays in the caller's weight unit throughout.
pub fn compute_one_rm(
    request: &OneRepMaxRequest,
    prefs: &UnitPreferences,
) -> CalcResult<OneRepMaxResult> {
    let weight = require_measurement("weight", request.weight)?;
    let reps = require_reps(request.reps)?;
    let one_rep_max = calculate_one_rep_max(weight, reps)
        .ok_or_else(|| CalcError::domain("reps", "outside the Epley range"))?;

    let percentages = training_loads(one_rep_max)
        .into_iter()
        .map(|(percentage, load)| {
            let intensity = TrainingIntensity::from_percentage(percentage);
            TrainingLoad {
                percentage,
                weight: round_1(load),
                intensity,
                label: intensity.label(),
            }
        })
        .collect();

    debug!(weight, reps, one_rep_max, "Computed one-rep max");

    Ok(OneRepMaxResult {
        one_rep_max: round_1(one_rep_max),
        percentages,
        weight_unit: prefs.weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn request(weight: f64, reps: u32) -> OneRepMaxRequest {
        OneRepMaxRequest { weight, reps }
    }

    #[test]
    fn test_epley_estimate() {
        let result = compute_one_rm(&request(100.0, 5), &UnitPreferences::metric()).unwrap();
        assert_eq!(result.one_rep_max, 116.7);

        let top = result.percentages.last().unwrap();
        assert_eq!(top.percentage, 100);
        assert_eq!(top.weight, result.one_rep_max);
        assert_eq!(top.label, "Max Effort");
        assert_eq!(result.percentages[0].label, "Warm-up");
        assert_eq!(result.percentages[0].weight, 58.3);
    }

    #[test]
    fn test_weight_unit_is_not_converted() {
        let result = compute_one_rm(&request(225.0, 3), &UnitPreferences::imperial()).unwrap();
        assert_eq!(result.one_rep_max, 247.5);
    }

    #[test]
    fn test_reps_outside_range() {
        let prefs = UnitPreferences::metric();
        assert!(compute_one_rm(&request(100.0, 0), &prefs).unwrap_err().is_missing_input());
        assert_eq!(
            compute_one_rm(&request(100.0, 16), &prefs).unwrap_err().field(),
            Some("reps")
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: training loads increase with the percentage
        #[test]
        fn prop_loads_are_monotonic(weight in 1.0f64..500.0, reps in 1u32..=15) {
            let result =
                compute_one_rm(&request(weight, reps), &UnitPreferences::metric()).unwrap();
            for pair in result.percentages.windows(2) {
                prop_assert!(pair[0].weight <= pair[1].weight);
            }
            prop_assert_eq!(result.percentages.len(), 10);
        }
    }
}
