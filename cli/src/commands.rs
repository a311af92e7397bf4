//! Subcommand handlers
//!
//! Each handler builds a calculator request from its arguments, runs the
//! engine and hands back the result as JSON for `main` to print.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use fitness_calculator_shared::{
    compute_bmi, compute_bmr, compute_body_fat, compute_goal, compute_goal_from,
    compute_ideal_weight, compute_one_rm, compute_tdee, convert_energy, convert_height,
    convert_weight, ActivityLevel, ActivitySelection, BmiRequest, BmrRequest, BodyFatRequest,
    CalcError, CategoryTable, CustomActivityRegistry, EnergyUnit, ErrorResponse, Gender,
    GoalRequest, HeightUnit, IdealWeightRequest, OneRepMaxRequest, TdeeRequest, UnitPreferences,
    WeightUnit,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Subcommand)]
pub enum Command {
    /// Body Mass Index
    Bmi {
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        height: f64,
    },

    /// Basal Metabolic Rate (Mifflin-St Jeor, Harris-Benedict, Katch-McArdle)
    Bmr {
        #[command(flatten)]
        person: PersonArgs,

        /// Body fat percentage, enables Katch-McArdle
        #[arg(long)]
        body_fat: Option<f64>,
    },

    /// Total Daily Energy Expenditure
    Tdee {
        #[command(flatten)]
        person: PersonArgs,

        #[command(flatten)]
        activity: ActivityArgs,
    },

    /// Body fat percentage (US Navy method), circumferences in the height unit
    BodyFat {
        #[arg(long)]
        gender: Gender,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        waist: f64,
        #[arg(long)]
        neck: f64,
        /// Required for women
        #[arg(long)]
        hip: Option<f64>,
    },

    /// Ideal body weight (Devine, Robinson, Miller, Hamwi)
    IdealWeight {
        #[arg(long)]
        height: f64,
        #[arg(long)]
        gender: Gender,
    },

    /// One-rep max (Epley) with a training-load table
    OneRm {
        #[arg(long)]
        weight: f64,
        /// Repetitions performed (1-15)
        #[arg(long)]
        reps: u32,
    },

    /// Daily calorie target to reach a goal weight
    Goal {
        #[arg(long)]
        current_weight: f64,
        #[arg(long)]
        target_weight: f64,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        gender: Gender,

        #[command(flatten)]
        activity: ActivityArgs,

        /// Timeframe in weeks (1-104)
        #[arg(long)]
        weeks: u32,

        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },

    /// Convert a value between units
    Convert {
        #[arg(value_enum)]
        kind: UnitKind,
        value: f64,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },

    /// Show a category reference table
    Categories {
        /// bmi, body_fat, bmr or tdee
        metric: String,
        /// Needed for body_fat
        #[arg(long)]
        gender: Option<Gender>,
    },

    /// Manage custom activities
    Activity {
        #[command(subcommand)]
        action: ActivityCommand,
    },
}

#[derive(Subcommand)]
pub enum ActivityCommand {
    /// List preset levels and custom activities
    List {
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Add a custom activity to a JSON file
    Add {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        name: String,
        /// Multiplier between 1.0 and 3.0
        #[arg(long)]
        factor: f64,
    },

    /// Remove a custom activity from a JSON file
    Remove {
        #[arg(long)]
        file: PathBuf,
        id: String,
    },
}

#[derive(Args)]
pub struct PersonArgs {
    #[arg(long)]
    pub weight: f64,
    #[arg(long)]
    pub height: f64,
    #[arg(long)]
    pub age: u32,
    #[arg(long)]
    pub gender: Gender,
}

#[derive(Args)]
pub struct ActivityArgs {
    /// Preset name, a multiplier, or custom:<id>
    #[arg(long, default_value = "sedentary", value_parser = parse_activity)]
    pub activity: ActivitySelection,

    /// JSON file holding custom activities
    #[arg(long)]
    pub custom_activities: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum UnitKind {
    Weight,
    Height,
    Energy,
}

/// Parse `--activity`: a preset name, a bare multiplier or `custom:<id>`
pub fn parse_activity(value: &str) -> Result<ActivitySelection, CalcError> {
    if let Some(id) = value.strip_prefix("custom:") {
        return Ok(ActivitySelection::Custom {
            custom: id.to_string(),
        });
    }
    if let Ok(factor) = value.parse::<f64>() {
        return Ok(ActivitySelection::Factor(factor));
    }
    value.parse::<ActivityLevel>().map(ActivitySelection::Preset)
}

fn load_registry(path: Option<&Path>) -> Result<CustomActivityRegistry> {
    let Some(path) = path else {
        return Ok(CustomActivityRegistry::new());
    };
    if !path.exists() {
        debug!(path = %path.display(), "Custom activity file not found, starting empty");
        return Ok(CustomActivityRegistry::new());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid custom activity file {}", path.display()))
}

fn save_registry(path: &Path, registry: &CustomActivityRegistry) -> Result<()> {
    let contents = serde_json::to_string_pretty(registry)?;
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

/// Outcome of a command: a result to print or an input problem to report
pub enum Outcome {
    Success(Value),
    Invalid(ErrorResponse),
}

fn outcome<T: Serialize>(result: Result<T, CalcError>) -> Result<Outcome> {
    match result {
        Ok(value) => Ok(Outcome::Success(serde_json::to_value(value)?)),
        Err(err) => Ok(Outcome::Invalid(ErrorResponse::from(&err))),
    }
}

/// Run one subcommand with the resolved unit preferences
pub fn run(command: Command, prefs: &UnitPreferences) -> Result<Outcome> {
    match command {
        Command::Bmi { weight, height } => {
            outcome(compute_bmi(&BmiRequest { weight, height }, prefs))
        }

        Command::Bmr { person, body_fat } => {
            let request = BmrRequest {
                weight: person.weight,
                height: person.height,
                age: person.age,
                gender: Some(person.gender),
                body_fat,
            };
            outcome(compute_bmr(&request, prefs))
        }

        Command::Tdee { person, activity } => {
            let registry = load_registry(activity.custom_activities.as_deref())?;
            let request = TdeeRequest {
                weight: person.weight,
                height: person.height,
                age: person.age,
                gender: Some(person.gender),
                activity: activity.activity,
            };
            outcome(compute_tdee(&request, registry.as_slice(), prefs))
        }

        Command::BodyFat {
            gender,
            height,
            waist,
            neck,
            hip,
        } => {
            let request = BodyFatRequest {
                gender: Some(gender),
                height,
                waist,
                neck,
                hip,
            };
            outcome(compute_body_fat(&request, prefs))
        }

        Command::IdealWeight { height, gender } => {
            let request = IdealWeightRequest {
                height,
                gender: Some(gender),
            };
            outcome(compute_ideal_weight(&request, prefs))
        }

        Command::OneRm { weight, reps } => {
            outcome(compute_one_rm(&OneRepMaxRequest { weight, reps }, prefs))
        }

        Command::Goal {
            current_weight,
            target_weight,
            height,
            age,
            gender,
            activity,
            weeks,
            start_date,
        } => {
            let registry = load_registry(activity.custom_activities.as_deref())?;
            let request = GoalRequest {
                current_weight,
                target_weight,
                height,
                age,
                gender: Some(gender),
                activity: activity.activity,
                timeframe_weeks: weeks,
            };
            let result = match start_date {
                Some(start) => compute_goal_from(&request, registry.as_slice(), prefs, start),
                None => compute_goal(&request, registry.as_slice(), prefs),
            };
            outcome(result)
        }

        Command::Convert {
            kind,
            value,
            from,
            to,
        } => outcome(convert(kind, value, &from, &to)),

        Command::Categories { metric, gender } => {
            outcome(CategoryTable::from_name(&metric, gender).map(|table| table.reference()))
        }

        Command::Activity { action } => run_activity(action),
    }
}

fn convert(kind: UnitKind, value: f64, from: &str, to: &str) -> Result<Value, CalcError> {
    let converted = match kind {
        UnitKind::Weight => {
            let (from, to) = (from.parse::<WeightUnit>()?, to.parse::<WeightUnit>()?);
            json!({ "value": convert_weight(value, from, to), "unit": to })
        }
        UnitKind::Height => {
            let (from, to) = (from.parse::<HeightUnit>()?, to.parse::<HeightUnit>()?);
            json!({ "value": convert_height(value, from, to), "unit": to })
        }
        UnitKind::Energy => {
            let (from, to) = (from.parse::<EnergyUnit>()?, to.parse::<EnergyUnit>()?);
            json!({ "value": convert_energy(value, from, to), "unit": to })
        }
    };
    Ok(converted)
}

fn run_activity(action: ActivityCommand) -> Result<Outcome> {
    match action {
        ActivityCommand::List { file } => {
            let registry = load_registry(file.as_deref())?;
            let presets: Vec<Value> = ActivityLevel::ALL
                .iter()
                .map(|level| {
                    json!({
                        "key": level.key(),
                        "label": level.label(),
                        "factor": level.multiplier(),
                    })
                })
                .collect();
            Ok(Outcome::Success(json!({ "presets": presets, "custom": registry })))
        }

        ActivityCommand::Add { file, name, factor } => {
            let mut registry = load_registry(Some(&file))?;
            let added = match registry.add(&name, factor) {
                Ok(activity) => activity.clone(),
                Err(err) => return Ok(Outcome::Invalid(ErrorResponse::from(&err))),
            };
            save_registry(&file, &registry)?;
            info!(id = %added.id, name = %added.name, "Added custom activity");
            outcome(Ok::<_, CalcError>(added))
        }

        ActivityCommand::Remove { file, id } => {
            let mut registry = load_registry(Some(&file))?;
            let removed = registry.remove(&id);
            if removed.is_some() {
                save_registry(&file, &registry)?;
            }
            Ok(Outcome::Success(json!({ "removed": removed })))
        }
    }
}
