//! fitcalc: command-line front end for the fitness calculator engine
//!
//! Usage:
//! ```bash
//! # BMI in metric units
//! fitcalc bmi --weight 70 --height 170
//!
//! # TDEE in imperial units, energy in kilojoules
//! fitcalc --weight-unit lbs --height-unit inches --energy-unit kJ \
//!     tdee --weight 154 --height 67 --age 30 --gender male --activity moderate
//!
//! # Goal projection with a custom activity
//! fitcalc activity add --file activities.json --name "Bike courier" --factor 2.0
//! fitcalc goal --current-weight 80 --target-weight 75 --height 170 --age 30 \
//!     --gender male --weeks 10 --activity custom:<id> --custom-activities activities.json
//! ```
//!
//! Results are printed to stdout as JSON; logs go to stderr.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use crate::commands::{Command, Outcome};
use crate::config::{CliConfig, LoggingConfig, UnitOverrides};
use fitness_calculator_shared::{EnergyUnit, HeightUnit, WeightUnit};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "fitcalc",
    version,
    about = "Unit-aware fitness calculators",
    long_about = "BMI, BMR, TDEE, body fat, ideal weight, one-rep max and goal projections in metric or imperial units."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Weight unit (kg or lbs), overrides configuration
    #[arg(long, global = true)]
    weight_unit: Option<WeightUnit>,

    /// Height and circumference unit (cm or inches), overrides configuration
    #[arg(long, global = true)]
    height_unit: Option<HeightUnit>,

    /// Energy unit (kcal or kJ), overrides configuration
    #[arg(long, global = true)]
    energy_unit: Option<EnergyUnit>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load()?;
    init_tracing(&config.logging, cli.verbose);

    let prefs = config.unit_preferences(UnitOverrides {
        weight: cli.weight_unit,
        height: cli.height_unit,
        energy: cli.energy_unit,
    });
    debug!(?prefs, "Resolved unit preferences");

    let pretty = cli.pretty || config.output.pretty;
    let (value, code) = match commands::run(cli.command, &prefs)? {
        Outcome::Success(value) => (value, ExitCode::SUCCESS),
        Outcome::Invalid(response) => (serde_json::to_value(response)?, ExitCode::from(2)),
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{}", rendered);

    Ok(code)
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| logging.level.as_str().into())
    };

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if logging.json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
