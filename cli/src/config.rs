//! Configuration management for fitcalc
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FC__)

use anyhow::{Context, Result};
use fitness_calculator_shared::{EnergyUnit, HeightUnit, UnitPreferences, WeightUnit};
use serde::{Deserialize, Serialize};
use std::env;

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub units: UnitPreferences,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    pub level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON results
    pub pretty: bool,
}

/// Unit flags given on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitOverrides {
    pub weight: Option<WeightUnit>,
    pub height: Option<HeightUnit>,
    pub energy: Option<EnergyUnit>,
}

impl CliConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FC__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        Self::load_from(&format!("config/{}.toml", env))
    }

    /// Load configuration using a specific config file (which may be absent)
    pub fn load_from(config_file: &str) -> Result<Self> {
        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&CliConfig::default())?)
            .add_source(config::File::with_name(config_file).required(false))
            // e.g., FC__UNITS__WEIGHT=lbs sets units.weight
            .add_source(config::Environment::with_prefix("FC").separator("__"))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", config_file))?;

        config
            .try_deserialize()
            .context("Invalid fitcalc configuration")
    }

    /// Configured unit preferences with command-line flags applied on top
    pub fn unit_preferences(&self, overrides: UnitOverrides) -> UnitPreferences {
        UnitPreferences {
            weight: overrides.weight.unwrap_or(self.units.weight),
            height: overrides.height.unwrap_or(self.units.height),
            energy: overrides.energy.unwrap_or(self.units.energy),
        }
    }
}
