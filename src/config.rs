//! TOML configuration document.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level wellcast configuration.
///
/// ```toml
/// [forecast]
/// data_freq = "monthly"
/// eur_method = "precise"
/// ratio_interval = 15
///
/// [chart]
/// phases = ["oil", "gas"]
/// ratios = ["gas/oil"]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WellcastConfig {
    /// Forecast evaluation settings.
    #[serde(default)]
    pub forecast: ForecastToml,

    /// Chart assembly settings.
    #[serde(default)]
    pub chart: ChartToml,
}

impl WellcastConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse TOML config")
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&toml_str)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastToml {
    #[serde(default = "default_data_freq")]
    pub data_freq: String,
    #[serde(default = "default_eur_method")]
    pub eur_method: String,
    #[serde(default = "default_ratio_eur_method")]
    pub ratio_eur_method: String,
    #[serde(default = "default_ratio_interval")]
    pub ratio_interval: u32,
    #[serde(default)]
    pub stack_multiplier: bool,
}

impl Default for ForecastToml {
    fn default() -> Self {
        Self {
            data_freq: default_data_freq(),
            eur_method: default_eur_method(),
            ratio_eur_method: default_ratio_eur_method(),
            ratio_interval: default_ratio_interval(),
            stack_multiplier: false,
        }
    }
}

fn default_data_freq() -> String {
    "daily".to_string()
}
fn default_eur_method() -> String {
    "approximate".to_string()
}
fn default_ratio_eur_method() -> String {
    "interval".to_string()
}
fn default_ratio_interval() -> u32 {
    wellcast_forecast::RATIO_EUR_INTERVAL
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartToml {
    #[serde(default = "default_phases")]
    pub phases: Vec<String>,
    #[serde(default)]
    pub ratios: Vec<String>,
    #[serde(default = "default_true")]
    pub include_forecast: bool,
}

impl Default for ChartToml {
    fn default() -> Self {
        Self {
            phases: default_phases(),
            ratios: Vec::new(),
            include_forecast: true,
        }
    }
}

fn default_phases() -> Vec<String> {
    ["oil", "gas", "water"].map(String::from).to_vec()
}
fn default_true() -> bool {
    true
}
