//! Configuration models and loaders for the Glide Planner.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Location probed when no configuration path is given.
pub const DEFAULT_CONFIG_PATH: &str = "configs/planner.toml";

/// Default OpenFlights airport dataset.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/jpatokal/openflights/master/data/airports.dat";

/// Top-level planner settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PlannerConfig {
    pub dataset: DatasetConfig,
    pub planner: SelectionConfig,
    pub output: OutputConfig,
}

/// Where the airport dataset lives and which region to keep.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    pub path: String,
    /// Region code matched against the dataset's DST column (`E` = Europe).
    pub region: String,
    pub source_url: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: "data/airports.dat".to_string(),
            region: "E".to_string(),
            source_url: DEFAULT_DATASET_URL.to_string(),
        }
    }
}

/// Algorithm choice and per-algorithm sampling steps.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    /// 1 = greedy nearest, 2 = fixed interval, 3 = midpoint lookahead.
    pub algorithm: i64,
    pub greedy_step_km: f64,
    pub interval_step_km: f64,
    pub lookahead_step_km: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            algorithm: 1,
            greedy_step_km: 1.0,
            interval_step_km: 10.0,
            lookahead_step_km: 1.0,
        }
    }
}

impl SelectionConfig {
    /// Sampling step for the numeric algorithm selector.
    pub fn step_for(&self, selector: i64) -> f64 {
        match selector {
            2 => self.interval_step_km,
            3 => self.lookahead_step_km,
            _ => self.greedy_step_km,
        }
    }
}

/// Plan rendering format.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load planner settings from a TOML or YAML file, chosen by extension.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PlannerConfig, ConfigError> {
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Load the given file, else [`DEFAULT_CONFIG_PATH`] when it exists, else defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<PlannerConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_PATH).is_file() => load_config(DEFAULT_CONFIG_PATH),
        None => Ok(PlannerConfig::default()),
    }
}
