//! Configuration for the calculator binary.
//!
//! Supports YAML file and environment variable overrides.

use serde::Deserialize;
use std::path::Path;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV_VAR: &str = "CALCULATOR_CONFIG";
/// Environment variable overriding the comparison tolerance.
pub const TOLERANCE_ENV_VAR: &str = "CALCULATOR_TOLERANCE";

const DEFAULT_CONFIG_PATH: &str = "calculator.yaml";

/// Calculator configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Suite check configuration.
    pub check: CheckConfig,
    /// Environment overrides that were present but unusable.
    #[serde(skip)]
    rejected_overrides: Vec<RejectedOverride>,
}

/// An environment override that was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    /// Variable name.
    pub var: &'static str,
    /// Raw value as found in the environment.
    pub value: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `CALCULATOR_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Suite check configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Absolute tolerance when comparing expected values.
    pub tolerance: f64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self { tolerance: 1e-9 }
    }
}

impl CalculatorConfig {
    /// Load configuration from file and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file
    /// 3. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = std::env::var(CONFIG_PATH_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Overrides ignored by the last [`load`](Self::load).
    pub fn rejected_overrides(&self) -> &[RejectedOverride] {
        &self.rejected_overrides
    }

    /// Warn about ignored overrides.
    ///
    /// `load` runs before tracing is initialized, so callers report these once
    /// a subscriber is installed.
    pub fn log_rejected_overrides(&self) {
        for rejected in &self.rejected_overrides {
            tracing::warn!(value = %rejected.value, "ignoring invalid {}", rejected.var);
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(tolerance) = std::env::var(TOLERANCE_ENV_VAR) {
            self.apply_tolerance_override(&tolerance);
        }
    }

    fn apply_tolerance_override(&mut self, raw: &str) {
        match raw.parse::<f64>() {
            Ok(t) if t.is_finite() && t >= 0.0 => self.check.tolerance = t,
            _ => self.rejected_overrides.push(RejectedOverride {
                var: TOLERANCE_ENV_VAR,
                value: raw.to_string(),
            }),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
