//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading analytics
//! thresholds from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AnalyticsConfig, WindowConfig};

/// Loads and validates analytics configuration.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/analytics.yaml").unwrap();
/// println!("History window: {} days", loader.config().window.history_days);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AnalyticsConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or mistyped values
    /// - A window length is not positive, or the risk bands are out of order
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let config: AnalyticsConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &AnalyticsConfig) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: "<inline>".to_string(),
            message,
        };

        for (name, days) in [
            ("history_days", config.window.history_days),
            ("risk_lookback_days", config.window.risk_lookback_days),
        ] {
            if !(1..=WindowConfig::MAX_DAYS).contains(&days) {
                return Err(parse_error(format!(
                    "{} ({}) must be between 1 and {}",
                    name,
                    days,
                    WindowConfig::MAX_DAYS
                )));
            }
        }
        if config.scoring.high_risk_below > config.scoring.medium_risk_below {
            return Err(parse_error(format!(
                "high_risk_below ({}) exceeds medium_risk_below ({})",
                config.scoring.high_risk_below, config.scoring.medium_risk_below
            )));
        }
        if config.absenteeism.medium_at > config.absenteeism.high_at {
            return Err(parse_error(format!(
                "medium_at ({}) exceeds high_at ({})",
                config.absenteeism.medium_at, config.absenteeism.high_at
            )));
        }
        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AnalyticsConfig {
        self.config
    }
}
