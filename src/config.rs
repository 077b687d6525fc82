//! Configuration management for PixelGauge
//!
//! Provides configuration loading, saving, and validation for analyzer
//! thresholds and output formatting.

use crate::errors::MetricsError;
use crate::metrics::AnalyzerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PixelGaugeConfig {
    pub metrics: MetricsConfig,
    pub output: OutputConfig,
}

/// Metric analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Minimum combined quality score for a report to count as acceptable (0.0-1.0)
    pub min_quality_score: f64,
}

/// Output formatting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places for formatted metric values
    pub precision: usize,
    /// Pretty-print JSON output in the CLI
    pub json_pretty: bool,
}

impl Default for PixelGaugeConfig {
    fn default() -> Self {
        Self {
            metrics: MetricsConfig {
                min_quality_score: 0.5,
            },
            output: OutputConfig {
                precision: 3,
                json_pretty: false,
            },
        }
    }
}

impl PixelGaugeConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, MetricsError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            MetricsError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        let config: PixelGaugeConfig = toml::from_str(&contents).map_err(|e| {
            MetricsError::ConfigError(format!("Failed to parse config file: {}", e))
        })?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MetricsError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                MetricsError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self).map_err(|e| {
            MetricsError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, toml_string).map_err(|e| {
            MetricsError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get default config file path
    pub fn default_path() -> PathBuf {
        PathBuf::from("pixelgauge.toml")
    }

    /// Load from default location or create with defaults
    pub fn load_or_default() -> Self {
        Self::load_from_file(Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.metrics.min_quality_score) {
            return Err("Minimum quality score must be between 0.0 and 1.0".to_string());
        }

        if self.output.precision == 0 || self.output.precision > 9 {
            return Err("Output precision must be between 1 and 9".to_string());
        }

        Ok(())
    }

    /// Analyzer configuration derived from this file-level config.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            min_quality_score: self.metrics.min_quality_score,
            precision: self.output.precision,
        }
    }
}
