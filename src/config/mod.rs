//! Configuration types for the conversion pipelines.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::parsers::TokenFormat;

/// Errors that can occur while loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration for the plot pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Minimum distance allowed between any two plotted points
    #[serde(default)]
    pub min_distance: f32,

    /// Delimiter convention of the raw export
    #[serde(default = "default_plot_format")]
    pub format: TokenFormat,
}

fn default_plot_format() -> TokenFormat {
    TokenFormat::UnderscorePairs
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            min_distance: 0.0,
            format: default_plot_format(),
        }
    }
}

/// Configuration for the array pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayConfig {
    /// Largest radius that fits the target surface
    #[serde(default = "default_max_radius")]
    pub max_radius: f32,

    /// Delimiter convention of the raw export
    #[serde(default = "default_array_format")]
    pub format: TokenFormat,
}

fn default_max_radius() -> f32 {
    100.0
}

fn default_array_format() -> TokenFormat {
    TokenFormat::CommaStream
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            max_radius: default_max_radius(),
            format: default_array_format(),
        }
    }
}

/// Main pipeline configuration combining all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub plot: PlotConfig,

    #[serde(default)]
    pub array: ArrayConfig,
}

impl PipelineConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: PipelineConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a YAML file.
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
