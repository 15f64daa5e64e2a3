//! Configuration loading from bootdiff.toml
//!
//! Options can be specified in a `bootdiff.toml` file, discovered by
//! walking up from the current directory. CLI flags override config file
//! values, which override built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bootdiff configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BootdiffConfig {
    /// Resampling configuration.
    #[serde(default)]
    pub resampling: ResamplingConfig,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Resampling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResamplingConfig {
    /// Number of resampling iterations.
    #[serde(default = "default_num_resamples")]
    pub num_resamples: usize,
    /// Confidence level (0.0 to 1.0).
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
    /// Random seed for reproducible runs; entropy-seeded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ResamplingConfig {
    fn default() -> Self {
        Self {
            num_resamples: default_num_resamples(),
            confidence_level: default_confidence_level(),
            seed: None,
        }
    }
}

fn default_num_resamples() -> usize {
    bootdiff_stats::DEFAULT_NUM_RESAMPLES
}
fn default_confidence_level() -> f64 {
    bootdiff_stats::DEFAULT_CONFIDENCE_LEVEL
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human" or "json".
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl BootdiffConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the
    /// current directory.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("bootdiff.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }
}
