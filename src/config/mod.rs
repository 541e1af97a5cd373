use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::tempo::convert;

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CalculatorConfig {
    /// Tempo shown at start-up
    #[serde(default = "default_bpm")]
    pub bpm: f64,

    #[serde(default)]
    pub theme: ThemeSpec,

    /// How long the "Copied!" marker stays on a row
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            bpm: default_bpm(),
            theme: ThemeSpec::default(),
            copy_feedback_ms: default_copy_feedback_ms(),
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CalculatorConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        convert(self.bpm).map_err(|e| anyhow!("bpm: {}", e))?;

        if self.copy_feedback_ms < 1 || self.copy_feedback_ms > 10_000 {
            return Err(anyhow!("copy_feedback_ms must be between 1 and 10000"));
        }

        Ok(())
    }
}

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSpec {
    Dark,
    Light,
}

impl Default for ThemeSpec {
    fn default() -> Self {
        ThemeSpec::Dark
    }
}

impl ThemeSpec {
    pub fn toggled(self) -> Self {
        match self {
            ThemeSpec::Dark => ThemeSpec::Light,
            ThemeSpec::Light => ThemeSpec::Dark,
        }
    }
}

// Default value functions for serde
fn default_bpm() -> f64 {
    120.0
}

fn default_copy_feedback_ms() -> u64 {
    1500
}
