use crate::synth::ControlParameters;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("block size must be at least one sample")]
    ZeroBlockSize,
}

/// Startup settings for the host runtimes plus the initial knob preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindConfig {
    /// Samples per engine block; the propagation history advances once per block.
    pub block_size: usize,
    /// Fixed noise seed, for reproducible renders.
    pub seed: Option<u64>,
    pub midi_enabled: bool,
    pub keyboard_enabled: bool,
    pub params: ControlParameters,
}

impl WindConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: WindConfig = serde_json::from_str(json)?;
        if config.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        config.params = config.params.clamped();
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            block_size: 256,
            seed: None,
            midi_enabled: true,
            keyboard_enabled: true,
            params: ControlParameters::default(),
        }
    }
}
