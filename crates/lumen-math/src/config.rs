// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame clock configuration, stored as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading the config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The document parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tuning for [`crate::FrameClock`].
///
/// Missing fields fall back to [`ClockConfig::default`], which reproduces a
/// plain `now - last` delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Upper bound on a single frame's delta in seconds (`None` = unbounded).
    pub max_delta_seconds: Option<f32>,
    /// Multiplier applied to the measured delta (1.0 = real time).
    pub time_scale: f32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            max_delta_seconds: None,
            time_scale: 1.0,
        }
    }
}

impl ClockConfig {
    /// Parses and validates a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let config: Self = serde_json::from_slice(&bytes)?;
        config.validate()?;
        debug!(path = %path.display(), ?config, "loaded clock config");
        Ok(config)
    }

    /// Rejects negative or non-finite scales and non-positive delta caps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "time_scale must be finite and >= 0, got {}",
                self.time_scale
            )));
        }
        if let Some(cap) = self.max_delta_seconds {
            if cap.is_nan() || cap <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "max_delta_seconds must be > 0, got {cap}"
                )));
            }
        }
        Ok(())
    }
}
