//! Runtime settings
//!
//! Loaded from an optional JSON file; every field has a default so a partial
//! file is fine.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_RATE};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Session and driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in pixels
    pub screen_width: f32,
    /// Playfield height in pixels
    pub screen_height: f32,
    /// RNG seed; seeded from the system clock when absent
    pub seed: Option<u64>,
    /// Number of ticks the headless driver runs
    pub ticks: u64,
    /// Ticks between HUD log lines (0 disables them)
    pub hud_log_interval: u64,
    /// Let the demo pilot fly the ship
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            seed: None,
            ticks: 60 * TICK_RATE as u64,
            hud_log_interval: TICK_RATE as u64,
            autopilot: true,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.screen_width.is_finite() && self.screen_width > 0.0) {
            return Err(SettingsError::Invalid {
                field: "screen_width",
                reason: "must be a positive number",
            });
        }
        if !(self.screen_height.is_finite() && self.screen_height > 0.0) {
            return Err(SettingsError::Invalid {
                field: "screen_height",
                reason: "must be a positive number",
            });
        }
        if self.ticks == 0 {
            return Err(SettingsError::Invalid {
                field: "ticks",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
