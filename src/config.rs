//! Simulation configuration
//!
//! Screen bounds and frame pacing. Loaded from JSON, every field optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::SPAWN_MARGIN_X;
use crate::error::ConfigError;

/// Playfield bounds, `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a point lies inside the screen rectangle (edges included)
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Screen width in world units
    pub width: f32,
    /// Screen height in world units
    pub height: f32,
    /// Frame rate the host should tick at (advisory)
    pub target_fps: u32,
    /// Largest `dt` a single step will accept; longer frames are clamped
    pub max_frame_dt: f32,
    /// Seed for spawn positions and explosion particles
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            target_fps: 60,
            max_frame_dt: 0.1,
            seed: 0x5EED,
        }
    }
}

impl SimConfig {
    pub fn arena(&self) -> Arena {
        Arena::new(self.width, self.height)
    }

    /// Seconds per frame at the target rate
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidArena {
                width,
                height,
                reason: "dimensions must be positive",
            });
        }
        // Spawns pick x in [margin, width - margin]
        if width < SPAWN_MARGIN_X * 2.0 {
            return Err(ConfigError::InvalidArena {
                width,
                height,
                reason: "too narrow for the spawn margin",
            });
        }
        if self.target_fps == 0 {
            return Err(ConfigError::InvalidTiming {
                field: "target_fps",
                value: 0.0,
            });
        }
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            return Err(ConfigError::InvalidTiming {
                field: "max_frame_dt",
                value: self.max_frame_dt,
            });
        }
        Ok(())
    }
}
