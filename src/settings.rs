//! Playfield configuration
//!
//! Built once and handed to the session; nothing in the simulation mutates it.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Immutable configuration for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in pixels
    pub screen_width: f32,
    /// Playfield height in pixels
    pub screen_height: f32,
    /// Distance from the bottom of the screen to the ground line
    pub ground_margin: f32,
    /// Clearing this level's boss wins the run
    pub final_level: u32,
    /// Lives the player starts each session with
    pub starting_lives: u32,
    /// Frames of contact immunity after an enemy touch (0 = damage every frame)
    pub contact_cooldown_frames: u32,
    /// RNG seed; `None` lets the driver pick one
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 400.0,
            ground_margin: 50.0,
            final_level: 3,
            starting_lives: 3,
            contact_cooldown_frames: 0,
            seed: None,
        }
    }
}

impl Settings {
    /// Y coordinate of the ground line (bottom edge for grounded entities)
    pub fn ground_line(&self) -> f32 {
        self.screen_height - self.ground_margin
    }

    /// Inclusive x range for normal enemy spawns
    pub fn enemy_spawn_x(&self) -> (i32, i32) {
        (ENEMY_SPAWN_MIN_X, self.screen_width as i32 - SPAWN_EDGE_MARGIN)
    }

    /// Inclusive x range for collectible spawns
    pub fn collectible_spawn_x(&self) -> (i32, i32) {
        (
            COLLECTIBLE_SPAWN_MIN_X,
            self.screen_width as i32 - SPAWN_EDGE_MARGIN,
        )
    }

    /// Inclusive y range for collectible spawns
    pub fn collectible_spawn_y(&self) -> (i32, i32) {
        (
            COLLECTIBLE_SPAWN_MIN_Y,
            self.ground_line() as i32 - SPAWN_EDGE_MARGIN,
        )
    }

    /// Check that the configuration describes a playable field
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(SettingsError::InvalidDimensions {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        let ground = self.ground_line();
        if !(ground > PLAYER_HEIGHT && ground <= self.screen_height) {
            return Err(SettingsError::GroundOutOfBounds {
                ground,
                height: self.screen_height,
            });
        }
        let (min_x, max_x) = self.enemy_spawn_x();
        if max_x < min_x {
            return Err(SettingsError::EmptySpawnRange {
                what: "enemy x",
                min: min_x,
                max: max_x,
            });
        }
        let (min_x, max_x) = self.collectible_spawn_x();
        if max_x < min_x {
            return Err(SettingsError::EmptySpawnRange {
                what: "collectible x",
                min: min_x,
                max: max_x,
            });
        }
        let (min_y, max_y) = self.collectible_spawn_y();
        if max_y < min_y {
            return Err(SettingsError::EmptySpawnRange {
                what: "collectible y",
                min: min_y,
                max: max_y,
            });
        }
        if self.final_level == 0 {
            return Err(SettingsError::NoLevels);
        }
        if self.starting_lives == 0 {
            return Err(SettingsError::NoLives);
        }
        Ok(())
    }

    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| SettingsError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

/// Reasons a configuration is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    InvalidDimensions { width: f32, height: f32 },
    GroundOutOfBounds { ground: f32, height: f32 },
    EmptySpawnRange { what: &'static str, min: i32, max: i32 },
    NoLevels,
    NoLives,
    Parse(String),
    Io { path: String, message: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid screen dimensions: {width}x{height}")
            }
            Self::GroundOutOfBounds { ground, height } => write!(
                f,
                "ground line {ground} does not fit a player on a screen {height} high"
            ),
            Self::EmptySpawnRange { what, min, max } => {
                write!(f, "empty {what} spawn range: {min}..={max}")
            }
            Self::NoLevels => write!(f, "final_level must be at least 1"),
            Self::NoLives => write!(f, "starting_lives must be at least 1"),
            Self::Parse(message) => write!(f, "could not parse settings: {message}"),
            Self::Io { path, message } => write!(f, "could not read {path}: {message}"),
        }
    }
}

impl std::error::Error for SettingsError {}
