//! # Runtime Configuration
//!
//! Tunable values for a session. Every field has a default from
//! [`crate::config`], so a config file only needs the keys it changes.

use crate::config::*;
use crate::generation::GenerationConfig;
use crate::{RoomshiftError, RoomshiftResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Room geometry in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomDimensions {
    pub width: f32,
    pub height: f32,
    pub door_size: f32,
    pub door_depth: f32,
    pub wall_thickness: f32,
    pub entry_margin: f32,
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self {
            width: ROOM_WIDTH,
            height: ROOM_HEIGHT,
            door_size: DOOR_SIZE,
            door_depth: DOOR_DEPTH,
            wall_thickness: WALL_THICKNESS,
            entry_margin: ENTRY_MARGIN,
        }
    }
}

/// Configuration for one game session.
///
/// # Examples
///
/// ```
/// use roomshift::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "win_threshold": 3 }"#).unwrap();
/// assert_eq!(config.win_threshold, 3);
/// assert_eq!(config.room, Default::default());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the session RNG; a fresh one is picked when absent
    pub seed: Option<u64>,
    /// Number of locked rooms needed to win
    pub win_threshold: usize,
    /// Door generation settings
    pub generation: GenerationConfig,
    /// Room geometry
    pub room: RoomDimensions,
    /// Player speed in world units per second
    pub player_speed: f32,
    /// Seconds the restart key has to be held
    pub restart_hold_secs: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            win_threshold: DEFAULT_WIN_THRESHOLD,
            generation: GenerationConfig::default(),
            room: RoomDimensions::default(),
            player_speed: PLAYER_SPEED,
            restart_hold_secs: RESTART_HOLD_SECS,
        }
    }
}

impl GameConfig {
    /// Creates a default configuration with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> RoomshiftResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> RoomshiftResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Checks that the values describe a playable game.
    pub fn validate(&self) -> RoomshiftResult<()> {
        if self.win_threshold == 0 {
            return Err(RoomshiftError::InvalidConfig(
                "win_threshold must be at least 1".to_string(),
            ));
        }
        if self.generation.max_room_radius < 1 {
            return Err(RoomshiftError::InvalidConfig(format!(
                "max_room_radius must be at least 1, got {}",
                self.generation.max_room_radius
            )));
        }

        let room = &self.room;
        let lengths = [
            ("room.width", room.width),
            ("room.height", room.height),
            ("room.door_size", room.door_size),
            ("room.door_depth", room.door_depth),
            ("player_speed", self.player_speed),
            ("restart_hold_secs", self.restart_hold_secs),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(RoomshiftError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if room.width.min(room.height) <= PLAYER_SIZE {
            return Err(RoomshiftError::InvalidConfig(format!(
                "room must be larger than the player ({PLAYER_SIZE} units)"
            )));
        }
        // The player's centre stops half a body away from the wall
        if room.door_depth < PLAYER_SIZE / 2.0 {
            return Err(RoomshiftError::InvalidConfig(format!(
                "room.door_depth must be at least {}, got {}",
                PLAYER_SIZE / 2.0,
                room.door_depth
            )));
        }
        if room.door_size >= room.width.min(room.height) {
            return Err(RoomshiftError::InvalidConfig(
                "room.door_size must be smaller than the room".to_string(),
            ));
        }
        if room.entry_margin <= room.door_depth
            || room.entry_margin * 2.0 >= room.width.min(room.height)
        {
            return Err(RoomshiftError::InvalidConfig(
                "room.entry_margin must clear the door trigger and fit inside the room"
                    .to_string(),
            ));
        }

        Ok(())
    }
}
