//! # Generation Module
//!
//! Procedural content for rooms: which doors a room gets and where they may lead.
//!
//! Generation only ever runs for unlocked rooms. Once a room is locked its
//! doors and appearance are read back from the room record instead.

pub mod layout;

pub use layout::*;

use crate::config::DEFAULT_MAX_ROOM_RADIUS;
use crate::game::{Direction, Position};
use crate::{RoomshiftError, RoomshiftResult};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Configuration for procedural generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Doors may only lead to rooms within this many steps of the origin on either axis
    pub max_room_radius: i32,
    /// Always give a fresh room a door back the way the player came
    pub keep_entry_door: bool,
}

impl GenerationConfig {
    /// Creates a configuration with the given world radius.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomshift::{GenerationConfig, Position};
    ///
    /// let config = GenerationConfig::new(2);
    /// assert!(config.is_within_bounds(Position::new(-2, 2)));
    /// assert!(!config.is_within_bounds(Position::new(3, 0)));
    /// ```
    pub fn new(max_room_radius: i32) -> Self {
        Self {
            max_room_radius,
            keep_entry_door: true,
        }
    }

    /// Whether a room may exist at `position`.
    pub fn is_within_bounds(&self, position: Position) -> bool {
        i64::from(position.chebyshev_distance(Position::origin()))
            <= i64::from(self.max_room_radius)
    }

    /// Directions out of `position` whose neighbour lies within bounds.
    pub fn viable_directions(&self, position: Position) -> Vec<Direction> {
        Direction::cardinal()
            .into_iter()
            .filter(|direction| self.is_within_bounds(position.offset(*direction)))
            .collect()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROOM_RADIUS)
    }
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> RoomshiftResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> RoomshiftResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Picks a non-empty set of doors for an unlocked room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorGenerator {
    /// Room the doors belong to
    pub position: Position,
    /// Wall the player came in through, if any
    pub entry_side: Option<Direction>,
}

impl DoorGenerator {
    pub fn new(position: Position, entry_side: Option<Direction>) -> Self {
        Self {
            position,
            entry_side,
        }
    }

    /// Directions that step back toward the origin.
    ///
    /// Only used for rooms that somehow ended up outside the bound, where no
    /// neighbour is viable.
    fn toward_origin(&self) -> Vec<Direction> {
        let mut directions = Vec::new();
        if self.position.x > 0 {
            directions.push(Direction::West);
        }
        if self.position.x < 0 {
            directions.push(Direction::East);
        }
        if self.position.y > 0 {
            directions.push(Direction::North);
        }
        if self.position.y < 0 {
            directions.push(Direction::South);
        }
        directions
    }
}

impl Generator<BTreeSet<Direction>> for DoorGenerator {
    fn generate(
        &self,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> RoomshiftResult<BTreeSet<Direction>> {
        let mut viable = config.viable_directions(self.position);
        if viable.is_empty() {
            viable = self.toward_origin();
        }
        if viable.is_empty() {
            return Err(RoomshiftError::InvalidState(format!(
                "no door can be placed in room at {:?}",
                self.position
            )));
        }

        let count = rng.gen_range(1..=viable.len());
        let mut doors = BTreeSet::new();

        if let Some(entry) = self.entry_side.filter(|_| config.keep_entry_door) {
            if viable.contains(&entry) {
                doors.insert(entry);
                viable.retain(|direction| *direction != entry);
            }
        }

        let remaining = count.saturating_sub(doors.len());
        doors.extend(viable.choose_multiple(rng, remaining).copied());

        debug!(
            "{} picked {:?} for room at ({}, {})",
            self.generator_type(),
            doors,
            self.position.x,
            self.position.y
        );
        Ok(doors)
    }

    fn validate(
        &self,
        content: &BTreeSet<Direction>,
        config: &GenerationConfig,
    ) -> RoomshiftResult<()> {
        if content.is_empty() {
            return Err(RoomshiftError::InvalidState(
                "room has no doors".to_string(),
            ));
        }
        if config.is_within_bounds(self.position) {
            if let Some(direction) = content
                .iter()
                .find(|direction| !config.is_within_bounds(self.position.offset(**direction)))
            {
                return Err(RoomshiftError::InvalidState(format!(
                    "door {direction} leads outside the world"
                )));
            }
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "DoorGenerator"
    }
}

/// Utility functions for generation.
pub mod utils {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates a seeded random number generator.
    pub fn create_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_bounds() {
        let config = GenerationConfig::new(3);
        assert!(config.is_within_bounds(Position::origin()));
        assert!(config.is_within_bounds(Position::new(3, -3)));
        assert!(!config.is_within_bounds(Position::new(0, 4)));
    }

    #[test]
    fn test_bounds_at_extreme_coordinates() {
        let config = GenerationConfig::new(3);
        assert!(!config.is_within_bounds(Position::new(i32::MIN, 0)));
        assert!(!config.is_within_bounds(Position::new(0, i32::MAX)));
        assert!(config.is_within_bounds(Position::new(-3, 2)));
    }

    #[test]
    fn test_viable_directions_at_edges() {
        let config = GenerationConfig::new(1);
        assert_eq!(config.viable_directions(Position::origin()).len(), 4);

        let corner = config.viable_directions(Position::new(1, -1));
        assert_eq!(corner, vec![Direction::South, Direction::West]);
    }

    #[test]
    fn test_door_generator_respects_bounds() {
        let config = GenerationConfig::new(2);
        let mut rng = utils::create_rng(12345);

        for x in -2..=2 {
            for y in -2..=2 {
                let generator = DoorGenerator::new(Position::new(x, y), None);
                for _ in 0..20 {
                    let doors = generator.generate(&config, &mut rng).unwrap();
                    assert!(generator.validate(&doors, &config).is_ok());
                }
            }
        }
    }

    #[test]
    fn test_door_generator_keeps_entry_door() {
        let config = GenerationConfig::new(3);
        let mut rng = utils::create_rng(7);
        let generator = DoorGenerator::new(Position::new(0, -1), Some(Direction::South));

        for _ in 0..50 {
            let doors = generator.generate(&config, &mut rng).unwrap();
            assert!(doors.contains(&Direction::South));
        }
    }

    #[test]
    fn test_door_generator_without_entry_door() {
        let config = GenerationConfig {
            max_room_radius: 3,
            keep_entry_door: false,
        };
        let mut rng = utils::create_rng(99);
        let generator = DoorGenerator::new(Position::origin(), Some(Direction::South));

        let missing_entry = (0..200)
            .map(|_| generator.generate(&config, &mut rng).unwrap())
            .any(|doors| !doors.contains(&Direction::South));
        assert!(missing_entry);
    }

    #[test]
    fn test_door_generator_outside_bounds_points_home() {
        let config = GenerationConfig::new(1);
        let mut rng = utils::create_rng(3);
        let generator = DoorGenerator::new(Position::new(5, 5), None);

        let doors = generator.generate(&config, &mut rng).unwrap();
        assert!(!doors.is_empty());
        assert!(doors
            .iter()
            .all(|direction| matches!(direction, Direction::West | Direction::North)));
    }

    #[test]
    fn test_door_generator_is_deterministic_per_seed() {
        let config = GenerationConfig::default();
        let generator = DoorGenerator::new(Position::new(1, 1), Some(Direction::East));
        let mut rng_a = utils::create_rng(42);
        let mut rng_b = utils::create_rng(42);

        for _ in 0..10 {
            assert_eq!(
                generator.generate(&config, &mut rng_a).unwrap(),
                generator.generate(&config, &mut rng_b).unwrap()
            );
        }
    }

    #[test]
    fn test_validate_rejects_empty_door_set() {
        let generator = DoorGenerator::new(Position::origin(), None);
        let result = generator.validate(&BTreeSet::new(), &GenerationConfig::default());
        assert!(result.is_err());
    }
}
