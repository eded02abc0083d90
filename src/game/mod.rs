//! # Game Module
//!
//! Core game state: grid coordinates, directions, the room graph and the session.
//!
//! This module contains the fundamental building blocks of Roomshift:
//! - Grid positions and the typed room identifier derived from them
//! - The room registry and its movement rules
//! - Runtime configuration
//! - The session context that ties everything together

pub mod settings;
pub mod rooms;
pub mod state;

pub use settings::*;
pub use rooms::*;
pub use state::*;

use crate::{RoomshiftError, RoomshiftResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents a room's address on the infinite 2D grid.
///
/// North is negative y, matching screen coordinates.
///
/// # Examples
///
/// ```
/// use roomshift::{Direction, Position};
///
/// let pos = Position::new(2, -1);
/// assert_eq!(pos.offset(Direction::North), Position::new(2, -2));
/// assert_eq!(pos.chebyshev_distance(Position::origin()), 2);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0), where every session starts.
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Returns the neighbouring position one step in `direction`.
    pub fn offset(self, direction: Direction) -> Self {
        self + direction.to_delta()
    }

    /// Calculates the Chebyshev (king-move) distance to another position.
    pub fn chebyshev_distance(self, other: Position) -> u32 {
        (self.x - other.x)
            .unsigned_abs()
            .max((self.y - other.y).unsigned_abs())
    }

    /// Returns the 4 cardinal neighbours, in `Direction::cardinal()` order.
    pub fn cardinal_adjacent_positions(self) -> Vec<Position> {
        Direction::cardinal()
            .into_iter()
            .map(|direction| self.offset(direction))
            .collect()
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// Cardinal directions a door can face.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Converts a direction to a grid delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomshift::{Direction, Position};
    ///
    /// assert_eq!(Direction::North.to_delta(), Position::new(0, -1));
    /// assert_eq!(Direction::West.to_delta(), Position::new(-1, 0));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Direction::North => Position::new(0, -1),
            Direction::South => Position::new(0, 1),
            Direction::East => Position::new(1, 0),
            Direction::West => Position::new(-1, 0),
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Returns the 4 cardinal directions.
    pub fn cardinal() -> Vec<Direction> {
        vec![
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
    }

    /// Lowercase name, as used by the scene layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = RoomshiftError;

    fn from_str(s: &str) -> RoomshiftResult<Self> {
        match s {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            other => Err(RoomshiftError::InvalidState(format!(
                "unknown direction {other:?}"
            ))),
        }
    }
}

/// Unique identifier of a room.
///
/// The registry is keyed on the position itself; the `"{x},{y}"` string form
/// only exists for display and for parsing identifiers coming from outside.
///
/// # Examples
///
/// ```
/// use roomshift::{Position, RoomId};
///
/// let id = RoomId::new(Position::new(-3, 12));
/// assert_eq!(id.to_string(), "-3,12");
/// assert_eq!("-3,12".parse::<RoomId>().unwrap(), id);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RoomId(Position);

impl RoomId {
    /// Creates the identifier for the room at `position`.
    pub fn new(position: Position) -> Self {
        Self(position)
    }

    /// The identifier of the start room.
    pub fn origin() -> Self {
        Self(Position::origin())
    }

    /// The grid position this identifier names.
    pub fn position(self) -> Position {
        self.0
    }
}

impl From<Position> for RoomId {
    fn from(position: Position) -> Self {
        Self(position)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0.x, self.0.y)
    }
}

impl FromStr for RoomId {
    type Err = RoomshiftError;

    fn from_str(s: &str) -> RoomshiftResult<Self> {
        let invalid = || RoomshiftError::InvalidRoomId(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.parse::<i32>().map_err(|_| invalid())?;
        let y = y.parse::<i32>().map_err(|_| invalid())?;
        let id = Self(Position::new(x, y));

        // Only the canonical form is accepted ("+1", "01" and "-0" are not)
        if id.to_string() != s {
            return Err(invalid());
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.x, 5);
        assert_eq!(pos.y, 10);
        assert_eq!(Position::origin(), Position::new(0, 0));
    }

    #[test]
    fn test_position_chebyshev_distance() {
        let pos1 = Position::new(0, 0);
        let pos2 = Position::new(3, -4);
        assert_eq!(pos1.chebyshev_distance(pos2), 4);
    }

    #[test]
    fn test_position_offsets_match_screen_axes() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.offset(Direction::North), Position::new(5, 4));
        assert_eq!(pos.offset(Direction::South), Position::new(5, 6));
        assert_eq!(pos.offset(Direction::East), Position::new(6, 5));
        assert_eq!(pos.offset(Direction::West), Position::new(4, 5));
    }

    #[test]
    fn test_position_cardinal_adjacent() {
        let adjacent = Position::new(5, 5).cardinal_adjacent_positions();
        assert_eq!(adjacent.len(), 4);
        assert!(adjacent.contains(&Position::new(5, 4)));
        assert!(!adjacent.contains(&Position::new(4, 4)));
    }

    #[test]
    fn test_position_arithmetic() {
        let pos1 = Position::new(5, 10);
        let pos2 = Position::new(3, 2);
        assert_eq!(pos1 + pos2, Position::new(8, 12));
        assert_eq!(pos1 - pos2, Position::new(2, 8));
    }

    #[test]
    fn test_direction_deltas_cancel_with_opposite() {
        for direction in Direction::cardinal() {
            let delta = direction.to_delta();
            assert_eq!(delta.x.abs() + delta.y.abs(), 1);
            assert_eq!(delta + direction.opposite().to_delta(), Position::origin());
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(Direction::North.to_string(), "north");
        assert_eq!("west".parse::<Direction>().unwrap(), Direction::West);
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn test_room_id_formatting() {
        assert_eq!(RoomId::origin().to_string(), "0,0");
        assert_eq!(RoomId::new(Position::new(0, -1)).to_string(), "0,-1");
        assert_eq!(RoomId::new(Position::new(-12, 7)).to_string(), "-12,7");
    }

    #[test]
    fn test_room_id_parsing_rejects_malformed_input() {
        for bad in ["", "0", "0,", ",0", "0, 1", "a,b", "1,2,3", "+1,2", "01,2", "-0,0", "1;2"] {
            assert!(bad.parse::<RoomId>().is_err(), "{bad:?} should not parse");
        }
        assert_eq!(
            "-1,-1".parse::<RoomId>().unwrap().position(),
            Position::new(-1, -1)
        );
    }
}
