//! # Room Layout
//!
//! Turns a door set and an appearance into placed geometry: door trigger
//! areas centred on their walls, the lever, and where the player appears
//! after walking through a door.

use crate::game::{Appearance, Direction, RoomDimensions, RoomId};
use crate::player::Lever;
use crate::utils::contains_inclusive;
use macroquad::math::{Rect, Vec2};
use std::collections::BTreeSet;

/// A door and the area that triggers a transition through it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorPlacement {
    pub direction: Direction,
    pub trigger: Rect,
}

impl DoorPlacement {
    /// Places a door in the middle of the wall it faces.
    pub fn new(direction: Direction, dims: &RoomDimensions) -> Self {
        let along_x = (dims.width - dims.door_size) / 2.0;
        let along_y = (dims.height - dims.door_size) / 2.0;

        let trigger = match direction {
            Direction::North => Rect::new(along_x, 0.0, dims.door_size, dims.door_depth),
            Direction::South => Rect::new(
                along_x,
                dims.height - dims.door_depth,
                dims.door_size,
                dims.door_depth,
            ),
            Direction::East => Rect::new(
                dims.width - dims.door_depth,
                along_y,
                dims.door_depth,
                dims.door_size,
            ),
            Direction::West => Rect::new(0.0, along_y, dims.door_depth, dims.door_size),
        };

        Self { direction, trigger }
    }
}

/// Everything the scene needs to present one room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomLayout {
    pub room: RoomId,
    pub doors: Vec<DoorPlacement>,
    pub appearance: Appearance,
    pub lever: Lever,
    /// Whether doors and appearance were read back from a locked room
    pub restored: bool,
}

impl RoomLayout {
    /// Builds the layout. `locked` decides whether the lever starts pulled.
    pub fn build(
        room: RoomId,
        doors: &BTreeSet<Direction>,
        appearance: Appearance,
        locked: bool,
        restored: bool,
        dims: &RoomDimensions,
    ) -> Self {
        let mut lever = Lever::new(lever_position(dims));
        lever.pulled = locked;

        Self {
            room,
            doors: doors
                .iter()
                .map(|direction| DoorPlacement::new(*direction, dims))
                .collect(),
            appearance,
            lever,
            restored,
        }
    }

    /// The door directions, in the form the room graph stores them.
    pub fn door_set(&self) -> BTreeSet<Direction> {
        self.doors.iter().map(|door| door.direction).collect()
    }

    pub fn has_door(&self, direction: Direction) -> bool {
        self.doors.iter().any(|door| door.direction == direction)
    }

    /// Asset key for the wall facing `direction`; walls with a door use the door variant.
    pub fn wall_asset_key(&self, direction: Direction) -> &'static str {
        if self.has_door(direction) {
            self.appearance.wall.door_asset_key()
        } else {
            self.appearance.wall.asset_key()
        }
    }

    /// The door whose trigger area contains `point`, if any.
    pub fn door_at(&self, point: Vec2) -> Option<Direction> {
        self.doors
            .iter()
            .find(|door| contains_inclusive(&door.trigger, point))
            .map(|door| door.direction)
    }

    pub fn is_locked(&self) -> bool {
        self.lever.pulled
    }
}

/// The whole room in world units.
pub fn room_bounds(dims: &RoomDimensions) -> Rect {
    Rect::new(0.0, 0.0, dims.width, dims.height)
}

/// Centre of the room, where a session's player starts.
pub fn room_center(dims: &RoomDimensions) -> Vec2 {
    Vec2::new(dims.width / 2.0, dims.height / 2.0)
}

/// Lever sits above the centre so the player does not spawn on it.
pub fn lever_position(dims: &RoomDimensions) -> Vec2 {
    Vec2::new(dims.width / 2.0, dims.height * 0.3)
}

/// Where the player appears after travelling through a door.
///
/// The player comes in next to the wall opposite the travel direction and
/// keeps their position along the other axis.
pub fn entry_point(travelled: Direction, from: Vec2, dims: &RoomDimensions) -> Vec2 {
    match travelled {
        Direction::North => Vec2::new(from.x, dims.height - dims.entry_margin),
        Direction::South => Vec2::new(from.x, dims.entry_margin),
        Direction::East => Vec2::new(dims.entry_margin, from.y),
        Direction::West => Vec2::new(dims.width - dims.entry_margin, from.y),
    }
}
