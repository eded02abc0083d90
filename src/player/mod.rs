//! # Player Module
//!
//! The player's body inside a room and the objects it can interact with.

pub mod interaction;

pub use interaction::*;

use crate::config::PLAYER_SIZE;
use crate::game::Direction;
use crate::utils::{clamp_to_rect, normalize_axis_input, rect_around};
use macroquad::math::{Rect, Vec2};

/// Edge length of the square probed for interactables.
pub const INTERACT_ZONE_SIZE: f32 = 60.0;

/// Distance from the player's centre to the centre of the interaction zone.
pub const INTERACT_ZONE_OFFSET: f32 = 30.0;

/// Top-down player body.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Centre of the body in room coordinates
    pub position: Vec2,
    /// Current velocity in units per second
    pub velocity: Vec2,
    /// Last direction the player moved in
    pub facing: Direction,
    pub speed: f32,
    pub size: f32,
}

impl Player {
    /// Creates a player standing still at `position`, facing south.
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            facing: Direction::South,
            speed,
            size: PLAYER_SIZE,
        }
    }

    /// Moves the player for one frame.
    ///
    /// `axis` is the raw input (-1, 0 or 1 per axis); diagonals are normalised
    /// so the player is not faster when moving diagonally.
    pub fn update(&mut self, axis: Vec2, dt: f32, bounds: &Rect) {
        let heading = normalize_axis_input(axis.x, axis.y);
        self.velocity = heading * self.speed;

        if heading != Vec2::ZERO {
            self.facing = if heading.x.abs() > heading.y.abs() {
                if heading.x > 0.0 {
                    Direction::East
                } else {
                    Direction::West
                }
            } else if heading.y > 0.0 {
                Direction::South
            } else {
                Direction::North
            };
        }

        let next = self.position + self.velocity * dt;
        self.position = clamp_to_rect(next, bounds, Vec2::splat(self.size / 2.0));
    }

    /// Puts the player at `position` and stops it.
    pub fn place_at(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
    }

    pub fn hitbox(&self) -> Rect {
        rect_around(self.position, self.size, self.size)
    }

    pub fn is_moving(&self) -> bool {
        self.velocity != Vec2::ZERO
    }

    /// Square in front of the player that is checked for interactables.
    ///
    /// While moving it follows the velocity, otherwise the facing direction.
    pub fn interaction_zone(&self) -> Rect {
        let heading = if self.is_moving() {
            self.velocity.normalize_or_zero()
        } else {
            let delta = self.facing.to_delta();
            Vec2::new(delta.x as f32, delta.y as f32)
        };
        rect_around(
            self.position + heading * INTERACT_ZONE_OFFSET,
            INTERACT_ZONE_SIZE,
            INTERACT_ZONE_SIZE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 1000.0)
    }

    #[test]
    fn test_player_moves_at_speed() {
        let mut player = Player::new(Vec2::new(500.0, 500.0), 200.0);
        player.update(Vec2::new(1.0, 0.0), 0.5, &bounds());
        assert_eq!(player.position, Vec2::new(600.0, 500.0));
        assert_eq!(player.facing, Direction::East);
    }

    #[test]
    fn test_diagonal_movement_is_normalised() {
        let mut player = Player::new(Vec2::new(500.0, 500.0), 200.0);
        player.update(Vec2::new(-1.0, -1.0), 1.0, &bounds());
        let travelled = player.position.distance(Vec2::new(500.0, 500.0));
        assert!((travelled - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_player_stays_inside_room() {
        let mut player = Player::new(Vec2::new(30.0, 500.0), 200.0);
        player.update(Vec2::new(-1.0, 0.0), 1.0, &bounds());
        assert_eq!(player.position.x, PLAYER_SIZE / 2.0);
        assert_eq!(player.facing, Direction::West);
    }

    #[test]
    fn test_idle_player_keeps_facing() {
        let mut player = Player::new(Vec2::new(500.0, 500.0), 200.0);
        player.update(Vec2::new(0.0, -1.0), 0.1, &bounds());
        player.update(Vec2::ZERO, 0.1, &bounds());
        assert_eq!(player.facing, Direction::North);
        assert!(!player.is_moving());
    }

    #[test]
    fn test_interaction_zone_is_in_front() {
        let mut player = Player::new(Vec2::new(500.0, 500.0), 200.0);
        player.facing = Direction::North;
        let zone = player.interaction_zone();
        assert_eq!(zone.center(), Vec2::new(500.0, 470.0));
        assert_eq!(zone.w, INTERACT_ZONE_SIZE);
    }

    #[test]
    fn test_place_at_stops_player() {
        let mut player = Player::new(Vec2::new(500.0, 500.0), 200.0);
        player.update(Vec2::new(1.0, 0.0), 0.1, &bounds());
        player.place_at(Vec2::new(50.0, 520.0));
        assert_eq!(player.position, Vec2::new(50.0, 520.0));
        assert!(!player.is_moving());
    }
}
