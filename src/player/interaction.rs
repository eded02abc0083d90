//! # Interaction
//!
//! Objects the player can use with the interact key.

use crate::utils::rect_around;
use macroquad::math::{Rect, Vec2};

/// What happened when the player used an interactable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// A lever went from up to down
    LeverPulled,
    /// The lever was already down
    AlreadyPulled,
}

/// Something in a room the player can use.
pub trait Interactable {
    /// Area the player's interaction zone has to overlap.
    fn bounds(&self) -> Rect;

    /// Short prompt shown while the object is in reach.
    fn prompt(&self) -> &'static str;

    /// Uses the object.
    fn on_interact(&mut self) -> InteractionOutcome;

    /// Whether `zone` reaches this object.
    fn in_reach(&self, zone: &Rect) -> bool {
        self.bounds().overlaps(zone)
    }
}

/// The lever that locks a room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lever {
    pub position: Vec2,
    pub pulled: bool,
}

impl Lever {
    pub const WIDTH: f32 = 40.0;
    pub const HEIGHT: f32 = 60.0;

    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            pulled: false,
        }
    }
}

impl Interactable for Lever {
    fn bounds(&self) -> Rect {
        rect_around(self.position, Self::WIDTH, Self::HEIGHT)
    }

    fn prompt(&self) -> &'static str {
        if self.pulled {
            "Room locked"
        } else {
            "Press E to lock room"
        }
    }

    fn on_interact(&mut self) -> InteractionOutcome {
        if self.pulled {
            InteractionOutcome::AlreadyPulled
        } else {
            self.pulled = true;
            InteractionOutcome::LeverPulled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lever_pulls_once() {
        let mut lever = Lever::new(Vec2::new(500.0, 300.0));
        assert_eq!(lever.on_interact(), InteractionOutcome::LeverPulled);
        assert_eq!(lever.on_interact(), InteractionOutcome::AlreadyPulled);
        assert!(lever.pulled);
    }

    #[test]
    fn test_lever_reach() {
        let lever = Lever::new(Vec2::new(500.0, 300.0));
        assert!(lever.in_reach(&rect_around(Vec2::new(500.0, 350.0), 60.0, 60.0)));
        assert!(!lever.in_reach(&rect_around(Vec2::new(500.0, 500.0), 60.0, 60.0)));
    }
}
