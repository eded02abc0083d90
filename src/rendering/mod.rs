//! # Rendering Module
//!
//! Macroquad drawing for the room, HUD, minimap and victory screen.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;
