//! # Utilities Module
//!
//! Geometry helpers shared by the player, room layout and rendering code.

pub mod math;

pub use math::*;
