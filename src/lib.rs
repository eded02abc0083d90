//! # Roomshift
//!
//! A small top-down exploration game played on an infinite grid of rooms.
//!
//! ## Architecture Overview
//!
//! The world is a sparse grid of rooms addressed by integer coordinates. Rooms
//! come into existence the first time the player reaches them and are never
//! deleted during a session.
//!
//! - **Room graph**: [`RoomManager`] owns every discovered room and the current
//!   position, and decides what a move through a door does to the graph
//! - **Room scene**: [`RoomScene`] turns a room record into doors, a lever and a
//!   player, and feeds door transitions and lever pulls back into the manager
//! - **Session**: [`GameSession`] is the explicit context object that owns the
//!   manager, the scene, statistics and win state for one playthrough
//! - **Rendering**: macroquad primitives draw the room, the HUD and the minimap
//!
//! While a room is unlocked, walking through any of its doors regenerates the
//! neighbouring room. Pulling a room's lever locks it: its doors and appearance
//! are frozen and it becomes a stable node that looks the same on every return.

pub mod game;
pub mod generation;
pub mod input;
pub mod player;
pub mod rendering;
pub mod scenes;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use input::*;
pub use player::*;
pub use rendering::*;
pub use scenes::*;
pub use utils::*;

/// Core error type for the Roomshift game.
#[derive(thiserror::Error, Debug)]
pub enum RoomshiftError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A room identifier string could not be parsed
    #[error("Invalid room id: {0:?}")]
    InvalidRoomId(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Roomshift codebase.
pub type RoomshiftResult<T> = Result<T, RoomshiftError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Number of locked rooms needed to win
    pub const DEFAULT_WIN_THRESHOLD: usize = 8;

    /// Rooms may only be generated within this many steps of the origin on either axis
    pub const DEFAULT_MAX_ROOM_RADIUS: i32 = 3;

    /// Room width in world units
    pub const ROOM_WIDTH: f32 = 1000.0;

    /// Room height in world units
    pub const ROOM_HEIGHT: f32 = 1000.0;

    /// Length of a door along its wall
    pub const DOOR_SIZE: f32 = 150.0;

    /// How far a door's trigger area reaches into the room
    pub const DOOR_DEPTH: f32 = 30.0;

    /// Drawn wall thickness
    pub const WALL_THICKNESS: f32 = 20.0;

    /// Distance from the wall at which the player appears after a transition
    pub const ENTRY_MARGIN: f32 = 50.0;

    /// Player movement speed in world units per second
    pub const PLAYER_SPEED: f32 = 200.0;

    /// Player body edge length
    pub const PLAYER_SIZE: f32 = 48.0;

    /// Seconds the restart key has to be held
    pub const RESTART_HOLD_SECS: f32 = 1.5;

    /// Minimap panel edge length in pixels
    pub const MINIMAP_SIZE: f32 = 150.0;

    /// Minimap distance between neighbouring room cells
    pub const MINIMAP_CELL_SIZE: f32 = 30.0;

    /// Minimap distance from the right screen edge
    pub const MINIMAP_OFFSET_X: f32 = 10.0;

    /// Minimap distance from the top screen edge
    pub const MINIMAP_OFFSET_Y: f32 = 10.0;
}
