//! # Input Module
//!
//! Keyboard handling: one [`FrameInput`] snapshot is read per frame and handed
//! to the session, so game logic never polls macroquad directly.

use macroquad::prelude::*;

/// Everything the game needs to know about the keyboard for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Raw movement axis, each component -1, 0 or 1
    pub movement: Vec2,
    /// Interact key went down this frame
    pub interact: bool,
    /// Restart key is held
    pub restart_held: bool,
    /// New game requested from the victory screen
    pub new_game: bool,
    /// Help toggled this frame
    pub help: bool,
    /// Quit requested
    pub quit: bool,
}

impl FrameInput {
    /// Builds the movement axis from four held directions.
    ///
    /// Opposite keys cancel out.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomshift::FrameInput;
    ///
    /// let axis = FrameInput::movement_from_keys(true, true, true, false);
    /// assert_eq!((axis.x, axis.y), (0.0, -1.0));
    /// ```
    pub fn movement_from_keys(left: bool, right: bool, up: bool, down: bool) -> Vec2 {
        let axis = |negative: bool, positive: bool| match (negative, positive) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        Vec2::new(axis(left, right), axis(up, down))
    }
}

/// Input handler for processing player commands.
///
/// Arrow keys and WASD move, `E` interacts, holding `R` restarts,
/// `N` starts a new game after a win, `F1` toggles help and `Esc` quits.
pub struct InputHandler {
    /// Whether WASD moves in addition to the arrow keys
    pub wasd_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self { wasd_enabled: true }
    }

    /// Reads the keyboard for the current frame.
    pub fn poll(&self) -> FrameInput {
        let held = |arrow: KeyCode, letter: KeyCode| {
            is_key_down(arrow) || (self.wasd_enabled && is_key_down(letter))
        };

        FrameInput {
            movement: FrameInput::movement_from_keys(
                held(KeyCode::Left, KeyCode::A),
                held(KeyCode::Right, KeyCode::D),
                held(KeyCode::Up, KeyCode::W),
                held(KeyCode::Down, KeyCode::S),
            ),
            interact: is_key_pressed(KeyCode::E),
            restart_held: is_key_down(KeyCode::R),
            new_game: is_key_pressed(KeyCode::N),
            help: is_key_pressed(KeyCode::F1),
            quit: is_key_pressed(KeyCode::Escape),
        }
    }
}

/// Press-and-hold gesture: fires once after the key has been held long enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldTimer {
    required: f32,
    held: f32,
    fired: bool,
}

impl HoldTimer {
    pub fn new(required_secs: f32) -> Self {
        Self {
            required: required_secs,
            held: 0.0,
            fired: false,
        }
    }

    /// Advances the timer. Returns true on the frame the hold completes.
    ///
    /// Releasing the key resets the timer; keeping it held after firing does
    /// not fire again.
    pub fn update(&mut self, is_down: bool, dt: f32) -> bool {
        if !is_down {
            self.reset();
            return false;
        }
        if self.fired {
            return false;
        }
        self.held += dt;
        if self.held >= self.required {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.held = 0.0;
        self.fired = false;
    }

    /// Fraction of the hold completed, 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        if self.fired {
            return 1.0;
        }
        (self.held / self.required).clamp(0.0, 1.0)
    }
}
