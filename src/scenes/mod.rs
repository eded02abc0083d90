//! # Scene Management System
//!
//! Switches between the playing scene and the victory screen and runs the
//! frame loop. All game rules live in [`GameSession`]; this layer only reads
//! input, forwards it, and draws.

pub mod room;

pub use room::*;

use crate::game::{GameEvent, GameSession};
use crate::input::{FrameInput, InputHandler};
use crate::rendering::MacroquadDisplay;
use crate::RoomshiftResult;
use log::info;
use macroquad::prelude::*;

/// Represents the current scene in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneType {
    /// Normal gameplay
    Playing,
    /// Enough rooms are locked
    Victory,
}

/// The main scene manager that coordinates all game scenes
pub struct SceneManager {
    current_scene: SceneType,
    session: GameSession,
    display: MacroquadDisplay,
    input_handler: InputHandler,
}

impl SceneManager {
    /// Creates a new scene manager for the given session
    pub fn new(session: GameSession, input_handler: InputHandler) -> RoomshiftResult<Self> {
        let mut display = MacroquadDisplay::new(&session.config);
        display.add_message("Welcome to Roomshift!".to_string());
        display.add_message("Pull levers to lock rooms in place. F1 for help.".to_string());

        Ok(Self {
            current_scene: SceneType::Playing,
            session,
            display,
            input_handler,
        })
    }

    /// Runs the main scene loop until the game exits
    pub async fn run(&mut self) -> RoomshiftResult<()> {
        loop {
            let input = self.input_handler.poll();
            if input.quit {
                info!("Player quit the game");
                break;
            }

            let dt = get_frame_time();
            match self.current_scene {
                SceneType::Playing => self.update_playing_scene(&input, dt)?,
                SceneType::Victory => self.update_victory_scene(&input, dt)?,
            }

            next_frame().await;
        }
        Ok(())
    }

    /// Updates and draws the playing scene
    fn update_playing_scene(&mut self, input: &FrameInput, dt: f32) -> RoomshiftResult<()> {
        if input.help {
            self.display.toggle_help();
        }

        let events = self.session.update(input, dt);
        self.process_game_events(&events);

        if self.session.is_game_ended() {
            self.current_scene = SceneType::Victory;
        }

        self.display.render_game(&self.session)
    }

    /// Updates and draws the victory screen
    fn update_victory_scene(&mut self, input: &FrameInput, dt: f32) -> RoomshiftResult<()> {
        let events = self.session.update(input, dt);
        self.process_game_events(&events);

        if !self.session.is_game_ended() {
            self.current_scene = SceneType::Playing;
            return self.display.render_game(&self.session);
        }

        self.display.render_victory(&self.session)
    }

    /// Forwards event messages to the message log
    fn process_game_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::Restarted { .. } = event {
                self.display.clear_messages();
            }
            if let Some(text) = event.message() {
                self.display.add_message(text);
            }
        }
    }
}
