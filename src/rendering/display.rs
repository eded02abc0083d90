//! # Display Management
//!
//! Draws the current room, the HUD and the message log with macroquad shapes.
//! Rooms are laid out in world units and scaled to fit the window through a
//! [`Viewport`].

use crate::game::{Direction, GameConfig, GameSession, RoomDimensions};
use crate::player::Interactable;
use crate::rendering::{render_victory_screen, MinimapLayout};
use crate::RoomshiftResult;
use macroquad::prelude::*;

/// Height reserved under the room for the message log.
const MESSAGE_AREA_HEIGHT: f32 = 80.0;

/// Maps room coordinates onto the screen, preserving aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset: Vec2,
}

impl Viewport {
    /// Fits a `room` sized area into `area`, centred, with `margin` pixels around it.
    pub fn fit(area: Rect, room: Vec2, margin: f32) -> Self {
        let available = Vec2::new(area.w - margin * 2.0, area.h - margin * 2.0).max(Vec2::ONE);
        let scale = (available.x / room.x).min(available.y / room.y);
        let used = room * scale;
        let offset = Vec2::new(area.x, area.y) + (Vec2::new(area.w, area.h) - used) / 2.0;
        Self { scale, offset }
    }

    pub fn to_screen(&self, point: Vec2) -> Vec2 {
        self.offset + point * self.scale
    }

    pub fn rect_to_screen(&self, rect: &Rect) -> Rect {
        let origin = self.to_screen(Vec2::new(rect.x, rect.y));
        Rect::new(origin.x, origin.y, rect.w * self.scale, rect.h * self.scale)
    }
}

/// Flat colour standing in for the texture behind an asset key.
///
/// Unknown keys are drawn magenta so missing art stands out.
pub fn asset_color(key: &str) -> Color {
    match key {
        "floor_1" => Color::from_rgba(92, 74, 58, 255),
        "floor_2" => Color::from_rgba(58, 78, 92, 255),
        "floor_3" => Color::from_rgba(70, 88, 60, 255),
        "wall_1" => Color::from_rgba(140, 140, 150, 255),
        "wall_1_door" => Color::from_rgba(112, 112, 124, 255),
        "wall_2" => Color::from_rgba(150, 110, 90, 255),
        "wall_2_door" => Color::from_rgba(122, 88, 70, 255),
        _ => MAGENTA,
    }
}

/// Macroquad display manager for the game.
pub struct MacroquadDisplay {
    /// Message history
    pub messages: Vec<String>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
    /// Whether the controls overlay is shown
    pub show_help: bool,
    dims: RoomDimensions,
    max_room_radius: i32,
}

impl MacroquadDisplay {
    /// Creates a display for rooms of the configured size.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            messages: Vec::new(),
            max_messages: 100,
            show_help: false,
            dims: config.room,
            max_room_radius: config.generation.max_room_radius,
        }
    }

    /// Renders the complete game screen.
    pub fn render_game(&mut self, session: &GameSession) -> RoomshiftResult<()> {
        clear_background(BLACK);

        let area = Rect::new(0.0, 0.0, screen_width(), screen_height() - MESSAGE_AREA_HEIGHT);
        let viewport = Viewport::fit(area, Vec2::new(self.dims.width, self.dims.height), 10.0);

        self.render_room(session, &viewport);
        self.render_player(session, &viewport);
        self.render_hud(session);

        MinimapLayout::build(
            &session.rooms.visited_rooms(),
            session.rooms.current_room_id(),
            screen_width(),
            self.max_room_radius,
        )
        .draw();

        self.render_messages();
        if self.show_help {
            self.render_help();
        }

        Ok(())
    }

    /// Renders the game under the victory overlay.
    pub fn render_victory(&mut self, session: &GameSession) -> RoomshiftResult<()> {
        self.render_game(session)?;
        render_victory_screen(session);
        Ok(())
    }

    fn render_room(&self, session: &GameSession, viewport: &Viewport) {
        let layout = session.scene.layout();
        let dims = &self.dims;

        let floor = viewport.rect_to_screen(&Rect::new(0.0, 0.0, dims.width, dims.height));
        draw_rectangle(
            floor.x,
            floor.y,
            floor.w,
            floor.h,
            asset_color(layout.appearance.floor.asset_key()),
        );

        let t = dims.wall_thickness;
        for (side, segment) in [
            (Direction::North, Rect::new(0.0, 0.0, dims.width, t)),
            (Direction::South, Rect::new(0.0, dims.height - t, dims.width, t)),
            (Direction::West, Rect::new(0.0, 0.0, t, dims.height)),
            (Direction::East, Rect::new(dims.width - t, 0.0, t, dims.height)),
        ] {
            let r = viewport.rect_to_screen(&segment);
            draw_rectangle(r.x, r.y, r.w, r.h, asset_color(layout.wall_asset_key(side)));
        }

        let frame = asset_color(layout.appearance.wall.asset_key());
        for door in &layout.doors {
            let r = viewport.rect_to_screen(&door.trigger);
            draw_rectangle(r.x, r.y, r.w, r.h, Color::from_rgba(20, 20, 20, 255));
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, frame);
        }

        let lever = &layout.lever;
        let r = viewport.rect_to_screen(&lever.bounds());
        draw_rectangle(r.x, r.y, r.w, r.h, DARKGRAY);
        let (handle_top, color) = if lever.pulled {
            (r.y + r.h * 0.6, GREEN)
        } else {
            (r.y + r.h * 0.1, ORANGE)
        };
        draw_rectangle(r.x + r.w * 0.3, handle_top, r.w * 0.4, r.h * 0.3, color);
    }

    fn render_player(&self, session: &GameSession, viewport: &Viewport) {
        let player = session.scene.player();
        let r = viewport.rect_to_screen(&player.hitbox());
        draw_rectangle(r.x, r.y, r.w, r.h, RED);

        if let Some(prompt) = session.scene.prompt() {
            let anchor = viewport.to_screen(player.position);
            let size = 20.0;
            let dims = measure_text(prompt, None, size as u16, 1.0);
            draw_text(prompt, anchor.x - dims.width / 2.0, r.y - 10.0, size, WHITE);
        }
    }

    fn render_hud(&self, session: &GameSession) {
        let mut line_y = 24.0;
        let line_height = 20.0;

        draw_text(
            &format!("Room {}", session.rooms.current_room_id()),
            10.0,
            line_y,
            22.0,
            WHITE,
        );
        line_y += line_height;

        draw_text(
            &format!(
                "Locked: {}/{}",
                session.rooms.locked_count(),
                session.rooms.win_threshold()
            ),
            10.0,
            line_y,
            18.0,
            YELLOW,
        );
        line_y += line_height;

        let appearance = session.scene.layout().appearance;
        draw_text(
            &format!(
                "{} / {}",
                appearance.floor.asset_key(),
                appearance.wall.asset_key()
            ),
            10.0,
            line_y,
            16.0,
            GRAY,
        );
        line_y += line_height;

        let progress = session.restart_progress();
        if progress > 0.0 && progress < 1.0 {
            draw_text("Restarting...", 10.0, line_y, 18.0, ORANGE);
            line_y += 6.0;
            draw_rectangle(10.0, line_y, 120.0, 8.0, DARKGRAY);
            draw_rectangle(10.0, line_y, 120.0 * progress, 8.0, ORANGE);
        }
    }

    fn render_help(&self) {
        let lines = [
            "WASD/Arrow keys: Move",
            "E: Pull lever",
            "Hold R: Restart",
            "F1: Toggle help",
            "ESC: Quit",
        ];
        let (x, y) = (screen_width() / 2.0 - 130.0, screen_height() / 2.0 - 70.0);
        draw_rectangle(x, y, 260.0, 140.0, Color::new(0.0, 0.0, 0.0, 0.85));
        draw_text("Controls:", x + 10.0, y + 24.0, 20.0, GREEN);
        for (i, line) in lines.iter().enumerate() {
            draw_text(line, x + 10.0, y + 46.0 + i as f32 * 18.0, 16.0, WHITE);
        }
    }

    /// Renders the message area.
    fn render_messages(&self) {
        let message_area_y = screen_height() - MESSAGE_AREA_HEIGHT + 20.0;
        let message_count = 3;
        let line_height = 18.0;

        draw_rectangle(
            0.0,
            message_area_y - 20.0,
            screen_width(),
            MESSAGE_AREA_HEIGHT,
            Color::new(0.0, 0.0, 0.0, 0.8),
        );

        let start_index = self.messages.len().saturating_sub(message_count);
        for (i, message) in self.messages.iter().skip(start_index).enumerate() {
            let y = message_area_y + i as f32 * line_height;
            draw_text(message, 10.0, y, 16.0, WHITE);
        }
    }

    /// Adds a message to the message history.
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);

        if self.messages.len() > self.max_messages {
            self.messages.remove(0);
        }
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
