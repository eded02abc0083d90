//! # User Interface Elements
//!
//! The minimap of locked rooms and the victory screen.

use crate::config::{MINIMAP_CELL_SIZE, MINIMAP_OFFSET_X, MINIMAP_OFFSET_Y, MINIMAP_SIZE};
use crate::game::{GameSession, Position, RoomId, RoomRecord};
use macroquad::prelude::*;
use std::collections::BTreeMap;

/// Side length of a room marker on the minimap.
const MINIMAP_MARKER_SIZE: f32 = 10.0;

/// One locked room on the minimap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapCell {
    pub room: RoomId,
    pub center: Vec2,
    pub current: bool,
}

/// Screen-space minimap, computed from the locked rooms.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimapLayout {
    /// Panel in screen pixels
    pub frame: Rect,
    /// Distance between neighbouring cells
    pub cell_size: f32,
    pub cells: Vec<MinimapCell>,
    /// One segment per pair of cardinally adjacent locked rooms
    pub links: Vec<(Vec2, Vec2)>,
    /// Where the player is, if the current room is not locked
    pub unlocked_marker: Option<Vec2>,
}

impl MinimapLayout {
    /// Lays out the minimap in the top-right corner of the screen.
    ///
    /// The cell spacing shrinks when the world radius would not fit the panel.
    pub fn build(
        visited: &BTreeMap<RoomId, RoomRecord>,
        current: RoomId,
        screen_width: f32,
        max_room_radius: i32,
    ) -> Self {
        let frame = Rect::new(
            screen_width - MINIMAP_SIZE - MINIMAP_OFFSET_X,
            MINIMAP_OFFSET_Y,
            MINIMAP_SIZE,
            MINIMAP_SIZE,
        );
        let usable = MINIMAP_SIZE / 2.0 - MINIMAP_MARKER_SIZE;
        let cell_size = MINIMAP_CELL_SIZE.min(usable / max_room_radius.max(1) as f32);

        let mut layout = Self {
            frame,
            cell_size,
            cells: Vec::new(),
            links: Vec::new(),
            unlocked_marker: None,
        };

        for room in visited.keys() {
            let position = room.position();
            let center = layout.cell_center(position);
            layout.cells.push(MinimapCell {
                room: *room,
                center,
                current: *room == current,
            });

            // Linked from the smaller end only, so each pair appears once
            for neighbour in position.cardinal_adjacent_positions() {
                if neighbour > position && visited.contains_key(&RoomId::new(neighbour)) {
                    layout.links.push((center, layout.cell_center(neighbour)));
                }
            }
        }

        if !visited.contains_key(&current) {
            layout.unlocked_marker = Some(layout.cell_center(current.position()));
        }

        layout
    }

    /// Screen position of the room at `position`; the origin sits at the panel centre.
    pub fn cell_center(&self, position: Position) -> Vec2 {
        self.frame.center()
            + Vec2::new(
                position.x as f32 * self.cell_size,
                position.y as f32 * self.cell_size,
            )
    }

    pub fn draw(&self) {
        draw_rectangle(
            self.frame.x,
            self.frame.y,
            self.frame.w,
            self.frame.h,
            Color::new(0.0, 0.0, 0.0, 0.8),
        );
        draw_rectangle_lines(self.frame.x, self.frame.y, self.frame.w, self.frame.h, 2.0, WHITE);

        for (from, to) in &self.links {
            draw_line(from.x, from.y, to.x, to.y, 1.0, GRAY);
        }

        let half = MINIMAP_MARKER_SIZE / 2.0;
        for cell in &self.cells {
            let color = if cell.current { GREEN } else { WHITE };
            draw_rectangle(
                cell.center.x - half,
                cell.center.y - half,
                MINIMAP_MARKER_SIZE,
                MINIMAP_MARKER_SIZE,
                color,
            );
        }

        if let Some(marker) = self.unlocked_marker {
            draw_rectangle_lines(
                marker.x - half,
                marker.y - half,
                MINIMAP_MARKER_SIZE,
                MINIMAP_MARKER_SIZE,
                2.0,
                GREEN,
            );
        }
    }
}

/// Draws the end-of-game summary.
pub fn render_victory_screen(session: &GameSession) {
    let (width, height) = (screen_width(), screen_height());
    draw_rectangle(0.0, 0.0, width, height, Color::new(0.0, 0.0, 0.0, 0.85));

    let lines = [
        ("The rooms hold still.".to_string(), 40.0, GOLD),
        (
            format!("Rooms locked: {}", session.rooms.locked_count()),
            24.0,
            WHITE,
        ),
        (
            format!("Doors walked through: {}", session.statistics.transitions),
            24.0,
            WHITE,
        ),
        (format!("Seed: {}", session.seed()), 20.0, GRAY),
        ("N: new game    ESC: quit".to_string(), 22.0, GREEN),
    ];

    let mut y = height / 2.0 - 90.0;
    for (text, size, color) in &lines {
        let dims = measure_text(text, None, *size as u16, 1.0);
        draw_text(text, (width - dims.width) / 2.0, y, *size, *color);
        y += size * 1.6;
    }
}
