//! # Game Mathematics
//!
//! Small geometry functions over macroquad's `Rect` and `Vec2`.

use macroquad::math::{Rect, Vec2};

/// Builds a rectangle of the given size centred on `center`.
pub fn rect_around(center: Vec2, width: f32, height: f32) -> Rect {
    Rect::new(
        center.x - width / 2.0,
        center.y - height / 2.0,
        width,
        height,
    )
}

/// Point-in-rectangle test that includes all four edges.
///
/// macroquad's `Rect::contains` excludes the far edges, which would make a
/// door trigger flush against the room bound unreachable.
pub fn contains_inclusive(rect: &Rect, point: Vec2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.w
        && point.y >= rect.y
        && point.y <= rect.y + rect.h
}

/// Turns a raw -1/0/1 axis pair into a movement vector of length 0 or 1.
///
/// # Examples
///
/// ```
/// use roomshift::normalize_axis_input;
///
/// let diagonal = normalize_axis_input(1.0, -1.0);
/// assert!((diagonal.length() - 1.0).abs() < 1e-6);
/// assert_eq!(normalize_axis_input(0.0, 0.0).length(), 0.0);
/// ```
pub fn normalize_axis_input(x: f32, y: f32) -> Vec2 {
    let x = x.clamp(-1.0, 1.0);
    let y = y.clamp(-1.0, 1.0);
    if x != 0.0 && y != 0.0 {
        Vec2::new(x, y) * std::f32::consts::FRAC_1_SQRT_2
    } else {
        Vec2::new(x, y)
    }
}

/// Clamps a body centre so that a body with the given half extents stays inside `bounds`.
pub fn clamp_to_rect(center: Vec2, bounds: &Rect, half_extents: Vec2) -> Vec2 {
    Vec2::new(
        center
            .x
            .clamp(bounds.x + half_extents.x, bounds.x + bounds.w - half_extents.x),
        center
            .y
            .clamp(bounds.y + half_extents.y, bounds.y + bounds.h - half_extents.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_around() {
        let rect = rect_around(Vec2::new(100.0, 50.0), 60.0, 20.0);
        assert_eq!(rect, Rect::new(70.0, 40.0, 60.0, 20.0));
    }

    #[test]
    fn test_contains_inclusive_edges() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(contains_inclusive(&rect, Vec2::new(10.0, 10.0)));
        assert!(contains_inclusive(&rect, Vec2::new(0.0, 5.0)));
        assert!(!contains_inclusive(&rect, Vec2::new(10.1, 5.0)));
    }

    #[test]
    fn test_normalize_axis_input() {
        assert_eq!(normalize_axis_input(1.0, 0.0), Vec2::new(1.0, 0.0));
        assert_eq!(normalize_axis_input(-3.0, 0.0), Vec2::new(-1.0, 0.0));
        let diagonal = normalize_axis_input(-1.0, 1.0);
        assert!((diagonal.x + std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
        assert!((diagonal.y - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_to_rect() {
        let bounds = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let half = Vec2::splat(24.0);
        assert_eq!(
            clamp_to_rect(Vec2::new(-50.0, 500.0), &bounds, half),
            Vec2::new(24.0, 500.0)
        );
        assert_eq!(
            clamp_to_rect(Vec2::new(990.0, 1200.0), &bounds, half),
            Vec2::new(976.0, 976.0)
        );
    }
}
