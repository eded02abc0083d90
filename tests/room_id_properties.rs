//! Property tests for room identifiers and world bounds.

use proptest::prelude::*;
use roomshift::{Direction, GenerationConfig, Position, RoomId};

proptest! {
    #[test]
    fn room_id_round_trips(x in any::<i32>(), y in any::<i32>()) {
        let id = RoomId::new(Position::new(x, y));
        let parsed: RoomId = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, id);
        prop_assert_eq!(parsed.position(), Position::new(x, y));
    }

    #[test]
    fn distinct_positions_have_distinct_ids(
        a in (-1000i32..1000, -1000i32..1000),
        b in (-1000i32..1000, -1000i32..1000),
    ) {
        prop_assume!(a != b);
        let first = RoomId::new(Position::new(a.0, a.1)).to_string();
        let second = RoomId::new(Position::new(b.0, b.1)).to_string();
        prop_assert_ne!(first, second);
    }

    #[test]
    fn viable_directions_stay_in_bounds(
        radius in 1i32..6,
        x in -6i32..=6,
        y in -6i32..=6,
    ) {
        let config = GenerationConfig::new(radius);
        let position = Position::new(x, y);
        for direction in config.viable_directions(position) {
            prop_assert!(config.is_within_bounds(position.offset(direction)));
        }
    }

    #[test]
    fn opposite_direction_undoes_offset(x in -1000i32..1000, y in -1000i32..1000) {
        let position = Position::new(x, y);
        for direction in Direction::cardinal() {
            prop_assert_eq!(position.offset(direction).offset(direction.opposite()), position);
        }
    }
}
