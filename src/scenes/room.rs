//! # Room Scene
//!
//! Presents the current room and drives the room graph from player actions.
//!
//! On entry a locked room is rebuilt from its record, so it looks the same on
//! every return. Any other room gets a freshly generated door set and
//! appearance, which is only written back to the graph when the player pulls
//! the lever.

use crate::game::{
    Appearance, Direction, GameConfig, GameEvent, RoomDimensions, RoomId, RoomManager,
};
use crate::generation::{
    entry_point, room_bounds, room_center, utils, DoorGenerator, GenerationConfig, Generator,
    RoomLayout,
};
use crate::input::FrameInput;
use crate::player::{Interactable, InteractionOutcome, Player};
use log::{debug, warn};
use rand::rngs::StdRng;
use std::collections::BTreeSet;

/// The scene the player spends the game in.
#[derive(Debug, Clone)]
pub struct RoomScene {
    layout: RoomLayout,
    player: Player,
    dims: RoomDimensions,
    generation: GenerationConfig,
    rng: StdRng,
}

impl RoomScene {
    /// Creates the scene in the manager's current room with the player in the middle.
    pub fn new(rooms: &RoomManager, config: &GameConfig, seed: u64) -> Self {
        let dims = config.room;
        let mut rng = utils::create_rng(seed);
        let generation = config.generation.clone();
        let room = rooms.current_room_id();
        let layout = build_layout(rooms, room, None, &generation, &dims, &mut rng);

        Self {
            layout,
            player: Player::new(room_center(&dims), config.player_speed),
            dims,
            generation,
            rng,
        }
    }

    pub fn current_room(&self) -> RoomId {
        self.layout.room
    }

    pub fn layout(&self) -> &RoomLayout {
        &self.layout
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn dimensions(&self) -> &RoomDimensions {
        &self.dims
    }

    /// Shows `room`, restoring it if locked and generating it otherwise.
    ///
    /// `entry_side` is the wall the player came in through.
    pub fn enter_room(
        &mut self,
        rooms: &RoomManager,
        room: RoomId,
        entry_side: Option<Direction>,
    ) -> GameEvent {
        self.layout = build_layout(
            rooms,
            room,
            entry_side,
            &self.generation,
            &self.dims,
            &mut self.rng,
        );
        GameEvent::RoomEntered {
            room,
            restored: self.layout.restored,
        }
    }

    /// Advances one frame: moves the player, then handles doors and the lever.
    pub fn update(
        &mut self,
        rooms: &mut RoomManager,
        input: &FrameInput,
        dt: f32,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();

        self.player.update(input.movement, dt, &room_bounds(&self.dims));

        if let Some(direction) = self.layout.door_at(self.player.position) {
            events.push(self.transition(rooms, direction));
        } else if input.interact {
            events.extend(self.interact(rooms));
        }

        events
    }

    /// Walks through the door facing `direction`.
    pub fn transition(&mut self, rooms: &mut RoomManager, direction: Direction) -> GameEvent {
        let from = self.current_room();
        let room = rooms.move_to_room(direction);
        debug!("Transition {} -> {} going {}", from, room, direction);

        let arrival = entry_point(direction, self.player.position, &self.dims);
        self.player.place_at(arrival);
        self.enter_room(rooms, room, Some(direction.opposite()))
    }

    /// Uses whatever is in front of the player. Only the lever does anything.
    pub fn interact(&mut self, rooms: &mut RoomManager) -> Option<GameEvent> {
        let zone = self.player.interaction_zone();
        if !self.layout.lever.in_reach(&zone) {
            return None;
        }

        match self.layout.lever.on_interact() {
            InteractionOutcome::LeverPulled => Some(self.lock_current_room(rooms)),
            InteractionOutcome::AlreadyPulled => Some(GameEvent::AlreadyLocked {
                room: self.current_room(),
            }),
        }
    }

    /// Freezes the current doors and appearance into the room graph.
    pub fn lock_current_room(&mut self, rooms: &mut RoomManager) -> GameEvent {
        let room = self.current_room();
        let doors = self.layout.door_set();
        let appearance = self.layout.appearance;

        rooms.set_room_doors(room, &doors, Some(appearance.floor), Some(appearance.wall));
        rooms.mark_visited(room);
        self.layout.lever.pulled = true;

        GameEvent::RoomLocked {
            room,
            locked: rooms.locked_count(),
            needed: rooms.win_threshold(),
        }
    }

    /// Prompt for an interactable currently in reach.
    pub fn prompt(&self) -> Option<&'static str> {
        let zone = self.player.interaction_zone();
        self.layout
            .lever
            .in_reach(&zone)
            .then(|| self.layout.lever.prompt())
    }
}

fn build_layout(
    rooms: &RoomManager,
    room: RoomId,
    entry_side: Option<Direction>,
    generation: &GenerationConfig,
    dims: &RoomDimensions,
    rng: &mut StdRng,
) -> RoomLayout {
    let record = rooms.room_data(room);
    let locked = record.is_some_and(|record| record.visited);

    if let Some(record) = record.filter(|record| record.has_persisted_doors()) {
        let doors = record.doors.clone().unwrap_or_default();
        debug!("Restoring room {} with doors {:?}", room, doors);
        return RoomLayout::build(room, &doors, record.appearance, locked, true, dims);
    }

    let doors = generate_doors(room, entry_side, generation, rng);
    let appearance = Appearance::random(rng);
    RoomLayout::build(room, &doors, appearance, locked, false, dims)
}

fn generate_doors(
    room: RoomId,
    entry_side: Option<Direction>,
    generation: &GenerationConfig,
    rng: &mut StdRng,
) -> BTreeSet<Direction> {
    let generator = DoorGenerator::new(room.position(), entry_side);
    let generated = generator
        .generate(generation, rng)
        .and_then(|doors| generator.validate(&doors, generation).map(|_| doors));
    match generated {
        Ok(doors) => doors,
        Err(e) => {
            warn!("Door generation failed for room {}: {}", room, e);
            Direction::cardinal().into_iter().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;
    use macroquad::math::Vec2;

    fn setup() -> (RoomManager, RoomScene) {
        let config = GameConfig::with_seed(1);
        let rooms = RoomManager::new(10, config.win_threshold);
        let scene = RoomScene::new(&rooms, &config, 20);
        (rooms, scene)
    }

    fn stand_at_lever(scene: &mut RoomScene) {
        let lever = scene.layout().lever.position;
        let player = scene.player_mut();
        player.place_at(lever + Vec2::new(0.0, 60.0));
        player.facing = Direction::North;
    }

    #[test]
    fn test_new_scene_starts_in_origin() {
        let (_, scene) = setup();
        assert_eq!(scene.current_room(), RoomId::origin());
        assert!(!scene.layout().doors.is_empty());
        assert!(!scene.layout().restored);
        assert!(!scene.layout().is_locked());
    }

    #[test]
    fn test_transition_moves_and_places_player() {
        let (mut rooms, mut scene) = setup();
        scene.player_mut().place_at(Vec2::new(500.0, 10.0));

        let event = scene.transition(&mut rooms, Direction::North);

        assert_eq!(
            event,
            GameEvent::RoomEntered {
                room: RoomId::new(Position::new(0, -1)),
                restored: false,
            }
        );
        assert_eq!(scene.current_room(), rooms.current_room_id());
        assert_eq!(scene.player().position, Vec2::new(500.0, 950.0));
        assert!(scene.layout().has_door(Direction::South));
    }

    #[test]
    fn test_walking_into_door_triggers_transition() {
        let (mut rooms, mut scene) = setup();
        let door = scene.layout().doors[0];
        let inside = door.trigger.center();
        scene.player_mut().place_at(inside);

        let events = scene.update(&mut rooms, &FrameInput::default(), 0.016);

        assert_eq!(events.len(), 1);
        assert_eq!(
            rooms.current_room_coords(),
            Position::origin().offset(door.direction)
        );
    }

    #[test]
    fn test_player_reaches_shallowest_door_trigger() {
        let mut config = GameConfig::with_seed(1);
        config.room.door_depth = crate::config::PLAYER_SIZE / 2.0;
        config.validate().unwrap();

        let mut rooms = RoomManager::new(10, config.win_threshold);
        let mut scene = RoomScene::new(&rooms, &config, 20);
        let door = scene.layout().doors[0];
        let delta = door.direction.to_delta();
        let walk = FrameInput {
            movement: Vec2::new(delta.x as f32, delta.y as f32),
            ..FrameInput::default()
        };

        // Far more than enough time to cross the room; the wall clamps the rest
        let events = scene.update(&mut rooms, &walk, 10.0);

        assert_eq!(events.len(), 1);
        assert_eq!(
            rooms.current_room_coords(),
            Position::origin().offset(door.direction)
        );
    }

    #[test]
    fn test_lever_locks_room_with_shown_layout() {
        let (mut rooms, mut scene) = setup();
        stand_at_lever(&mut scene);
        let shown_doors = scene.layout().door_set();
        let shown_appearance = scene.layout().appearance;

        let event = scene.interact(&mut rooms).unwrap();

        assert!(matches!(event, GameEvent::RoomLocked { locked: 1, .. }));
        let record = rooms.room_data(RoomId::origin()).unwrap();
        assert!(record.visited);
        assert_eq!(record.doors.as_ref(), Some(&shown_doors));
        assert_eq!(record.appearance, shown_appearance);
    }

    #[test]
    fn test_second_pull_reports_already_locked() {
        let (mut rooms, mut scene) = setup();
        stand_at_lever(&mut scene);
        scene.interact(&mut rooms);

        let event = scene.interact(&mut rooms);
        assert_eq!(
            event,
            Some(GameEvent::AlreadyLocked {
                room: RoomId::origin()
            })
        );
        assert_eq!(rooms.locked_count(), 1);
    }

    #[test]
    fn test_interact_out_of_reach_does_nothing() {
        let (mut rooms, mut scene) = setup();
        assert!(scene.prompt().is_none());
        assert!(scene.interact(&mut rooms).is_none());
        assert_eq!(rooms.locked_count(), 0);
    }

    #[test]
    fn test_locked_room_is_restored_verbatim() {
        let (mut rooms, mut scene) = setup();
        stand_at_lever(&mut scene);
        scene.interact(&mut rooms);
        let locked_layout = scene.layout().clone();

        let exit = *locked_layout.doors.first().unwrap();
        scene.transition(&mut rooms, exit.direction);
        let event = scene.transition(&mut rooms, exit.direction.opposite());

        assert_eq!(
            event,
            GameEvent::RoomEntered {
                room: RoomId::origin(),
                restored: true
            }
        );
        assert_eq!(scene.layout().door_set(), locked_layout.door_set());
        assert_eq!(scene.layout().appearance, locked_layout.appearance);
        assert!(scene.layout().is_locked());
    }

    #[test]
    fn test_unlocked_room_regenerates_on_reentry() {
        let (mut rooms, mut scene) = setup();
        let mut layouts = Vec::new();
        for _ in 0..12 {
            scene.transition(&mut rooms, Direction::East);
            scene.transition(&mut rooms, Direction::West);
            layouts.push((scene.layout().door_set(), scene.layout().appearance));
            assert!(!scene.layout().restored);
        }
        let first = &layouts[0];
        assert!(layouts.iter().any(|layout| layout != first));
    }

    #[test]
    fn test_prompt_when_lever_in_reach() {
        let (_, mut scene) = setup();
        stand_at_lever(&mut scene);
        assert_eq!(scene.prompt(), Some("Press E to lock room"));
    }
}
