//! # Room Graph
//!
//! The registry of discovered rooms and the rules for moving between them.
//!
//! No edges are stored: two rooms are neighbours exactly when their positions
//! differ by one cardinal step. A room is "visited" once the player locks it,
//! after which its doors and appearance never change again.

use crate::game::{Direction, Position, RoomId};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Which renderable room type a record uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SceneKind {
    /// The plain four-walled room
    #[default]
    Standard,
}

impl SceneKind {
    /// Kinds a newly generated room is drawn from.
    pub const POOL: &'static [SceneKind] = &[SceneKind::Standard];

    /// Picks a kind from the pool.
    pub fn random(rng: &mut StdRng) -> Self {
        Self::POOL.choose(rng).copied().unwrap_or_default()
    }
}

/// Floor texture selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloorKey {
    Floor1,
    Floor2,
    Floor3,
}

impl FloorKey {
    pub const ALL: [FloorKey; 3] = [FloorKey::Floor1, FloorKey::Floor2, FloorKey::Floor3];

    /// Asset key of the floor tile.
    pub fn asset_key(self) -> &'static str {
        match self {
            FloorKey::Floor1 => "floor_1",
            FloorKey::Floor2 => "floor_2",
            FloorKey::Floor3 => "floor_3",
        }
    }
}

/// Wall texture selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallKey {
    Wall1,
    Wall2,
}

impl WallKey {
    pub const ALL: [WallKey; 2] = [WallKey::Wall1, WallKey::Wall2];

    /// Asset key of the plain wall.
    pub fn asset_key(self) -> &'static str {
        match self {
            WallKey::Wall1 => "wall_1",
            WallKey::Wall2 => "wall_2",
        }
    }

    /// Asset key of the same wall with a door opening cut into it.
    pub fn door_asset_key(self) -> &'static str {
        match self {
            WallKey::Wall1 => "wall_1_door",
            WallKey::Wall2 => "wall_2_door",
        }
    }
}

/// Floor and wall selection for a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Appearance {
    pub floor: FloorKey,
    pub wall: WallKey,
}

impl Appearance {
    pub fn new(floor: FloorKey, wall: WallKey) -> Self {
        Self { floor, wall }
    }

    /// Picks a floor and a wall uniformly at random.
    pub fn random(rng: &mut StdRng) -> Self {
        Self {
            floor: *FloorKey::ALL.choose(rng).unwrap_or(&FloorKey::Floor1),
            wall: *WallKey::ALL.choose(rng).unwrap_or(&WallKey::Wall1),
        }
    }
}

/// One discovered room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Grid position, fixed at creation
    pub position: Position,
    /// Renderable room type
    pub scene_kind: SceneKind,
    /// Floor and wall selection; only meaningful once the room is locked
    pub appearance: Appearance,
    /// Locked flag: doors and appearance are frozen once set
    pub visited: bool,
    /// Door layout, present only after the room has been locked
    pub doors: Option<BTreeSet<Direction>>,
}

impl RoomRecord {
    /// Creates an unlocked record with no door layout.
    pub fn new(position: Position, scene_kind: SceneKind, appearance: Appearance) -> Self {
        Self {
            position,
            scene_kind,
            appearance,
            visited: false,
            doors: None,
        }
    }

    pub fn id(&self) -> RoomId {
        RoomId::new(self.position)
    }

    /// Whether a door layout has been persisted for this room.
    pub fn has_persisted_doors(&self) -> bool {
        self.doors.as_ref().is_some_and(|doors| !doors.is_empty())
    }
}

/// Single source of truth for the room graph and the player's current room.
///
/// # Examples
///
/// ```
/// use roomshift::{Direction, RoomManager};
///
/// let mut rooms = RoomManager::new(7, 8);
/// assert_eq!(rooms.current_room_id().to_string(), "0,0");
///
/// let id = rooms.move_to_room(Direction::North);
/// assert_eq!(id.to_string(), "0,-1");
/// ```
#[derive(Debug, Clone)]
pub struct RoomManager {
    rooms: HashMap<Position, RoomRecord>,
    current: Position,
    win_threshold: usize,
    rng: StdRng,
}

impl RoomManager {
    /// Creates a registry holding only the unlocked start room at (0, 0).
    pub fn new(seed: u64, win_threshold: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let origin = Position::origin();
        let start = RoomRecord::new(origin, SceneKind::Standard, Appearance::random(&mut rng));

        let mut rooms = HashMap::new();
        rooms.insert(origin, start);

        Self {
            rooms,
            current: origin,
            win_threshold,
            rng,
        }
    }

    pub fn current_room_id(&self) -> RoomId {
        RoomId::new(self.current)
    }

    pub fn current_room_coords(&self) -> Position {
        self.current
    }

    /// Snapshot of every locked room, for the minimap.
    pub fn visited_rooms(&self) -> BTreeMap<RoomId, RoomRecord> {
        self.rooms
            .values()
            .filter(|record| record.visited)
            .map(|record| (record.id(), record.clone()))
            .collect()
    }

    /// Moves one room in `direction` and returns the identifier of the room
    /// the player ends up in.
    ///
    /// Leaving a locked room, or entering a locked neighbour, keeps the target
    /// record as it is (creating it if missing). Leaving an unlocked room for
    /// anything but a locked neighbour rolls a fresh record at the target.
    pub fn move_to_room(&mut self, direction: Direction) -> RoomId {
        let target = self.current.offset(direction);
        let current_locked = self
            .rooms
            .get(&self.current)
            .is_some_and(|record| record.visited);

        if current_locked {
            if !self.rooms.contains_key(&target) {
                let record = self.roll_record(target);
                self.rooms.insert(target, record);
                debug!("Discovered room {} from a locked room", RoomId::new(target));
            }
        } else {
            let target_locked = self
                .rooms
                .get(&target)
                .is_some_and(|record| record.visited);

            if !target_locked {
                let record = self.roll_record(target);
                self.rooms.insert(target, record);
                debug!("Regenerated room {} from an unlocked room", RoomId::new(target));
            }
        }

        self.current = target;
        self.current_room_id()
    }

    pub fn room_data(&self, id: RoomId) -> Option<&RoomRecord> {
        self.rooms.get(&id.position())
    }

    /// Scene kind for `id`, falling back to the standard room if unknown.
    pub fn scene_for_room(&self, id: RoomId) -> SceneKind {
        self.room_data(id)
            .map(|record| record.scene_kind)
            .unwrap_or_default()
    }

    /// Locks the room. Unknown ids are ignored.
    pub fn mark_visited(&mut self, id: RoomId) {
        if let Some(record) = self.rooms.get_mut(&id.position()) {
            if !record.visited {
                record.visited = true;
                info!(
                    "Locked room {} ({}/{} locked)",
                    id,
                    self.locked_count(),
                    self.win_threshold
                );
            }
        }
    }

    /// Persists a door layout and, when given, the appearance keys. Unknown ids are ignored.
    pub fn set_room_doors(
        &mut self,
        id: RoomId,
        doors: &BTreeSet<Direction>,
        floor: Option<FloorKey>,
        wall: Option<WallKey>,
    ) {
        let Some(record) = self.rooms.get_mut(&id.position()) else {
            return;
        };
        record.doors = Some(doors.clone());
        if let Some(floor) = floor {
            record.appearance.floor = floor;
        }
        if let Some(wall) = wall {
            record.appearance.wall = wall;
        }
        debug!("Stored {} doors for room {}", doors.len(), id);
    }

    /// True once the number of locked rooms reaches the win threshold.
    pub fn has_won(&self) -> bool {
        self.locked_count() >= self.win_threshold
    }

    pub fn locked_count(&self) -> usize {
        self.rooms.values().filter(|record| record.visited).count()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn win_threshold(&self) -> usize {
        self.win_threshold
    }

    fn roll_record(&mut self, position: Position) -> RoomRecord {
        let scene_kind = SceneKind::random(&mut self.rng);
        let appearance = Appearance::random(&mut self.rng);
        RoomRecord::new(position, scene_kind, appearance)
    }
}
