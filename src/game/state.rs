//! # Game State Module
//!
//! The session context for one playthrough.
//!
//! [`GameSession`] owns everything that lives for exactly one game: the room
//! graph, the room scene, statistics and the win state. It is created once and
//! passed explicitly to whoever needs it; restarting swaps its contents for a
//! fresh graph rather than touching any process-wide state.

use crate::game::{GameConfig, RoomId, RoomManager};
use crate::generation::utils::create_rng;
use crate::input::{FrameInput, HoldTimer};
use crate::scenes::RoomScene;
use crate::RoomshiftResult;
use log::info;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Something that happened during a frame, reported back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The scene now shows `room`
    RoomEntered { room: RoomId, restored: bool },
    /// The player pulled the lever in `room`
    RoomLocked {
        room: RoomId,
        locked: usize,
        needed: usize,
    },
    /// The player pulled a lever that was already down
    AlreadyLocked { room: RoomId },
    /// Enough rooms are locked
    Won { locked: usize },
    /// The session was reset with a new seed
    Restarted { seed: u64 },
}

impl GameEvent {
    /// Text for the message log, if the event is worth telling the player about.
    pub fn message(&self) -> Option<String> {
        match self {
            GameEvent::RoomEntered { .. } => None,
            GameEvent::RoomLocked {
                room,
                locked,
                needed,
            } => Some(format!("Room {room} locked ({locked}/{needed})")),
            GameEvent::AlreadyLocked { room } => Some(format!("Room {room} is already locked")),
            GameEvent::Won { locked } => Some(format!("You locked {locked} rooms. You win!")),
            GameEvent::Restarted { .. } => Some("The rooms shift. New game started!".to_string()),
        }
    }
}

/// Game statistics tracking player progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Doors walked through
    pub transitions: u32,
    /// Transitions that landed in a locked room
    pub locked_rooms_revisited: u32,
    /// Levers pulled
    pub rooms_locked: u32,
    /// Restarts in this process
    pub restarts: u32,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoomEntered { restored, .. } => {
                self.transitions += 1;
                if *restored {
                    self.locked_rooms_revisited += 1;
                }
            }
            GameEvent::RoomLocked { .. } => {
                self.rooms_locked += 1;
            }
            GameEvent::Restarted { .. } => {
                self.restarts += 1;
            }
            _ => {}
        }
    }
}

/// Game completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCompletionState {
    /// Game is still in progress
    Playing,
    /// The player locked enough rooms
    Won,
}

/// Central context for one game.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub rooms: RoomManager,
    pub scene: RoomScene,
    pub statistics: GameStatistics,
    pub completion_state: GameCompletionState,
    restart_timer: HoldTimer,
    seed: u64,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session from a validated configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomshift::{GameConfig, GameSession, GameCompletionState};
    ///
    /// let session = GameSession::new(GameConfig::with_seed(12345)).unwrap();
    /// assert_eq!(session.rooms.current_room_id().to_string(), "0,0");
    /// assert_eq!(session.completion_state, GameCompletionState::Playing);
    /// ```
    pub fn new(config: GameConfig) -> RoomshiftResult<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        let (rooms, scene) = Self::fresh_world(&config, &mut rng);

        info!("New session with seed {}", seed);
        Ok(Self {
            restart_timer: HoldTimer::new(config.restart_hold_secs),
            config,
            rooms,
            scene,
            statistics: GameStatistics::new(),
            completion_state: GameCompletionState::Playing,
            seed,
            rng,
        })
    }

    fn fresh_world(config: &GameConfig, rng: &mut StdRng) -> (RoomManager, RoomScene) {
        let rooms = RoomManager::new(rng.gen(), config.win_threshold);
        let scene = RoomScene::new(&rooms, config, rng.gen());
        (rooms, scene)
    }

    /// Seed of the current world.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Advances the session by one frame.
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.restart_timer.update(input.restart_held, dt) {
            events.push(self.restart());
            return events;
        }

        if self.is_game_ended() {
            if input.new_game {
                events.push(self.restart());
            }
            return events;
        }

        let scene_events = self.scene.update(&mut self.rooms, input, dt);
        for event in scene_events {
            self.process_event(&event);
            let locked = matches!(event, GameEvent::RoomLocked { .. });
            events.push(event);

            if locked && self.rooms.has_won() {
                let won = GameEvent::Won {
                    locked: self.rooms.locked_count(),
                };
                self.process_event(&won);
                events.push(won);
            }
        }

        events
    }

    /// Applies an event's side effects on statistics and completion state.
    pub fn process_event(&mut self, event: &GameEvent) {
        self.statistics.update_from_event(event);
        if let GameEvent::Won { locked } = event {
            info!("Session won with {} locked rooms", locked);
            self.completion_state = GameCompletionState::Won;
        }
    }

    /// Throws away the room graph and starts over with a new seed.
    pub fn restart(&mut self) -> GameEvent {
        let seed = self.rng.gen();
        self.rng = create_rng(seed);
        let (rooms, scene) = Self::fresh_world(&self.config, &mut self.rng);
        self.rooms = rooms;
        self.scene = scene;
        self.seed = seed;
        self.completion_state = GameCompletionState::Playing;

        info!("Restarted session with seed {}", seed);
        let event = GameEvent::Restarted { seed };
        self.process_event(&event);
        event
    }

    pub fn is_game_ended(&self) -> bool {
        self.completion_state != GameCompletionState::Playing
    }

    /// How far the restart hold has progressed, 0.0 to 1.0.
    pub fn restart_progress(&self) -> f32 {
        self.restart_timer.progress()
    }
}
