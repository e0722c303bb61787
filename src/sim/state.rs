//! Session state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::presentation::EntityHandle;
use super::scheduler::{Scheduler, Task, TimerId};
use crate::config::GameConfig;
use crate::consts::PLAYER_START_POSITION;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, nothing scheduled
    #[default]
    Idle,
    /// Active gameplay, spawn and tick timers live
    Running,
    /// Out of lives, score frozen for display
    Ended,
}

/// Session-unique id of a falling object
pub type EntityId = u32;

/// A falling object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingEntity {
    pub id: EntityId,
    pub handle: EntityHandle,
    pub is_good: bool,
    pub caught: bool,
}

impl FallingEntity {
    pub fn new(id: EntityId, handle: EntityHandle, is_good: bool) -> Self {
        Self {
            id,
            handle,
            is_good,
            caught: false,
        }
    }

    /// Mark as caught. Returns false if it already was.
    pub fn mark_caught(&mut self) -> bool {
        if self.caught {
            return false;
        }
        self.caught = true;
        true
    }
}

/// Something that happened during a callback, for the host to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Spawned { id: EntityId, is_good: bool },
    Caught { id: EntityId, is_good: bool },
    Missed { id: EntityId, penalized: bool },
    /// Detached by the presentation before the core removed it
    Pruned { id: EntityId },
    ScoreChanged { score: u64 },
    LifeLost { lives: i32 },
    LevelUp { level: u32, spawn_interval_ms: u64 },
    GameOver { score: u64, level: u32 },
    ReturnedHome,
}

/// Serializable view of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: i32,
    pub level: u32,
    pub player_position: f32,
    pub live_entities: usize,
    pub spawn_interval_ms: u64,
    pub time_ms: u64,
}

/// One play-through, passed explicitly to every operation
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub score: u64,
    /// May dip below zero transiently before the game-over check
    pub lives: i32,
    pub level: u32,
    /// Percentage of the play area width, clamped to [5, 95]
    pub player_position: f32,
    /// Live falling objects in spawn order
    pub entities: Vec<FallingEntity>,
    /// Current spawn cadence
    pub spawn_interval_ms: u64,
    pub scheduler: Scheduler,
    pub(crate) spawn_timer: Option<TimerId>,
    pub(crate) tick_timer: Option<TimerId>,
    pub(crate) rng: Pcg32,
    events: Vec<GameEvent>,
    next_id: EntityId,
}

impl GameSession {
    /// Create an idle session with the given config and RNG seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let config = config.sanitized();
        Self {
            phase: GamePhase::Idle,
            score: 0,
            lives: config.starting_lives,
            level: 1,
            player_position: PLAYER_START_POSITION,
            entities: Vec::new(),
            spawn_interval_ms: config.spawn_rate_ms,
            scheduler: Scheduler::new(),
            spawn_timer: None,
            tick_timer: None,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
            config,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn spawn_timer(&self) -> Option<TimerId> {
        self.spawn_timer
    }

    pub fn tick_timer(&self) -> Option<TimerId> {
        self.tick_timer
    }

    /// Replace the spawn timer with one at `period_ms`
    pub(crate) fn reschedule_spawn(&mut self, period_ms: u64) {
        if let Some(old) = self.spawn_timer.take() {
            self.scheduler.cancel(old);
        }
        self.spawn_interval_ms = period_ms;
        self.spawn_timer = Some(self.scheduler.schedule_repeating(Task::Spawn, period_ms));
    }

    /// Cancel both timers
    pub(crate) fn cancel_timers(&mut self) {
        if let Some(id) = self.spawn_timer.take() {
            self.scheduler.cancel(id);
        }
        if let Some(id) = self.tick_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Put score, lives, level and player position back to their starting values
    pub(crate) fn zero_progress(&mut self) {
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.level = 1;
        self.player_position = PLAYER_START_POSITION;
        self.spawn_interval_ms = self.config.spawn_rate_ms;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            score: self.score,
            lives: self.lives,
            level: self.level,
            player_position: self.player_position,
            live_entities: self.entities.len(),
            spawn_interval_ms: self.spawn_interval_ms,
            time_ms: self.scheduler.now_ms(),
        }
    }
}
