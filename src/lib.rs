//! Sky Basket - catch the good stuff, dodge the bad stuff
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, scoring, session lifecycle)
//! - `input`: Player movement from keyboard/pointer, plus the demo autopilot
//! - `platform`: Presentation backends (headless playfield)
//! - `config`: Data-driven game balance

pub mod config;
pub mod input;
pub mod platform;
pub mod sim;

pub use config::GameConfig;
pub use input::PlayerInput;

/// Game configuration constants
pub mod consts {
    /// Update tick period (ms)
    pub const TICK_PERIOD_MS: u64 = 20;

    /// Spawn cadence at level 1 (ms)
    pub const BASE_SPAWN_RATE_MS: u64 = 1500;
    /// Fastest spawn cadence reachable by leveling (ms)
    pub const MIN_SPAWN_RATE_MS: u64 = 400;
    /// Spawn cadence reduction per level (ms)
    pub const SPAWN_RATE_STEP_MS: u64 = 150;

    /// Probability a spawned object is good
    pub const GOOD_OBJECT_CHANCE: f64 = 0.7;

    /// Points for catching a good object
    pub const POINTS_PER_CATCH: u64 = 10;
    /// Score needed per level
    pub const LEVEL_SCORE_STEP: u64 = 300;
    pub const STARTING_LIVES: i32 = 3;

    /// Fall duration at level 0 (seconds), shortened per level and floored
    pub const FALL_DURATION_BASE_SECS: f32 = 4.0;
    pub const FALL_DURATION_STEP_SECS: f32 = 0.3;
    pub const FALL_DURATION_MIN_SECS: f32 = 2.0;

    /// Player position bounds (percent of play area width)
    pub const PLAYER_MIN_POSITION: f32 = 5.0;
    pub const PLAYER_MAX_POSITION: f32 = 95.0;
    pub const PLAYER_START_POSITION: f32 = 50.0;
    /// Keyboard step (percentage points per key press)
    pub const PLAYER_SPEED: f32 = 2.0;
}

/// Clamp a player position to the playable range
#[inline]
pub fn clamp_player_position(percent: f32) -> f32 {
    if percent.is_nan() {
        return consts::PLAYER_START_POSITION;
    }
    percent.clamp(consts::PLAYER_MIN_POSITION, consts::PLAYER_MAX_POSITION)
}
