//! Game balance configuration
//!
//! Defaults mirror `consts`. Can be overridden from a JSON file for the
//! native runner; every field is optional in the JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Keyboard step (percentage points)
    pub player_speed: f32,
    /// Spawn cadence at level 1 (ms)
    pub spawn_rate_ms: u64,
    /// Floor for the spawn cadence (ms)
    pub min_spawn_rate_ms: u64,
    /// Cadence reduction per level (ms)
    pub spawn_rate_step_ms: u64,
    /// Update tick period (ms)
    pub tick_period_ms: u64,
    /// Probability that a spawned object is good (0.0 - 1.0)
    pub good_object_chance: f64,
    pub points_per_catch: u64,
    /// Score per level
    pub level_score_step: u64,
    pub starting_lives: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            spawn_rate_ms: BASE_SPAWN_RATE_MS,
            min_spawn_rate_ms: MIN_SPAWN_RATE_MS,
            spawn_rate_step_ms: SPAWN_RATE_STEP_MS,
            tick_period_ms: TICK_PERIOD_MS,
            good_object_chance: GOOD_OBJECT_CHANCE,
            points_per_catch: POINTS_PER_CATCH,
            level_score_step: LEVEL_SCORE_STEP,
            starting_lives: STARTING_LIVES,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load_or_default(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read config {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp out-of-range values so the simulation never sees them
    pub fn sanitized(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.good_object_chance) {
            let chance = if self.good_object_chance.is_nan() {
                GOOD_OBJECT_CHANCE
            } else {
                self.good_object_chance.clamp(0.0, 1.0)
            };
            log::warn!(
                "good_object_chance {} out of range, using {}",
                self.good_object_chance,
                chance
            );
            self.good_object_chance = chance;
        }
        if self.tick_period_ms == 0 {
            log::warn!("tick_period_ms must be positive, using {}", TICK_PERIOD_MS);
            self.tick_period_ms = TICK_PERIOD_MS;
        }
        if self.min_spawn_rate_ms == 0 {
            log::warn!("min_spawn_rate_ms must be positive, using {}", MIN_SPAWN_RATE_MS);
            self.min_spawn_rate_ms = MIN_SPAWN_RATE_MS;
        }
        if self.spawn_rate_ms < self.min_spawn_rate_ms {
            log::warn!(
                "spawn_rate_ms {} below floor, using {}",
                self.spawn_rate_ms,
                self.min_spawn_rate_ms
            );
            self.spawn_rate_ms = self.min_spawn_rate_ms;
        }
        if self.level_score_step == 0 {
            log::warn!("level_score_step must be positive, using {}", LEVEL_SCORE_STEP);
            self.level_score_step = LEVEL_SCORE_STEP;
        }
        if self.starting_lives <= 0 {
            log::warn!("starting_lives must be positive, using {}", STARTING_LIVES);
            self.starting_lives = STARTING_LIVES;
        }
        if !self.player_speed.is_finite() || self.player_speed <= 0.0 {
            self.player_speed = PLAYER_SPEED;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = GameConfig::from_json(r#"{ "spawn_rate_ms": 2000 }"#).unwrap();
        assert_eq!(config.spawn_rate_ms, 2000);
        assert_eq!(config.tick_period_ms, TICK_PERIOD_MS);
        assert_eq!(config.starting_lives, 3);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(GameConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_sanitized_clamps() {
        let config = GameConfig {
            good_object_chance: 1.5,
            tick_period_ms: 0,
            spawn_rate_ms: 100,
            level_score_step: 0,
            starting_lives: -1,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(config.good_object_chance, 1.0);
        assert_eq!(config.tick_period_ms, TICK_PERIOD_MS);
        assert_eq!(config.spawn_rate_ms, MIN_SPAWN_RATE_MS);
        assert_eq!(config.level_score_step, LEVEL_SCORE_STEP);
        assert_eq!(config.starting_lives, STARTING_LIVES);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = GameConfig::load_or_default(std::path::Path::new("/nonexistent/sky.json"));
        assert_eq!(config, GameConfig::default());
    }
}
