//! Seam between the simulation and whatever draws it
//!
//! The simulation never owns positions of falling objects: they are animated by
//! the presentation layer, and the core only reads bounds back at tick time.

use serde::{Deserialize, Serialize};

use super::collision::{DeviceTier, Rect};

/// Presentation-side handle for a falling object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityHandle(pub u64);

/// Everything the presentation needs to create and animate a falling object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntitySpec {
    pub is_good: bool,
    /// Time to fall from the top of the play area to the bottom (seconds)
    pub fall_duration_secs: f32,
    /// Left edge within the play area (px)
    pub x: f32,
    /// Edge length (px)
    pub size: f32,
}

/// Which full-screen overlay is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Start,
    Playing,
    GameOver,
}

/// Read-only geometry queries
pub trait BoundsProvider {
    /// Current bounds of the player's basket
    fn player_bounds(&self) -> Rect;

    /// Current bounds of a falling object, or None once it has been detached
    fn entity_bounds(&self, handle: EntityHandle) -> Option<Rect>;

    /// Viewport width (px), used to pick the device tier
    fn viewport_width(&self) -> f32;

    /// Play area width (px)
    fn area_width(&self) -> f32;

    fn device_tier(&self) -> DeviceTier {
        DeviceTier::from_viewport_width(self.viewport_width())
    }
}

/// Object lifecycle and display hooks
///
/// Display hooks default to no-ops so headless and test backends only
/// implement what they observe.
pub trait Presentation: BoundsProvider {
    /// Create and start animating a falling object
    fn create_entity(&mut self, spec: EntitySpec) -> EntityHandle;

    /// Remove a falling object from the play area
    fn detach(&mut self, handle: EntityHandle);

    /// Hide a falling object immediately (no further animation)
    fn hide(&mut self, handle: EntityHandle);

    fn show_score(&mut self, _score: u64) {}

    fn show_lives(&mut self, _lives: i32) {}

    fn show_level(&mut self, _level: u32) {}

    /// Brief attention pulse on the lives counter
    fn pulse_lives(&mut self) {}

    fn show_final_score(&mut self, _score: u64) {}

    fn show_screen(&mut self, _screen: Screen) {}

    /// Move the basket to a percentage of the play area width
    fn move_player(&mut self, _percent: f32) {}

    /// Called with the virtual time before each timer callback runs
    fn sync_clock(&mut self, _now_ms: u64) {}
}
