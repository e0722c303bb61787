//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Virtual-time timers only (no wall clock)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - Geometry comes from the presentation layer through `BoundsProvider`

pub mod collision;
pub mod driver;
pub mod lifecycle;
pub mod presentation;
pub mod progress;
pub mod scheduler;
pub mod spawn;
pub mod state;
pub mod tick;

#[cfg(test)]
pub(crate) mod testing;

pub use collision::{DeviceTier, Rect, is_colliding};
pub use driver::advance;
pub use lifecycle::{end, go_home, reset, start};
pub use presentation::{BoundsProvider, EntityHandle, EntitySpec, Presentation, Screen};
pub use progress::{add_score, fall_duration_secs, level_for_score, lose_life, spawn_interval_for_level};
pub use scheduler::{Scheduler, Task, TimerId};
pub use spawn::spawn;
pub use state::{EntityId, FallingEntity, GameEvent, GamePhase, GameSession, SessionSnapshot};
pub use tick::tick;
