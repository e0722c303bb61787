//! Player movement
//!
//! Raw keyboard/mouse/touch wiring stays with the host; it hands over one of
//! these commands and the basket position is updated here.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::clamp_player_position;
use crate::sim::{BoundsProvider, GameSession, Presentation};

/// A movement command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlayerInput {
    /// Left arrow: one `player_speed` step left
    StepLeft,
    /// Right arrow: one `player_speed` step right
    StepRight,
    /// Mouse move or touch at client x, relative to the play area's left edge and width
    Pointer {
        x: f32,
        area_left: f32,
        area_width: f32,
    },
}

/// Apply a movement command. Ignored (returns false) unless the session is running.
pub fn apply(session: &mut GameSession, presentation: &mut dyn Presentation, input: PlayerInput) -> bool {
    if !session.is_running() {
        return false;
    }

    let target = match input {
        PlayerInput::StepLeft => session.player_position - session.config.player_speed,
        PlayerInput::StepRight => session.player_position + session.config.player_speed,
        PlayerInput::Pointer {
            x,
            area_left,
            area_width,
        } => {
            if area_width.is_nan() || area_width <= 0.0 {
                return false;
            }
            (x - area_left) / area_width * 100.0
        }
    };

    session.player_position = clamp_player_position(target);
    presentation.move_player(session.player_position);
    true
}

/// Demo AI: chase the lowest good object that can still be caught
pub fn autopilot(session: &GameSession, bounds: &dyn BoundsProvider) -> Option<PlayerInput> {
    if !session.is_running() {
        return None;
    }

    let player = bounds.player_bounds();
    let missed_threshold = player.bottom() - bounds.device_tier().miss_buffer();

    let target = session
        .entities
        .iter()
        .filter(|e| e.is_good && !e.caught)
        .filter_map(|e| bounds.entity_bounds(e.handle))
        .filter(|r| r.top() <= missed_threshold)
        .max_by(|a, b| a.bottom().partial_cmp(&b.bottom()).unwrap_or(Ordering::Equal))?;

    Some(PlayerInput::Pointer {
        x: target.center().x,
        area_left: 0.0,
        area_width: bounds.area_width(),
    })
}
