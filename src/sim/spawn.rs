//! Falling object spawner

use rand::Rng;

use super::presentation::{BoundsProvider, EntitySpec, Presentation};
use super::progress::fall_duration_secs;
use super::state::{EntityId, FallingEntity, GameEvent, GameSession};

/// Spawn one falling object at a random column.
///
/// Returns None without touching anything when the session is not running.
pub fn spawn(session: &mut GameSession, presentation: &mut dyn Presentation) -> Option<EntityId> {
    if !session.is_running() {
        return None;
    }

    let is_good = session.rng.random::<f64>() < session.config.good_object_chance;

    let size = presentation.device_tier().object_size();
    let span = (presentation.area_width() - size).max(0.0);
    let x = session.rng.random::<f32>() * span;

    let spec = EntitySpec {
        is_good,
        fall_duration_secs: fall_duration_secs(session.level),
        x,
        size,
    };
    let handle = presentation.create_entity(spec);

    let id = session.next_entity_id();
    session.entities.push(FallingEntity::new(id, handle, is_good));
    session.push_event(GameEvent::Spawned { id, is_good });
    log::trace!(
        "Spawned {} object {} at x={:.1} (fall {:.2}s)",
        if is_good { "good" } else { "bad" },
        id,
        x,
        spec.fall_duration_secs
    );

    Some(id)
}
