//! Fixed-period update tick
//!
//! Checks every falling object against the basket (catch) and against the
//! miss line below it. Catch always wins over miss for the same object in the
//! same tick.

use super::collision::is_colliding;
use super::presentation::{BoundsProvider, Presentation};
use super::progress::{add_score, lose_life};
use super::state::{GameEvent, GameSession};

/// What happened to one object during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Detached by the presentation already
    Pruned,
    Caught,
    Missed,
    Falling,
}

/// Advance the session by one update tick
pub fn tick(session: &mut GameSession, presentation: &mut dyn Presentation) {
    if !session.is_running() {
        return;
    }

    let tier = presentation.device_tier();
    let player = presentation.player_bounds();
    let missed_threshold = player.bottom() - tier.miss_buffer();

    // Newest first; removal only ever happens at the current index
    let mut i = session.entities.len();
    while i > 0 {
        i -= 1;

        let entity = &session.entities[i];
        let outcome = match presentation.entity_bounds(entity.handle) {
            None => Outcome::Pruned,
            Some(bounds) if !entity.caught && is_colliding(&bounds, &player, tier) => {
                Outcome::Caught
            }
            Some(bounds) if bounds.top() > missed_threshold => Outcome::Missed,
            Some(_) => Outcome::Falling,
        };

        match outcome {
            Outcome::Falling => {}
            Outcome::Pruned => {
                let entity = session.entities.remove(i);
                log::debug!("Pruned detached object {}", entity.id);
                session.push_event(GameEvent::Pruned { id: entity.id });
            }
            Outcome::Caught => {
                let mut entity = session.entities.remove(i);
                entity.mark_caught();
                presentation.hide(entity.handle);
                presentation.detach(entity.handle);
                session.push_event(GameEvent::Caught {
                    id: entity.id,
                    is_good: entity.is_good,
                });

                if entity.is_good {
                    let points = session.config.points_per_catch;
                    add_score(session, presentation, points);
                } else {
                    log::debug!("Caught bad object {}", entity.id);
                    lose_life(session, presentation);
                }
            }
            Outcome::Missed => {
                let entity = session.entities.remove(i);
                presentation.detach(entity.handle);
                let penalized = entity.is_good && !entity.caught;
                session.push_event(GameEvent::Missed {
                    id: entity.id,
                    penalized,
                });

                if penalized {
                    log::debug!("Missed good object {}", entity.id);
                    lose_life(session, presentation);
                }
            }
        }

        // Game over tears down the collection; nothing left to scan
        if !session.is_running() {
            break;
        }
    }
}
