//! Runs due timers against the session
//!
//! The host calls [`advance`] with wall-clock deltas (or fixed steps in tests);
//! every spawn/tick timer that came due in that window fires in order.

use super::presentation::Presentation;
use super::scheduler::Task;
use super::spawn::spawn;
use super::state::GameSession;
use super::tick::tick;

/// Upper bound on timer callbacks per call, so a huge delta can't stall the host
pub const MAX_FIRES_PER_ADVANCE: u32 = 4096;

/// Advance virtual time by `dt_ms`, firing every timer due in that window.
///
/// Returns the number of callbacks run.
pub fn advance(session: &mut GameSession, presentation: &mut dyn Presentation, dt_ms: u64) -> u32 {
    let until = session.scheduler.now_ms().saturating_add(dt_ms);
    let mut fired = 0;

    while fired < MAX_FIRES_PER_ADVANCE {
        let Some(due) = session.scheduler.pop_due(until) else {
            break;
        };
        presentation.sync_clock(due.at_ms);
        match due.task {
            Task::Spawn => {
                spawn(session, presentation);
            }
            Task::Tick => tick(session, presentation),
        }
        fired += 1;
    }

    if fired == MAX_FIRES_PER_ADVANCE {
        log::warn!("Timer backlog: stopped after {} callbacks", fired);
    }
    presentation.sync_clock(session.scheduler.now_ms());
    fired
}
