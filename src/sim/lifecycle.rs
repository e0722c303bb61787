//! Session state machine
//!
//! Idle -> Running -> Ended -> (reset) -> Running, and any -> (go_home) -> Idle.
//! Transitions that don't apply in the current phase are ignored.

use super::presentation::{Presentation, Screen};
use super::scheduler::Task;
use super::spawn::spawn;
use super::state::{GameEvent, GamePhase, GameSession};

/// Start playing: one immediate spawn, then the spawn and tick timers
pub fn start(session: &mut GameSession, presentation: &mut dyn Presentation) {
    if session.is_running() {
        log::debug!("start ignored: already running");
        return;
    }

    session.phase = GamePhase::Running;
    presentation.show_screen(Screen::Playing);
    session.push_event(GameEvent::Started);
    log::info!("Session started (level {}, {} lives)", session.level, session.lives);

    spawn(session, presentation);

    // Stale timers would double up the cadence
    session.cancel_timers();
    let spawn_rate = session.config.spawn_rate_ms;
    session.reschedule_spawn(spawn_rate);
    let tick_period = session.config.tick_period_ms;
    session.tick_timer = Some(session.scheduler.schedule_repeating(Task::Tick, tick_period));
}

/// Game over: stop timers, clear the play area, show the final score
pub fn end(session: &mut GameSession, presentation: &mut dyn Presentation) {
    if !session.is_running() {
        log::debug!("end ignored: phase is {:?}", session.phase);
        return;
    }

    session.phase = GamePhase::Ended;
    teardown(session, presentation);

    presentation.show_final_score(session.score);
    presentation.show_screen(Screen::GameOver);
    session.push_event(GameEvent::GameOver {
        score: session.score,
        level: session.level,
    });
    log::info!("Game over: score {}, level {}", session.score, session.level);
}

/// Play again after a game over
pub fn reset(session: &mut GameSession, presentation: &mut dyn Presentation) {
    if session.phase != GamePhase::Ended {
        log::debug!("reset ignored: phase is {:?}", session.phase);
        return;
    }

    session.zero_progress();
    show_progress(session, presentation);
    start(session, presentation);
}

/// Back to the start screen from anywhere, without restarting timers
pub fn go_home(session: &mut GameSession, presentation: &mut dyn Presentation) {
    session.phase = GamePhase::Idle;
    teardown(session, presentation);

    session.zero_progress();
    show_progress(session, presentation);
    presentation.show_screen(Screen::Start);
    session.push_event(GameEvent::ReturnedHome);
    log::info!("Returned to start screen");
}

/// Cancel timers first, then detach and drop every live object
fn teardown(session: &mut GameSession, presentation: &mut dyn Presentation) {
    session.cancel_timers();
    for entity in session.entities.drain(..) {
        presentation.detach(entity.handle);
    }
}

fn show_progress(session: &GameSession, presentation: &mut dyn Presentation) {
    presentation.show_score(session.score);
    presentation.show_lives(session.lives);
    presentation.show_level(session.level);
    presentation.move_player(session.player_position);
}
