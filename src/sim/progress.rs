//! Score, level and lives bookkeeping

use super::lifecycle::end;
use super::presentation::Presentation;
use super::state::{GameEvent, GameSession};
use crate::config::GameConfig;
use crate::consts::*;

/// Level reached at a cumulative score
#[inline]
pub fn level_for_score(score: u64, level_score_step: u64) -> u32 {
    let step = level_score_step.max(1);
    u32::try_from(score / step).unwrap_or(u32::MAX - 1) + 1
}

/// Spawn cadence for a level
pub fn spawn_interval_for_level(config: &GameConfig, level: u32) -> u64 {
    let reduction = config.spawn_rate_step_ms.saturating_mul(u64::from(level));
    config
        .spawn_rate_ms
        .saturating_sub(reduction)
        .max(config.min_spawn_rate_ms)
}

/// Seconds an object takes to fall at a level
pub fn fall_duration_secs(level: u32) -> f32 {
    (FALL_DURATION_BASE_SECS - level as f32 * FALL_DURATION_STEP_SECS).max(FALL_DURATION_MIN_SECS)
}

/// Add points and level up when the score crosses a threshold.
///
/// A level-up replaces the scheduled spawn timer with a faster one while the
/// session is running.
pub fn add_score(session: &mut GameSession, presentation: &mut dyn Presentation, points: u64) {
    session.score = session.score.saturating_add(points);
    presentation.show_score(session.score);
    session.push_event(GameEvent::ScoreChanged {
        score: session.score,
    });

    let new_level = level_for_score(session.score, session.config.level_score_step);
    if new_level <= session.level {
        return;
    }

    session.level = new_level;
    presentation.show_level(new_level);

    let interval = spawn_interval_for_level(&session.config, new_level);
    if session.is_running() {
        session.reschedule_spawn(interval);
    } else {
        session.spawn_interval_ms = interval;
    }

    log::info!(
        "Level {} reached at score {} (spawn every {}ms)",
        new_level,
        session.score,
        interval
    );
    session.push_event(GameEvent::LevelUp {
        level: new_level,
        spawn_interval_ms: interval,
    });
}

/// Take a life; ends the session when none are left
pub fn lose_life(session: &mut GameSession, presentation: &mut dyn Presentation) {
    session.lives -= 1;
    presentation.show_lives(session.lives);
    presentation.pulse_lives();
    session.push_event(GameEvent::LifeLost {
        lives: session.lives,
    });
    log::debug!("Life lost, {} left", session.lives);

    if session.lives <= 0 {
        end(session, presentation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::lifecycle::start;
    use crate::sim::state::GamePhase;
    use crate::sim::testing::StubPresentation;
    use proptest::prelude::*;

    fn running_session() -> (GameSession, StubPresentation) {
        let mut session = GameSession::new(GameConfig::default(), 42);
        let mut screen = StubPresentation::new();
        start(&mut session, &mut screen);
        (session, screen)
    }

    #[test]
    fn test_level_for_score() {
        assert_eq!(level_for_score(0, 300), 1);
        assert_eq!(level_for_score(299, 300), 1);
        assert_eq!(level_for_score(300, 300), 2);
        assert_eq!(level_for_score(899, 300), 3);
        assert_eq!(level_for_score(900, 300), 4);
    }

    #[test]
    fn test_spawn_interval_for_level() {
        let config = GameConfig::default();
        assert_eq!(spawn_interval_for_level(&config, 1), 1350);
        assert_eq!(spawn_interval_for_level(&config, 2), 1200);
        assert_eq!(spawn_interval_for_level(&config, 7), 450);
        assert_eq!(spawn_interval_for_level(&config, 8), 400);
        assert_eq!(spawn_interval_for_level(&config, 50), 400);
    }

    #[test]
    fn test_fall_duration_floors_at_two_seconds() {
        assert!((fall_duration_secs(1) - 3.7).abs() < 1e-5);
        assert!((fall_duration_secs(5) - 2.5).abs() < 1e-5);
        assert_eq!(fall_duration_secs(7), 2.0);
        assert_eq!(fall_duration_secs(100), 2.0);
    }

    #[test]
    fn test_add_score_level_up_shortens_spawn_interval() {
        let (mut session, mut screen) = running_session();
        let old_timer = session.spawn_timer().unwrap();
        assert_eq!(session.scheduler.period_ms(old_timer), Some(1500));

        add_score(&mut session, &mut screen, 300);

        assert_eq!(session.score, 300);
        assert_eq!(session.level, 2);
        assert_eq!(session.spawn_interval_ms, 1200);
        let new_timer = session.spawn_timer().unwrap();
        assert_ne!(old_timer, new_timer);
        assert!(!session.scheduler.is_live(old_timer));
        assert_eq!(session.scheduler.period_ms(new_timer), Some(1200));
        assert_eq!(screen.shown_level, Some(2));
        assert_eq!(screen.shown_score, Some(300));
        assert!(session.drain_events().contains(&GameEvent::LevelUp {
            level: 2,
            spawn_interval_ms: 1200
        }));
    }

    #[test]
    fn test_add_score_without_level_up_keeps_timer() {
        let (mut session, mut screen) = running_session();
        let timer = session.spawn_timer();

        add_score(&mut session, &mut screen, 10);

        assert_eq!(session.level, 1);
        assert_eq!(session.spawn_timer(), timer);
        assert_eq!(screen.shown_level, None);
    }

    #[test]
    fn test_level_is_path_independent() {
        let (mut a, mut screen_a) = running_session();
        let (mut b, mut screen_b) = running_session();

        for _ in 0..30 {
            add_score(&mut a, &mut screen_a, 10);
        }
        add_score(&mut b, &mut screen_b, 150);
        add_score(&mut b, &mut screen_b, 150);

        assert_eq!(a.level, 2);
        assert_eq!(b.level, 2);
        assert_eq!(a.spawn_interval_ms, b.spawn_interval_ms);
    }

    #[test]
    fn test_big_jump_skips_levels() {
        let (mut session, mut screen) = running_session();
        add_score(&mut session, &mut screen, 1000);
        assert_eq!(session.level, 4);
        assert_eq!(session.spawn_interval_ms, 900);
    }

    #[test]
    fn test_lose_life() {
        let (mut session, mut screen) = running_session();
        lose_life(&mut session, &mut screen);

        assert_eq!(session.lives, 2);
        assert_eq!(screen.pulses, 1);
        assert_eq!(screen.shown_lives, Some(2));
        assert_eq!(session.phase, GamePhase::Running);
    }

    #[test]
    fn test_last_life_ends_session() {
        let (mut session, mut screen) = running_session();
        session.lives = 1;

        lose_life(&mut session, &mut screen);

        assert_eq!(session.lives, 0);
        assert_eq!(session.phase, GamePhase::Ended);
        assert!(session.spawn_timer().is_none());
        assert!(session.tick_timer().is_none());
        assert_eq!(session.scheduler.live_count(), 0);
        assert!(session.entities.is_empty());
    }

    proptest! {
        #[test]
        fn prop_level_tracks_score(increments in proptest::collection::vec(0u64..120, 1..60)) {
            let (mut session, mut screen) = running_session();
            let mut last_score = 0;
            let mut last_level = 1;
            for points in increments {
                add_score(&mut session, &mut screen, points);
                prop_assert!(session.score >= last_score);
                prop_assert!(session.level >= last_level);
                prop_assert_eq!(session.level, (session.score / 300) as u32 + 1);
                let expected_interval = if session.level == 1 {
                    session.config.spawn_rate_ms
                } else {
                    spawn_interval_for_level(&session.config, session.level)
                };
                prop_assert_eq!(session.spawn_interval_ms, expected_interval);
                last_score = session.score;
                last_level = session.level;
            }
        }
    }
}
