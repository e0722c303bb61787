//! Sky Basket headless runner
//!
//! Plays one autopiloted session against the in-memory playfield and prints
//! the final snapshot as JSON.
//!
//! Usage: `sky-basket [seed] [config.json]`

use sky_basket::GameConfig;
use sky_basket::input;
use sky_basket::platform::HeadlessField;
use sky_basket::sim::{GameEvent, GamePhase, GameSession, advance, start};

/// Host frame step (ms)
const FRAME_MS: u64 = 16;
/// Give up after this much virtual time (ms)
const MAX_RUN_MS: u64 = 10 * 60 * 1000;

const VIEWPORT_WIDTH: f32 = 1024.0;
const AREA_HEIGHT: f32 = 700.0;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Sky Basket (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => arg.parse::<u64>().unwrap_or_else(|_| {
            log::warn!("Invalid seed {:?}, using 1", arg);
            1
        }),
        None => 1,
    };
    let config = match args.next() {
        Some(path) => GameConfig::load_or_default(std::path::Path::new(&path)),
        None => GameConfig::default(),
    };

    let mut field = HeadlessField::new(VIEWPORT_WIDTH, AREA_HEIGHT);
    let mut session = GameSession::new(config, seed);
    log::info!("Game initialized with seed: {}", seed);

    start(&mut session, &mut field);

    while session.phase == GamePhase::Running && session.scheduler.now_ms() < MAX_RUN_MS {
        if let Some(cmd) = input::autopilot(&session, &field) {
            input::apply(&mut session, &mut field, cmd);
        }
        advance(&mut session, &mut field, FRAME_MS);

        for event in session.drain_events() {
            match event {
                GameEvent::LevelUp {
                    level,
                    spawn_interval_ms,
                } => log::info!("Level {} (spawn every {}ms)", level, spawn_interval_ms),
                GameEvent::LifeLost { lives } => log::info!("Life lost, {} left", lives),
                GameEvent::GameOver { score, level } => {
                    log::info!("Game over at level {} with {} points", level, score)
                }
                _ => {}
            }
        }
    }

    if session.phase == GamePhase::Running {
        log::info!("Time limit reached, stopping");
    }

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
}
