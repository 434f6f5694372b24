//! Mathstorm entry point
//!
//! Headless demo runner: paces the simulation at its fixed 60 Hz rate with
//! the attract-mode pilot on the stick and routes game events to the log.
//! A frontend would feed real input instead and attach a real audio sink.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use mathstorm::audio::{CueRouter, LogSink};
use mathstorm::config::GameConfig;
use mathstorm::consts::{MAX_SUBSTEPS, SIM_DT};
use mathstorm::highscores::HighScoreStore;
use mathstorm::sim::{tick, GameEvent, GameState, TickInput};

/// Demo session length when no duration argument is given
const DEFAULT_RUN_SECS: u64 = 30;

/// Optional config override file, read from the working directory
const CONFIG_FILE: &str = "mathstorm.json";

fn main() {
    env_logger::init();
    log::info!("Mathstorm starting...");

    let run_secs = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(DEFAULT_RUN_SECS);

    let config = GameConfig::load_or_default(Path::new(CONFIG_FILE));
    let store = HighScoreStore::default();
    let high_score = store.load();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0x5EED);
    let mut state = GameState::new(seed, config, high_score);
    log::info!("Game initialized with seed: {}", seed);

    let router = CueRouter::new();
    let mut sink = LogSink;
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let deadline = Instant::now() + Duration::from_secs(run_secs);
    let mut last = Instant::now();
    let mut accumulator = 0.0_f32;

    while Instant::now() < deadline {
        let now = Instant::now();
        // Cap dt so a stall cannot demand a catch-up burst
        let dt = now.duration_since(last).as_secs_f32().min(0.1);
        last = now;
        accumulator += dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;
        }

        let events = state.drain_events();
        router.dispatch(&events, &mut sink);
        for event in &events {
            if let GameEvent::NewHighScore(score) = event {
                store.save(*score);
            }
        }

        std::thread::sleep(Duration::from_millis(2));
    }

    log::info!(
        "Demo over: score {}, level {}, best {}, {} ticks",
        state.score,
        state.level,
        state.high_score,
        state.time_ticks
    );
}
