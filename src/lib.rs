//! Mathstorm - An arcade math blaster
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `problem`: Procedural math problem generation (tiers 1-15)
//! - `audio`: Event-to-cue routing for an external sound sink
//! - `highscores`: File-backed best score
//! - `config`: Immutable gameplay tunables

pub mod audio;
pub mod config;
pub mod error;
pub mod highscores;
pub mod problem;
pub mod sim;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use problem::Problem;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 700.0;
    /// Bottom band reserved for the answer overlay; enemies never spawn there
    pub const SPAWN_MARGIN_BOTTOM: f32 = 180.0;
    /// Minimum spawn distance from the player
    pub const SAFE_SPAWN_RADIUS: f32 = 150.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 360.0;
    pub const PLAYER_MAX_HEALTH: u8 = 3;
    pub const PLAYER_INVULN_TIME: f32 = 2.0;
    pub const SHOOT_COOLDOWN: f32 = 0.2;

    /// Bullet defaults
    pub const BULLET_SIZE: f32 = 6.0;
    pub const BULLET_SPEED: f32 = 720.0;
    pub const BULLET_TRAIL_LEN: usize = 6;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const ENEMY_SPEED_BASE: f32 = 90.0;
    /// Orbit radius for circular movers
    pub const ORBIT_RADIUS: f32 = 50.0;

    /// Difficulty tier bounds
    pub const MIN_TIER: u32 = 1;
    pub const MAX_TIER: u32 = 15;

    /// Phase timers (seconds)
    pub const ANSWER_TRANSITION_TIME: f32 = 0.8;
    pub const WAVE_CLEAR_TIME: f32 = 1.0;
    pub const GAME_OVER_TIME: f32 = 3.0;
}

/// Linear interpolation between a and b
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Decelerating ease: fast start, slow finish
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
