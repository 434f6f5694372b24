//! Immutable gameplay tunables.
//!
//! One [`GameConfig`] is built at startup (defaults mirror the constants in
//! [`crate::consts`]) and embedded in the game state; nothing mutates it
//! afterwards. An optional JSON file can override any subset of fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::{GameError, GameResult};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color palette used by particles and the external renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub success: Rgb,
    pub error: Rgb,
    pub neutral: Rgb,
    pub text_light: Rgb,
    pub text_dark: Rgb,
    pub text_highlight: Rgb,
    pub player: Rgb,
    pub enemy_basic: Rgb,
    pub enemy_advanced: Rgb,
    pub enemy_expert: Rgb,
    /// Player damage burst (softer than `error`)
    pub damage: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(10, 10, 30),
            primary: Rgb::new(0, 200, 255),
            secondary: Rgb::new(0, 255, 180),
            accent: Rgb::new(255, 80, 120),
            success: Rgb::new(50, 255, 100),
            error: Rgb::new(255, 60, 80),
            neutral: Rgb::new(180, 180, 220),
            text_light: Rgb::new(220, 220, 255),
            text_dark: Rgb::new(40, 40, 80),
            text_highlight: Rgb::new(255, 240, 100),
            player: Rgb::new(40, 200, 240),
            enemy_basic: Rgb::new(255, 80, 80),
            enemy_advanced: Rgb::new(255, 160, 60),
            enemy_expert: Rgb::new(255, 60, 200),
            damage: Rgb::new(255, 100, 100),
        }
    }
}

/// Gameplay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Bottom band reserved for the answer overlay; enemies never spawn there
    pub spawn_margin_bottom: f32,
    /// Minimum enemy spawn distance from the player
    pub safe_spawn_radius: f32,

    // === Player ===
    pub player_size: f32,
    /// Pixels per second
    pub player_speed: f32,
    pub player_max_health: u8,
    /// Seconds of invulnerability after taking damage
    pub player_invuln_time: f32,
    /// Seconds between shots while fire is held
    pub shoot_cooldown: f32,

    // === Bullets ===
    pub bullet_size: f32,
    pub bullet_speed: f32,
    pub bullet_trail_len: usize,

    // === Enemies ===
    pub enemy_size: f32,
    pub enemy_speed_base: f32,
    pub orbit_radius: f32,

    // === Phase timers (seconds) ===
    pub answer_transition_time: f32,
    pub wave_clear_time: f32,
    pub game_over_time: f32,

    // === Colors ===
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: consts::ARENA_WIDTH,
            arena_height: consts::ARENA_HEIGHT,
            spawn_margin_bottom: consts::SPAWN_MARGIN_BOTTOM,
            safe_spawn_radius: consts::SAFE_SPAWN_RADIUS,

            player_size: consts::PLAYER_SIZE,
            player_speed: consts::PLAYER_SPEED,
            player_max_health: consts::PLAYER_MAX_HEALTH,
            player_invuln_time: consts::PLAYER_INVULN_TIME,
            shoot_cooldown: consts::SHOOT_COOLDOWN,

            bullet_size: consts::BULLET_SIZE,
            bullet_speed: consts::BULLET_SPEED,
            bullet_trail_len: consts::BULLET_TRAIL_LEN,

            enemy_size: consts::ENEMY_SIZE,
            enemy_speed_base: consts::ENEMY_SPEED_BASE,
            orbit_radius: consts::ORBIT_RADIUS,

            answer_transition_time: consts::ANSWER_TRANSITION_TIME,
            wave_clear_time: consts::WAVE_CLEAR_TIME,
            game_over_time: consts::GAME_OVER_TIME,

            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Load from a JSON file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> GameResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| GameError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&json).map_err(|e| GameError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load from a JSON file if present, falling back to defaults on any
    /// failure. Failures are advisory only.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}
