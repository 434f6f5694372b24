//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod particles;
pub mod state;
pub mod tick;

pub use collision::{Aabb, resolve_bullet_hits, resolve_player_contact};
pub use particles::{BurstSpec, Particle, ParticleSystem, MAX_PARTICLES};
pub use state::{
    Bullet, Enemy, GameEvent, GamePhase, GameState, MovementPattern, Player, RngState, ThreatBand,
    ENEMY_GLYPHS,
};
pub use tick::{spawn_wave, tick, transition_allowed, TickInput};
