//! Ephemeral visual particles.
//!
//! [`ParticleSystem`] is the sole owner and mutator of its particles: spawn
//! requests come in from the tick, `update` integrates and expires, and the
//! renderer reads through `iter`. Nothing here affects gameplay.

use std::f32::consts::{FRAC_PI_4, TAU};

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::Rgb;
use crate::lerp;

/// Maximum live particles; the oldest is evicted when a spawn would exceed it
pub const MAX_PARTICLES: usize = 512;

/// Per-tick multiplicative velocity drag
const DRAG: f32 = 0.96;

/// A particle for visual effects
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
    /// Seconds remaining
    pub lifetime: f32,
    pub max_lifetime: f32,
    pub size_start: f32,
    pub size_end: f32,
}

impl Particle {
    /// Fraction of life remaining (1 at spawn, 0 at expiry)
    pub fn life_ratio(&self) -> f32 {
        if self.max_lifetime > 0.0 {
            (self.lifetime / self.max_lifetime).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Render alpha, 0-255
    pub fn alpha(&self) -> f32 {
        255.0 * self.life_ratio()
    }

    /// Render size, shrinking from `size_start` toward `size_end`
    pub fn size(&self) -> f32 {
        lerp(self.size_end, self.size_start, self.life_ratio())
    }
}

/// Parameters for a radial burst
#[derive(Debug, Clone, Copy)]
pub struct BurstSpec {
    pub count: u32,
    /// Pixels per second
    pub speed_min: f32,
    pub speed_max: f32,
    /// Seconds
    pub lifetime_min: f32,
    pub lifetime_max: f32,
    pub size_start: f32,
    pub size_end: f32,
}

impl Default for BurstSpec {
    fn default() -> Self {
        Self {
            count: 20,
            speed_min: 120.0,
            speed_max: 300.0,
            lifetime_min: 20.0 / 60.0,
            lifetime_max: 40.0 / 60.0,
            size_start: 3.0,
            size_end: 0.5,
        }
    }
}

impl BurstSpec {
    /// Small scatter when an enemy takes a non-lethal hit
    pub fn enemy_hit() -> Self {
        Self {
            count: 10,
            speed_min: 60.0,
            speed_max: 180.0,
            ..Self::default()
        }
    }

    /// Big slow-fading burst when an enemy dies
    pub fn enemy_death() -> Self {
        Self {
            count: 30,
            speed_min: 120.0,
            speed_max: 360.0,
            lifetime_min: 0.5,
            lifetime_max: 1.0,
            size_start: 5.0,
            ..Self::default()
        }
    }

    /// Flash when the player takes damage
    pub fn player_damage() -> Self {
        Self {
            count: 40,
            speed_min: 180.0,
            speed_max: 480.0,
            ..Self::default()
        }
    }

    /// Correct-answer celebration
    pub fn answer_correct() -> Self {
        Self {
            count: 30,
            ..Self::default()
        }
    }

    /// Incorrect-answer fizzle
    pub fn answer_incorrect() -> Self {
        Self::default()
    }
}

/// Owns and steps every live particle.
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    /// Add one particle, evicting the oldest at the cap.
    pub fn spawn(
        &mut self,
        pos: Vec2,
        vel: Vec2,
        color: Rgb,
        lifetime: f32,
        size_start: f32,
        size_end: f32,
    ) {
        if self.particles.len() >= MAX_PARTICLES {
            self.particles.remove(0);
        }
        self.particles.push(Particle {
            pos,
            vel,
            color,
            lifetime,
            max_lifetime: lifetime,
            size_start,
            size_end,
        });
    }

    /// Radial burst in all directions.
    pub fn spawn_explosion(&mut self, pos: Vec2, color: Rgb, spec: &BurstSpec, rng: &mut impl Rng) {
        for _ in 0..spec.count {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(spec.speed_min..spec.speed_max);
            let vel = Vec2::new(angle.cos(), angle.sin()) * speed;
            let lifetime = rng.random_range(spec.lifetime_min..spec.lifetime_max);
            self.spawn(pos, vel, color, lifetime, spec.size_start, spec.size_end);
        }
    }

    /// Cone burst along a direction, spread ±45 degrees.
    pub fn spawn_burst(
        &mut self,
        pos: Vec2,
        dir: Vec2,
        color: Rgb,
        count: u32,
        rng: &mut impl Rng,
    ) {
        let base_angle = dir.y.atan2(dir.x);
        for _ in 0..count {
            let angle = base_angle + rng.random_range(-FRAC_PI_4..FRAC_PI_4);
            let speed = rng.random_range(180.0..420.0);
            let vel = Vec2::new(angle.cos(), angle.sin()) * speed;
            self.spawn(pos, vel, color, 40.0 / 60.0, 3.0, 0.5);
        }
    }

    /// Expire then integrate. Expired particles survive exactly one tick
    /// past zero so the renderer sees their final frame.
    pub fn update(&mut self, dt: f32) {
        self.particles.retain(|p| p.lifetime > 0.0);
        for p in &mut self.particles {
            p.pos += p.vel * dt;
            p.vel *= DRAG;
            p.lifetime -= dt;
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
