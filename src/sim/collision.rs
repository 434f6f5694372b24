//! Axis-aligned collision detection and response
//!
//! Hitboxes are squares centered on entity positions. Bullets test against
//! the enemy's full box; the player tests against a 0.7-scaled enemy box so
//! near misses stay misses.

use glam::Vec2;
use rand::Rng;

use super::state::{Bullet, Enemy, GameEvent, GameState, Player};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap; boxes that merely share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

#[inline]
pub fn bullet_box(bullet: &Bullet) -> Aabb {
    Aabb::from_center(bullet.pos, Vec2::splat(bullet.size))
}

#[inline]
pub fn enemy_box(enemy: &Enemy) -> Aabb {
    Aabb::from_center(enemy.pos, Vec2::splat(enemy.size))
}

/// Reduced box used only for the player contact pass
#[inline]
pub fn enemy_contact_box(enemy: &Enemy) -> Aabb {
    Aabb::from_center(enemy.pos, Vec2::splat(enemy.size * 0.7))
}

#[inline]
pub fn player_box(player: &Player) -> Aabb {
    Aabb::from_center(player.pos, Vec2::splat(player.size / 2.0))
}

/// Bullet-versus-enemy pass. Each bullet spends itself on the first live
/// enemy it overlaps; kills score 10 per level and bump the kill counters.
/// Dead enemies are left in place for the caller to compact.
pub fn resolve_bullet_hits(state: &mut GameState, rng: &mut impl Rng) {
    for bullet in &mut state.bullets {
        if !bullet.active {
            continue;
        }
        let bbox = bullet_box(bullet);
        for enemy in &mut state.enemies {
            if !enemy.alive {
                continue;
            }
            if bbox.intersects(&enemy_box(enemy)) {
                bullet.active = false;
                let killed = enemy.hit(&state.config.palette, &mut state.particles, rng);
                state.events.push(GameEvent::EnemyHit);
                if killed {
                    state.events.push(GameEvent::EnemyDestroyed);
                    state.score += 10 * state.level as u64;
                    state.enemies_killed += 1;
                    state.total_enemies_killed += 1;
                }
                break;
            }
        }
    }
}

/// Player-versus-enemy pass. The first overlapping enemy damages the player
/// (no-op during invulnerability) and takes contact damage itself, worth no
/// points. Returns true when the player dies.
pub fn resolve_player_contact(state: &mut GameState, rng: &mut impl Rng) -> bool {
    let pbox = player_box(&state.player);
    for enemy in &mut state.enemies {
        if !enemy.alive {
            continue;
        }
        if pbox.intersects(&enemy_contact_box(enemy)) {
            let died = state
                .player
                .take_damage(&state.config, &mut state.particles, rng);
            enemy.hit(&state.config.palette, &mut state.particles, rng);
            state.events.push(GameEvent::PlayerHit);
            return died;
        }
    }
    false
}
