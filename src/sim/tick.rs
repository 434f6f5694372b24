//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically.

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::particles::BurstSpec;
use super::state::{Bullet, Enemy, GameEvent, GamePhase, GameState, Player};
use crate::problem::{AnswerSet, Problem};

/// Spawn position draws per enemy before settling for the farthest candidate
const SPAWN_ATTEMPTS: usize = 16;

/// Vertical offset of the answer overlay row; answer feedback bursts land here
const ANSWER_ROW_OFFSET: f32 = 100.0;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Hold to fire at the cooldown rate
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
    /// Start a run from the menu, or leave the game over screen
    pub confirm: bool,
    /// Abandon the run from the pause screen
    pub quit_to_menu: bool,
    /// Pick an answer slot (0-3) for the current problem
    pub select_answer: Option<u8>,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

/// Legal phase transitions; everything else is a logic error.
pub fn transition_allowed(from: GamePhase, to: GamePhase) -> bool {
    use GamePhase::*;
    matches!(
        (from, to),
        (Menu, Playing)
            | (Playing, Paused)
            | (Paused, Playing)
            | (Paused, Menu)
            | (Playing, LevelTransition)
            | (LevelTransition, Playing)
            | (Playing, GameOver)
            | (GameOver, Menu)
    )
}

fn enter(state: &mut GameState, to: GamePhase) {
    debug_assert!(
        transition_allowed(state.phase, to),
        "illegal phase change {:?} -> {:?}",
        state.phase,
        to
    );
    state.phase = to;
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                enter(state, GamePhase::Paused);
                return;
            }
            GamePhase::Paused => {
                enter(state, GamePhase::Playing);
            }
            _ => {}
        }
    }

    // Idle/demo mode - AI plays the game
    let mut input = input.clone();
    if input.idle_mode {
        drive_demo_pilot(state, &mut input);
    }
    let input = &input;

    state.time_ticks += 1;
    let mut rng = state.rng_state.next_rng();

    // Particles decay in every phase, pause included
    state.particles.update(dt);

    match state.phase {
        GamePhase::Menu => {
            if input.confirm {
                reset_session(state, &mut rng);
                enter(state, GamePhase::Playing);
            }
        }

        GamePhase::Playing => {
            // Answer picks resolve before combat
            if let Some(slot) = input.select_answer {
                resolve_answer(state, slot as usize, &mut rng);
            }

            if state.phase == GamePhase::Playing {
                update_player(state, input, dt, &mut rng);
                update_bullets(state, dt, &mut rng);

                for enemy in &mut state.enemies {
                    enemy.update(dt, &state.config, &mut rng);
                }

                collision::resolve_bullet_hits(state, &mut rng);
                let player_died = collision::resolve_player_contact(state, &mut rng);
                state.compact_enemies();

                if player_died {
                    enter_game_over(state);
                } else if state.enemies.is_empty() && state.state_timer <= 0.0 {
                    // Wave shot down without answering; breather, then respawn
                    state.state_timer = state.config.wave_clear_time;
                    enter(state, GamePhase::LevelTransition);
                }
            }
        }

        GamePhase::Paused => {
            if input.quit_to_menu {
                abandon_run(state);
            }
        }

        GamePhase::LevelTransition => {
            state.state_timer -= dt;
            if state.state_timer <= 0.0 {
                enter(state, GamePhase::Playing);
                advance_round(state, &mut rng);
            }
        }

        GamePhase::GameOver => {
            state.state_timer -= dt;
            if state.state_timer <= 0.0 && input.confirm {
                enter(state, GamePhase::Menu);
            }
        }
    }

    // Ensure deterministic ordering
    state.normalize_order();
}

/// Movement, exhaust, and shooting for one tick.
fn update_player(state: &mut GameState, input: &TickInput, dt: f32, rng: &mut impl Rng) {
    let mut mv = Vec2::ZERO;
    if input.left {
        mv.x -= 1.0;
        state.player.facing = Vec2::new(-1.0, 0.0);
    }
    if input.right {
        mv.x += 1.0;
        state.player.facing = Vec2::new(1.0, 0.0);
    }
    if input.up {
        mv.y -= 1.0;
        state.player.facing = Vec2::new(0.0, -1.0);
    }
    if input.down {
        mv.y += 1.0;
        state.player.facing = Vec2::new(0.0, 1.0);
    }
    if mv.x != 0.0 && mv.y != 0.0 {
        mv *= FRAC_1_SQRT_2;
        state.player.facing = mv;
    }
    state.player.pos += mv * state.config.player_speed * dt;

    // Engine exhaust streams behind the ship
    if mv != Vec2::ZERO {
        let vel = Vec2::new(
            -mv.x * rng.random_range(30.0..90.0),
            -mv.y * rng.random_range(30.0..90.0),
        );
        state.particles.spawn(
            state.player.pos - mv * 5.0,
            vel,
            state.config.palette.player,
            10.0 / 60.0,
            3.0,
            0.5,
        );
    }

    state.player.clamp_to_arena(&state.config);
    state.player.invuln_time = (state.player.invuln_time - dt).max(0.0);

    state.player.shoot_cooldown -= dt;
    if input.fire && state.player.shoot_cooldown <= 0.0 {
        state.player.shoot_cooldown = state.config.shoot_cooldown;
        let facing = state.player.facing;
        let muzzle = state.player.pos + facing * state.player.size;
        state
            .particles
            .spawn_burst(muzzle, facing, state.config.palette.player, 8, rng);
        let id = state.next_entity_id();
        state.bullets.push(Bullet::new(id, muzzle, facing, &state.config));
        state.events.push(GameEvent::Fired);
    }
}

fn update_bullets(state: &mut GameState, dt: f32, rng: &mut impl Rng) {
    let trail_len = state.config.bullet_trail_len;
    for bullet in &mut state.bullets {
        bullet.record_trail(trail_len);
        bullet.advance(dt, &state.config);
        // sparse sparks along the flight path
        if rng.random_bool(0.3) {
            state.particles.spawn(
                bullet.pos,
                bullet.vel * -0.1,
                state.config.palette.primary,
                15.0 / 60.0,
                bullet.size * 0.7,
                0.5,
            );
        }
    }
    state.compact_bullets();
}

/// Score an answer pick. Correct answers clear the field and feed the streak;
/// every third consecutive correct answer raises the level. Either way the
/// round ends and a short transition leads into the next one.
fn resolve_answer(state: &mut GameState, slot: usize, rng: &mut impl Rng) {
    if slot >= state.answers.options.len() {
        return;
    }
    let overlay = Vec2::new(
        state.config.arena_width / 2.0,
        state.config.arena_height - ANSWER_ROW_OFFSET,
    );

    if state.answers.is_correct(slot) {
        state.score += 50 * state.level as u64;
        state.streak += 1;
        state.particles.spawn_explosion(
            overlay,
            state.config.palette.success,
            &BurstSpec::answer_correct(),
            rng,
        );
        state.events.push(GameEvent::AnswerCorrect);

        if state.streak > 1 {
            state.score += 25 * state.streak as u64;
        }

        // The reward sweep: every live enemy goes down, worth a token bounty,
        // without feeding the kill counters
        for enemy in &mut state.enemies {
            if enemy.alive {
                enemy.hit(&state.config.palette, &mut state.particles, rng);
                state.score += 5 * state.level as u64;
            }
        }
        state.enemies.clear();

        if state.streak % 3 == 0 {
            level_up(state, rng);
        }
    } else {
        state.streak = 0;
        state.particles.spawn_explosion(
            overlay,
            state.config.palette.error,
            &BurstSpec::answer_incorrect(),
            rng,
        );
        state.events.push(GameEvent::AnswerIncorrect);
    }

    state.state_timer = state.config.answer_transition_time;
    enter(state, GamePhase::LevelTransition);
}

fn level_up(state: &mut GameState, rng: &mut impl Rng) {
    state.level += 1;
    state.events.push(GameEvent::LevelUp);

    // Celebration across the upper half of the arena
    for _ in 0..8 {
        let pos = Vec2::new(
            rng.random_range(0.0..=state.config.arena_width),
            rng.random_range(0.0..=state.config.arena_height / 2.0),
        );
        state.particles.spawn_explosion(
            pos,
            state.config.palette.success,
            &BurstSpec::default(),
            rng,
        );
    }
}

fn enter_game_over(state: &mut GameState) {
    state.state_timer = state.config.game_over_time;
    state.events.push(GameEvent::GameOver);
    if state.score > state.high_score {
        state.high_score = state.score;
        state.events.push(GameEvent::NewHighScore(state.score));
    }
    enter(state, GamePhase::GameOver);
}

fn abandon_run(state: &mut GameState) {
    if state.score > state.high_score {
        state.high_score = state.score;
        state.events.push(GameEvent::NewHighScore(state.score));
    }
    enter(state, GamePhase::Menu);
}

/// New problem, fresh answer deal, fresh wave.
fn advance_round(state: &mut GameState, rng: &mut impl Rng) {
    state.problem = Problem::generate(state.level, rng);
    state.answers = AnswerSet::deal(&state.problem, rng);
    spawn_wave(state, rng);
}

/// Fresh run state; carries over only the session-wide counters.
fn reset_session(state: &mut GameState, rng: &mut impl Rng) {
    state.score = 0;
    state.level = 1;
    state.streak = 0;
    state.enemies_killed = 0;
    state.state_timer = 0.0;
    state.player = Player::new(&state.config);
    state.bullets.clear();
    state.problem = Problem::generate(state.level, rng);
    state.answers = AnswerSet::deal(&state.problem, rng);
    spawn_wave(state, rng);
}

/// Replace the field with a wave sized to the level. Each enemy draws up to
/// [`SPAWN_ATTEMPTS`] positions and keeps the first outside the player's safe
/// radius, or the farthest candidate when none qualifies.
pub fn spawn_wave(state: &mut GameState, rng: &mut impl Rng) {
    let count = (3 + state.level / 2).min(10);
    state.enemies.clear();

    let w = state.config.arena_width;
    let h = state.config.arena_height;
    let low = Vec2::new(50.0, 50.0);
    let high = Vec2::new(w - 50.0, h - state.config.spawn_margin_bottom);

    for _ in 0..count {
        let mut pos = Vec2::new(
            rng.random_range(low.x..=high.x),
            rng.random_range(low.y..=high.y),
        );
        let mut best_dist = pos.distance(state.player.pos);
        for _ in 1..SPAWN_ATTEMPTS {
            if best_dist > state.config.safe_spawn_radius {
                break;
            }
            let candidate = Vec2::new(
                rng.random_range(low.x..=high.x),
                rng.random_range(low.y..=high.y),
            );
            let dist = candidate.distance(state.player.pos);
            if dist > best_dist {
                pos = candidate;
                best_dist = dist;
            }
        }
        let id = state.next_entity_id();
        let enemy = Enemy::new(id, pos, state.level, &state.config, rng);
        state.enemies.push(enemy);
    }
}

/// Scripted pilot for attract mode: kites the nearest enemy, keeps firing,
/// and answers correctly after a thinking pause.
fn drive_demo_pilot(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::Menu | GamePhase::GameOver => {
            input.confirm = true;
        }
        GamePhase::Playing => {
            let nearest = state.enemies.iter().filter(|e| e.alive).min_by(|a, b| {
                let da = a.pos.distance_squared(state.player.pos);
                let db = b.pos.distance_squared(state.player.pos);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            });
            if let Some(enemy) = nearest {
                let to_enemy = enemy.pos - state.player.pos;
                let dist = to_enemy.length();
                if dist < 150.0 {
                    // back off
                    input.left = to_enemy.x > 0.0;
                    input.right = to_enemy.x < 0.0;
                    input.up = to_enemy.y > 0.0;
                    input.down = to_enemy.y < 0.0;
                } else if dist > 250.0 {
                    // close in so the facing lines up with the target
                    input.right = to_enemy.x > 0.0;
                    input.left = to_enemy.x < 0.0;
                    input.down = to_enemy.y > 0.0;
                    input.up = to_enemy.y < 0.0;
                }
                input.fire = true;
            }
            if state.time_ticks % 150 == 149 {
                input.select_answer = Some(state.answers.correct_index as u8);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::SIM_DT;
    use proptest::prelude::*;

    fn confirm() -> TickInput {
        TickInput {
            confirm: true,
            ..Default::default()
        }
    }

    fn start_run(seed: u64) -> GameState {
        let mut state = GameState::new(seed, GameConfig::default(), 0);
        tick(&mut state, &confirm(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    #[test]
    fn test_transition_table() {
        use GamePhase::*;
        assert!(transition_allowed(Menu, Playing));
        assert!(transition_allowed(Playing, Paused));
        assert!(transition_allowed(Paused, Menu));
        assert!(transition_allowed(GameOver, Menu));
        assert!(!transition_allowed(Menu, GameOver));
        assert!(!transition_allowed(GameOver, Playing));
        assert!(!transition_allowed(LevelTransition, Paused));
        assert!(!transition_allowed(Menu, Menu));
    }

    #[test]
    fn test_tick_menu_to_playing() {
        let mut state = GameState::new(12345, GameConfig::default(), 0);
        assert_eq!(state.phase, GamePhase::Menu);

        // Tick without confirm - should stay in Menu
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.enemies.is_empty());

        tick(&mut state, &confirm(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.enemies.len(), 3, "level 1 wave");
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert!(state.problem.well_formed());
        assert_eq!(state.answers.options.len(), 4);
    }

    #[test]
    fn test_tick_pause() {
        let mut state = start_run(12345);

        let input = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused);

        // Enemies are frozen while paused
        let frozen: Vec<_> = state.enemies.iter().map(|e| e.pos).collect();
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        let still: Vec<_> = state.enemies.iter().map(|e| e.pos).collect();
        assert_eq!(frozen, still);

        // Unpause
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_quit_to_menu_keeps_best_score() {
        let mut state = start_run(7);
        state.score = 500;

        tick(
            &mut state,
            &TickInput {
                pause: true,
                ..Default::default()
            },
            SIM_DT,
        );
        tick(
            &mut state,
            &TickInput {
                quit_to_menu: true,
                ..Default::default()
            },
            SIM_DT,
        );

        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.high_score, 500);
        assert!(state.events.contains(&GameEvent::NewHighScore(500)));
    }

    #[test]
    fn test_correct_answer_scores_and_clears_field() {
        let mut state = start_run(42);
        let enemy_count = state.enemies.len() as u64;
        assert!(enemy_count > 0);

        let input = TickInput {
            select_answer: Some(state.answers.correct_index as u8),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);

        // 50 per level plus 5 per swept enemy, no streak bonus on the first
        assert_eq!(state.score, 50 + 5 * enemy_count);
        assert_eq!(state.streak, 1);
        assert!(state.enemies.is_empty());
        assert_eq!(state.phase, GamePhase::LevelTransition);
        assert_eq!(state.state_timer, state.config.answer_transition_time);
        assert!(state.events.contains(&GameEvent::AnswerCorrect));
        assert_eq!(state.enemies_killed, 0, "sweeps do not count as kills");
    }

    #[test]
    fn test_third_answer_levels_up_with_streak_bonus() {
        let mut state = start_run(42);
        state.streak = 2;
        let enemy_count = state.enemies.len() as u64;

        let input = TickInput {
            select_answer: Some(state.answers.correct_index as u8),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);

        // 50*1 + 25*3 streak bonus + 5*1 per enemy, all at the old level
        assert_eq!(state.score, 50 + 75 + 5 * enemy_count);
        assert_eq!(state.streak, 3);
        assert_eq!(state.level, 2);
        assert!(state.events.contains(&GameEvent::LevelUp));
        assert!(!state.particles.is_empty(), "celebration bursts");
    }

    #[test]
    fn test_wrong_answer_resets_streak() {
        let mut state = start_run(42);
        state.streak = 5;
        let enemy_count = state.enemies.len();

        let wrong = (0..4)
            .find(|&i| !state.answers.is_correct(i))
            .map(|i| i as u8);
        let input = TickInput {
            select_answer: wrong,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);

        assert_eq!(state.streak, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.enemies.len(), enemy_count, "field is not cleared");
        assert_eq!(state.phase, GamePhase::LevelTransition);
        assert!(state.events.contains(&GameEvent::AnswerIncorrect));
    }

    #[test]
    fn test_cleared_wave_leads_to_next_round() {
        let mut state = start_run(9);
        state.enemies.clear();
        state.state_timer = 0.0;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::LevelTransition);
        assert_eq!(state.state_timer, state.config.wave_clear_time);

        // Run the breather out; the next round brings a wave and a problem
        for _ in 0..61 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.enemies.len(), 3);
        assert!(state.problem.well_formed());
    }

    /// Parks an enemy on the player so the next tick registers contact.
    fn park_enemy_on_player(state: &mut GameState) {
        state.enemies[0].pos = state.player.pos;
        state.enemies[0].spawn_center = state.player.pos;
        state.enemies[0].movement = crate::sim::state::MovementPattern::Linear;
    }

    #[test]
    fn test_player_death_ends_run() {
        let mut state = start_run(3);
        state.score = 120;
        state.player.health = 1;
        state.player.invuln_time = 0.0;
        park_enemy_on_player(&mut state);

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.state_timer, state.config.game_over_time);
        assert!(state.events.contains(&GameEvent::GameOver));
        assert!(state.events.contains(&GameEvent::NewHighScore(120)));
        assert_eq!(state.high_score, 120);
    }

    #[test]
    fn test_game_over_waits_before_menu() {
        let mut state = start_run(3);
        state.player.health = 1;
        state.player.invuln_time = 0.0;
        park_enemy_on_player(&mut state);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        // Score 0 does not beat the record
        assert!(!state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::NewHighScore(_))));

        // Confirm is ignored while the timer runs
        tick(&mut state, &confirm(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        state.state_timer = 0.01;
        tick(&mut state, &confirm(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Menu);
    }

    fn fired_count(state: &GameState) -> usize {
        state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::Fired))
            .count()
    }

    #[test]
    fn test_firing_respects_cooldown() {
        let mut state = start_run(5);
        let input = TickInput {
            fire: true,
            ..Default::default()
        };

        tick(&mut state, &input, SIM_DT);
        assert_eq!(fired_count(&state), 1);
        assert_eq!(state.bullets.len(), 1);
        // Spawned at the muzzle, then advanced one step
        let muzzle = state.player.pos + state.player.facing * state.player.size;
        let expected = muzzle + state.player.facing * state.config.bullet_speed * SIM_DT;
        assert_eq!(state.bullets[0].pos, expected);

        // Cooldown blocks the next several ticks
        for _ in 0..5 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(fired_count(&state), 1);

        // 0.2s cooldown elapses after 12 ticks
        for _ in 0..8 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(fired_count(&state), 2);
    }

    #[test]
    fn test_movement_clamps_and_faces() {
        let mut state = start_run(5);
        let input = TickInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..2000 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.player.pos.x, state.player.size);
        assert_eq!(state.player.facing, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_spawn_wave_counts_and_bounds() {
        let mut state = GameState::new(11, GameConfig::default(), 0);
        let mut rng = state.rng_state.next_rng();

        for (level, expected) in [(1u32, 3usize), (8, 7), (20, 10)] {
            state.level = level;
            spawn_wave(&mut state, &mut rng);
            assert_eq!(state.enemies.len(), expected, "level {level}");
            for enemy in &state.enemies {
                assert!(enemy.pos.x >= 50.0 && enemy.pos.x <= state.config.arena_width - 50.0);
                assert!(
                    enemy.pos.y >= 50.0
                        && enemy.pos.y
                            <= state.config.arena_height - state.config.spawn_margin_bottom
                );
                assert!(
                    enemy.pos.distance(state.player.pos) > state.config.safe_spawn_radius,
                    "spawn inside safe radius"
                );
            }
        }
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed should produce identical results
        let mut state1 = GameState::new(99999, GameConfig::default(), 0);
        let mut state2 = GameState::new(99999, GameConfig::default(), 0);

        let script = [
            confirm(),
            TickInput {
                right: true,
                fire: true,
                ..Default::default()
            },
            TickInput {
                up: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                fire: true,
                ..Default::default()
            },
        ];

        for _ in 0..20 {
            for input in &script {
                tick(&mut state1, input, SIM_DT);
                tick(&mut state2, input, SIM_DT);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        let json1 = serde_json::to_string(&state1).unwrap();
        let json2 = serde_json::to_string(&state2).unwrap();
        assert_eq!(json1, json2);
    }

    #[test]
    fn test_demo_pilot_survives_and_answers() {
        let mut state = GameState::new(2024, GameConfig::default(), 0);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        // 20 seconds of attract mode
        for _ in 0..1200 {
            tick(&mut state, &input, SIM_DT);
        }
        assert!(state.time_ticks >= 1200);
        assert!(state.score > 0, "pilot answered at least once");
    }

    proptest! {
        #[test]
        fn prop_player_never_leaves_arena(
            seed in 0u64..500,
            moves in prop::collection::vec(0u8..16, 1..150),
        ) {
            let mut state = start_run(seed);
            let size = state.config.player_size;
            for bits in moves {
                let input = TickInput {
                    up: bits & 1 != 0,
                    down: bits & 2 != 0,
                    left: bits & 4 != 0,
                    right: bits & 8 != 0,
                    ..Default::default()
                };
                tick(&mut state, &input, SIM_DT);
                assert!(state.player.pos.x >= size);
                assert!(state.player.pos.x <= state.config.arena_width - size);
                assert!(state.player.pos.y >= size);
                assert!(state.player.pos.y <= state.config.arena_height - size);
            }
        }
    }
}
