//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. The external
//! driver calls [`tick`] once per display frame until the phase turns
//! terminal, then reads the final score off the state.

use rand::Rng;

use super::state::{GameMode, GamePhase, GameState, Hazard, Projectile};
use super::weapon::AttackAction;
use crate::consts::*;

/// Input signals sampled once per tick.
///
/// `attack_pressed` is edge-triggered: the tick clears it after consuming
/// it, so a key held across many ticks produces at most one attack per
/// press regardless of the driver's cadence.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub attack_pressed: bool,
}

/// Advance the game state by one fixed tick.
///
/// Terminal phases are absorbing: once the game is won or lost this
/// returns immediately without touching the state.
pub fn tick(state: &mut GameState, input: &mut TickInput) {
    if state.phase.is_terminal() {
        return;
    }

    state.time_ticks += 1;

    // 1. Horizontal movement, clamped to the arena
    if input.move_left {
        state.player.pos.x -= PLAYER_SPEED;
    }
    if input.move_right {
        state.player.pos.x += PLAYER_SPEED;
    }
    let half_w = state.player.half.x;
    state.player.pos.x = state.player.pos.x.clamp(half_w, ARENA_WIDTH - half_w);

    // 2. Edge-triggered attack. Consume the flag here so a held key cannot
    //    fire again on the next tick.
    let attacked = input.attack_pressed;
    input.attack_pressed = false;
    if attacked {
        let weapon = state.player.weapon;
        match weapon.attack(&mut state.player) {
            AttackAction::SpawnProjectile { muzzle } => {
                let id = state.next_entity_id();
                state.projectiles.push(Projectile::new(id, muzzle));
            }
            AttackAction::None => {}
        }
    }

    // 3. Advance the swing in flight
    if state.player.swinging {
        state.player.swing_progress += SWING_STEP;
        if state.player.swing_progress >= 1.0 {
            state.player.swinging = false;
            state.player.swing_progress = 0.0;
        }
    }

    // 4. Advance projectiles, dropping any that left the arena
    for projectile in &mut state.projectiles {
        projectile.pos += projectile.vel;
    }
    state.projectiles.retain(|p| p.bounds().bottom() > 0.0);

    match state.mode {
        GameMode::Survival { score_per_tick } => {
            survival_step(state);
            state.score += score_per_tick;
        }
        GameMode::BossBattle => boss_step(state, attacked),
    }

    // Health clamp and the single terminal-loss flip
    if state.phase == GamePhase::Running && state.player.health <= 0.0 {
        state.player.health = 0.0;
        state.phase = GamePhase::Lost;
    }
}

/// Continuous-hazard mode: spawn, advance and resolve every hazard.
fn survival_step(state: &mut GameState) {
    // Spawn timer: one hazard per interval, at a seeded-random x
    state.spawn_timer += 1;
    if state.spawn_timer > HAZARD_SPAWN_INTERVAL {
        let half_w = HAZARD_WIDTH / 2.0;
        let x = state.rng.random_range(half_w..ARENA_WIDTH - half_w);
        let id = state.next_entity_id();
        state.hazards.push(Hazard::falling(id, x));
        state.spawn_timer = 0;
    }

    let body = state.player.body();
    let weapon = state.player.weapon;
    let region = weapon.active_hit_region(&state.player);

    // Advance each hazard and apply at most one outcome. Priority:
    // body collision > projectile hit > weapon hit region > off-arena.
    // Index iteration with explicit removal keeps the scan stable; a
    // removed hazard is never matched again this tick.
    let mut idx = 0;
    while idx < state.hazards.len() {
        let vel = state.hazards[idx].vel;
        state.hazards[idx].pos += vel;
        let bounds = state.hazards[idx].bounds();

        // Body collision: the hazard lands, the player takes (modified)
        // damage, no score.
        if bounds.intersects(&body) {
            let damage = HAZARD_BASE_DAMAGE * weapon.damage_modifier();
            state.player.apply_damage(damage);
            state.hazards.remove(idx);
            continue;
        }

        // Projectile hit: both the hazard and the bullet are spent
        if let Some(hit) = state
            .projectiles
            .iter()
            .position(|p| p.bounds().intersects(&bounds))
        {
            state.projectiles.remove(hit);
            state.hazards.remove(idx);
            state.score += SCORE_PER_KILL;
            continue;
        }

        // Weapon hit region (sword swing arc or shield box)
        if region.is_some_and(|r| r.intersects(&bounds)) {
            state.hazards.remove(idx);
            state.score += weapon.region_score();
            continue;
        }

        // Fell past the arena floor
        if bounds.top() > ARENA_HEIGHT {
            state.hazards.remove(idx);
            continue;
        }

        idx += 1;
    }
}

/// Turn-based boss exchange: the attack press lands one strike, the boss
/// counterattacks on a fixed cadence.
fn boss_step(state: &mut GameState, attacked: bool) {
    let weapon = state.player.weapon;
    let Some(boss) = state.boss.as_mut() else {
        return;
    };

    let mut strike_score = 0;
    let mut counter_damage = None;

    if attacked {
        boss.health = (boss.health - BOSS_STRIKE_DAMAGE).max(0.0);
        strike_score = SCORE_PER_STRIKE;
    }

    if boss.health <= 0.0 {
        state.score += strike_score;
        state.phase = GamePhase::Won;
        return;
    }

    if boss.attack_timer > 0 {
        boss.attack_timer -= 1;
    }
    if boss.attack_timer == 0 {
        counter_damage = Some(BOSS_ATTACK_DAMAGE * weapon.damage_modifier());
        boss.attack_timer = BOSS_ATTACK_INTERVAL;
    }

    state.score += strike_score;
    if let Some(damage) = counter_damage {
        state.player.apply_damage(damage);
    }
}
