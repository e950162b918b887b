//! Game state and core simulation types
//!
//! Everything a run needs to be reproduced lives here; the tick owns and
//! exclusively mutates it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use super::weapon::WeaponKind;
use crate::consts::*;

/// Current phase of a game instance
///
/// `Won` and `Lost` are absorbing: once reached, further tick calls are
/// no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    Won,
    Lost,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Running)
    }
}

/// Which simulation variant a game instance runs. Selected once at game
/// start; the tick is parameterized by it rather than duplicated per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Continuous hazard rain; ends when the player's health runs out.
    Survival {
        /// Passive score awarded every tick (0 in the default game)
        score_per_tick: u64,
    },
    /// Turn-based exchange against a single boss; ends when either side
    /// runs out of health.
    BossBattle,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::Survival { score_per_tick: 0 }
    }
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center position
    pub pos: Vec2,
    pub half: Vec2,
    /// Clamped to [0, PLAYER_MAX_HEALTH]; 0 ends the game
    pub health: f32,
    pub weapon: WeaponKind,
    /// Sword transient state: a swing in flight cannot be restarted
    pub swinging: bool,
    /// 0..1 while swinging
    pub swing_progress: f32,
}

impl Player {
    /// Spawn centered horizontally, standing just above the arena floor.
    pub fn new(weapon: WeaponKind) -> Self {
        let half = Vec2::new(PLAYER_WIDTH / 2.0, PLAYER_HEIGHT / 2.0);
        Self {
            pos: Vec2::new(
                ARENA_WIDTH / 2.0,
                ARENA_HEIGHT - half.y - PLAYER_FLOOR_MARGIN,
            ),
            half,
            health: PLAYER_MAX_HEALTH,
            weapon,
            swinging: false,
            swing_progress: 0.0,
        }
    }

    pub fn body(&self) -> Aabb {
        Aabb::new(self.pos, self.half)
    }

    /// Apply damage, keeping health inside [0, PLAYER_MAX_HEALTH].
    pub fn apply_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).clamp(0.0, PLAYER_MAX_HEALTH);
    }
}

/// A falling hazard (meteor). Destroyed by exactly one cause per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub pos: Vec2,
    pub half: Vec2,
    pub vel: Vec2,
}

impl Hazard {
    /// A meteor entering at the top of the arena at the given x.
    pub fn falling(id: u32, x: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, 0.0),
            half: Vec2::new(HAZARD_WIDTH / 2.0, HAZARD_HEIGHT / 2.0),
            vel: Vec2::new(0.0, HAZARD_FALL_SPEED),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.half)
    }
}

/// A gun bullet, moving straight up until it leaves the arena or hits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub half: Vec2,
    pub vel: Vec2,
}

impl Projectile {
    pub fn new(id: u32, muzzle: Vec2) -> Self {
        Self {
            id,
            pos: muzzle,
            half: Vec2::new(BULLET_WIDTH / 2.0, BULLET_HEIGHT / 2.0),
            vel: Vec2::new(0.0, -BULLET_SPEED),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.half)
    }
}

/// Boss opponent for [`GameMode::BossBattle`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub health: f32,
    pub max_health: f32,
    /// Ticks until the next counterattack
    pub attack_timer: u32,
}

impl Default for Boss {
    fn default() -> Self {
        Self {
            health: BOSS_MAX_HEALTH,
            max_health: BOSS_MAX_HEALTH,
            attack_timer: BOSS_ATTACK_INTERVAL,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub mode: GameMode,
    pub phase: GamePhase,
    /// Non-decreasing during a run
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks since the last hazard spawn
    pub spawn_timer: u32,
    pub player: Player,
    pub hazards: Vec<Hazard>,
    pub projectiles: Vec<Projectile>,
    /// Present only in boss-battle mode
    pub boss: Option<Boss>,
    /// Seeded RNG; the only source of randomness in the simulation
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a fresh run with the given weapon, mode and seed.
    pub fn new(weapon: WeaponKind, mode: GameMode, seed: u64) -> Self {
        Self {
            seed,
            mode,
            phase: GamePhase::Running,
            score: 0,
            time_ticks: 0,
            spawn_timer: 0,
            player: Player::new(weapon),
            hazards: Vec::new(),
            projectiles: Vec::new(),
            boss: match mode {
                GameMode::BossBattle => Some(Boss::default()),
                GameMode::Survival { .. } => None,
            },
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Read-only view for the renderer. Rendering cannot mutate the
    /// simulation through it.
    pub fn snapshot(&self) -> WorldSnapshot<'_> {
        WorldSnapshot {
            player: &self.player,
            projectiles: &self.projectiles,
            hazards: &self.hazards,
            boss: self.boss.as_ref(),
            score: self.score,
            health: self.player.health,
            phase: self.phase,
        }
    }
}

/// Per-frame world view consumed by drawing code
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorldSnapshot<'a> {
    pub player: &'a Player,
    pub projectiles: &'a [Projectile],
    pub hazards: &'a [Hazard],
    pub boss: Option<&'a Boss>,
    pub score: u64,
    pub health: f32,
    pub phase: GamePhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_spawns_centered_above_floor() {
        let player = Player::new(WeaponKind::Sword);
        assert_eq!(player.pos.x, ARENA_WIDTH / 2.0);
        assert_eq!(player.body().bottom(), ARENA_HEIGHT - PLAYER_FLOOR_MARGIN);
        assert_eq!(player.health, PLAYER_MAX_HEALTH);
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut player = Player::new(WeaponKind::Gun);
        player.apply_damage(250.0);
        assert_eq!(player.health, 0.0);
    }

    #[test]
    fn test_boss_only_in_boss_mode() {
        let survival = GameState::new(WeaponKind::Sword, GameMode::default(), 1);
        assert!(survival.boss.is_none());

        let boss = GameState::new(WeaponKind::Sword, GameMode::BossBattle, 1);
        assert!(boss.boss.is_some());
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = GameState::new(WeaponKind::Shield, GameMode::default(), 42);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, 42);
        assert_eq!(back.player.weapon, WeaponKind::Shield);
        assert_eq!(back.phase, GamePhase::Running);
    }
}
