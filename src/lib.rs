//! Forge Defender - arcade game core for a doodle-your-weapon toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, weapons, collisions, tick)
//! - `classifier`: Sketch-to-weapon classification boundary
//! - `scores`: Leaderboard boundary and score submission

pub mod classifier;
pub mod scores;
pub mod sim;

pub use classifier::{Classifier, ClassifyError, SketchImage, classify_sketch};
pub use scores::{InMemoryScoreStore, PendingScore, ScoreRecord, ScoreStore};
pub use sim::{GameMode, GamePhase, GameState, TickInput, WeaponKind, tick};

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Ticks per second the external driver should aim for
    pub const TICK_RATE: u32 = 60;

    /// Arena dimensions (canvas coordinates: x grows right, y grows down)
    pub const ARENA_WIDTH: f32 = 1000.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;
    pub const PLAYER_SPEED: f32 = 7.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    /// Gap between the player's feet and the arena floor
    pub const PLAYER_FLOOR_MARGIN: f32 = 20.0;

    /// Hazard (falling meteor) defaults
    pub const HAZARD_WIDTH: f32 = 20.0;
    pub const HAZARD_HEIGHT: f32 = 20.0;
    pub const HAZARD_FALL_SPEED: f32 = 3.0;
    /// One hazard spawns each time the spawn timer passes this many ticks
    pub const HAZARD_SPAWN_INTERVAL: u32 = 60;
    /// Damage dealt by a hazard reaching the player's body
    pub const HAZARD_BASE_DAMAGE: f32 = 10.0;

    /// Projectile (bullet) defaults
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 15.0;
    pub const BULLET_SPEED: f32 = 10.0;

    /// Score awards
    pub const SCORE_PER_KILL: u64 = 10;
    /// Lower award for hazards the shield merely blocks
    pub const SCORE_PER_BLOCK: u64 = 5;
    pub const SCORE_PER_STRIKE: u64 = 25;

    /// Sword swing tuning. Progress advances `SWING_STEP` per tick, so a
    /// full swing lasts 10 ticks and sweeps `SWING_SWEEP` radians.
    pub const SWING_STEP: f32 = 0.1;
    pub const SWING_PIVOT_OFFSET_X: f32 = 30.0;
    pub const SWING_REACH: f32 = 60.0;
    pub const SWING_HIT_HALF: f32 = 20.0;
    pub const SWING_START_ANGLE: f32 = -0.7 * PI;
    pub const SWING_SWEEP: f32 = 0.9 * PI;

    /// Gun muzzle offset from the player center (x to the right, y above)
    pub const MUZZLE_OFFSET_X: f32 = 50.0;
    pub const MUZZLE_OFFSET_Y: f32 = 25.0;

    /// Shield box (held at the off-hand, always active)
    pub const SHIELD_WIDTH: f32 = 40.0;
    pub const SHIELD_HEIGHT: f32 = 50.0;
    /// Horizontal gap between the player's left edge and the shield box
    pub const SHIELD_OFFSET_X: f32 = 35.0;
    /// Incoming body damage multiplier while the shield is equipped
    pub const SHIELD_DAMAGE_MODIFIER: f32 = 0.5;

    /// Boss battle tuning
    pub const BOSS_MAX_HEALTH: f32 = 200.0;
    /// Damage one player strike deals to the boss
    pub const BOSS_STRIKE_DAMAGE: f32 = 20.0;
    /// Ticks between boss counterattacks
    pub const BOSS_ATTACK_INTERVAL: u32 = 120;
    pub const BOSS_ATTACK_DAMAGE: f32 = 10.0;
}
