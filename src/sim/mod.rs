//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod geometry;
pub mod state;
pub mod tick;
pub mod weapon;

pub use geometry::Aabb;
pub use state::{
    Boss, GameMode, GamePhase, GameState, Hazard, Player, Projectile, WorldSnapshot,
};
pub use tick::{TickInput, tick};
pub use weapon::{AttackAction, WeaponKind};
