//! Weapon behavior keyed by the classified weapon kind
//!
//! The capability set is `{attack, active_hit_region, damage_modifier}`.
//! A weapon is selected once at game start; the tick dispatches through
//! these methods instead of re-branching on a label string.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use super::state::Player;
use crate::consts::*;

/// Side effect of an attack press this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackAction {
    None,
    /// Spawn one projectile at the muzzle position
    SpawnProjectile { muzzle: Vec2 },
}

/// The equipped weapon kind, as produced by the classifier.
///
/// `Unarmed` is the fallback for an unrecognized classification: no attack
/// action, no hit region, body-collision-only damage. The game stays
/// playable either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponKind {
    Sword,
    Gun,
    Shield,
    Unarmed,
}

impl WeaponKind {
    /// Parse a classifier label from the closed set
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "sword" => Some(WeaponKind::Sword),
            "gun" => Some(WeaponKind::Gun),
            "shield" => Some(WeaponKind::Shield),
            _ => None,
        }
    }

    /// Parse a possibly-malformed label, falling back to `Unarmed`
    pub fn from_label_lossy(label: &str) -> Self {
        Self::from_label(label).unwrap_or(WeaponKind::Unarmed)
    }

    /// Label used in score records
    pub fn label(&self) -> &'static str {
        match self {
            WeaponKind::Sword => "sword",
            WeaponKind::Gun => "gun",
            WeaponKind::Shield => "shield",
            WeaponKind::Unarmed => "unknown",
        }
    }

    /// Perform the attack side effect for one edge-triggered press.
    ///
    /// Sword: start a swing unless one is already in flight (attack spam
    /// cannot restart a swing). Gun: always fire one bullet. Shield and
    /// Unarmed: no-op.
    pub fn attack(self, player: &mut Player) -> AttackAction {
        match self {
            WeaponKind::Sword => {
                if !player.swinging {
                    player.swinging = true;
                    player.swing_progress = 0.0;
                }
                AttackAction::None
            }
            WeaponKind::Gun => AttackAction::SpawnProjectile {
                muzzle: Vec2::new(
                    player.pos.x + MUZZLE_OFFSET_X,
                    player.pos.y - player.half.y + MUZZLE_OFFSET_Y,
                ),
            },
            WeaponKind::Shield | WeaponKind::Unarmed => AttackAction::None,
        }
    }

    /// The area where this weapon destroys hazards this tick, if any.
    ///
    /// Sword: a box swept along the swing arc, only while swinging.
    /// Shield: a fixed box at the off-hand, always active.
    pub fn active_hit_region(self, player: &Player) -> Option<Aabb> {
        match self {
            WeaponKind::Sword => {
                if !player.swinging {
                    return None;
                }
                let pivot =
                    player.pos + Vec2::new(SWING_PIVOT_OFFSET_X, -player.half.y);
                let angle = SWING_START_ANGLE + SWING_SWEEP * player.swing_progress;
                let tip = pivot + Vec2::new(angle.cos(), angle.sin()) * SWING_REACH;
                Some(Aabb::new(tip, Vec2::splat(SWING_HIT_HALF)))
            }
            WeaponKind::Shield => Some(Aabb::from_top_left(
                Vec2::new(
                    player.pos.x - player.half.x - SHIELD_OFFSET_X,
                    player.pos.y - player.half.y,
                ),
                Vec2::new(SHIELD_WIDTH, SHIELD_HEIGHT),
            )),
            WeaponKind::Gun | WeaponKind::Unarmed => None,
        }
    }

    /// Multiplier applied to body-collision damage
    pub fn damage_modifier(self) -> f32 {
        match self {
            WeaponKind::Shield => SHIELD_DAMAGE_MODIFIER,
            _ => 1.0,
        }
    }

    /// Score awarded for a hazard destroyed by the active hit region
    pub fn region_score(self) -> u64 {
        match self {
            WeaponKind::Shield => SCORE_PER_BLOCK,
            _ => SCORE_PER_KILL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for kind in [WeaponKind::Sword, WeaponKind::Gun, WeaponKind::Shield] {
            assert_eq!(WeaponKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(WeaponKind::from_label("banana"), None);
        assert_eq!(WeaponKind::from_label_lossy("banana"), WeaponKind::Unarmed);
        assert_eq!(WeaponKind::Unarmed.label(), "unknown");
    }

    #[test]
    fn test_sword_attack_does_not_interrupt_swing() {
        let mut player = Player::new(WeaponKind::Sword);
        assert_eq!(WeaponKind::Sword.attack(&mut player), AttackAction::None);
        assert!(player.swinging);

        player.swing_progress = 0.5;
        WeaponKind::Sword.attack(&mut player);
        // Mid-swing attack is a no-op; progress is untouched
        assert_eq!(player.swing_progress, 0.5);
        assert!(player.swinging);
    }

    #[test]
    fn test_gun_fires_from_muzzle() {
        let mut player = Player::new(WeaponKind::Gun);
        let action = WeaponKind::Gun.attack(&mut player);
        match action {
            AttackAction::SpawnProjectile { muzzle } => {
                assert_eq!(muzzle.x, player.pos.x + MUZZLE_OFFSET_X);
                assert_eq!(muzzle.y, player.pos.y - player.half.y + MUZZLE_OFFSET_Y);
            }
            AttackAction::None => panic!("gun attack must spawn a projectile"),
        }
        assert!(!player.swinging);
    }

    #[test]
    fn test_sword_region_only_while_swinging() {
        let mut player = Player::new(WeaponKind::Sword);
        assert!(WeaponKind::Sword.active_hit_region(&player).is_none());

        player.swinging = true;
        player.swing_progress = 0.0;
        let start = WeaponKind::Sword
            .active_hit_region(&player)
            .expect("swinging sword has a hit region");

        player.swing_progress = 1.0;
        let end = WeaponKind::Sword.active_hit_region(&player).unwrap();
        // The region sweeps as progress advances
        assert_ne!(start.center, end.center);
    }

    #[test]
    fn test_shield_region_fixed_and_always_active() {
        let player = Player::new(WeaponKind::Shield);
        let region = WeaponKind::Shield
            .active_hit_region(&player)
            .expect("shield box is always active");
        // Off-hand side: the box sits to the left of the player center
        assert!(region.center.x < player.pos.x);
        assert!(region.left() < player.body().left());
        assert_eq!(region.half, Vec2::new(SHIELD_WIDTH / 2.0, SHIELD_HEIGHT / 2.0));
    }

    #[test]
    fn test_damage_modifiers() {
        assert_eq!(WeaponKind::Sword.damage_modifier(), 1.0);
        assert_eq!(WeaponKind::Gun.damage_modifier(), 1.0);
        assert_eq!(WeaponKind::Shield.damage_modifier(), SHIELD_DAMAGE_MODIFIER);
        assert_eq!(WeaponKind::Unarmed.damage_modifier(), 1.0);
    }

    #[test]
    fn test_unarmed_is_passive() {
        let mut player = Player::new(WeaponKind::Unarmed);
        assert_eq!(WeaponKind::Unarmed.attack(&mut player), AttackAction::None);
        assert!(WeaponKind::Unarmed.active_hit_region(&player).is_none());
    }
}
