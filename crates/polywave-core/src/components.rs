//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;
use crate::types::{Position, Velocity};

/// Marks the single player entity of the active run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an entity as an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks an entity as a pet owned by the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pet;

/// Current and maximum hit points. Shared by player and enemies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Player combat and movement stats for the current run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStats {
    pub damage: f64,
    pub speed: f64,
    pub attack_speed: f64,
    /// Cosmetic only; survives across runs.
    pub color: String,
}

/// Click-to-move destination. Cleared on arrival (the only move-side clear)
/// or overwritten by a new click.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MoveTarget {
    pub destination: Option<Position>,
}

/// Which enemy the player's auto-attack is currently locked onto.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TargetEnemy {
    pub enemy_id: Option<u32>,
}

/// Projectile capability, attached on first purchase.
/// `count` grows with repeat purchases but is reserved — the stream stays
/// single regardless.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileLauncher {
    pub count: u32,
}

/// Shield, attached on purchase. Absorbs damage ahead of health.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shield {
    pub health: f64,
    pub max_health: f64,
}

/// Per-enemy identity and combat attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyInfo {
    /// Unique ascending id assigned by the spawner.
    pub id: u32,
    pub kind: EnemyKind,
    pub speed: f64,
    pub damage: f64,
    /// Gold credited on death.
    pub reward: u32,
}

/// Triangle teleport ability. Countdown timer, decremented by delta time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TeleportAbility {
    pub cooldown_secs: f64,
    pub remaining_secs: f64,
}

/// Boss self-heal ability. Countdown timer, decremented by delta time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SelfHeal {
    pub amount: f64,
    pub interval_secs: f64,
    pub remaining_secs: f64,
}

/// Reserved hexagon flag; the combat resolver does not consume it yet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplitOnDeath;

/// Per-pet identity and combat attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PetInfo {
    /// Unique ascending id; also fixes the orbit slot ordering.
    pub id: u32,
    pub damage: f64,
    pub attack_speed: f64,
    pub target_enemy: Option<u32>,
}

/// Projectile flight state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileInfo {
    pub id: u32,
    /// Unit direction fixed at launch.
    pub direction: Velocity,
    pub speed: f64,
    pub damage: f64,
}
