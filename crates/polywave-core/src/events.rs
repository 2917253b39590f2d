//! Events emitted by the simulation for the UI and render layers.
//!
//! Subscribers consume the events carried in each tick's snapshot instead
//! of diffing state or polling a shared store.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, UpgradeKind};

/// State-change notifications drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The wave counter advanced.
    WaveStarted { wave: u32 },
    /// A new enemy entered the arena.
    EnemySpawned { id: u32, kind: EnemyKind },
    /// An enemy died; its reward was credited.
    EnemyKilled { id: u32, kind: EnemyKind, reward: u32 },
    /// A projectile was launched at the nearest enemy.
    ProjectileFired { id: u32 },
    /// The shield was depleted by a hit that carried through to health.
    ShieldBroken,
    /// The player died; the run is over.
    PlayerDied { wave: u32, currency_awarded: u32 },
    /// A run-local upgrade was bought.
    UpgradePurchased { kind: UpgradeKind, cost: u32 },
    /// A permanent skill was bought.
    SkillPurchased { skill_id: String, cost: u32 },
}
