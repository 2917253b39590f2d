//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
///
/// `SkillTree` is reachable from both `Menu` and `Dead`; `Dead` returns to
/// `Playing` via respawn. No simulation system runs outside `Playing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Dead,
    SkillTree,
}

/// Enemy archetype. Each kind has distinct base stats; triangle, hexagon,
/// and boss carry special-ability components on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline chaser.
    Circle,
    /// Fast and fragile; teleports next to the player on a cooldown.
    Triangle,
    /// Slow bruiser.
    Square,
    /// Mid-tier all-rounder.
    Pentagon,
    /// Tanky; carries a reserved split-on-death flag.
    Hexagon,
    /// Forced on every wave divisible by 10; periodically self-heals.
    Boss,
}

/// Run-local upgrade kinds purchasable with gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    Damage,
    Speed,
    Health,
    Pet,
    Projectiles,
    Shield,
}

/// Permanent bonus axes fed by the skill tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    /// Fractional damage modifier applied at run start.
    Damage,
    /// Flat max-health bonus applied at run start.
    Health,
    /// Fractional speed modifier applied at run start.
    Speed,
    /// Raises the pet cap: max_pets = 1 + total.
    PetSlots,
}
