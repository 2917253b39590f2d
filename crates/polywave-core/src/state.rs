//! Game state snapshot — the complete visible state sent to the frontend
//! each tick.
//!
//! Snapshots are read-only views: the render layer draws positions and
//! health ratios from them, the UI reads currencies and costs, and both
//! react to the drained `events`. Neither writes back.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{EnemyKind, GamePhase};
use crate::events::GameEvent;
use crate::skills::{PermanentBonuses, SkillNode};
use crate::types::{Position, SimTime, Velocity};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub pets: Vec<PetView>,
    pub projectiles: Vec<ProjectileView>,
    pub gold: u32,
    pub death_currency: u32,
    pub wave: u32,
    pub kills: u32,
    pub auto_attack: bool,
    pub max_pets: u32,
    pub upgrade_costs: UpgradeCosts,
    pub skill_tree: Vec<SkillNode>,
    pub permanent_bonuses: PermanentBonuses,
    /// State-change notifications drained this tick.
    pub events: Vec<GameEvent>,
}

/// The player as visible to render and UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub target_position: Option<Position>,
    pub health: f64,
    pub max_health: f64,
    pub damage: f64,
    pub speed: f64,
    pub attack_speed: f64,
    pub color: String,
    pub target_enemy: Option<u32>,
    pub has_projectiles: bool,
    /// Reserved: tracked but a single projectile stream fires regardless.
    pub projectile_count: u32,
    pub has_shield: bool,
    pub shield_health: f64,
    pub max_shield_health: f64,
}

/// A visible enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub speed: f64,
}

/// A visible pet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetView {
    pub id: u32,
    pub position: Position,
    pub target_enemy: Option<u32>,
}

/// A visible projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Position,
    pub direction: Velocity,
}

/// Current gold price of each run-local upgrade. Escalates on purchase,
/// reset to base at run start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeCosts {
    pub damage: u32,
    pub speed: u32,
    pub health: u32,
    pub pet: u32,
    pub projectiles: u32,
    pub shield: u32,
}

impl Default for UpgradeCosts {
    fn default() -> Self {
        Self {
            damage: BASE_COST_DAMAGE,
            speed: BASE_COST_SPEED,
            health: BASE_COST_HEALTH,
            pet: BASE_COST_PET,
            projectiles: BASE_COST_PROJECTILES,
            shield: BASE_COST_SHIELD,
        }
    }
}
