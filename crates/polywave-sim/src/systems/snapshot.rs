//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world. View lists
//! are sorted by id so equal worlds produce byte-equal snapshots.

use hecs::World;

use polywave_core::components::*;
use polywave_core::enums::GamePhase;
use polywave_core::events::GameEvent;
use polywave_core::state::*;
use polywave_core::types::{Position, SimTime};
use polywave_progress::MetaProgress;

use crate::engine::RunStats;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    stats: &RunStats,
    auto_attack: bool,
    max_pets: u32,
    upgrade_costs: &UpgradeCosts,
    meta: &MetaProgress,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        player: build_player(world),
        enemies: build_enemies(world),
        pets: build_pets(world),
        projectiles: build_projectiles(world),
        gold: stats.gold,
        death_currency: meta.death_currency,
        wave: stats.wave,
        kills: stats.kills,
        auto_attack,
        max_pets,
        upgrade_costs: *upgrade_costs,
        skill_tree: meta.skill_tree.clone(),
        permanent_bonuses: meta.bonuses,
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(
            &Player,
            &Position,
            &Health,
            &PlayerStats,
            &MoveTarget,
            &TargetEnemy,
            Option<&ProjectileLauncher>,
            Option<&Shield>,
        )>()
        .iter()
        .next()
        .map(
            |(_, (_player, pos, health, stats, move_target, target_enemy, launcher, shield))| {
                PlayerView {
                    position: *pos,
                    target_position: move_target.destination,
                    health: health.current,
                    max_health: health.max,
                    damage: stats.damage,
                    speed: stats.speed,
                    attack_speed: stats.attack_speed,
                    color: stats.color.clone(),
                    target_enemy: target_enemy.enemy_id,
                    has_projectiles: launcher.is_some(),
                    projectile_count: launcher.map_or(0, |l| l.count),
                    has_shield: shield.is_some(),
                    shield_health: shield.map_or(0.0, |s| s.health),
                    max_shield_health: shield.map_or(0.0, |s| s.max_health),
                }
            },
        )
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &EnemyInfo, &Position, &Health)>()
        .iter()
        .map(|(_, (_enemy, info, pos, health))| EnemyView {
            id: info.id,
            kind: info.kind,
            position: *pos,
            health: health.current,
            max_health: health.max,
            speed: info.speed,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_pets(world: &World) -> Vec<PetView> {
    let mut pets: Vec<PetView> = world
        .query::<(&Pet, &PetInfo, &Position)>()
        .iter()
        .map(|(_, (_pet, info, pos))| PetView {
            id: info.id,
            position: *pos,
            target_enemy: info.target_enemy,
        })
        .collect();
    pets.sort_by_key(|p| p.id);
    pets
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&ProjectileInfo, &Position)>()
        .iter()
        .map(|(_, (info, pos))| ProjectileView {
            id: info.id,
            position: *pos,
            direction: info.direction,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}
