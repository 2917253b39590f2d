//! Run-local gold economy: the six purchasable upgrades.
//!
//! Every purchase path is a silent no-op when it cannot proceed (gold
//! short, pet cap reached, shield already owned), so stale UI clicks
//! never corrupt state. Costs escalate per purchase and reset at run
//! start.

use hecs::World;

use polywave_core::components::{
    Health, Pet, Player, PlayerStats, ProjectileLauncher, Shield,
};
use polywave_core::constants::{
    COST_GROWTH_PROJECTILES, COST_GROWTH_SHIELD, COST_GROWTH_STANDARD, HEALTH_UPGRADE_AMOUNT,
    SHIELD_MAX_HEALTH, STAT_UPGRADE_FACTOR,
};
use polywave_core::enums::UpgradeKind;
use polywave_core::events::GameEvent;
use polywave_core::state::UpgradeCosts;
use polywave_core::types::Position;

use crate::engine::RunStats;
use crate::world_setup::{self, IdCounters};

pub fn buy_upgrade(
    world: &mut World,
    kind: UpgradeKind,
    stats: &mut RunStats,
    costs: &mut UpgradeCosts,
    max_pets: u32,
    ids: &mut IdCounters,
    events: &mut Vec<GameEvent>,
) {
    let cost = match kind {
        UpgradeKind::Damage => costs.damage,
        UpgradeKind::Speed => costs.speed,
        UpgradeKind::Health => costs.health,
        UpgradeKind::Pet => costs.pet,
        UpgradeKind::Projectiles => costs.projectiles,
        UpgradeKind::Shield => costs.shield,
    };
    if stats.gold < cost {
        return;
    }

    let applied = match kind {
        UpgradeKind::Damage => {
            let mut applied = false;
            for (_entity, (_player, player_stats)) in
                world.query_mut::<(&Player, &mut PlayerStats)>()
            {
                player_stats.damage *= STAT_UPGRADE_FACTOR;
                applied = true;
            }
            if applied {
                costs.damage = escalate(cost, COST_GROWTH_STANDARD);
            }
            applied
        }
        UpgradeKind::Speed => {
            let mut applied = false;
            for (_entity, (_player, player_stats)) in
                world.query_mut::<(&Player, &mut PlayerStats)>()
            {
                player_stats.speed *= STAT_UPGRADE_FACTOR;
                applied = true;
            }
            if applied {
                costs.speed = escalate(cost, COST_GROWTH_STANDARD);
            }
            applied
        }
        UpgradeKind::Health => {
            let mut applied = false;
            for (_entity, (_player, health)) in world.query_mut::<(&Player, &mut Health)>() {
                health.max += HEALTH_UPGRADE_AMOUNT;
                health.current += HEALTH_UPGRADE_AMOUNT;
                applied = true;
            }
            if applied {
                costs.health = escalate(cost, COST_GROWTH_STANDARD);
            }
            applied
        }
        UpgradeKind::Pet => {
            let pet_count = world.query::<&Pet>().iter().count() as u32;
            if pet_count >= max_pets {
                return;
            }
            let Some(position) = player_position(world) else {
                return;
            };
            world_setup::spawn_pet(world, position, &mut ids.next_pet);
            costs.pet = escalate(cost, COST_GROWTH_STANDARD);
            true
        }
        UpgradeKind::Projectiles => {
            let Some(entity) = player_entity(world) else {
                return;
            };
            let owned = world.get::<&ProjectileLauncher>(entity).is_ok();
            if owned {
                if let Ok(mut launcher) = world.get::<&mut ProjectileLauncher>(entity) {
                    launcher.count += 1;
                }
            } else {
                let _ = world.insert_one(entity, ProjectileLauncher { count: 1 });
            }
            costs.projectiles = escalate(cost, COST_GROWTH_PROJECTILES);
            true
        }
        UpgradeKind::Shield => {
            let Some(entity) = player_entity(world) else {
                return;
            };
            if world.get::<&Shield>(entity).is_ok() {
                return;
            }
            let _ = world.insert_one(
                entity,
                Shield {
                    health: SHIELD_MAX_HEALTH,
                    max_health: SHIELD_MAX_HEALTH,
                },
            );
            costs.shield = escalate(cost, COST_GROWTH_SHIELD);
            true
        }
    };

    if applied {
        stats.gold -= cost;
        events.push(GameEvent::UpgradePurchased { kind, cost });
    }
}

fn escalate(cost: u32, factor: f64) -> u32 {
    (cost as f64 * factor).floor() as u32
}

fn player_entity(world: &World) -> Option<hecs::Entity> {
    world.query::<&Player>().iter().next().map(|(entity, _)| entity)
}

fn player_position(world: &World) -> Option<Position> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_player, pos))| *pos)
}
