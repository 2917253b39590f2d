//! Combat resolution: the shared enemy damage path and the player's
//! melee auto-attack.
//!
//! Every source of enemy damage (auto-attack, pets, projectiles, direct
//! calls) funnels through `damage_enemy`, so kill credit — gold, kill
//! count, the `EnemyKilled` event, despawn — is awarded exactly once.

use hecs::World;

use polywave_core::components::{Enemy, EnemyInfo, Health, Player, PlayerStats, TargetEnemy};
use polywave_core::constants::AUTO_ATTACK_RANGE;
use polywave_core::events::GameEvent;
use polywave_core::types::Position;

use crate::engine::RunStats;

/// Apply damage to the enemy with the given id, then sweep the dead.
/// Unknown ids (already-dead targets from stale lists) are a no-op.
pub fn damage_enemy(
    world: &mut World,
    target_id: u32,
    amount: f64,
    stats: &mut RunStats,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    for (_entity, (info, health)) in world.query_mut::<(&EnemyInfo, &mut Health)>() {
        if info.id == target_id {
            health.current -= amount;
            break;
        }
    }
    sweep_dead(world, stats, events, despawn_buffer);
}

/// Despawn every enemy at or below zero health, crediting gold and kills.
pub fn sweep_dead(
    world: &mut World,
    stats: &mut RunStats,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    despawn_buffer.clear();
    for (entity, (_enemy, info, health)) in world.query_mut::<(&Enemy, &EnemyInfo, &Health)>() {
        if health.current <= 0.0 {
            despawn_buffer.push(entity);
            stats.gold += info.reward;
            stats.kills += 1;
            events.push(GameEvent::EnemyKilled {
                id: info.id,
                kind: info.kind,
                reward: info.reward,
            });
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Player melee auto-attack: lock onto the nearest enemy within range and
/// deal continuous damage scaled by delta time.
pub fn auto_attack(
    world: &mut World,
    dt: f64,
    stats: &mut RunStats,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    let Some((position, damage)) = player_attack_source(world) else {
        return;
    };

    let target = match nearest_enemy(world, &position) {
        Some((id, distance)) if distance < AUTO_ATTACK_RANGE => Some(id),
        _ => None,
    };
    for (_entity, (_player, target_enemy)) in world.query_mut::<(&Player, &mut TargetEnemy)>() {
        target_enemy.enemy_id = target;
    }

    if let Some(id) = target {
        damage_enemy(world, id, damage * dt, stats, events, despawn_buffer);
    }
}

/// Nearest enemy to `from`, as (id, distance).
pub fn nearest_enemy(world: &World, from: &Position) -> Option<(u32, f64)> {
    let mut best: Option<(u32, f64)> = None;
    for (_entity, (_enemy, info, pos)) in world.query::<(&Enemy, &EnemyInfo, &Position)>().iter() {
        let distance = from.distance_to(pos);
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((info.id, distance));
        }
    }
    best
}

fn player_attack_source(world: &World) -> Option<(Position, f64)> {
    world
        .query::<(&Player, &Position, &PlayerStats)>()
        .iter()
        .next()
        .map(|(_, (_player, pos, stats))| (*pos, stats.damage))
}
