//! Projectile flight and collision.
//!
//! Each projectile advances along its fixed direction, culls beyond max
//! range from the origin, and tests its advanced position against enemy
//! positions captured at system start. A hit deals the projectile's full
//! damage once and removes it; enemies spawned or moved later this tick
//! are only hittable next tick.

use hecs::World;

use polywave_core::components::{Enemy, EnemyInfo, ProjectileInfo};
use polywave_core::constants::{PROJECTILE_HIT_RADIUS, PROJECTILE_MAX_RANGE};
use polywave_core::events::GameEvent;
use polywave_core::types::Position;

use crate::engine::RunStats;
use crate::systems::combat;

pub fn run(
    world: &mut World,
    dt: f64,
    stats: &mut RunStats,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    let projectiles: Vec<(hecs::Entity, Position, ProjectileInfo)> = world
        .query::<(&Position, &ProjectileInfo)>()
        .iter()
        .map(|(entity, (pos, info))| (entity, *pos, *info))
        .collect();
    if projectiles.is_empty() {
        return;
    }

    let enemies: Vec<(u32, Position)> = world
        .query::<(&Enemy, &EnemyInfo, &Position)>()
        .iter()
        .map(|(_, (_enemy, info, pos))| (info.id, *pos))
        .collect();

    let mut expired: Vec<hecs::Entity> = Vec::new();
    for (entity, pos, info) in projectiles {
        let next = Position {
            x: pos.x + info.direction.x * info.speed * dt,
            z: pos.z + info.direction.z * info.speed * dt,
        };

        if next.distance_from_origin() > PROJECTILE_MAX_RANGE {
            expired.push(entity);
            continue;
        }

        let hit = enemies
            .iter()
            .find(|(_, enemy_pos)| next.distance_to(enemy_pos) < PROJECTILE_HIT_RADIUS)
            .map(|&(id, _)| id);
        match hit {
            Some(target_id) => {
                combat::damage_enemy(world, target_id, info.damage, stats, events, despawn_buffer);
                expired.push(entity);
            }
            None => {
                if let Ok(mut live_pos) = world.get::<&mut Position>(entity) {
                    *live_pos = next;
                }
            }
        }
    }

    for entity in expired {
        let _ = world.despawn(entity);
    }
}
