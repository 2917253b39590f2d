//! Pet system: orbital formation around the player plus independent
//! target selection and continuous damage.
//!
//! Orbit slots are assigned by pet id order, so the formation is stable
//! as pets are added. Targeting uses the enemy list captured at system
//! start; a target that dies mid-pass simply absorbs no further damage.

use hecs::World;

use polywave_core::components::{Enemy, EnemyInfo, Pet, PetInfo, Player, PlayerStats};
use polywave_core::constants::{ARRIVE_EPSILON, PET_ATTACK_RANGE, PET_ORBIT_RADIUS, PET_SPEED_FACTOR};
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
    let Some((player_pos, player_speed)) = player_anchor(world) else {
        return;
    };

    let mut pets: Vec<(hecs::Entity, u32)> = world
        .query::<(&Pet, &PetInfo)>()
        .iter()
        .map(|(entity, (_pet, info))| (entity, info.id))
        .collect();
    if pets.is_empty() {
        return;
    }
    pets.sort_by_key(|&(_, id)| id);

    let enemies: Vec<(u32, Position)> = world
        .query::<(&Enemy, &EnemyInfo, &Position)>()
        .iter()
        .map(|(_, (_enemy, info, pos))| (info.id, *pos))
        .collect();

    let orbit_speed = player_speed * PET_SPEED_FACTOR;
    let count = pets.len();
    for (slot, &(entity, _id)) in pets.iter().enumerate() {
        let angle = slot as f64 / count as f64 * std::f64::consts::TAU;
        let orbit_point = player_pos.on_ring(angle, PET_ORBIT_RADIUS);

        let pet_pos = {
            let Ok(mut pos) = world.get::<&mut Position>(entity) else {
                continue;
            };
            let distance = pos.distance_to(&orbit_point);
            if distance > ARRIVE_EPSILON {
                let ratio = (orbit_speed * dt / distance).min(1.0);
                pos.x += (orbit_point.x - pos.x) * ratio;
                pos.z += (orbit_point.z - pos.z) * ratio;
            }
            *pos
        };

        let mut best: Option<(u32, f64)> = None;
        for &(enemy_id, enemy_pos) in &enemies {
            let distance = pet_pos.distance_to(&enemy_pos);
            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((enemy_id, distance));
            }
        }
        let target = match best {
            Some((id, distance)) if distance < PET_ATTACK_RANGE => Some(id),
            _ => None,
        };

        let damage = {
            let Ok(mut info) = world.get::<&mut PetInfo>(entity) else {
                continue;
            };
            info.target_enemy = target;
            info.damage
        };
        if let Some(target_id) = target {
            combat::damage_enemy(world, target_id, damage * dt, stats, events, despawn_buffer);
        }
    }
}

fn player_anchor(world: &World) -> Option<(Position, f64)> {
    world
        .query::<(&Player, &Position, &PlayerStats)>()
        .iter()
        .next()
        .map(|(_, (_player, pos, stats))| (*pos, stats.speed))
}
