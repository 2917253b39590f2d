//! Enemy behavior: abilities, pursuit, and contact damage.
//!
//! Runs ability timers first (triangle teleport, boss self-heal), then
//! moves every enemy toward the player. Enemies inside melee range stand
//! still and contribute contact damage; the caller applies the summed
//! total to the player in one hit so shield absorption resolves once per
//! tick.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use polywave_core::components::{Enemy, EnemyInfo, Health, Player, SelfHeal, TeleportAbility};
use polywave_core::constants::{MELEE_RANGE, TELEPORT_RING_RADIUS};
use polywave_core::types::Position;

/// Run enemy abilities and pursuit. Returns the summed contact damage
/// dealt by enemies in melee range this tick.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, dt: f64) -> f64 {
    let Some(player_pos) = player_position(world) else {
        return 0.0;
    };

    let mut contact_damage = 0.0;
    for (_entity, (_enemy, info, pos, health, teleport, heal)) in world.query_mut::<(
        &Enemy,
        &EnemyInfo,
        &mut Position,
        &mut Health,
        Option<&mut TeleportAbility>,
        Option<&mut SelfHeal>,
    )>() {
        if let Some(teleport) = teleport {
            teleport.remaining_secs -= dt;
            if teleport.remaining_secs <= 0.0 {
                let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
                *pos = player_pos.on_ring(angle, TELEPORT_RING_RADIUS);
                teleport.remaining_secs = teleport.cooldown_secs;
            }
        }

        if let Some(heal) = heal {
            heal.remaining_secs -= dt;
            if heal.remaining_secs <= 0.0 {
                if health.current < health.max {
                    health.current = (health.current + heal.amount).min(health.max);
                    heal.remaining_secs = heal.interval_secs;
                } else {
                    // At full health the timer stays elapsed, so the next
                    // point of damage is answered by an immediate heal.
                    heal.remaining_secs = 0.0;
                }
            }
        }

        let distance = pos.distance_to(&player_pos);
        if distance > MELEE_RANGE {
            let ratio = (info.speed * dt / distance).min(1.0);
            pos.x += (player_pos.x - pos.x) * ratio;
            pos.z += (player_pos.z - pos.z) * ratio;
        } else {
            contact_damage += info.damage * dt;
        }
    }
    contact_damage
}

fn player_position(world: &World) -> Option<Position> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_player, pos))| *pos)
}
