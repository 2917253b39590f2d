//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player, enemies, pets, and projectiles with appropriate
//! component bundles, and owns the wave scaling formulas applied at
//! spawn time.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use polywave_core::components::*;
use polywave_core::constants::*;
use polywave_core::enums::EnemyKind;
use polywave_core::skills::PermanentBonuses;
use polywave_core::types::Position;

/// Ascending entity ids handed out over a run. Reset at run start.
#[derive(Debug, Clone, Copy)]
pub struct IdCounters {
    pub next_enemy: u32,
    pub next_pet: u32,
    pub next_projectile: u32,
}

impl Default for IdCounters {
    fn default() -> Self {
        Self {
            next_enemy: 1,
            next_pet: 1,
            next_projectile: 1,
        }
    }
}

/// Pre-scaling stats for one enemy kind.
pub struct EnemyBaseStats {
    pub health: f64,
    pub speed: f64,
    pub damage: f64,
    pub reward: f64,
}

/// Base stats per kind, before wave scaling.
pub fn base_stats(kind: EnemyKind) -> EnemyBaseStats {
    match kind {
        EnemyKind::Circle => EnemyBaseStats {
            health: 30.0,
            speed: 2.0,
            damage: 5.0,
            reward: 10.0,
        },
        EnemyKind::Triangle => EnemyBaseStats {
            health: 15.0,
            speed: 4.0,
            damage: 3.0,
            reward: 8.0,
        },
        EnemyKind::Square => EnemyBaseStats {
            health: 100.0,
            speed: 0.8,
            damage: 12.0,
            reward: 30.0,
        },
        EnemyKind::Pentagon => EnemyBaseStats {
            health: 80.0,
            speed: 1.2,
            damage: 8.0,
            reward: 20.0,
        },
        EnemyKind::Hexagon => EnemyBaseStats {
            health: 60.0,
            speed: 1.0,
            damage: 10.0,
            reward: 25.0,
        },
        EnemyKind::Boss => EnemyBaseStats {
            health: 200.0,
            speed: 1.5,
            damage: 15.0,
            reward: 100.0,
        },
    }
}

/// Wave multiplier applied to enemy health, damage, and reward.
pub fn wave_multiplier(wave: u32) -> f64 {
    1.0 + (wave.saturating_sub(1)) as f64 * WAVE_STAT_STEP
}

/// Wave multiplier applied to enemy speed. Half-strength and capped, so
/// late waves hit harder without becoming uncatchable.
pub fn wave_speed_multiplier(wave: u32) -> f64 {
    (wave_multiplier(wave) * 0.5 + 0.5).min(WAVE_SPEED_CAP)
}

/// Roll an enemy kind for the given wave. Boss waves always roll Boss;
/// otherwise the mix widens as waves progress.
pub fn roll_enemy_kind(rng: &mut ChaCha8Rng, wave: u32) -> EnemyKind {
    if wave % 10 == 0 {
        return EnemyKind::Boss;
    }
    let roll: f64 = rng.gen_range(0.0..1.0);
    if wave >= 20 {
        if roll < 0.2 {
            EnemyKind::Hexagon
        } else if roll < 0.4 {
            EnemyKind::Pentagon
        } else if roll < 0.6 {
            EnemyKind::Square
        } else if roll < 0.8 {
            EnemyKind::Triangle
        } else {
            EnemyKind::Circle
        }
    } else if wave >= 10 {
        if roll < 0.3 {
            EnemyKind::Triangle
        } else if roll < 0.6 {
            EnemyKind::Square
        } else {
            EnemyKind::Circle
        }
    } else if wave >= 5 {
        if roll < 0.3 {
            EnemyKind::Triangle
        } else {
            EnemyKind::Circle
        }
    } else {
        EnemyKind::Circle
    }
}

/// Spawn the player at the origin with permanent bonuses applied.
pub fn spawn_player(world: &mut World, bonuses: &PermanentBonuses, color: &str) -> hecs::Entity {
    let max_health = PLAYER_BASE_HEALTH + bonuses.health;
    world.spawn((
        Player,
        Position::default(),
        MoveTarget::default(),
        TargetEnemy::default(),
        Health {
            current: max_health,
            max: max_health,
        },
        PlayerStats {
            damage: PLAYER_BASE_DAMAGE * (1.0 + bonuses.damage),
            speed: PLAYER_BASE_SPEED * (1.0 + bonuses.speed),
            attack_speed: PLAYER_BASE_ATTACK_SPEED,
            color: color.to_string(),
        },
    ))
}

/// Roll a kind and spawn one enemy on the world-fixed spawn ring.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: u32,
    next_id: &mut u32,
) -> (u32, EnemyKind) {
    let kind = roll_enemy_kind(rng, wave);
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let position = Position::default().on_ring(angle, SPAWN_RING_RADIUS);
    let id = spawn_enemy_at(world, kind, position, wave, next_id);
    (id, kind)
}

/// Spawn one enemy of a specific kind at a specific position, with wave
/// scaling applied to its stats.
pub fn spawn_enemy_at(
    world: &mut World,
    kind: EnemyKind,
    position: Position,
    wave: u32,
    next_id: &mut u32,
) -> u32 {
    let base = base_stats(kind);
    let multiplier = wave_multiplier(wave);
    let id = *next_id;
    *next_id += 1;

    let health = base.health * multiplier;
    let entity = world.spawn((
        Enemy,
        position,
        EnemyInfo {
            id,
            kind,
            speed: base.speed * wave_speed_multiplier(wave),
            damage: base.damage * multiplier,
            reward: (base.reward * multiplier).floor() as u32,
        },
        Health {
            current: health,
            max: health,
        },
    ));

    match kind {
        EnemyKind::Triangle => {
            let _ = world.insert_one(
                entity,
                TeleportAbility {
                    cooldown_secs: TELEPORT_COOLDOWN_SECS,
                    remaining_secs: TELEPORT_COOLDOWN_SECS,
                },
            );
        }
        EnemyKind::Boss => {
            let _ = world.insert_one(
                entity,
                SelfHeal {
                    amount: BOSS_HEAL_AMOUNT,
                    interval_secs: BOSS_HEAL_INTERVAL_SECS,
                    remaining_secs: BOSS_HEAL_INTERVAL_SECS,
                },
            );
        }
        EnemyKind::Hexagon => {
            let _ = world.insert_one(entity, SplitOnDeath);
        }
        _ => {}
    }

    id
}

/// Spawn a pet at the given position (normally the player's).
pub fn spawn_pet(world: &mut World, position: Position, next_id: &mut u32) -> u32 {
    let id = *next_id;
    *next_id += 1;
    world.spawn((
        Pet,
        position,
        PetInfo {
            id,
            damage: PET_BASE_DAMAGE,
            attack_speed: PET_BASE_ATTACK_SPEED,
            target_enemy: None,
        },
    ));
    id
}

/// Spawn a projectile from the player aimed at the nearest enemy.
/// Returns `None` if the player lacks the launcher or no enemy exists.
pub fn spawn_projectile(world: &mut World, next_id: &mut u32) -> Option<u32> {
    let (origin, damage) = {
        let mut query = world.query::<(&Player, &Position, &PlayerStats, &ProjectileLauncher)>();
        let (_, (_player, pos, stats, _launcher)) = query.iter().next()?;
        (*pos, stats.damage)
    };

    let mut nearest: Option<(Position, f64)> = None;
    for (_entity, (_enemy, pos)) in world.query::<(&Enemy, &Position)>().iter() {
        let distance = origin.distance_to(pos);
        if nearest.map_or(true, |(_, best)| distance < best) {
            nearest = Some((*pos, distance));
        }
    }
    let (target, _) = nearest?;

    let id = *next_id;
    *next_id += 1;
    world.spawn((
        origin,
        ProjectileInfo {
            id,
            direction: origin.direction_to(&target),
            speed: PROJECTILE_SPEED,
            damage: damage * PROJECTILE_DAMAGE_FACTOR,
        },
    ));
    Some(id)
}
