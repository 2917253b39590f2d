//! Spawn cadence, projectile autofire, and the wave clock.
//!
//! All three run on countdown timers decremented by delta time. The
//! enemy interval tightens as waves progress; boss waves spawn a burst
//! per trigger. The wave clock advances the wave on a fixed period
//! regardless of how many enemies remain alive.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use polywave_core::components::{Player, ProjectileLauncher};
use polywave_core::constants::{
    BOSS_WAVE_SPAWN_COUNT, PROJECTILE_FIRE_INTERVAL_SECS, SPAWN_INTERVAL_BASE, SPAWN_INTERVAL_MIN,
    SPAWN_INTERVAL_STEP, WAVE_DURATION_SECS,
};
use polywave_core::events::GameEvent;

use crate::engine::RunStats;
use crate::world_setup::{self, IdCounters};

/// Countdown timers driving the spawn cadence. Reset at run start.
#[derive(Debug, Clone, Copy)]
pub struct SpawnTimers {
    pub enemy_secs: f64,
    pub projectile_secs: f64,
    pub wave_secs: f64,
}

impl SpawnTimers {
    pub fn at_run_start() -> Self {
        Self {
            enemy_secs: spawn_interval(1),
            projectile_secs: PROJECTILE_FIRE_INTERVAL_SECS,
            wave_secs: WAVE_DURATION_SECS,
        }
    }
}

impl Default for SpawnTimers {
    fn default() -> Self {
        Self::at_run_start()
    }
}

/// Seconds between spawn triggers at the given wave.
pub fn spawn_interval(wave: u32) -> f64 {
    (SPAWN_INTERVAL_BASE - wave as f64 * SPAWN_INTERVAL_STEP).max(SPAWN_INTERVAL_MIN)
}

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timers: &mut SpawnTimers,
    stats: &mut RunStats,
    ids: &mut IdCounters,
    dt: f64,
    events: &mut Vec<GameEvent>,
) {
    timers.enemy_secs -= dt;
    if timers.enemy_secs <= 0.0 {
        let burst = if stats.wave % 10 == 0 {
            BOSS_WAVE_SPAWN_COUNT
        } else {
            1
        };
        for _ in 0..burst {
            let (id, kind) = world_setup::spawn_enemy(world, rng, stats.wave, &mut ids.next_enemy);
            events.push(GameEvent::EnemySpawned { id, kind });
        }
        timers.enemy_secs = spawn_interval(stats.wave);
    }

    let has_launcher = world
        .query::<(&Player, &ProjectileLauncher)>()
        .iter()
        .next()
        .is_some();
    if has_launcher {
        timers.projectile_secs -= dt;
        if timers.projectile_secs <= 0.0 {
            if let Some(id) = world_setup::spawn_projectile(world, &mut ids.next_projectile) {
                events.push(GameEvent::ProjectileFired { id });
            }
            timers.projectile_secs = PROJECTILE_FIRE_INTERVAL_SECS;
        }
    }

    timers.wave_secs -= dt;
    if timers.wave_secs <= 0.0 {
        stats.wave += 1;
        events.push(GameEvent::WaveStarted { wave: stats.wave });
        timers.wave_secs = WAVE_DURATION_SECS;
    }
}
