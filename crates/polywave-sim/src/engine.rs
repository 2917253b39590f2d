//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing: same seed plus same command
//! and delta-time sequence yields identical snapshots.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use polywave_core::commands::PlayerCommand;
use polywave_core::components::{Health, MoveTarget, Player, PlayerStats, Shield};
use polywave_core::constants::{CLICK_MAX_RADIUS, DEATH_CURRENCY_WAVE_DIVISOR, PLAYER_DEFAULT_COLOR};
use polywave_core::enums::GamePhase;
use polywave_core::events::GameEvent;
use polywave_core::state::{GameStateSnapshot, UpgradeCosts};
use polywave_core::types::{Position, SimTime};
use polywave_progress::{MetaProgress, ProgressBridge, ProgressStore, RunOutcome};

use crate::economy;
use crate::systems;
use crate::systems::spawner::SpawnTimers;
use crate::world_setup::{self, IdCounters};

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Run-local counters. Reset at run start.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    pub gold: u32,
    pub wave: u32,
    pub kills: u32,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            gold: 0,
            wave: 1,
            kills: 0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    stats: RunStats,
    auto_attack: bool,
    max_pets: u32,
    player_color: String,
    upgrade_costs: UpgradeCosts,
    meta: MetaProgress,
    bridge: Option<ProgressBridge>,
    timers: SpawnTimers,
    ids: IdCounters,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine with no persistence. Meta-progression starts
    /// pristine and is lost when the engine is dropped.
    pub fn new(config: SimConfig) -> Self {
        Self::build(config, MetaProgress::default(), None)
    }

    /// Create a new engine backed by a progress store. Meta-progression
    /// is loaded from the session's record (defaults on any failure) and
    /// saved back on skill purchase and death.
    pub fn with_store(
        config: SimConfig,
        store: Box<dyn ProgressStore>,
        session_id: impl Into<String>,
    ) -> Self {
        let bridge = ProgressBridge::new(store, session_id);
        let meta = bridge.load();
        Self::build(config, meta, Some(bridge))
    }

    fn build(config: SimConfig, meta: MetaProgress, bridge: Option<ProgressBridge>) -> Self {
        let max_pets = meta.bonuses.max_pets();
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            stats: RunStats::default(),
            auto_attack: false,
            max_pets,
            player_color: PLAYER_DEFAULT_COLOR.to_string(),
            upgrade_costs: UpgradeCosts::default(),
            meta,
            bridge,
            timers: SpawnTimers::at_run_start(),
            ids: IdCounters::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. Commands queued since the last tick are processed first.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.stats,
            self.auto_attack,
            self.max_pets,
            &self.upgrade_costs,
            &self.meta,
            events,
        )
    }

    /// Apply damage to the player, shield first. Triggers the death path
    /// when health reaches zero. Outside the Playing phase this is a no-op.
    pub fn damage_player(&mut self, amount: f64) {
        if self.phase != GamePhase::Playing || amount <= 0.0 {
            return;
        }

        let mut died = false;
        for (_entity, (_player, health, shield)) in
            self.world
                .query_mut::<(&Player, &mut Health, Option<&mut Shield>)>()
        {
            let mut remaining = amount;
            if let Some(shield) = shield {
                if shield.health > 0.0 {
                    if shield.health >= remaining {
                        shield.health -= remaining;
                        remaining = 0.0;
                    } else {
                        remaining -= shield.health;
                        shield.health = 0.0;
                        self.events.push(GameEvent::ShieldBroken);
                    }
                }
            }
            if remaining > 0.0 {
                health.current -= remaining;
                if health.current <= 0.0 {
                    health.current = 0.0;
                    died = true;
                }
            }
        }

        if died {
            self.handle_death();
        }
    }

    /// Apply damage to the enemy with the given id, awarding kill credit
    /// if it dies. Unknown ids are a no-op. Gated to the Playing phase.
    pub fn damage_enemy(&mut self, enemy_id: u32, amount: f64) {
        if self.phase != GamePhase::Playing {
            return;
        }
        systems::combat::damage_enemy(
            &mut self.world,
            enemy_id,
            amount,
            &mut self.stats,
            &mut self.events,
            &mut self.despawn_buffer,
        );
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the run-local counters.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Get the meta-progression state.
    pub fn meta(&self) -> &MetaProgress {
        &self.meta
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Overwrite the gold balance (for testing purchases).
    #[cfg(test)]
    pub fn set_gold(&mut self, gold: u32) {
        self.stats.gold = gold;
    }

    /// Overwrite the current wave (for testing scaling and spawn mixes).
    #[cfg(test)]
    pub fn set_wave(&mut self, wave: u32) {
        self.stats.wave = wave;
    }

    /// Overwrite the death currency balance (for testing skill purchases).
    #[cfg(test)]
    pub fn set_death_currency(&mut self, amount: u32) {
        self.meta.death_currency = amount;
    }

    /// Spawn an enemy of a specific kind at a specific position
    /// (for tests needing controlled combat geometry).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, kind: polywave_core::enums::EnemyKind, position: Position) -> u32 {
        world_setup::spawn_enemy_at(
            &mut self.world,
            kind,
            position,
            self.stats.wave,
            &mut self.ids.next_enemy,
        )
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame | PlayerCommand::Respawn => {
                if matches!(self.phase, GamePhase::Menu | GamePhase::Dead) {
                    self.start_run();
                }
            }
            PlayerCommand::OpenSkillTree => {
                if matches!(self.phase, GamePhase::Menu | GamePhase::Dead) {
                    self.phase = GamePhase::SkillTree;
                }
            }
            PlayerCommand::ReturnToMenu => {
                self.phase = GamePhase::Menu;
            }
            PlayerCommand::ToggleAutoAttack => {
                self.auto_attack = !self.auto_attack;
            }
            PlayerCommand::SetPlayerColor { color } => {
                self.player_color = color.clone();
                for (_entity, (_player, stats)) in
                    self.world.query_mut::<(&Player, &mut PlayerStats)>()
                {
                    stats.color = color.clone();
                }
            }
            PlayerCommand::SetMoveTarget { x, z } => {
                if self.phase != GamePhase::Playing {
                    return;
                }
                let destination = Position::new(x, z);
                // Out-of-bounds clicks are dropped, not clamped.
                if destination.distance_from_origin() > CLICK_MAX_RADIUS {
                    return;
                }
                for (_entity, (_player, target)) in
                    self.world.query_mut::<(&Player, &mut MoveTarget)>()
                {
                    target.destination = Some(destination);
                }
            }
            PlayerCommand::BuyUpgrade { kind } => {
                if self.phase != GamePhase::Playing {
                    return;
                }
                economy::buy_upgrade(
                    &mut self.world,
                    kind,
                    &mut self.stats,
                    &mut self.upgrade_costs,
                    self.max_pets,
                    &mut self.ids,
                    &mut self.events,
                );
            }
            PlayerCommand::PurchaseSkill { skill_id } => {
                if let Some(cost) = self.meta.purchase(&skill_id) {
                    self.max_pets = self.meta.bonuses.max_pets();
                    self.events.push(GameEvent::SkillPurchased { skill_id, cost });
                    if let Some(bridge) = self.bridge.as_mut() {
                        bridge.save(&self.meta);
                    }
                }
            }
        }
    }

    /// Reset all run-local state and enter the Playing phase.
    fn start_run(&mut self) {
        self.world.clear();
        world_setup::spawn_player(&mut self.world, &self.meta.bonuses, &self.player_color);
        self.stats = RunStats::default();
        self.auto_attack = false;
        self.max_pets = self.meta.bonuses.max_pets();
        self.upgrade_costs = UpgradeCosts::default();
        self.timers = SpawnTimers::at_run_start();
        self.ids = IdCounters::default();
        self.time = SimTime::default();
        self.phase = GamePhase::Playing;
    }

    /// Death path: award death currency, persist, enter the Dead phase.
    fn handle_death(&mut self) {
        self.phase = GamePhase::Dead;
        let awarded = self.stats.wave / DEATH_CURRENCY_WAVE_DIVISOR;
        self.meta.death_currency += awarded;
        self.events.push(GameEvent::PlayerDied {
            wave: self.stats.wave,
            currency_awarded: awarded,
        });
        if let Some(bridge) = self.bridge.as_mut() {
            bridge.save_on_death(
                &self.meta,
                RunOutcome {
                    wave_reached: self.stats.wave,
                    enemies_killed: self.stats.kills,
                },
                &self.player_color,
            );
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Player movement
        systems::movement::run(&mut self.world, dt);
        // 2. Player melee auto-attack
        if self.auto_attack {
            systems::combat::auto_attack(
                &mut self.world,
                dt,
                &mut self.stats,
                &mut self.events,
                &mut self.despawn_buffer,
            );
        }
        // 3. Enemy abilities, pursuit, contact damage
        let contact_damage = systems::enemy_ai::run(&mut self.world, &mut self.rng, dt);
        if contact_damage > 0.0 {
            self.damage_player(contact_damage);
        }
        // 4. Pets (orbit + attack)
        systems::pets::run(
            &mut self.world,
            dt,
            &mut self.stats,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 5. Projectiles (flight + collision)
        systems::projectiles::run(
            &mut self.world,
            dt,
            &mut self.stats,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 6. Spawn cadence, autofire, wave clock
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.timers,
            &mut self.stats,
            &mut self.ids,
            dt,
            &mut self.events,
        );
    }
}
