//! The authoritative POLYWAVE simulation.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems once per externally driven tick, and produces
//! `GameStateSnapshot`s. Completely headless (no render or UI
//! dependency), enabling deterministic testing.

pub mod economy;
pub mod engine;
pub mod systems;
pub mod world_setup;
