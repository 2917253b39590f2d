//! All simulation systems, run in a fixed order each tick by the engine.

pub mod combat;
pub mod enemy_ai;
pub mod movement;
pub mod pets;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
