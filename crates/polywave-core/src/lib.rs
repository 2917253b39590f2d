//! Core types and definitions for the POLYWAVE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, constants, and the
//! static skill catalog. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod skills;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
