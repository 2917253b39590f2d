//! Meta-progression persistence for POLYWAVE.
//!
//! Death currency, the skill tree, and permanent bonuses outlive a run;
//! everything else resets at `StartGame`. This crate owns that surviving
//! subset: the `MetaProgress` model, the `ProgressStore` trait over an
//! opaque record keyed by session id, and the `ProgressBridge` that
//! absorbs every store failure — a broken save must never end a run.

pub mod bridge;
pub mod store;

pub use bridge::{MetaProgress, ProgressBridge, RunOutcome};
pub use store::{JsonFileStore, MemoryStore, ProgressRecord, ProgressStore};

#[cfg(test)]
mod tests;
