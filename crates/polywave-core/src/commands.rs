//! Player commands sent from the UI and render layers to the simulation.
//!
//! Commands are validated and queued for processing at the next tick
//! boundary. Failed preconditions degrade to silent no-ops; the buttons
//! that issue them are disabled in the same situations, and a stale UI
//! must never crash or half-apply a mutation.

use serde::{Deserialize, Serialize};

use crate::enums::UpgradeKind;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Phase control ---
    /// Start a fresh run (from Menu or Dead).
    StartGame,
    /// Restart after death. Identical effect to StartGame.
    Respawn,
    /// Open the permanent skill tree (from Menu or Dead).
    OpenSkillTree,
    /// Back to the main menu from anywhere.
    ReturnToMenu,

    // --- In-run input ---
    /// Set the click-to-move destination on the ground plane.
    /// Ignored outside Playing or beyond the click radius.
    SetMoveTarget { x: f64, z: f64 },
    /// Toggle continuous auto-attack on the nearest enemy in range.
    ToggleAutoAttack,
    /// Set the cosmetic player color.
    SetPlayerColor { color: String },

    // --- Economy ---
    /// Spend gold on a run-local upgrade.
    BuyUpgrade { kind: UpgradeKind },
    /// Spend death currency on a permanent skill.
    PurchaseSkill { skill_id: String },
}
