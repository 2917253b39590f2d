//! Permanent skill tree catalog and accumulated bonuses.
//!
//! The catalog is static configuration: 18 nodes across four bonus axes
//! with rising cost and magnitude per tier. Only the `purchased` flag
//! mutates, and node ids are the stable persistence keys.

use serde::{Deserialize, Serialize};

use crate::constants::BASE_MAX_PETS;
use crate::enums::BonusKind;

/// One node of the permanent skill tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillNode {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in death currency.
    pub cost: u32,
    pub purchased: bool,
    pub bonus_kind: BonusKind,
    /// Fractional modifier for Damage/Speed, flat points for Health,
    /// whole slots for PetSlots.
    pub bonus_value: f64,
}

/// Accumulated sums of purchased skill bonuses, applied at run start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PermanentBonuses {
    pub damage: f64,
    pub health: f64,
    pub speed: f64,
    pub pet_slots: u32,
}

impl PermanentBonuses {
    /// Pet cap derived from the pet-slot bonus.
    pub fn max_pets(&self) -> u32 {
        BASE_MAX_PETS + self.pet_slots
    }
}

fn node(
    id: &str,
    name: &str,
    description: &str,
    cost: u32,
    bonus_kind: BonusKind,
    bonus_value: f64,
) -> SkillNode {
    SkillNode {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        cost,
        purchased: false,
        bonus_kind,
        bonus_value,
    }
}

/// The pristine 18-node catalog with nothing purchased.
pub fn initial_skill_tree() -> Vec<SkillNode> {
    vec![
        node("dmg1", "Power I", "+20% Damage", 5, BonusKind::Damage, 0.2),
        node("dmg2", "Power II", "+30% Damage", 10, BonusKind::Damage, 0.3),
        node("dmg3", "Power III", "+50% Damage", 20, BonusKind::Damage, 0.5),
        node("dmg4", "Power IV", "+75% Damage", 40, BonusKind::Damage, 0.75),
        node("dmg5", "Power V", "+100% Damage", 75, BonusKind::Damage, 1.0),
        node("hp1", "Vitality I", "+50 Max Health", 5, BonusKind::Health, 50.0),
        node("hp2", "Vitality II", "+100 Max Health", 10, BonusKind::Health, 100.0),
        node("hp3", "Vitality III", "+200 Max Health", 20, BonusKind::Health, 200.0),
        node("hp4", "Vitality IV", "+350 Max Health", 40, BonusKind::Health, 350.0),
        node("hp5", "Vitality V", "+500 Max Health", 75, BonusKind::Health, 500.0),
        node("spd1", "Swiftness I", "+20% Speed", 5, BonusKind::Speed, 0.2),
        node("spd2", "Swiftness II", "+30% Speed", 10, BonusKind::Speed, 0.3),
        node("spd3", "Swiftness III", "+50% Speed", 20, BonusKind::Speed, 0.5),
        node("spd4", "Swiftness IV", "+75% Speed", 40, BonusKind::Speed, 0.75),
        node("pet1", "Pet Mastery I", "+1 Pet Slot", 15, BonusKind::PetSlots, 1.0),
        node("pet2", "Pet Mastery II", "+2 Pet Slots", 30, BonusKind::PetSlots, 2.0),
        node("pet3", "Pet Mastery III", "+3 Pet Slots", 60, BonusKind::PetSlots, 3.0),
        node("pet4", "Pet Mastery IV", "+5 Pet Slots", 100, BonusKind::PetSlots, 5.0),
    ]
}
