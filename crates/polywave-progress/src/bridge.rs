//! Bridge between the simulation and the durable progress store.
//!
//! Loading falls back to pristine defaults on any store error or
//! malformed payload; saving is fire-and-forget. Failures are logged and
//! absorbed — they never surface to the player or abort a run.

use log::warn;

use polywave_core::enums::BonusKind;
use polywave_core::skills::{initial_skill_tree, PermanentBonuses, SkillNode};

use crate::store::{ProgressRecord, ProgressStore};

/// The meta-progression subset that outlives a run.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaProgress {
    pub death_currency: u32,
    pub skill_tree: Vec<SkillNode>,
    pub bonuses: PermanentBonuses,
}

impl Default for MetaProgress {
    fn default() -> Self {
        Self {
            death_currency: 0,
            skill_tree: initial_skill_tree(),
            bonuses: PermanentBonuses::default(),
        }
    }
}

impl MetaProgress {
    /// Purchase a skill by id. Returns the cost on success; `None` (and no
    /// partial mutation) if the skill is unknown, already purchased, or
    /// unaffordable.
    pub fn purchase(&mut self, skill_id: &str) -> Option<u32> {
        let node = self.skill_tree.iter_mut().find(|n| n.id == skill_id)?;
        if node.purchased || self.death_currency < node.cost {
            return None;
        }
        node.purchased = true;
        let cost = node.cost;
        match node.bonus_kind {
            BonusKind::Damage => self.bonuses.damage += node.bonus_value,
            BonusKind::Health => self.bonuses.health += node.bonus_value,
            BonusKind::Speed => self.bonuses.speed += node.bonus_value,
            BonusKind::PetSlots => self.bonuses.pet_slots += node.bonus_value as u32,
        }
        self.death_currency -= cost;
        Some(cost)
    }
}

/// Lifetime statistics folded into the record on death saves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOutcome {
    pub wave_reached: u32,
    pub enemies_killed: u32,
}

/// Owns the store handle and the session key.
pub struct ProgressBridge {
    store: Box<dyn ProgressStore>,
    session_id: String,
}

impl ProgressBridge {
    pub fn new(store: Box<dyn ProgressStore>, session_id: impl Into<String>) -> Self {
        Self {
            store,
            session_id: session_id.into(),
        }
    }

    /// Fetch the raw stored record, if any. Lifetime totals live only
    /// here; `load` extracts just the meta-progression subset.
    pub fn record(&self) -> Option<ProgressRecord> {
        self.store.get(&self.session_id).ok().flatten()
    }

    /// Load meta-progression, falling back to defaults on any failure.
    /// Bonuses are stored explicitly, so re-loading never double-applies.
    pub fn load(&self) -> MetaProgress {
        let record = match self.store.get(&self.session_id) {
            Ok(Some(record)) => record,
            Ok(None) => return MetaProgress::default(),
            Err(e) => {
                warn!("progress load failed, using defaults: {e}");
                return MetaProgress::default();
            }
        };

        let skill_tree = serde_json::from_str::<Vec<SkillNode>>(&record.skill_tree);
        let bonuses = serde_json::from_str::<PermanentBonuses>(&record.permanent_bonuses);
        match (skill_tree, bonuses) {
            (Ok(skill_tree), Ok(bonuses)) => MetaProgress {
                death_currency: record.death_currency,
                skill_tree,
                bonuses,
            },
            (tree, bonus) => {
                let e = tree.err().or(bonus.err());
                warn!("malformed progress record, using defaults: {e:?}");
                MetaProgress::default()
            }
        }
    }

    /// Persist meta-progression (skill purchase path). Failures are absorbed.
    pub fn save(&mut self, meta: &MetaProgress) {
        self.save_with(meta, None, None);
    }

    /// Persist meta-progression on death, folding the run's outcome and the
    /// cosmetic color into the lifetime totals. Failures are absorbed.
    pub fn save_on_death(&mut self, meta: &MetaProgress, outcome: RunOutcome, color: &str) {
        self.save_with(meta, Some(outcome), Some(color));
    }

    fn save_with(&mut self, meta: &MetaProgress, outcome: Option<RunOutcome>, color: Option<&str>) {
        let skill_tree = match serde_json::to_string(&meta.skill_tree) {
            Ok(json) => json,
            Err(e) => {
                warn!("progress save skipped, skill tree unserializable: {e}");
                return;
            }
        };
        let permanent_bonuses = match serde_json::to_string(&meta.bonuses) {
            Ok(json) => json,
            Err(e) => {
                warn!("progress save skipped, bonuses unserializable: {e}");
                return;
            }
        };

        let existing = self.store.get(&self.session_id).unwrap_or_else(|e| {
            warn!("progress read-before-save failed: {e}");
            None
        });
        let is_new = existing.is_none();

        let mut record = existing.unwrap_or_else(|| ProgressRecord {
            session_id: self.session_id.clone(),
            death_currency: 0,
            skill_tree: String::new(),
            permanent_bonuses: String::new(),
            total_waves_reached: 0,
            total_enemies_killed: 0,
            total_deaths: 0,
            player_color: String::new(),
        });

        record.death_currency = meta.death_currency;
        record.skill_tree = skill_tree;
        record.permanent_bonuses = permanent_bonuses;
        if let Some(outcome) = outcome {
            record.total_deaths += 1;
            record.total_enemies_killed += outcome.enemies_killed;
            record.total_waves_reached = record.total_waves_reached.max(outcome.wave_reached);
        }
        if let Some(color) = color {
            record.player_color = color.to_string();
        }

        let result = if is_new {
            self.store.create(record)
        } else {
            self.store.update(&self.session_id, &record)
        };
        if let Err(e) = result {
            warn!("progress save failed: {e}");
        }
    }
}
