//! Durable record store for meta-progression.
//!
//! The backing store is addressed by an opaque session key and exposes
//! get/create/update over a single progress record. The skill list and
//! bonus record travel as JSON-encoded strings inside the record, so the
//! store itself never needs to understand them.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One persisted progress record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub session_id: String,
    pub death_currency: u32,
    /// JSON-encoded `Vec<SkillNode>`.
    pub skill_tree: String,
    /// JSON-encoded `PermanentBonuses`.
    pub permanent_bonuses: String,
    #[serde(default)]
    pub total_waves_reached: u32,
    #[serde(default)]
    pub total_enemies_killed: u32,
    #[serde(default)]
    pub total_deaths: u32,
    #[serde(default)]
    pub player_color: String,
}

/// Key-value record store keyed by session id.
pub trait ProgressStore {
    fn get(&self, session_id: &str) -> Result<Option<ProgressRecord>, String>;
    fn create(&mut self, record: ProgressRecord) -> Result<(), String>;
    fn update(&mut self, session_id: &str, record: &ProgressRecord) -> Result<(), String>;
}

/// File-backed store: one `<session_id>.json` per record.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn record_path(&self, session_id: &str) -> PathBuf {
        self.dir.join(format!("{session_id}.json"))
    }

    fn write_record(&self, path: &Path, record: &ProgressRecord) -> Result<(), String> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| format!("Failed to create progress directory: {e}"))?;
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| format!("Failed to serialize progress record: {e}"))?;
        fs::write(path, json).map_err(|e| format!("Failed to write progress record: {e}"))?;
        Ok(())
    }
}

impl ProgressStore for JsonFileStore {
    fn get(&self, session_id: &str) -> Result<Option<ProgressRecord>, String> {
        let path = self.record_path(session_id);
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read progress record: {e}"))?;
        let record: ProgressRecord = serde_json::from_str(&json)
            .map_err(|e| format!("Failed to parse progress record: {e}"))?;
        Ok(Some(record))
    }

    fn create(&mut self, record: ProgressRecord) -> Result<(), String> {
        let path = self.record_path(&record.session_id);
        self.write_record(&path, &record)
    }

    fn update(&mut self, session_id: &str, record: &ProgressRecord) -> Result<(), String> {
        let path = self.record_path(session_id);
        self.write_record(&path, record)
    }
}

/// In-memory store for tests and store-less engines.
#[derive(Default)]
pub struct MemoryStore {
    records: HashMap<String, ProgressRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, session_id: &str) -> Result<Option<ProgressRecord>, String> {
        Ok(self.records.get(session_id).cloned())
    }

    fn create(&mut self, record: ProgressRecord) -> Result<(), String> {
        self.records.insert(record.session_id.clone(), record);
        Ok(())
    }

    fn update(&mut self, session_id: &str, record: &ProgressRecord) -> Result<(), String> {
        self.records.insert(session_id.to_string(), record.clone());
        Ok(())
    }
}
