#[cfg(test)]
mod tests {
    use std::fs;

    use crate::bridge::{MetaProgress, ProgressBridge, RunOutcome};
    use crate::store::{JsonFileStore, MemoryStore, ProgressRecord, ProgressStore};

    fn bridge_with_memory() -> ProgressBridge {
        ProgressBridge::new(Box::new(MemoryStore::new()), "session-1")
    }

    // ---- MetaProgress ----

    #[test]
    fn test_purchase_marks_exactly_one_skill() {
        let mut meta = MetaProgress::default();
        meta.death_currency = 10;

        let cost = meta.purchase("dmg1").unwrap();
        assert_eq!(cost, 5);
        assert_eq!(meta.death_currency, 5);

        let purchased: Vec<&str> = meta
            .skill_tree
            .iter()
            .filter(|n| n.purchased)
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(purchased, vec!["dmg1"]);
        assert!((meta.bonuses.damage - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_purchase_rejects_unknown_and_unaffordable() {
        let mut meta = MetaProgress::default();
        meta.death_currency = 3;

        assert!(meta.purchase("nope").is_none());
        assert!(meta.purchase("dmg1").is_none(), "costs 5, have 3");
        assert_eq!(meta.death_currency, 3);
        assert!(meta.skill_tree.iter().all(|n| !n.purchased));
    }

    #[test]
    fn test_purchase_is_idempotent() {
        let mut meta = MetaProgress::default();
        meta.death_currency = 100;

        meta.purchase("pet1").unwrap();
        assert!(meta.purchase("pet1").is_none());
        assert_eq!(meta.death_currency, 85);
        assert_eq!(meta.bonuses.pet_slots, 1);
        assert_eq!(meta.bonuses.max_pets(), 2);
    }

    // ---- Bridge round trips ----

    #[test]
    fn test_save_load_round_trip() {
        let mut bridge = bridge_with_memory();
        let mut meta = MetaProgress::default();
        meta.death_currency = 50;
        meta.purchase("hp1").unwrap();

        bridge.save(&meta);
        let loaded = bridge.load();

        assert_eq!(loaded.death_currency, 45);
        assert!((loaded.bonuses.health - 50.0).abs() < 1e-10);
        let purchased: Vec<&str> = loaded
            .skill_tree
            .iter()
            .filter(|n| n.purchased)
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(purchased, vec!["hp1"]);
    }

    /// Re-loading must not double-apply bonuses: they are stored, not
    /// recomputed from the purchased flags.
    #[test]
    fn test_reload_does_not_double_apply() {
        let mut bridge = bridge_with_memory();
        let mut meta = MetaProgress::default();
        meta.death_currency = 20;
        meta.purchase("spd1").unwrap();
        bridge.save(&meta);

        let once = bridge.load();
        bridge.save(&once);
        let twice = bridge.load();

        assert!((twice.bonuses.speed - 0.2).abs() < 1e-10);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_load_absent_session_yields_defaults() {
        let bridge = bridge_with_memory();
        let meta = bridge.load();
        assert_eq!(meta.death_currency, 0);
        assert_eq!(meta.skill_tree.len(), 18);
        assert!(meta.skill_tree.iter().all(|n| !n.purchased));
        assert_eq!(meta.bonuses, Default::default());
    }

    #[test]
    fn test_load_malformed_record_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store
            .create(ProgressRecord {
                session_id: "session-1".to_string(),
                death_currency: 99,
                skill_tree: "not json".to_string(),
                permanent_bonuses: "{}".to_string(),
                total_waves_reached: 0,
                total_enemies_killed: 0,
                total_deaths: 0,
                player_color: String::new(),
            })
            .unwrap();

        let bridge = ProgressBridge::new(Box::new(store), "session-1");
        let meta = bridge.load();
        assert_eq!(meta.death_currency, 0, "malformed record must not leak");
        assert!(meta.skill_tree.iter().all(|n| !n.purchased));
    }

    #[test]
    fn test_death_saves_accumulate_lifetime_totals() {
        let meta = MetaProgress::default();
        let mut bridge = bridge_with_memory();
        bridge.save_on_death(
            &meta,
            RunOutcome {
                wave_reached: 7,
                enemies_killed: 40,
            },
            "#123456",
        );
        bridge.save_on_death(
            &meta,
            RunOutcome {
                wave_reached: 4,
                enemies_killed: 10,
            },
            "#123456",
        );

        let record = bridge.record().expect("record should exist after save");
        assert_eq!(record.total_deaths, 2);
        assert_eq!(record.total_enemies_killed, 50);
        assert_eq!(record.total_waves_reached, 7, "highest wave wins");
        assert_eq!(record.player_color, "#123456");
    }

    // ---- File store ----

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!(
            "polywave_test_file_store_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);

        let mut store = JsonFileStore::new(&dir);
        assert!(store.get("s1").unwrap().is_none());

        let record = ProgressRecord {
            session_id: "s1".to_string(),
            death_currency: 12,
            skill_tree: "[]".to_string(),
            permanent_bonuses: "{}".to_string(),
            total_waves_reached: 3,
            total_enemies_killed: 9,
            total_deaths: 1,
            player_color: "#00ff88".to_string(),
        };
        store.create(record.clone()).unwrap();

        let loaded = store.get("s1").unwrap().unwrap();
        assert_eq!(loaded.death_currency, 12);
        assert_eq!(loaded.total_waves_reached, 3);

        let mut updated = record;
        updated.death_currency = 20;
        store.update("s1", &updated).unwrap();
        assert_eq!(store.get("s1").unwrap().unwrap().death_currency, 20);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_rejects_garbage_payload() {
        let dir = std::env::temp_dir().join(format!(
            "polywave_test_file_store_garbage_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("bad.json"), "{ not json").unwrap();

        let store = JsonFileStore::new(&dir);
        assert!(store.get("bad").is_err());

        // The bridge absorbs that error into defaults.
        let bridge = ProgressBridge::new(Box::new(JsonFileStore::new(&dir)), "bad");
        let meta = bridge.load();
        assert_eq!(meta.death_currency, 0);

        let _ = fs::remove_dir_all(&dir);
    }
}
