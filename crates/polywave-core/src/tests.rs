#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::skills::{initial_skill_tree, PermanentBonuses};
    use crate::state::{GameStateSnapshot, UpgradeCosts};
    use crate::types::{Position, SimTime, Velocity};

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Menu,
            GamePhase::Playing,
            GamePhase::Dead,
            GamePhase::SkillTree,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![
            EnemyKind::Circle,
            EnemyKind::Triangle,
            EnemyKind::Square,
            EnemyKind::Pentagon,
            EnemyKind::Hexagon,
            EnemyKind::Boss,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartGame,
            PlayerCommand::Respawn,
            PlayerCommand::OpenSkillTree,
            PlayerCommand::ReturnToMenu,
            PlayerCommand::SetMoveTarget { x: 3.0, z: -4.5 },
            PlayerCommand::ToggleAutoAttack,
            PlayerCommand::SetPlayerColor {
                color: "#ff00ff".to_string(),
            },
            PlayerCommand::BuyUpgrade {
                kind: UpgradeKind::Shield,
            },
            PlayerCommand::PurchaseSkill {
                skill_id: "dmg1".to_string(),
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::WaveStarted { wave: 7 },
            GameEvent::EnemyKilled {
                id: 3,
                kind: EnemyKind::Boss,
                reward: 100,
            },
            GameEvent::PlayerDied {
                wave: 10,
                currency_awarded: 5,
            },
            GameEvent::SkillPurchased {
                skill_id: "pet2".to_string(),
                cost: 30,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_from_origin() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_position_direction_is_unit() {
        let a = Position::new(1.0, 1.0);
        let b = Position::new(4.0, 5.0);
        let dir = a.direction_to(&b);
        assert!((dir.speed() - 1.0).abs() < 1e-10);
        assert!((dir.x - 0.6).abs() < 1e-10);
        assert!((dir.z - 0.8).abs() < 1e-10);
    }

    #[test]
    fn test_position_direction_coincident_is_zero() {
        let a = Position::new(2.0, -3.0);
        let dir = a.direction_to(&a);
        assert_eq!(dir, Velocity::default());
    }

    /// Verify SimTime advancement with variable deltas.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);

        time.advance(1.0 / 60.0);
        time.advance(1.0 / 30.0);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 0.05).abs() < 1e-10);
    }

    #[test]
    fn test_upgrade_costs_default() {
        let costs = UpgradeCosts::default();
        assert_eq!(costs.damage, 50);
        assert_eq!(costs.speed, 50);
        assert_eq!(costs.health, 50);
        assert_eq!(costs.pet, 100);
        assert_eq!(costs.projectiles, 150);
        assert_eq!(costs.shield, 200);
    }

    #[test]
    fn test_skill_catalog_shape() {
        let tree = initial_skill_tree();
        assert_eq!(tree.len(), 18);
        assert!(tree.iter().all(|n| !n.purchased));

        // Ids are unique.
        let mut ids: Vec<&str> = tree.iter().map(|n| n.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 18);
    }

    /// Cost and bonus magnitude rise monotonically within each branch.
    #[test]
    fn test_skill_catalog_monotonic_tiers() {
        let tree = initial_skill_tree();
        for kind in [
            BonusKind::Damage,
            BonusKind::Health,
            BonusKind::Speed,
            BonusKind::PetSlots,
        ] {
            let branch: Vec<_> = tree.iter().filter(|n| n.bonus_kind == kind).collect();
            assert!(branch.len() >= 4);
            for pair in branch.windows(2) {
                assert!(pair[0].cost < pair[1].cost);
                assert!(pair[0].bonus_value < pair[1].bonus_value);
            }
        }
    }

    #[test]
    fn test_permanent_bonuses_pet_cap() {
        let mut bonuses = PermanentBonuses::default();
        assert_eq!(bonuses.max_pets(), 1);
        bonuses.pet_slots = 5;
        assert_eq!(bonuses.max_pets(), 6);
    }
}
