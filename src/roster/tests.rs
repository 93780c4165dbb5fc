//! Unit tests for the roster builder

use super::*;
use crate::cli::types::{position::PositionTag, team::Team};

fn player(name: &str, team: Team, position: &str, salary: f64, score: f64) -> Player {
    Player::new(name, team, position.parse().unwrap(), salary, score)
}

fn blue(name: &str, position: &str, salary: f64, score: f64) -> Player {
    player(name, Team::Bluejays, position, salary, score)
}

fn dodger(name: &str, position: &str, salary: f64, score: f64) -> Player {
    player(name, Team::Dodgers, position, salary, score)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn lineup_names(roster: &RosterBuilder) -> Vec<&str> {
    roster.lineup().names().iter().map(String::as_str).collect()
}

#[cfg(test)]
mod placement_tests {
    use super::*;

    #[test]
    fn test_example_scenario() {
        let mut roster = RosterBuilder::new();

        let a = blue("A", "SS", 20.0, 5.0);
        let placement = roster.place_player(a, Slot::Shortstop).unwrap();
        assert_eq!(placement.evicted, None);
        assert_close(roster.totals().salary, 20.0);
        assert_close(roster.totals().score, 5.0);
        assert_eq!(lineup_names(&roster), vec!["A"]);

        let before = roster.snapshot();
        let b = blue("B", "P", 140.0, 3.0);
        match roster.place_player(b, Slot::Pitcher) {
            Err(SandboxError::SalaryCapExceeded { projected, cap }) => {
                assert_close(projected, 160.0);
                assert_close(cap, SALARY_CAP);
            }
            other => panic!("expected SalaryCapExceeded, got {other:?}"),
        }
        assert_eq!(roster.snapshot(), before);
    }

    #[test]
    fn test_position_mismatch_leaves_state_unchanged() {
        let mut roster = RosterBuilder::new();
        roster
            .place_player(blue("Catcher", "C", 10.0, 2.0), Slot::Catcher)
            .unwrap();
        let before = roster.snapshot();

        match roster.place_player(blue("Ace", "SP", 10.0, 4.0), Slot::DesignatedHitter) {
            Err(SandboxError::PositionMismatch { position, slot }) => {
                assert_eq!(position, "SP");
                assert_eq!(slot, Slot::DesignatedHitter);
            }
            other => panic!("expected PositionMismatch, got {other:?}"),
        }
        assert_eq!(roster.snapshot(), before);
    }

    #[test]
    fn test_position_checked_before_salary() {
        let mut roster = RosterBuilder::new();
        let result = roster.place_player(blue("Pricey", "C", 500.0, 1.0), Slot::Shortstop);
        assert!(matches!(
            result,
            Err(SandboxError::PositionMismatch { .. })
        ));
    }

    #[test]
    fn test_cap_is_inclusive() {
        let mut roster = RosterBuilder::new();
        roster
            .place_player(blue("A", "SS", 100.0, 1.0), Slot::Shortstop)
            .unwrap();
        roster
            .place_player(blue("B", "C", 50.0, 1.0), Slot::Catcher)
            .unwrap();
        assert_close(roster.totals().salary, 150.0);
        assert!(!roster.totals().over_budget);

        let result = roster.place_player(blue("C", "LF", 0.5, 1.0), Slot::LeftField);
        assert!(matches!(
            result,
            Err(SandboxError::SalaryCapExceeded { .. })
        ));
    }

    #[test]
    fn test_replacement_discounts_existing_salary() {
        let mut roster = RosterBuilder::new();
        roster
            .place_player(blue("Cheap", "C", 10.0, 1.0), Slot::Catcher)
            .unwrap();
        roster
            .place_player(blue("Star", "SS", 130.0, 9.0), Slot::Shortstop)
            .unwrap();

        // 140 - 130 + 135 = 145 fits under the cap only because Star leaves.
        let placement = roster
            .place_player(dodger("Bigger", "IF", 135.0, 10.0), Slot::Shortstop)
            .unwrap();
        let evicted = placement.evicted.expect("Star should be evicted");
        assert_eq!(evicted.name, "Star");
        assert_close(roster.totals().salary, 145.0);
        assert_eq!(roster.slot_of("Star"), None);
    }

    #[test]
    fn test_cap_never_exceeded_across_sequence() {
        let mut roster = RosterBuilder::new();
        let attempts = [
            (blue("P1", "SP", 40.0, 3.0), Slot::Pitcher),
            (blue("C1", "C", 30.0, 2.0), Slot::Catcher),
            (blue("F1", "1B", 35.0, 2.5), Slot::FirstBase),
            (blue("S1", "SS", 50.0, 4.0), Slot::Shortstop),
            (dodger("L1", "OF", 20.0, 1.5), Slot::LeftField),
            (dodger("D1", "DH", 44.0, 3.5), Slot::DesignatedHitter),
            (dodger("P2", "RP", 10.0, 1.0), Slot::Pitcher),
        ];

        for (p, slot) in attempts {
            let _ = roster.place_player(p, slot);
            assert!(roster.totals().salary <= SALARY_CAP);
            assert!(!roster.totals().over_budget);
        }
    }

    #[test]
    fn test_moving_fielded_player_does_not_duplicate() {
        let mut roster = RosterBuilder::new();
        let ohtani = dodger("Shohei Ohtani", "TWP", 70.0, 9.0);
        roster
            .place_player(ohtani.clone(), Slot::Pitcher)
            .unwrap();
        assert!(roster.lineup().is_empty());

        roster
            .place_player(dodger("Filler", "C", 79.0, 1.0), Slot::Catcher)
            .unwrap();

        // 149 - 70 + 70 = 149: the move must not count his salary twice.
        let placement = roster
            .place_player(ohtani, Slot::DesignatedHitter)
            .unwrap();
        assert_eq!(placement.moved_from, Some(Slot::Pitcher));
        assert_eq!(placement.evicted, None);
        assert!(roster.occupant(Slot::Pitcher).is_none());
        assert_eq!(roster.occupants().count(), 2);
        assert_eq!(lineup_names(&roster), vec!["Filler", "Shohei Ohtani"]);
    }

    #[test]
    fn test_replacing_self_is_not_eviction() {
        let mut roster = RosterBuilder::new();
        let a = blue("A", "SS", 20.0, 5.0);
        roster.place_player(a.clone(), Slot::Shortstop).unwrap();

        let placement = roster.place_player(a, Slot::Shortstop).unwrap();
        assert_eq!(placement.evicted, None);
        assert_eq!(placement.moved_from, None);
        assert_close(roster.totals().salary, 20.0);
    }

    #[test]
    fn test_eviction_reported_once() {
        let mut roster = RosterBuilder::new();
        roster
            .place_player(blue("Old", "LF", 5.0, 1.0), Slot::LeftField)
            .unwrap();

        let first = roster
            .place_player(blue("New", "OF", 5.0, 1.0), Slot::LeftField)
            .unwrap();
        assert_eq!(first.evicted.map(|p| p.name), Some("Old".to_string()));

        let second = roster
            .place_player(blue("Newer", "LF", 5.0, 1.0), Slot::LeftField)
            .unwrap();
        assert_eq!(second.evicted.map(|p| p.name), Some("New".to_string()));
        assert!(roster.occupants().all(|(_, p)| p.name == "Newer"));
    }
}

#[cfg(test)]
mod removal_tests {
    use super::*;

    #[test]
    fn test_remove_returns_occupant_and_is_idempotent() {
        let mut roster = RosterBuilder::new();
        roster
            .place_player(blue("A", "2B", 10.0, 2.0), Slot::SecondBase)
            .unwrap();

        let removed = roster.remove_player(Slot::SecondBase);
        assert_eq!(removed.map(|p| p.name), Some("A".to_string()));
        assert!(roster.is_empty());
        assert!(roster.lineup().is_empty());
        assert_eq!(roster.totals(), Totals::default());

        assert_eq!(roster.remove_player(Slot::SecondBase), None);
        assert_eq!(roster.remove_player(Slot::Pitcher), None);
    }

    #[test]
    fn test_clear_all_twice() {
        let mut roster = RosterBuilder::new();
        roster
            .place_player(blue("P", "P", 10.0, 1.0), Slot::Pitcher)
            .unwrap();
        roster
            .place_player(blue("A", "SS", 10.0, 1.0), Slot::Shortstop)
            .unwrap();
        roster
            .place_player(blue("B", "CF", 10.0, 1.0), Slot::CenterField)
            .unwrap();

        let evicted: Vec<String> = roster.clear_all().into_iter().map(|p| p.name).collect();
        assert_eq!(evicted, vec!["P", "A", "B"]);
        let first = roster.snapshot();

        assert!(roster.clear_all().is_empty());
        assert_eq!(roster.snapshot(), first);
        assert!(first.occupants.is_empty());
        assert!(first.lineup.is_empty());
        assert_close(first.total_score, 0.0);
        assert_close(first.total_salary, 0.0);
        assert!(!first.chemistry_active);
    }
}

#[cfg(test)]
mod lineup_tests {
    use super::*;

    fn fielded() -> RosterBuilder {
        let mut roster = RosterBuilder::new();
        roster
            .place_player(blue("Pitch", "SP", 10.0, 1.0), Slot::Pitcher)
            .unwrap();
        roster
            .place_player(blue("Short", "SS", 10.0, 1.0), Slot::Shortstop)
            .unwrap();
        roster
            .place_player(blue("Catch", "C", 10.0, 1.0), Slot::Catcher)
            .unwrap();
        roster
            .place_player(blue("Left", "LF", 10.0, 1.0), Slot::LeftField)
            .unwrap();
        roster
    }

    #[test]
    fn test_pitcher_excluded_and_arrival_order_kept() {
        let roster = fielded();
        assert_eq!(lineup_names(&roster), vec!["Short", "Catch", "Left"]);
    }

    #[test]
    fn test_readded_player_goes_to_end() {
        let mut roster = fielded();
        let short = roster.remove_player(Slot::Shortstop).unwrap();
        assert_eq!(lineup_names(&roster), vec!["Catch", "Left"]);

        roster.place_player(short, Slot::Shortstop).unwrap();
        assert_eq!(lineup_names(&roster), vec!["Catch", "Left", "Short"]);
    }

    #[test]
    fn test_manual_order_survives_unrelated_changes() {
        let mut roster = fielded();
        assert!(roster.move_in_lineup(0, Direction::Down));
        assert_eq!(lineup_names(&roster), vec!["Catch", "Short", "Left"]);

        roster
            .place_player(blue("Pitch2", "RP", 5.0, 1.0), Slot::Pitcher)
            .unwrap();
        roster
            .place_player(blue("Right", "RF", 5.0, 1.0), Slot::RightField)
            .unwrap();
        assert_eq!(
            lineup_names(&roster),
            vec!["Catch", "Short", "Left", "Right"]
        );
    }

    #[test]
    fn test_out_of_range_moves_are_ignored() {
        let mut roster = fielded();
        let before = lineup_names(&roster)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        assert!(!roster.move_in_lineup(0, Direction::Up));
        assert!(!roster.move_in_lineup(2, Direction::Down));
        assert!(!roster.move_in_lineup(10, Direction::Up));
        assert_eq!(roster.lineup().names(), before.as_slice());
    }

    #[test]
    fn test_snapshot_lineup_labels() {
        let mut roster = RosterBuilder::new();
        let a = blue("A", "SS", 20.0, 5.0).with_description(".300 AVG | 25 HR");
        roster.place_player(a, Slot::Shortstop).unwrap();

        let snapshot = roster.snapshot();
        assert_eq!(
            snapshot.lineup,
            vec![LineupEntry {
                order: 1,
                name: "A".to_string(),
                slot: Slot::Shortstop,
                headline: ".300 AVG".to_string(),
            }]
        );
    }
}

#[cfg(test)]
mod chemistry_tests {
    use super::*;

    fn infield(roster: &mut RosterBuilder, teams: &[Team]) {
        for (i, (slot, team)) in Slot::INFIELD.iter().zip(teams).enumerate() {
            let p = player(&format!("IF{i}"), *team, "IF", 10.0, 2.0);
            roster.place_player(p, *slot).unwrap();
        }
    }

    #[test]
    fn test_no_infielders() {
        let mut roster = RosterBuilder::new();
        roster
            .place_player(blue("C", "C", 10.0, 3.0), Slot::Catcher)
            .unwrap();
        assert!(!roster.totals().chemistry_active);
        assert_close(roster.totals().score, 3.0);
    }

    #[test]
    fn test_three_of_four_same_team() {
        let mut roster = RosterBuilder::new();
        infield(&mut roster, &[Team::Bluejays; 3]);
        assert!(!roster.totals().chemistry_active);
        assert_close(roster.totals().score, 6.0);
    }

    #[test]
    fn test_four_of_four_same_team() {
        let mut roster = RosterBuilder::new();
        infield(&mut roster, &[Team::Dodgers; 4]);
        roster
            .place_player(blue("C", "C", 10.0, 2.0), Slot::Catcher)
            .unwrap();
        assert!(roster.totals().chemistry_active);
        assert_close(roster.totals().score, 10.0 * CHEMISTRY_BONUS);
    }

    #[test]
    fn test_four_of_four_mixed_team() {
        let mut roster = RosterBuilder::new();
        infield(
            &mut roster,
            &[Team::Bluejays, Team::Bluejays, Team::Dodgers, Team::Bluejays],
        );
        assert!(!roster.totals().chemistry_active);
        assert_close(roster.totals().score, 8.0);
    }

    #[test]
    fn test_bonus_drops_when_infielder_removed() {
        let mut roster = RosterBuilder::new();
        infield(&mut roster, &[Team::Bluejays; 4]);
        assert!(roster.totals().chemistry_active);

        roster.remove_player(Slot::SecondBase);
        assert!(!roster.totals().chemistry_active);
        assert_close(roster.totals().score, 6.0);
    }

    #[test]
    fn test_two_way_player_counts_for_team() {
        let mut roster = RosterBuilder::new();
        infield(&mut roster, &[Team::Dodgers; 3]);
        let twp = Player::new("Two Way", Team::Dodgers, PositionTag::TwoWayPlayer, 10.0, 2.0);
        roster.place_player(twp, Slot::Shortstop).unwrap();
        assert!(roster.totals().chemistry_active);
    }
}

#[cfg(test)]
mod snapshot_tests {
    use super::*;

    #[test]
    fn test_salary_percent_is_capped() {
        let totals = Totals {
            score: 0.0,
            salary: 300.0,
            over_budget: true,
            chemistry_active: false,
        };
        assert_close(totals.salary_percent(), 100.0);

        let totals = Totals {
            salary: 75.0,
            ..totals
        };
        assert_close(totals.salary_percent(), 50.0);
    }

    #[test]
    fn test_eligible_slots_for_infielder() {
        assert_eq!(
            eligible_slots(&PositionTag::Infield),
            vec![
                Slot::FirstBase,
                Slot::SecondBase,
                Slot::ThirdBase,
                Slot::Shortstop,
                Slot::DesignatedHitter,
            ]
        );
    }

    #[test]
    fn test_snapshot_serializes_slot_keys() {
        let mut roster = RosterBuilder::new();
        roster
            .place_player(blue("A", "1B", 12.5, 4.0), Slot::FirstBase)
            .unwrap();

        let json = serde_json::to_value(roster.snapshot()).unwrap();
        assert_eq!(json["occupants"]["1B"]["name"], "A");
        assert_eq!(json["lineup"][0]["slot"], "1B");
        assert_eq!(json["salary_cap"], 150.0);
        assert_eq!(json["over_budget"], false);
    }
}
