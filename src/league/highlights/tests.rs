//! Unit tests for league highlights

use super::*;
use crate::cli::types::{ManagerId, PlayerId};
use crate::league::models::{LineupStats, NO_CHIP};

fn manager(id: u32, total: i32, gameweek: i32, bench: i32) -> EnrichedManager {
    EnrichedManager {
        entry: ManagerEntry {
            id: ManagerId::new(id),
            team_name: format!("Team {}", id),
            manager_name: format!("Manager {}", id),
            rank: id,
            total_points: total,
            gameweek_points: gameweek,
        },
        active_chip: NO_CHIP.to_string(),
        lineup: LineupStats::default(),
        did_not_play: 0,
        bench_points: bench,
        best_value: None,
        worst_value: None,
        recent_history: Vec::new(),
    }
}

fn impact(manager: u32, diff: i32) -> TransferImpact {
    TransferImpact {
        manager_id: ManagerId::new(manager),
        manager_name: format!("Manager {}", manager),
        team_name: format!("Team {}", manager),
        player_in_id: PlayerId::new(1),
        player_out_id: PlayerId::new(2),
        player_in: None,
        player_out: None,
        points_in: diff.max(0),
        points_out: (-diff).max(0),
        diff,
    }
}

#[test]
fn test_each_award_goes_to_the_right_manager() {
    let managers = vec![
        manager(1, 600, 45, 3),
        manager(2, 580, 71, 12),
        manager(3, 550, 22, 1),
    ];
    let transfers = vec![impact(3, 8), impact(1, -4)];

    let h = league_highlights(&managers, &transfers);

    let motw = h.manager_of_the_week.as_ref().map(|x| (x.manager_name.as_str(), x.impact));
    assert_eq!(motw, Some(("Manager 2", 71)));
    assert_eq!(h.leader.as_ref().map(|x| x.impact), Some(600));
    assert_eq!(h.best_bench.as_ref().map(|x| x.team_name.as_str()), Some("Team 2"));
    let best = h.best_transfer.as_ref().map(|x| (x.manager_name.as_str(), x.impact));
    assert_eq!(best, Some(("Manager 3", 8)));
    let spoon = h.wooden_spoon.as_ref().map(|x| (x.manager_name.as_str(), x.impact));
    assert_eq!(spoon, Some(("Manager 3", 22)));
    assert_eq!(h.iter().count(), 5);
}

#[test]
fn test_ties_go_to_first_in_standings() {
    let managers = vec![
        manager(1, 500, 50, 5),
        manager(2, 500, 50, 5),
        manager(3, 490, 50, 5),
    ];
    let transfers = vec![impact(2, 6), impact(3, 6)];

    let h = league_highlights(&managers, &transfers);
    assert_eq!(h.manager_of_the_week.map(|x| x.manager_name), Some("Manager 1".to_string()));
    assert_eq!(h.leader.map(|x| x.manager_name), Some("Manager 1".to_string()));
    assert_eq!(h.best_bench.map(|x| x.manager_name), Some("Manager 1".to_string()));
    assert_eq!(h.wooden_spoon.map(|x| x.manager_name), Some("Manager 1".to_string()));
    assert_eq!(h.best_transfer.map(|x| x.manager_name), Some("Manager 2".to_string()));
}

#[test]
fn test_no_transfers_means_no_best_transfer() {
    let managers = vec![manager(1, 100, 10, 0)];
    let h = league_highlights(&managers, &[]);
    assert!(h.best_transfer.is_none());
    assert!(h.manager_of_the_week.is_some());
    assert_eq!(h.iter().count(), 4);
}

#[test]
fn test_empty_league_has_no_highlights() {
    let h = league_highlights(&[], &[]);
    assert_eq!(h, LeagueHighlights::default());
    assert_eq!(h.iter().count(), 0);
}

#[test]
fn test_negative_points_are_handled() {
    let managers = vec![manager(1, 10, -4, -1), manager(2, 8, -8, -2)];
    let h = league_highlights(&managers, &[impact(1, -9)]);
    assert_eq!(h.manager_of_the_week.map(|x| x.impact), Some(-4));
    assert_eq!(h.wooden_spoon.map(|x| x.impact), Some(-8));
    assert_eq!(h.best_bench.map(|x| x.impact), Some(-1));
    assert_eq!(h.best_transfer.map(|x| x.impact), Some(-9));
}
