//! Tests for upstream payload types and their conversion into league models

use fpl_league::{
    fpl::{
        snapshot::{
            history_from_response, live_from_response, pick_from_response,
            players_from_bootstrap, transfers_from_rows,
        },
        types::*,
    },
    league::models::ManagerEntry,
    Cost, Gameweek, ManagerId, PlayerId, Position,
};
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn test_bootstrap_to_players() {
        let bootstrap: BootstrapStatic = serde_json::from_value(json!({
            "events": [{"id": 1, "is_current": false, "finished": true},
                       {"id": 2, "is_current": true}],
            "elements": [
                {"id": 7, "web_name": "Saka", "now_cost": 101, "code": 223340, "element_type": 3, "team": 1},
                {"id": 8, "web_name": "Arteta", "now_cost": 15, "element_type": 5}
            ],
            "teams": [{"id": 1, "name": "Arsenal", "short_name": "ARS"}],
            "total_players": 11000000
        }))
        .unwrap();

        assert_eq!(bootstrap.active_gameweek(), Gameweek::new(2));

        let players = players_from_bootstrap(&bootstrap);
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].id, PlayerId::new(7));
        assert_eq!(players[0].cost, Cost::from_tenths(101));
        assert_eq!(players[0].photo, 223340);
        assert_eq!(players[0].position, Position::Midfielder);
    }

    #[test]
    fn test_live_stats_with_mixed_decimal_encodings() {
        let live: LiveResponse = serde_json::from_value(json!({
            "elements": [
                {"id": 1, "stats": {"minutes": 90, "total_points": 12, "expected_goals": "0.75", "expected_assists": 0.5}},
                {"id": 2, "stats": {"minutes": 0, "expected_goals": null}},
                {"id": 3}
            ]
        }))
        .unwrap();

        let stats = live_from_response(live);
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].expected_goals, 0.75);
        assert_eq!(stats[0].expected_assists, 0.5);
        assert_eq!(stats[1].total_points, 0);
        assert_eq!(stats[1].expected_goals, 0.0);
        assert_eq!(stats[2].minutes, 0);
    }

    #[test]
    fn test_standings_row_to_manager_entry() {
        let page: StandingsResponse = serde_json::from_value(json!({
            "league": {"id": 314, "name": "Overall"},
            "standings": {
                "has_next": true,
                "page": 1,
                "results": [{"entry": 9, "entry_name": "Nine FC", "player_name": "Nia",
                             "rank": 4, "total": 812, "event_total": 61, "last_rank": 6}]
            }
        }))
        .unwrap();
        assert!(page.standings.has_next);

        let entry = ManagerEntry::from(page.standings.results[0].clone());
        assert_eq!(entry.id, ManagerId::new(9));
        assert_eq!(entry.team_name, "Nine FC");
        assert_eq!(entry.manager_name, "Nia");
        assert_eq!(entry.total_points, 812);
        assert_eq!(entry.gameweek_points, 61);
    }

    #[test]
    fn test_picks_keep_squad_order() {
        let picks: PicksResponse = serde_json::from_value(json!({
            "active_chip": null,
            "picks": (1..=15).rev().map(|id| json!({"element": id, "position": 16 - id})).collect::<Vec<_>>()
        }))
        .unwrap();

        let pick = pick_from_response(picks);
        assert_eq!(pick.starting().len(), 11);
        assert_eq!(pick.bench().len(), 4);
        assert_eq!(pick.starting()[0], PlayerId::new(15));
        assert_eq!(pick.bench()[3], PlayerId::new(1));
    }

    #[test]
    fn test_history_payload_shapes() {
        let full: HistoryPayload = serde_json::from_value(json!({
            "current": [{"event": 1, "points": 50, "total_points": 50, "rank": 1200}],
            "chips": [{"name": "wildcard", "event": 1}],
            "past": []
        }))
        .unwrap();
        let (history, chips) = history_from_response(ManagerId::new(3), full.into_history());
        assert_eq!(history[0].rank, Some(1200));
        assert_eq!(chips[0].name, "wildcard");

        let bare: HistoryPayload =
            serde_json::from_value(json!([{"event": 1, "total_points": 50}])).unwrap();
        let (history, chips) = history_from_response(ManagerId::new(3), bare.into_history());
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].manager, ManagerId::new(3));
        assert!(chips.is_empty());
    }

    #[test]
    fn test_transfer_rows() {
        let rows: Vec<TransferRow> = serde_json::from_value(json!([
            {"element_in": 5, "element_out": 6, "entry": 3, "event": 10,
             "element_in_cost": 55, "element_out_cost": 60, "time": "2024-10-18T10:00:00Z"}
        ]))
        .unwrap();

        let transfers = transfers_from_rows(ManagerId::new(3), rows);
        assert_eq!(transfers[0].player_in, PlayerId::new(5));
        assert_eq!(transfers[0].player_out, PlayerId::new(6));
        assert_eq!(transfers[0].gameweek, Gameweek::new(10));
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let result: Result<StandingsResponse, _> =
            serde_json::from_value(json!({"standings": {"results": []}}));
        assert!(result.is_err());
    }
}
