//! Integration tests for CLI parsing and command handlers

use clap::Parser;
use fpl_league::{
    cli::{Commands, FplLeague, GetCmd},
    commands::{
        render::render_report,
        resolve_base_url, resolve_league_id,
        snapshot::handle_snapshot,
        views::{handle_report, handle_standings},
    },
    fpl::{types::LeagueInfo, LeagueSnapshot},
    league::LeagueReport,
    Gameweek, LeagueId,
};

fn empty_snapshot() -> LeagueSnapshot {
    LeagueSnapshot {
        league: LeagueInfo {
            id: LeagueId::new(42),
            name: "Quiet League".to_string(),
        },
        gameweek: Gameweek::new(3),
        players: Vec::new(),
        live: Vec::new(),
        managers: Vec::new(),
    }
}

#[test]
fn test_resolve_league_id_from_option() {
    let result = resolve_league_id(Some(LeagueId::new(12345)));
    assert_eq!(result.unwrap().as_u32(), 12345);
}

#[test]
fn test_base_url_flag_wins() {
    assert_eq!(
        resolve_base_url(Some("http://127.0.0.1:8080".to_string())),
        "http://127.0.0.1:8080"
    );
}

#[test]
fn test_parse_report_command() {
    let app = FplLeague::try_parse_from([
        "fpl-league", "get", "report", "-l", "314", "-g", "GW12", "--window", "8", "--json",
    ])
    .unwrap();

    let Commands::Get { cmd } = app.command;
    match cmd {
        GetCmd::Report {
            source,
            window,
            json,
        } => {
            assert_eq!(source.league_id, Some(LeagueId::new(314)));
            assert_eq!(source.gameweek, Some(Gameweek::new(12)));
            assert_eq!(window, 8);
            assert!(json);
        }
        other => panic!("Expected report command, got {:?}", other),
    }
}

#[test]
fn test_parse_defaults_and_global_verbose() {
    let app =
        FplLeague::try_parse_from(["fpl-league", "get", "rank-history", "--verbose"]).unwrap();
    assert!(app.verbose);

    let Commands::Get { cmd } = app.command;
    match cmd {
        GetCmd::RankHistory { source, window, json } => {
            assert_eq!(window, 5);
            assert!(!json);
            assert!(source.league_id.is_none());
            assert!(source.snapshot.is_none());
        }
        other => panic!("Expected rank-history command, got {:?}", other),
    }
}

#[test]
fn test_snapshot_flag_conflicts_with_league_id() {
    let result = FplLeague::try_parse_from([
        "fpl-league", "get", "standings", "--snapshot", "gw.json", "-l", "1",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_league_id_rejected() {
    let result = FplLeague::try_parse_from(["fpl-league", "get", "highlights", "-l", "abc"]);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_commands_run_offline_from_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("in.json");
    empty_snapshot().save(&source_path).unwrap();

    let app = FplLeague::try_parse_from([
        "fpl-league",
        "get",
        "snapshot",
        "--snapshot",
        source_path.to_str().unwrap(),
        "--output",
        dir.path().join("out/copy.json").to_str().unwrap(),
    ])
    .unwrap();

    let Commands::Get { cmd } = app.command;
    let GetCmd::Snapshot { source, output } = cmd else {
        panic!("Expected snapshot command");
    };
    let written = handle_snapshot(source.clone(), output).await.unwrap();
    assert_eq!(LeagueSnapshot::load(&written).unwrap(), empty_snapshot());

    handle_report(source.clone(), 5, true).await.unwrap();
    handle_standings(source, false).await.unwrap();
}

#[test]
fn test_render_report_for_empty_league() {
    let report = LeagueReport::build(&empty_snapshot(), 5);
    let text = render_report(&report);
    assert!(text.starts_with("Quiet League | GW3 | 0 managers"));
    assert!(text.contains("No transfers this gameweek"));
    assert!(text.contains("No players started this gameweek"));
    assert!(text.contains("No highlights"));
}
