//! Report commands: each loads a snapshot, computes its view off the async
//! runtime and prints it.

use serde::Serialize;

use crate::{
    cli::SourceArgs,
    league::{
        aggregate, build_rank_history, league_highlights, select_team_of_the_week, LeagueReport,
    },
    Result,
};

use super::{
    common::{compute_blocking, load_snapshot},
    render,
};

fn emit<T: Serialize>(as_json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
    } else {
        println!("{}", text()); // tarpaulin::skip
    }
    Ok(())
}

pub async fn handle_report(source: SourceArgs, window: usize, as_json: bool) -> Result<()> {
    let snapshot = load_snapshot(&source).await?;
    let report = compute_blocking(snapshot, move |s| LeagueReport::build(s, window)).await?;
    emit(as_json, &report, || render::render_report(&report))
}

pub async fn handle_standings(source: SourceArgs, as_json: bool) -> Result<()> {
    let snapshot = load_snapshot(&source).await?;
    let agg = compute_blocking(snapshot, aggregate).await?;
    emit(as_json, &agg.managers, || {
        format!(
            "{} | {}\n{}",
            agg.league.name,
            agg.gameweek.label(),
            render::render_standings(&agg.managers)
        )
    })
}

pub async fn handle_team_of_the_week(source: SourceArgs, as_json: bool) -> Result<()> {
    let snapshot = load_snapshot(&source).await?;
    let (team, league_size) = compute_blocking(snapshot, |s| {
        let agg = aggregate(s);
        (select_team_of_the_week(&agg.pool), agg.league_size())
    })
    .await?;
    emit(as_json, &team, || render::render_team_of_the_week(&team, league_size))
}

pub async fn handle_transfers(source: SourceArgs, as_json: bool) -> Result<()> {
    let snapshot = load_snapshot(&source).await?;
    let transfers = compute_blocking(snapshot, |s| aggregate(s).transfers).await?;
    emit(as_json, &transfers, || render::render_transfers(&transfers))
}

pub async fn handle_rank_history(source: SourceArgs, window: usize, as_json: bool) -> Result<()> {
    let snapshot = load_snapshot(&source).await?;
    let series = snapshot.history_series();
    let rows = build_rank_history(&series, window);
    emit(as_json, &rows, || {
        let teams: Vec<&str> = series.iter().map(|(team, _)| *team).collect();
        render::render_rank_history(&rows, &teams)
    })
}

pub async fn handle_highlights(source: SourceArgs, as_json: bool) -> Result<()> {
    let snapshot = load_snapshot(&source).await?;
    let highlights = compute_blocking(snapshot, |s| {
        let agg = aggregate(s);
        league_highlights(&agg.managers, &agg.transfers)
    })
    .await?;
    emit(as_json, &highlights, || render::render_highlights(&highlights))
}
