//! Snapshot acquisition and off-runtime computation shared by every command.

use tracing::info;

use crate::{
    cli::SourceArgs,
    fpl::{fetch_snapshot, FplClient, LeagueSnapshot},
    Result,
};

use super::{resolve_base_url, resolve_league_id};

/// Read the snapshot named by `--snapshot`, or fetch a fresh one.
pub async fn load_snapshot(source: &SourceArgs) -> Result<LeagueSnapshot> {
    if let Some(path) = &source.snapshot {
        let snapshot = LeagueSnapshot::load(path)?;
        info!(
            path = %path.display(),
            league = %snapshot.league.name,
            gameweek = %snapshot.gameweek,
            "loaded snapshot"
        );
        return Ok(snapshot);
    }

    let league_id = resolve_league_id(source.league_id)?;
    let client = FplClient::new(resolve_base_url(source.base_url.clone()))?;
    // tarpaulin::skip - HTTP call, tested via wiremock in fpl::snapshot
    fetch_snapshot(&client, league_id, source.gameweek).await
}

/// Run `compute` over `snapshot` on the blocking pool.
///
/// Aggregation fans out on rayon, which must not occupy a tokio worker.
pub async fn compute_blocking<T, F>(snapshot: LeagueSnapshot, compute: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&LeagueSnapshot) -> T + Send + 'static,
{
    let output = tokio::task::spawn_blocking(move || compute(&snapshot)).await?;
    Ok(output)
}
