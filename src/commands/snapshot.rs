//! `get snapshot`: freeze a gameweek to disk for offline reports.

use std::path::PathBuf;

use crate::{cli::SourceArgs, core::snapshot_path, Result};

use super::common::load_snapshot;

/// Fetch (or re-read) a snapshot and write it to `output`, or to the cache
/// directory when no path is given. Returns the path written.
pub async fn handle_snapshot(source: SourceArgs, output: Option<PathBuf>) -> Result<PathBuf> {
    let snapshot = load_snapshot(&source).await?;
    let path = output.unwrap_or_else(|| {
        snapshot_path(snapshot.league.id.as_u32(), snapshot.gameweek.as_u16())
    });

    snapshot.save(&path)?;

    println!("✓ Snapshot saved to {}", path.display());
    println!(
        "  {} | {} | {} managers, {} players",
        snapshot.league.name,
        snapshot.gameweek.label(),
        snapshot.managers.len(),
        snapshot.players.len()
    );

    Ok(path)
}
