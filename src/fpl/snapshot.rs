//! Frozen input of one aggregation pass, and the concurrent fetch that builds it.
//!
//! The three league-wide documents (static dictionary, live stats, standings)
//! are required: any failure there aborts the pass. Per-manager documents
//! (picks, history, transfers) are optional: a failure is logged and replaced
//! by an empty value so one unlucky manager never sinks the whole league.

use std::{path::Path, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::{sync::Semaphore, task::JoinSet};
use tracing::{debug, info, warn};

use crate::{
    cli::types::{Cost, Gameweek, LeagueId, ManagerId, Position},
    core::{try_read_to_string, write_string},
    fpl::{
        http::FplClient,
        types::{
            BootstrapStatic, HistoryResponse, LeagueInfo, LiveResponse, PicksResponse, StandingRow,
            TransferRow,
        },
    },
    league::models::{ChipPlay, HistoryPoint, LiveStat, ManagerEntry, Pick, Player, Transfer},
    FplError, Result,
};


/// Upper bound on managers fetched at the same time.
pub const MAX_CONCURRENT_MANAGERS: usize = 8;

/// Everything fetched for one manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerBundle {
    pub entry: ManagerEntry,
    pub picks: Pick,
    /// Full season history, oldest first.
    pub history: Vec<HistoryPoint>,
    pub chips: Vec<ChipPlay>,
    /// Full season transfer log.
    pub transfers: Vec<Transfer>,
}

impl ManagerBundle {
    /// A bundle with no optional data, as left behind by failed fetches.
    pub fn empty(entry: ManagerEntry) -> Self {
        Self {
            entry,
            picks: Pick::default(),
            history: Vec::new(),
            chips: Vec::new(),
            transfers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub league: LeagueInfo,
    pub gameweek: Gameweek,
    pub players: Vec<Player>,
    pub live: Vec<LiveStat>,
    /// In standings order.
    pub managers: Vec<ManagerBundle>,
}

impl LeagueSnapshot {
    /// Write the snapshot as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        write_string(path, &json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = try_read_to_string(path).ok_or_else(|| FplError::Snapshot {
            message: format!("cannot read {}", path.display()),
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// `(team name, full history)` per manager, in standings order.
    pub fn history_series(&self) -> Vec<(&str, &[HistoryPoint])> {
        self.managers
            .iter()
            .map(|m| (m.entry.team_name.as_str(), m.history.as_slice()))
            .collect()
    }
}

/// Players with a playing position; other element types are skipped.
pub fn players_from_bootstrap(bootstrap: &BootstrapStatic) -> Vec<Player> {
    bootstrap
        .elements
        .iter()
        .filter_map(|e| match Position::try_from(e.element_type) {
            Ok(position) => Some(Player {
                id: e.id,
                name: e.web_name.clone(),
                cost: Cost::from_tenths(e.now_cost),
                photo: e.code,
                position,
            }),
            Err(_) => {
                debug!(
                    player = %e.id,
                    element_type = e.element_type,
                    "skipping non-playing element"
                );
                None
            }
        })
        .collect()
}

pub fn live_from_response(response: LiveResponse) -> Vec<LiveStat> {
    response
        .elements
        .into_iter()
        .map(|e| LiveStat {
            player: e.id,
            minutes: e.stats.minutes,
            total_points: e.stats.total_points,
            bonus: e.stats.bonus,
            yellow_cards: e.stats.yellow_cards,
            red_cards: e.stats.red_cards,
            expected_goals: e.stats.expected_goals,
            expected_assists: e.stats.expected_assists,
            goals_scored: e.stats.goals_scored,
            assists: e.stats.assists,
        })
        .collect()
}

impl From<StandingRow> for ManagerEntry {
    fn from(row: StandingRow) -> Self {
        Self {
            id: row.entry,
            team_name: row.entry_name,
            manager_name: row.player_name,
            rank: row.rank,
            total_points: row.total,
            gameweek_points: row.event_total,
        }
    }
}

/// Squad in slot order, so the first eleven are the starters.
pub fn pick_from_response(mut response: PicksResponse) -> Pick {
    response.picks.sort_by_key(|p| p.position);
    Pick::new(response.picks.into_iter().map(|p| p.element).collect())
}

pub fn history_from_response(
    manager: ManagerId,
    response: HistoryResponse,
) -> (Vec<HistoryPoint>, Vec<ChipPlay>) {
    let history = response
        .current
        .into_iter()
        .map(|h| HistoryPoint {
            manager,
            gameweek: h.event,
            rank: h.rank,
            total_points: h.total_points,
        })
        .collect();
    let chips = response
        .chips
        .into_iter()
        .map(|c| ChipPlay {
            name: c.name,
            gameweek: c.event,
        })
        .collect();
    (history, chips)
}

pub fn transfers_from_rows(manager: ManagerId, rows: Vec<TransferRow>) -> Vec<Transfer> {
    rows.into_iter()
        .map(|t| Transfer {
            manager,
            gameweek: t.event,
            player_in: t.element_in,
            player_out: t.element_out,
        })
        .collect()
}

/// Fetch a complete snapshot of `league` for `gameweek` (or the active gameweek).
pub async fn fetch_snapshot(
    client: &FplClient,
    league: LeagueId,
    gameweek: Option<Gameweek>,
) -> Result<LeagueSnapshot> {
    let bootstrap = client.bootstrap_static().await?;
    let players = players_from_bootstrap(&bootstrap);
    if players.is_empty() {
        return Err(FplError::Malformed {
            endpoint: "bootstrap-static".to_string(),
            detail: "no players in the static dictionary".to_string(),
        });
    }
    let gameweek = gameweek.unwrap_or_else(|| bootstrap.active_gameweek());
    info!(gameweek = %gameweek, players = players.len(), "static dictionary loaded");

    let (live, (league_info, rows)) =
        tokio::try_join!(client.live(gameweek), client.league_standings(league))?;
    let live = live_from_response(live);
    info!(
        league = %league_info.name,
        managers = rows.len(),
        live = live.len(),
        "standings and live stats loaded"
    );

    let entries = rows.into_iter().map(ManagerEntry::from).collect();
    let managers = fetch_managers(client, gameweek, entries).await?;

    Ok(LeagueSnapshot {
        league: league_info,
        gameweek,
        players,
        live,
        managers,
    })
}

/// Fan out one task per manager; results come back in input order.
pub async fn fetch_managers(
    client: &FplClient,
    gameweek: Gameweek,
    entries: Vec<ManagerEntry>,
) -> Result<Vec<ManagerBundle>> {
    let permits = Arc::new(Semaphore::new(MAX_CONCURRENT_MANAGERS));
    let mut tasks = JoinSet::new();
    let count = entries.len();

    for (index, entry) in entries.into_iter().enumerate() {
        let client = client.clone();
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let bundle = match permits.acquire_owned().await {
                Ok(_permit) => fetch_manager(&client, gameweek, entry).await,
                // Only reachable if the semaphore is closed, which never happens here.
                Err(_) => ManagerBundle::empty(entry),
            };
            (index, bundle)
        });
    }

    let mut slots: Vec<Option<ManagerBundle>> = vec![None; count];
    while let Some(joined) = tasks.join_next().await {
        let (index, bundle) = joined?;
        slots[index] = Some(bundle);
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Fetch picks, history and transfers for one manager, degrading each to empty on failure.
pub async fn fetch_manager(
    client: &FplClient,
    gameweek: Gameweek,
    entry: ManagerEntry,
) -> ManagerBundle {
    let id = entry.id;
    let (picks, history, transfers) = tokio::join!(
        client.manager_picks(id, gameweek),
        client.manager_history(id),
        client.manager_transfers(id),
    );

    let picks = match picks {
        Ok(p) => pick_from_response(p),
        Err(e) => {
            warn!(manager = %id, error = %e, "picks unavailable, lineup left empty");
            Pick::default()
        }
    };

    let (history, chips) = match history {
        Ok(h) => history_from_response(id, h),
        Err(e) => {
            warn!(manager = %id, error = %e, "history unavailable");
            (Vec::new(), Vec::new())
        }
    };

    let transfers = match transfers {
        Ok(rows) => transfers_from_rows(id, rows),
        Err(e) => {
            warn!(manager = %id, error = %e, "transfers unavailable");
            Vec::new()
        }
    };

    ManagerBundle {
        entry,
        picks,
        history,
        chips,
        transfers,
    }
}
