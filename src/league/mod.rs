//! Gameweek analytics over a [`LeagueSnapshot`].
//!
//! Everything here is pure: the same snapshot always yields the same report.

pub mod aggregate;
pub mod highlights;
pub mod models;
pub mod pool;
pub mod rank_history;
pub mod totw;

pub use aggregate::{aggregate, LeagueAggregate};
pub use highlights::{league_highlights, Highlight, LeagueHighlights};
pub use models::{EnrichedManager, Player, PooledPlayer, TransferImpact};
pub use pool::PlayerPool;
pub use rank_history::{build_rank_history, RankRow, RANK_HISTORY_WINDOW};
pub use totw::{select_team_of_the_week, TeamOfTheWeek, TotwPlayer};

use serde::Serialize;

use crate::{cli::types::Gameweek, fpl::types::LeagueInfo, fpl::LeagueSnapshot};

/// All derived views for one gameweek.
#[derive(Debug, Clone, Serialize)]
pub struct LeagueReport {
    pub league: LeagueInfo,
    pub gameweek: Gameweek,
    pub league_size: usize,
    pub standings: Vec<EnrichedManager>,
    pub transfers: Vec<TransferImpact>,
    pub team_of_the_week: TeamOfTheWeek,
    pub rank_history: Vec<RankRow>,
    pub highlights: LeagueHighlights,
}

impl LeagueReport {
    pub fn build(snapshot: &LeagueSnapshot, window: usize) -> Self {
        let agg = aggregate(snapshot);
        let team_of_the_week = select_team_of_the_week(&agg.pool);
        let rank_history = build_rank_history(&snapshot.history_series(), window);
        let highlights = league_highlights(&agg.managers, &agg.transfers);

        Self {
            league_size: agg.league_size(),
            league: agg.league,
            gameweek: agg.gameweek,
            standings: agg.managers,
            transfers: agg.transfers,
            team_of_the_week,
            rank_history,
            highlights,
        }
    }
}
