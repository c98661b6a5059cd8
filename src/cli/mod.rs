//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{Gameweek, LeagueId};

use crate::league::RANK_HISTORY_WINDOW;

/// Where the gameweek data comes from, shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// League ID (or set `FPL_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Gameweek to report on, e.g. `12` or `GW12`. Defaults to the current one.
    #[clap(long, short)]
    pub gameweek: Option<Gameweek>,

    /// Upstream API base URL (or set `FPL_API_BASE_URL` env var).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Read a saved snapshot file instead of calling the API.
    #[clap(long, conflicts_with_all = ["league_id", "gameweek", "base_url"])]
    pub snapshot: Option<PathBuf>,

    /// Log each request URL.
    #[clap(long)]
    pub debug: bool,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Every view at once: standings, transfers, team of the week, rank history, highlights.
    Report {
        #[clap(flatten)]
        source: SourceArgs,

        /// Gameweeks shown in the rank history.
        #[clap(long, default_value_t = RANK_HISTORY_WINDOW)]
        window: usize,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Enriched standings with chip, lineup and value metrics.
    Standings {
        #[clap(flatten)]
        source: SourceArgs,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Best legal XI from players started across the league.
    TeamOfTheWeek {
        #[clap(flatten)]
        source: SourceArgs,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Transfers made for the gameweek, best point swing first.
    Transfers {
        #[clap(flatten)]
        source: SourceArgs,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// League position per gameweek.
    RankHistory {
        #[clap(flatten)]
        source: SourceArgs,

        /// Number of most recent gameweeks.
        #[clap(long, default_value_t = RANK_HISTORY_WINDOW)]
        window: usize,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Manager of the week, best bench, best transfer and friends.
    Highlights {
        #[clap(flatten)]
        source: SourceArgs,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Fetch everything once and save it to a file for offline use.
    Snapshot {
        #[clap(flatten)]
        source: SourceArgs,

        /// Destination file. Defaults to the user cache directory.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fpl-league", about = "Fantasy Premier League mini-league dashboard")]
pub struct FplLeague {
    /// Debug-level logging for the whole crate.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get league data from Fantasy Premier League
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

impl GetCmd {
    pub fn source(&self) -> &SourceArgs {
        match self {
            GetCmd::Report { source, .. }
            | GetCmd::Standings { source, .. }
            | GetCmd::TeamOfTheWeek { source, .. }
            | GetCmd::Transfers { source, .. }
            | GetCmd::RankHistory { source, .. }
            | GetCmd::Highlights { source, .. }
            | GetCmd::Snapshot { source, .. } => source,
        }
    }
}
