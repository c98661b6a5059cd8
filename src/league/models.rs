//! Domain records of a league snapshot and of the aggregation output.

use serde::{Deserialize, Serialize};

use crate::cli::types::{Cost, Gameweek, ManagerId, PlayerId, Position};

/// Number of picks in the starting segment of a squad.
pub const STARTING_XI: usize = 11;

/// Chip label used when a manager played no chip in the gameweek.
pub const NO_CHIP: &str = "None";

/// Reference data for one player, immutable for the season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub cost: Cost,
    /// Photo code used by the club's image CDN.
    pub photo: u32,
    pub position: Position,
}

/// One player's live stats for the gameweek under analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveStat {
    pub player: PlayerId,
    pub minutes: u32,
    pub total_points: i32,
    pub bonus: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub expected_goals: f64,
    pub expected_assists: f64,
    pub goals_scored: u32,
    pub assists: u32,
}

/// A league participant as listed in the standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerEntry {
    pub id: ManagerId,
    pub team_name: String,
    pub manager_name: String,
    pub rank: u32,
    pub total_points: i32,
    pub gameweek_points: i32,
}

/// A manager's ordered squad for one gameweek.
///
/// The first [`STARTING_XI`] entries are the starting lineup, the rest the bench.
/// Formation legality is not checked; the split is purely positional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub players: Vec<PlayerId>,
}

impl Pick {
    pub fn new(players: Vec<PlayerId>) -> Self {
        Self { players }
    }

    pub fn starting(&self) -> &[PlayerId] {
        &self.players[..self.players.len().min(STARTING_XI)]
    }

    pub fn bench(&self) -> &[PlayerId] {
        &self.players[self.players.len().min(STARTING_XI)..]
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub manager: ManagerId,
    pub gameweek: Gameweek,
    pub player_in: PlayerId,
    pub player_out: PlayerId,
}

/// A manager's standing after one gameweek.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub manager: ManagerId,
    pub gameweek: Gameweek,
    pub rank: Option<u32>,
    pub total_points: i32,
}

/// A chip activation recorded in a manager's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChipPlay {
    pub name: String,
    pub gameweek: Gameweek,
}

/// Human label for an upstream chip code.
pub fn chip_label(code: &str) -> &str {
    match code {
        "bboost" => "Bench Boost",
        "3xc" => "Triple Captain",
        "freehit" => "Free Hit",
        "wildcard" => "Wildcard",
        "manager" => "Assistant Manager",
        other => other,
    }
}

/// Sums over a starting lineup's live stats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineupStats {
    pub bonus: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub expected_goals: f64,
    pub expected_assists: f64,
    pub goals: u32,
    pub assists: u32,
}

impl LineupStats {
    pub fn add(&mut self, stat: &LiveStat) {
        self.bonus += stat.bonus;
        self.yellow_cards += stat.yellow_cards;
        self.red_cards += stat.red_cards;
        self.expected_goals += stat.expected_goals;
        self.expected_assists += stat.expected_assists;
        self.goals += stat.goals_scored;
        self.assists += stat.assists;
    }

    /// Goal involvements minus expected goal involvements.
    ///
    /// Positive means the lineup finished above its chances.
    pub fn clinicality(&self) -> f64 {
        f64::from(self.goals + self.assists) - (self.expected_goals + self.expected_assists)
    }
}

/// A starter's gameweek return relative to price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuePick {
    pub player: Player,
    pub gameweek_points: i32,
    pub points_per_cost: f64,
}

/// Aggregator output for one manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedManager {
    #[serde(flatten)]
    pub entry: ManagerEntry,
    pub active_chip: String,
    #[serde(flatten)]
    pub lineup: LineupStats,
    /// Starters with zero recorded minutes.
    pub did_not_play: usize,
    pub bench_points: i32,
    pub best_value: Option<ValuePick>,
    pub worst_value: Option<ValuePick>,
    pub recent_history: Vec<HistoryPoint>,
}

impl EnrichedManager {
    pub fn clinicality(&self) -> f64 {
        self.lineup.clinicality()
    }

    pub fn played_chip(&self) -> bool {
        self.active_chip != NO_CHIP
    }
}

/// A player owned in some starting lineup this gameweek.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PooledPlayer {
    #[serde(flatten)]
    pub player: Player,
    pub gameweek_points: i32,
    /// Number of managers starting this player.
    pub owned_count: u32,
}

/// Point swing of one transfer made for the gameweek.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferImpact {
    pub manager_id: ManagerId,
    pub manager_name: String,
    pub team_name: String,
    pub player_in_id: PlayerId,
    pub player_out_id: PlayerId,
    /// `None` when the id is missing from the static dictionary.
    pub player_in: Option<Player>,
    pub player_out: Option<Player>,
    pub points_in: i32,
    pub points_out: i32,
    pub diff: i32,
}
