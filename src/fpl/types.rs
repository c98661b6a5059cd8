//! Serde models of the upstream Fantasy Premier League JSON payloads.
//!
//! Only the fields the dashboard consumes are modelled; everything else in the
//! (large) upstream documents is ignored. Numeric fields that may be absent
//! default to zero.

use crate::cli::types::{Gameweek, LeagueId, ManagerId, PlayerId};
use serde::{de::Error, Deserialize, Deserializer, Serialize};


/// Decimals such as `expected_goals` arrive as strings (`"0.37"`), but older
/// payloads and hand-written fixtures use plain numbers or `null`.
fn de_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(Raw::Number(n)) => Ok(n),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(0.0),
        Some(Raw::Text(s)) => s.trim().parse::<f64>().map_err(D::Error::custom),
    }
}

/// `bootstrap-static`: the season's static dictionary.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BootstrapStatic {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl BootstrapStatic {
    /// The first gameweek flagged current, or gameweek 1 before the season starts.
    pub fn active_gameweek(&self) -> Gameweek {
        self.events
            .iter()
            .find(|e| e.is_current)
            .map(|e| e.id)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Event {
    pub id: Gameweek,
    #[serde(default)]
    pub is_current: bool,
}

/// A player ("element") in the static dictionary.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Element {
    pub id: PlayerId,
    pub web_name: String,
    /// Price in tenths of a million.
    #[serde(default)]
    pub now_cost: u16,
    /// Photo code.
    #[serde(default)]
    pub code: u32,
    pub element_type: u8,
}

/// `event/{gw}/live`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LiveResponse {
    #[serde(default)]
    pub elements: Vec<LiveElement>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LiveElement {
    pub id: PlayerId,
    #[serde(default)]
    pub stats: LiveStats,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LiveStats {
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub total_points: i32,
    #[serde(default)]
    pub bonus: u32,
    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub red_cards: u32,
    #[serde(default)]
    pub goals_scored: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default, deserialize_with = "de_decimal")]
    pub expected_goals: f64,
    #[serde(default, deserialize_with = "de_decimal")]
    pub expected_assists: f64,
}

/// `leagues-classic/{id}/standings` (one page)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingsResponse {
    pub league: LeagueInfo,
    pub standings: StandingsPage,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LeagueInfo {
    pub id: LeagueId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingsPage {
    #[serde(default)]
    pub has_next: bool,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<StandingRow>,
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingRow {
    pub entry: ManagerId,
    pub entry_name: String,
    pub player_name: String,
    pub rank: u32,
    #[serde(default)]
    pub total: i32,
    #[serde(default)]
    pub event_total: i32,
}

/// `entry/{id}/event/{gw}/picks`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PicksResponse {
    #[serde(default)]
    pub active_chip: Option<String>,
    #[serde(default)]
    pub picks: Vec<PickRow>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PickRow {
    pub element: PlayerId,
    /// Squad slot, 1..=15.
    #[serde(default)]
    pub position: u8,
}

/// `entry/{id}/history`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub current: Vec<HistoryRow>,
    #[serde(default)]
    pub chips: Vec<ChipRow>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryRow {
    pub event: Gameweek,
    #[serde(default)]
    pub total_points: i32,
    /// Overall gameweek rank; null for a gameweek that has not been ranked yet.
    #[serde(default)]
    pub rank: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChipRow {
    pub name: String,
    pub event: Gameweek,
}

/// Proxies in front of the API sometimes strip the envelope and hand back
/// only the `current` array, so both shapes are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum HistoryPayload {
    /// Full upstream document with `current` and `chips`
    Full(HistoryResponse),
    /// Bare `current` array
    Current(Vec<HistoryRow>),
}

impl HistoryPayload {
    pub fn into_history(self) -> HistoryResponse {
        match self {
            HistoryPayload::Full(history) => history,
            HistoryPayload::Current(current) => HistoryResponse {
                current,
                chips: Vec::new(),
            },
        }
    }
}

/// One row of `entry/{id}/transfers`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransferRow {
    pub element_in: PlayerId,
    pub element_out: PlayerId,
    pub event: Gameweek,
}
