//! Async client for the read-only Fantasy Premier League API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::{Gameweek, LeagueId, ManagerId},
    core::default_headers,
    fpl::types::{
        BootstrapStatic, HistoryPayload, HistoryResponse, LeagueInfo, LiveResponse,
        PicksResponse, StandingRow, StandingsResponse, TransferRow,
    },
    FplError, Result,
};


/// Base path of the public API.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// Upper bound on standings pages followed for one league.
pub const MAX_STANDINGS_PAGES: u32 = 100;

/// Thin wrapper over a shared `reqwest::Client`, one method per endpoint.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct FplClient {
    client: Client,
    base_url: String,
}

impl FplClient {
    /// Build a client against `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_user_agent(base_url, None)
    }

    pub fn with_user_agent(base_url: impl Into<String>, user_agent: Option<&str>) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers(user_agent)?)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, ?query, "GET");

        let body = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(serde_json::from_slice(&body)?)
    }

    /// Static dictionary of players, teams and gameweeks.
    pub async fn bootstrap_static(&self) -> Result<BootstrapStatic> {
        self.get_json("bootstrap-static/", &[]).await
    }

    /// Live per-player stats for one gameweek.
    pub async fn live(&self, gameweek: Gameweek) -> Result<LiveResponse> {
        self.get_json(&format!("event/{}/live/", gameweek), &[]).await
    }

    /// A single page of classic league standings.
    pub async fn standings_page(&self, league: LeagueId, page: u32) -> Result<StandingsResponse> {
        let query = [("page_standings", page.to_string())];
        self.get_json(&format!("leagues-classic/{}/standings/", league), &query)
            .await
    }

    /// All standings rows of a league, following `has_next` pagination.
    pub async fn league_standings(
        &self,
        league: LeagueId,
    ) -> Result<(LeagueInfo, Vec<StandingRow>)> {
        let first = self.standings_page(league, 1).await?;
        let info = first.league;
        let mut rows = first.standings.results;
        let mut has_next = first.standings.has_next;
        let mut page = 1;

        while has_next {
            page += 1;
            if page > MAX_STANDINGS_PAGES {
                return Err(FplError::Malformed {
                    endpoint: format!("leagues-classic/{}/standings", league),
                    detail: format!("more than {} pages", MAX_STANDINGS_PAGES),
                });
            }
            let next = self.standings_page(league, page).await?;
            has_next = next.standings.has_next && !next.standings.results.is_empty();
            rows.extend(next.standings.results);
        }

        debug!(league = %league, pages = page, managers = rows.len(), "standings loaded");
        Ok((info, rows))
    }

    /// A manager's 15 picks for one gameweek.
    pub async fn manager_picks(
        &self,
        manager: ManagerId,
        gameweek: Gameweek,
    ) -> Result<PicksResponse> {
        self.get_json(&format!("entry/{}/event/{}/picks/", manager, gameweek), &[])
            .await
    }

    /// A manager's season history and chip usage.
    pub async fn manager_history(&self, manager: ManagerId) -> Result<HistoryResponse> {
        let payload: HistoryPayload = self
            .get_json(&format!("entry/{}/history/", manager), &[])
            .await?;
        Ok(payload.into_history())
    }

    /// A manager's full season transfer log.
    pub async fn manager_transfers(&self, manager: ManagerId) -> Result<Vec<TransferRow>> {
        self.get_json(&format!("entry/{}/transfers/", manager), &[])
            .await
    }
}
