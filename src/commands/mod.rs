//! Command implementations for the league dashboard CLI

pub mod common;
pub mod render;
pub mod snapshot;
pub mod views;

use crate::{
    error::FplError, fpl::FPL_BASE_URL, LeagueId, Result, BASE_URL_ENV_VAR, LEAGUE_ID_ENV_VAR,
};


/// Resolve league ID from option or environment variable
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<LeagueId>().ok())
        })
        .ok_or_else(|| FplError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}

/// Flag first, then `FPL_API_BASE_URL`, then the public API.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    base_url
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FPL_BASE_URL.to_string())
}
