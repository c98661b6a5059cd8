//! Fantasy Premier League mini-league dashboard
//!
//! Fetches a classic league's standings and every manager's picks, history
//! and transfers from the public FPL API, then derives the gameweek views:
//!
//! - **Enriched standings**: active chip, players who did not play, bench
//!   points, bonus and cards, clinicality, best and worst value pick
//! - **Transfer impact**: point swing of each transfer made for the gameweek
//! - **Team of the Week**: best legal XI from players started across the league
//! - **Rank history**: league position per gameweek over recent gameweeks
//! - **Highlights**: manager of the week, best bench, best transfer and more
//!
//! A fetched gameweek can be saved as a [`fpl::LeagueSnapshot`] and every view
//! recomputed from it offline.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_league::{
//!     fpl::{fetch_snapshot, FplClient, FPL_BASE_URL},
//!     league::LeagueReport,
//!     LeagueId,
//! };
//!
//! # async fn example() -> fpl_league::Result<()> {
//! let client = FplClient::new(FPL_BASE_URL)?;
//! let snapshot = fetch_snapshot(&client, LeagueId::new(314), None).await?;
//! let report = LeagueReport::build(&snapshot, 5);
//! println!("{} managers", report.league_size);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league ID to avoid passing it in every command:
//! ```bash
//! export FPL_LEAGUE_ID=314
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fpl;
pub mod league;

// Re-export commonly used types
pub use cli::types::{Cost, Gameweek, LeagueId, ManagerId, PlayerId, Position};
pub use error::{FplError, Result};

pub const LEAGUE_ID_ENV_VAR: &str = "FPL_LEAGUE_ID";
pub const BASE_URL_ENV_VAR: &str = "FPL_API_BASE_URL";
