//! Upstream Fantasy Premier League API: payload models, client and snapshots

pub mod http;
pub mod snapshot;
pub mod types;

pub use http::{FplClient, FPL_BASE_URL};
pub use snapshot::{fetch_snapshot, LeagueSnapshot, ManagerBundle};
