//! Type-safe wrappers and enums for FPL league data.

pub mod cost;
pub mod ids;
pub mod position;
pub mod time;

pub use cost::Cost;
pub use ids::{LeagueId, ManagerId, PlayerId};
pub use position::Position;
pub use time::Gameweek;
