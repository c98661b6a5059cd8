//! Error types for the FPL league dashboard

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Malformed response from {endpoint}: {detail}")]
    Malformed { endpoint: String, detail: String },

    #[error("Snapshot error: {message}")]
    Snapshot { message: String },

    #[error("Background fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl FplError {
    /// True for failures of the upstream service itself (unreachable, bad status, bad payload).
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            FplError::Http(_) | FplError::Json(_) | FplError::Malformed { .. }
        )
    }
}
