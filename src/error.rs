//! Error type for the boundary layers (sources, config, bindings).
//!
//! The standings computation itself never fails; only loading its inputs can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, LeagueError>;
