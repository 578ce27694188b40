//! Driver errors.

use std::path::PathBuf;

use thiserror::Error;

use coastwatch_sim::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid simulation config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid driver setting: {0}")]
    Driver(String),

    #[error("failed to spawn simulation thread: {0}")]
    Spawn(std::io::Error),

    #[error("simulation thread panicked")]
    Join,

    #[error("failed to encode snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
