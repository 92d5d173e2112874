use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid game '{name}': {reason}")]
    InvalidGame { name: String, reason: String },
    #[error("Invalid filter: {0} (expected all, funded or unfunded)")]
    InvalidFilter(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
