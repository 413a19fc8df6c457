use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PointsError {
    #[error("Team '{0}' already exists.")]
    DuplicateTeam(String),

    #[error("Team '{0}' does not exist.")]
    UnknownTeam(String),

    #[error("Cannot subtract {requested} points from team '{team}' as it has only {available} points.")]
    InsufficientPoints {
        team: String,
        requested: u64,
        available: u64,
    },

    #[error("No saved teams found at '{}'. Please save teams first.", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid point value: {0}")]
    InvalidPointValue(String),

    #[error("Team name cannot be empty.")]
    InvalidTeamName,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PointsError>;
