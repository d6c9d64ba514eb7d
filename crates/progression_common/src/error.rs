//! Error types for progression table generation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProgressionError {
    #[error("Invalid level range: {0}")]
    InvalidLevelRange(String),

    #[error("Level step must be greater than zero")]
    InvalidStep,

    #[error("Malformed table: {0}")]
    TableFormat(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProgressionError {
    /// Process exit code for this failure class
    pub fn exit_code(&self) -> i32 {
        match self {
            ProgressionError::InvalidLevelRange(_) | ProgressionError::InvalidStep => 64,
            ProgressionError::TableFormat(_) | ProgressionError::Json(_) => 65,
            ProgressionError::Write { .. } | ProgressionError::Io(_) => 74,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProgressionError>;
