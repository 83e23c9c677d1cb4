//! Error types for the scoop simulator.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoopError>;

#[derive(Error, Debug)]
pub enum ScoopError {
    /// Caller-correctable run configuration problem (bundle bounds, trial count, prices).
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Statistics were requested over zero trials.
    #[error("Cannot summarize an empty trial set")]
    EmptyInput,

    #[error("Invalid item: {reason}")]
    InvalidItem { reason: String },

    #[error("Simulation run was cancelled")]
    Cancelled,

    #[error("Failed to read or write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ScoopError {
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        ScoopError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub fn invalid_item(reason: impl Into<String>) -> Self {
        ScoopError::InvalidItem {
            reason: reason.into(),
        }
    }
}
