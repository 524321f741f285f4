use std::path::PathBuf;
use thiserror::Error;

/// Defines the errors that can occur while persisting alert history.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Failed to read alert history from {0:?}")]
    Load(PathBuf, #[source] std::io::Error),

    #[error("Failed to write alert history to {0:?}")]
    Persist(PathBuf, #[source] std::io::Error),

    #[error("Malformed alert history at {0:?}")]
    Malformed(PathBuf, #[source] serde_json::Error),
}
