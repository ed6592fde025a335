//! Error types for the TUI.

use crate::config::ConfigError;
use crate::persistence::PersistenceError;
use salesdeck_core::{DatasetError, ListError};

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to load dataset: {0}")]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    List(#[from] ListError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
