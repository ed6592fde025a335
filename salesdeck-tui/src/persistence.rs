//! Persistence for lightweight UI state.

use crate::nav::View;
use salesdeck_core::Location;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub active_view: View,
    /// Last location, e.g. `/deals?deal=d-7`. Restores route and selection.
    pub location: Option<String>,
}

impl PersistedState {
    /// Where to start: the saved location if it points at a page, otherwise
    /// the saved page's route.
    pub fn start_location(&self) -> Location {
        self.location
            .as_deref()
            .map(Location::parse)
            .filter(|location| View::from_path(location.path()).is_some())
            .unwrap_or_else(|| Location::new(self.active_view.route()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub fn load(path: &Path) -> Result<Option<PersistedState>, PersistenceError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    let state = serde_json::from_str::<PersistedState>(&contents)?;
    Ok(Some(state))
}

pub fn save(path: &Path, state: &PersistedState) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(state)?;
    std::fs::write(path, contents)?;
    Ok(())
}
