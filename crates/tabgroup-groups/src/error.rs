//! Group error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupError {
    #[error("Group name cannot be empty")]
    EmptyName,

    #[error("No tabs to save")]
    EmptyTabs,

    #[error("Group not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] tabgroup_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GroupError {
    /// Input was rejected before any state was touched.
    pub fn is_validation(&self) -> bool {
        matches!(self, GroupError::EmptyName | GroupError::EmptyTabs)
    }
}
