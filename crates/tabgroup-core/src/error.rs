//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] tabgroup_storage::StorageError),

    #[error(transparent)]
    Group(#[from] tabgroup_groups::GroupError),

    #[error(transparent)]
    Host(#[from] tabgroup_host::HostError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// The targeted group no longer exists
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::Group(tabgroup_groups::GroupError::NotFound(_))
        )
    }
}
