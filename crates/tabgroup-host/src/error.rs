//! Host error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("Could not open {uri}: {reason}")]
    OpenFailure { uri: String, reason: String },

    #[error("Could not close tabs: {0}")]
    CloseFailure(String),

    #[error("Invalid URI: {0}")]
    InvalidUri(String),
}
