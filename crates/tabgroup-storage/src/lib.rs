//! Tab Groups Storage Layer
//!
//! Persisted key-value slots for extension state. Each slot holds one
//! serialized value that is always replaced as a whole, so a reader never
//! observes a partially applied write.

mod database;
mod error;
mod memory;
mod migrations;

pub use database::Database;
pub use error::StorageError;
pub use memory::MemoryStore;

pub type Result<T> = std::result::Result<T, StorageError>;

/// A host-provided key-value store holding whole serialized values.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn update(&self, key: &str, value: &str) -> Result<()>;
}
