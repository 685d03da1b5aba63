//! Tab Group Store
//!
//! Groups are named, colored collections of tab references persisted as one
//! value. A group never holds two tabs with the same URI.

mod color;
mod error;
mod events;
mod group;
mod store;
mod tab;

pub use color::GroupColor;
pub use error::GroupError;
pub use events::{EventEmitter, GroupEvent, SubscriptionId};
pub use group::Group;
pub use store::{GroupStore, DEFAULT_STORAGE_KEY};
pub use tab::{dedupe_by_uri, TabReference};

pub type Result<T> = std::result::Result<T, GroupError>;
