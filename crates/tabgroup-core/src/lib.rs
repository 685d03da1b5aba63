//! Tab Groups Core
//!
//! Workflows that save editor tabs as named, colored groups and bring them
//! back later, plus the tree view that presents saved groups.

mod command;
mod config;
mod error;
mod tab_groups;
mod view;

pub use command::CommandId;
pub use config::Config;
pub use error::CoreError;
pub use tab_groups::{RestoreReport, TabGroups};
pub use view::{Collapsible, ItemCommand, SavedGroupsView, TreeIcon, TreeItem, TreeNode};

// Re-export core components
pub use tabgroup_groups::{
    dedupe_by_uri, Group, GroupColor, GroupError, GroupEvent, GroupStore, SubscriptionId,
    TabReference,
};
pub use tabgroup_host::{
    HostError, HostTab, InputBoxOptions, MessageLevel, Prompter, QuickPickItem, ShowOptions,
    TabHost, TabInput,
};
pub use tabgroup_storage::{Database, KeyValueStore, MemoryStore, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. Safe to call more than once.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
