//! Tab Groups - Host Extension
//!
//! Entry point the editor host calls on activation. The host supplies its
//! tab surface and prompts; everything else is owned here.

mod commands;
mod state;

use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

pub use commands::CommandResult;
pub use state::Extension;
pub use tabgroup_core::{CommandId, Config, TreeItem, TreeNode};

use tabgroup_core::{GroupStore, KeyValueStore, Prompter, TabGroups, TabHost};

/// Read the extension config, falling back to defaults when `path` is absent.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Activate with groups persisted in the state database named by `config`.
pub fn activate(
    config: Config,
    host: Arc<dyn TabHost>,
    prompter: Arc<dyn Prompter>,
) -> anyhow::Result<Extension> {
    tabgroup_core::init_logging();

    let database = config.database_path.clone();
    let groups = TabGroups::new(config, host, Arc::clone(&prompter))
        .with_context(|| format!("Failed to open tab group storage at {}", database.display()))?;

    tracing::info!("Tab groups extension activated");

    Ok(Extension::new(groups, prompter))
}

/// Activate with groups persisted in a store the host already provides.
pub fn activate_with_store(
    config: Config,
    backend: Arc<dyn KeyValueStore>,
    host: Arc<dyn TabHost>,
    prompter: Arc<dyn Prompter>,
) -> Extension {
    tabgroup_core::init_logging();

    let store = GroupStore::with_key(backend, config.storage_key.clone());
    let groups = TabGroups::with_store(config, store, host, Arc::clone(&prompter));

    tracing::info!("Tab groups extension activated");

    Extension::new(groups, prompter)
}
