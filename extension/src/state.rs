//! Extension state
use serde_json::Value;
use std::sync::Arc;

use tabgroup_core::{
    CommandId, MessageLevel, Prompter, Result, SavedGroupsView, TabGroups, TreeItem, TreeNode,
};

use crate::commands::{self, CommandResult};

/// Everything the host talks to after activation
pub struct Extension {
    groups: TabGroups,
    view: SavedGroupsView,
    prompter: Arc<dyn Prompter>,
}

impl Extension {
    pub fn new(groups: TabGroups, prompter: Arc<dyn Prompter>) -> Self {
        let view = SavedGroupsView::new(groups.store().clone());
        Self {
            groups,
            view,
            prompter,
        }
    }

    pub fn groups(&self) -> &TabGroups {
        &self.groups
    }

    pub fn view(&self) -> &SavedGroupsView {
        &self.view
    }

    /// Run a registered command by its host name
    pub fn execute(&self, command: &str, args: &[Value]) -> CommandResult<Value> {
        commands::dispatch(self, command, args)
    }

    pub fn tree_children(&self, parent: Option<&TreeNode>) -> Result<Vec<TreeNode>> {
        self.view.children(parent)
    }

    pub fn tree_item(&self, node: &TreeNode) -> TreeItem {
        self.view.tree_item(node)
    }

    /// Run a workflow and wrap its outcome. Failures are shown to the user.
    pub fn with_groups<F, T>(&self, command: CommandId, f: F) -> CommandResult<T>
    where
        F: FnOnce(&TabGroups) -> Result<T>,
    {
        match f(&self.groups) {
            Ok(data) => CommandResult::ok(data),
            Err(e) => {
                tracing::warn!(command = %command, error = %e, "Command failed");
                self.prompter
                    .notify(MessageLevel::Warning, &format!("{}: {}", command.title(), e));
                CommandResult::err(e.to_string())
            }
        }
    }
}
