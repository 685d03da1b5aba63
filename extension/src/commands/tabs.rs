//! Saved tab commands
use serde_json::Value;

use tabgroup_core::CommandId;

use super::{tab_arg, CommandResult};
use crate::state::Extension;

/// Open one saved tab. Data is whether it opened.
pub fn open_saved_tab(state: &Extension, args: &[Value]) -> CommandResult<bool> {
    let Some(tab) = tab_arg(args) else {
        tracing::warn!(arg_count = args.len(), "openSavedTab called without a saved tab");
        return CommandResult::err("Missing saved tab argument".to_string());
    };

    state.with_groups(CommandId::OpenSavedTab, |groups| groups.open_saved_tab(&tab))
}
