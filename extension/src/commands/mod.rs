//! Host commands
//!
//! Each command takes the raw JSON arguments the host passed and answers
//! with a [`CommandResult`]. Failures are also shown to the user.

pub mod groups;
pub mod tabs;

use serde::Serialize;
use serde_json::Value;

use tabgroup_core::{CommandId, TabReference};

use crate::state::Extension;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> CommandResult<T> {
    pub fn into_value(self) -> CommandResult<Value> {
        let data = match self.data.map(serde_json::to_value).transpose() {
            Ok(data) => data,
            Err(e) => return CommandResult::err(e.to_string()),
        };

        CommandResult {
            success: self.success,
            data,
            error: self.error,
        }
    }
}

/// Run `command` with the host's arguments.
pub fn dispatch(state: &Extension, command: &str, args: &[Value]) -> CommandResult<Value> {
    let id: CommandId = match command.parse() {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(command = %command, "Unknown command");
            return CommandResult::err(e);
        }
    };

    tracing::debug!(command = %id, arg_count = args.len(), "Executing command");

    match id {
        CommandId::Refresh => {
            state.view().refresh();
            CommandResult::ok(Value::Null)
        }
        CommandId::OpenSavedTab => tabs::open_saved_tab(state, args).into_value(),
        CommandId::CreateFromSelection => groups::create_from_selection(state, args).into_value(),
        CommandId::AddSelectionToGroup => groups::add_selection_to_group(state, args).into_value(),
        CommandId::RestoreGroup => groups::restore_group(state, args).into_value(),
        CommandId::CloseGroupTabs => groups::close_group_tabs(state, args).into_value(),
        CommandId::DeleteGroup => groups::delete_group(state, args).into_value(),
    }
}

/// Group id named by the first argument.
///
/// Accepts a bare id, `{ "groupId": .. }`, a saved group, or a group node
/// from the tree view.
pub fn group_id_arg(args: &[Value]) -> Option<String> {
    let arg = args.first()?;

    if let Some(id) = arg.as_str() {
        return Some(id.to_string());
    }
    if let Some(id) = arg.get("groupId").and_then(Value::as_str) {
        return Some(id.to_string());
    }
    if let Some(group) = arg.get("group") {
        return group_id_arg(std::slice::from_ref(group));
    }

    arg.get("tabs")
        .and(arg.get("id"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Saved tab named by the first argument: a `{ uri, label }` object or a
/// tab node from the tree view.
pub fn tab_arg(args: &[Value]) -> Option<TabReference> {
    let arg = args.first()?;
    let candidate = arg.get("tab").unwrap_or(arg);
    serde_json::from_value(candidate.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_id_arg_shapes() {
        assert_eq!(group_id_arg(&[json!("g1")]), Some("g1".to_string()));
        assert_eq!(group_id_arg(&[json!({ "groupId": "g2" })]), Some("g2".to_string()));
        assert_eq!(
            group_id_arg(&[json!({ "id": "g3", "name": "n", "tabs": [] })]),
            Some("g3".to_string())
        );
        assert_eq!(
            group_id_arg(&[json!({ "kind": "group", "group": { "id": "g4", "tabs": [] } })]),
            Some("g4".to_string())
        );
        assert_eq!(group_id_arg(&[json!({ "id": "not-a-group" })]), None);
        assert_eq!(group_id_arg(&[]), None);
    }

    #[test]
    fn test_tab_arg_shapes() {
        let expected = TabReference::new("file:///a.ts", "a.ts");
        assert_eq!(
            tab_arg(&[json!({ "uri": "file:///a.ts", "label": "a.ts" })]),
            Some(expected.clone())
        );
        assert_eq!(
            tab_arg(&[json!({ "kind": "tab", "groupId": "g", "tab": { "uri": "file:///a.ts", "label": "a.ts" } })]),
            Some(expected)
        );
        assert_eq!(tab_arg(&[json!({ "uri": "file:///a.ts" })]), None);
    }

    #[test]
    fn test_into_value() {
        let result = CommandResult::ok(3usize).into_value();
        assert_eq!(result.data, Some(json!(3)));

        let failed: CommandResult<usize> = CommandResult::err("boom".to_string());
        let failed = failed.into_value();
        assert!(!failed.success);
        assert_eq!(failed.data, None);
    }
}
