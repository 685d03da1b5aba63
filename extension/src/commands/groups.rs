//! Group commands
use serde_json::Value;

use tabgroup_core::{CommandId, Group, RestoreReport};

use super::{group_id_arg, CommandResult};
use crate::state::Extension;

/// Arguments are the host's selection hints.
pub fn create_from_selection(state: &Extension, args: &[Value]) -> CommandResult<Option<Group>> {
    state.with_groups(CommandId::CreateFromSelection, |groups| {
        groups.create_group_from_selection(args)
    })
}

/// Arguments are the host's selection hints, optionally followed by a
/// `{ "groupId": .. }` target. Without a target the user picks a group.
pub fn add_selection_to_group(state: &Extension, args: &[Value]) -> CommandResult<Option<usize>> {
    let (hints, target) = split_target(args);

    state.with_groups(CommandId::AddSelectionToGroup, |groups| {
        groups.add_selection_to_group(hints, target.as_deref())
    })
}

pub fn restore_group(state: &Extension, args: &[Value]) -> CommandResult<Option<RestoreReport>> {
    let group_id = group_id_arg(args);
    state.with_groups(CommandId::RestoreGroup, |groups| {
        groups.restore_group(group_id.as_deref())
    })
}

pub fn close_group_tabs(state: &Extension, args: &[Value]) -> CommandResult<Option<usize>> {
    let group_id = group_id_arg(args);
    state.with_groups(CommandId::CloseGroupTabs, |groups| {
        groups.close_group_tabs(group_id.as_deref())
    })
}

pub fn delete_group(state: &Extension, args: &[Value]) -> CommandResult<bool> {
    let group_id = group_id_arg(args);
    state.with_groups(CommandId::DeleteGroup, |groups| {
        groups.delete_group(group_id.as_deref())
    })
}

fn split_target(args: &[Value]) -> (&[Value], Option<String>) {
    match args.split_last() {
        Some((last, rest)) if last.get("groupId").is_some() => {
            (rest, group_id_arg(std::slice::from_ref(last)))
        }
        _ => (args, None),
    }
}
