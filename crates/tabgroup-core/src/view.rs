//! Saved groups tree view
//!
//! Two levels: groups at the root, their saved tabs below. The view listens
//! to the store and signals the host whenever the tree must be redrawn.

use chrono::Local;
use serde::Serialize;
use serde_json::{json, Value};

use tabgroup_groups::{EventEmitter, Group, GroupStore, SubscriptionId, TabReference};
use tabgroup_host::compact_uri;

use crate::command::CommandId;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TreeNode {
    Group {
        group: Group,
    },
    #[serde(rename_all = "camelCase")]
    Tab {
        group_id: String,
        tab: TabReference,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Collapsible {
    None,
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeIcon {
    pub id: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemCommand {
    pub command: String,
    pub title: String,
    pub arguments: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeItem {
    pub id: String,
    pub label: String,
    pub description: String,
    pub tooltip: String,
    pub collapsible: Collapsible,
    pub context_value: String,
    pub icon: TreeIcon,
    pub command: Option<ItemCommand>,
}

pub struct SavedGroupsView {
    store: GroupStore,
    changed: EventEmitter<()>,
    store_subscription: SubscriptionId,
}

impl SavedGroupsView {
    pub fn new(store: GroupStore) -> Self {
        let changed: EventEmitter<()> = EventEmitter::new();

        let notify = changed.clone();
        let store_subscription = store.subscribe(move |event| {
            tracing::debug!(?event, "Saved groups changed");
            notify.fire(&());
        });

        Self {
            store,
            changed,
            store_subscription,
        }
    }

    /// Ask the host to redraw the whole tree
    pub fn refresh(&self) {
        self.changed.fire(&());
    }

    pub fn on_did_change<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&()) + Send + Sync + 'static,
    {
        self.changed.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// Children of `parent`; groups when `parent` is `None`
    pub fn children(&self, parent: Option<&TreeNode>) -> Result<Vec<TreeNode>> {
        match parent {
            None => Ok(self
                .store
                .list()?
                .into_iter()
                .map(|group| TreeNode::Group { group })
                .collect()),
            Some(TreeNode::Group { group }) => Ok(group
                .tabs
                .iter()
                .map(|tab| TreeNode::Tab {
                    group_id: group.id.clone(),
                    tab: tab.clone(),
                })
                .collect()),
            Some(TreeNode::Tab { .. }) => Ok(Vec::new()),
        }
    }

    pub fn tree_item(&self, node: &TreeNode) -> TreeItem {
        match node {
            TreeNode::Group { group } => group_item(group),
            TreeNode::Tab { group_id, tab } => tab_item(group_id, tab),
        }
    }
}

impl Drop for SavedGroupsView {
    fn drop(&mut self) {
        self.store.unsubscribe(self.store_subscription);
    }
}

fn group_item(group: &Group) -> TreeItem {
    let created = group.created_at.with_timezone(&Local);
    let tab_labels: Vec<&str> = group.tabs.iter().map(|t| t.label.as_str()).collect();

    TreeItem {
        id: group.id.clone(),
        label: format!("{} ({})", group.name, group.tab_count()),
        description: format!("{} • {}", group.color, created.format("%Y-%m-%d %H:%M")),
        tooltip: format!(
            "{}\nColor: {}\nTabs: {}",
            group.name,
            group.color,
            tab_labels.join(", ")
        ),
        collapsible: Collapsible::Collapsed,
        context_value: "tabGroup".to_string(),
        icon: TreeIcon {
            id: "circle-filled".to_string(),
            color: Some(group.color.theme_color().to_string()),
        },
        command: Some(ItemCommand {
            command: CommandId::RestoreGroup.as_str().to_string(),
            title: CommandId::RestoreGroup.title().to_string(),
            arguments: vec![json!({ "groupId": group.id })],
        }),
    }
}

fn tab_item(group_id: &str, tab: &TabReference) -> TreeItem {
    TreeItem {
        id: format!("{}::{}", group_id, tab.uri),
        label: tab.label.clone(),
        description: compact_uri(&tab.uri),
        tooltip: tab.uri.clone(),
        collapsible: Collapsible::None,
        context_value: "savedTab".to_string(),
        icon: TreeIcon {
            id: "file".to_string(),
            color: None,
        },
        command: Some(ItemCommand {
            command: CommandId::OpenSavedTab.as_str().to_string(),
            title: CommandId::OpenSavedTab.title().to_string(),
            arguments: vec![json!({ "uri": tab.uri, "label": tab.label })],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use tabgroup_groups::GroupColor;
    use tabgroup_storage::MemoryStore;

    fn store() -> GroupStore {
        GroupStore::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_two_level_tree() {
        let store = store();
        let group = store
            .create(
                "Work",
                GroupColor::Blue,
                vec![
                    TabReference::new("file:///repo/src/a.ts", "a.ts"),
                    TabReference::new("untitled:Untitled-1", "Untitled-1"),
                ],
            )
            .unwrap();
        let view = SavedGroupsView::new(store);

        let roots = view.children(None).unwrap();
        assert_eq!(roots.len(), 1);

        let item = view.tree_item(&roots[0]);
        assert_eq!(item.label, "Work (2)");
        assert!(item.description.starts_with("blue • "));
        assert_eq!(item.collapsible, Collapsible::Collapsed);
        assert_eq!(item.icon.color.as_deref(), Some("charts.blue"));
        assert_eq!(item.tooltip, "Work\nColor: blue\nTabs: a.ts, Untitled-1");
        let command = item.command.unwrap();
        assert_eq!(command.command, "tabGroups.restoreGroup");
        assert_eq!(command.arguments, vec![json!({ "groupId": group.id })]);

        let leaves = view.children(Some(&roots[0])).unwrap();
        assert_eq!(leaves.len(), 2);

        let first = view.tree_item(&leaves[0]);
        assert_eq!(first.label, "a.ts");
        assert_eq!(first.description, "src/a.ts");
        assert_eq!(first.collapsible, Collapsible::None);
        assert_eq!(first.command.unwrap().command, "tabGroups.openSavedTab");

        let second = view.tree_item(&leaves[1]);
        assert_eq!(second.description, "untitled:Untitled-1");

        assert!(view.children(Some(&leaves[0])).unwrap().is_empty());
    }

    #[test]
    fn test_store_mutations_signal_change() {
        let store = store();
        let view = SavedGroupsView::new(store.clone());
        let count = Arc::new(Mutex::new(0));

        let sink = Arc::clone(&count);
        view.on_did_change(move |_| *sink.lock() += 1);

        let group = store
            .create("g", GroupColor::Grey, vec![TabReference::new("file:///a", "a")])
            .unwrap();
        store
            .merge_tabs_into(&group.id, vec![TabReference::new("file:///b", "b")])
            .unwrap();
        store.delete(&group.id).unwrap();
        view.refresh();

        assert_eq!(*count.lock(), 4);
    }

    #[test]
    fn test_dropped_view_stops_listening() {
        let store = store();
        {
            let _view = SavedGroupsView::new(store.clone());
            assert_eq!(store.subscriber_count(), 1);
        }
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_node_serialization() {
        let node = TreeNode::Tab {
            group_id: "g1".to_string(),
            tab: TabReference::new("file:///a", "a"),
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["kind"], "tab");
        assert_eq!(value["groupId"], "g1");
    }
}
