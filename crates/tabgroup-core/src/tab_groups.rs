//! Group workflows
//!
//! Each workflow runs to completion, including prompts, before returning.
//! Recoverable problems are reported through the host as messages; errors
//! returned from here have not changed any saved state.

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use tabgroup_groups::{Group, GroupColor, GroupStore, TabReference};
use tabgroup_host::{
    InputBoxOptions, MessageLevel, Prompter, QuickPickItem, ShowOptions, TabHost, TabResolver,
};
use tabgroup_storage::Database;

use crate::config::Config;
use crate::Result;

const DELETE_AFFIRM_LABEL: &str = "Delete Group";

/// Outcome of reopening a group's tabs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreReport {
    pub group_id: String,
    pub restored: usize,
    pub total: usize,
    pub failed: Vec<TabReference>,
}

pub struct TabGroups {
    config: Config,
    store: GroupStore,
    resolver: TabResolver,
    prompter: Arc<dyn Prompter>,
}

impl TabGroups {
    /// Open the state database from `config` and wire up the host.
    pub fn new(config: Config, host: Arc<dyn TabHost>, prompter: Arc<dyn Prompter>) -> Result<Self> {
        let db = Database::open(&config.database_path)?;
        let store = GroupStore::with_key(Arc::new(db), config.storage_key.clone());

        tracing::info!(
            database = %config.database_path.display(),
            key = %store.storage_key(),
            "Tab groups ready"
        );

        Ok(Self::with_store(config, store, host, prompter))
    }

    /// Use an existing store, e.g. one backed by the host's own state.
    pub fn with_store(
        config: Config,
        store: GroupStore,
        host: Arc<dyn TabHost>,
        prompter: Arc<dyn Prompter>,
    ) -> Self {
        Self {
            config,
            store,
            resolver: TabResolver::new(host),
            prompter,
        }
    }

    pub fn store(&self) -> &GroupStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn list_groups(&self) -> Result<Vec<Group>> {
        Ok(self.store.list()?)
    }

    /// Save the selected tabs as a new group after asking for name and color.
    ///
    /// Returns `None` when there was nothing to save or the user cancelled.
    pub fn create_group_from_selection(&self, hints: &[Value]) -> Result<Option<Group>> {
        let tabs = self.resolver.collect_from_selection(hints);
        if tabs.is_empty() {
            self.warn("No tabs found. Select one or more editor tabs first.");
            return Ok(None);
        }

        let name = self.prompter.input_box(&InputBoxOptions {
            prompt: "Name for the new tab group".to_string(),
            placeholder: "e.g. API refactor".to_string(),
            value: None,
        });
        let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
            tracing::debug!("Group creation cancelled at name prompt");
            return Ok(None);
        };

        let Some(color) = self.pick_color() else {
            tracing::debug!("Group creation cancelled at color prompt");
            return Ok(None);
        };

        let group = self.store.create(&name, color, tabs)?;
        self.info(&format!(
            "Saved group \"{}\" with {} tab(s).",
            group.name,
            group.tab_count()
        ));

        Ok(Some(group))
    }

    /// Add the selected tabs to an existing group.
    ///
    /// Returns the number of tabs added, or `None` if nothing was done.
    pub fn add_selection_to_group(
        &self,
        hints: &[Value],
        group_id: Option<&str>,
    ) -> Result<Option<usize>> {
        let tabs = self.resolver.collect_from_selection(hints);
        if tabs.is_empty() {
            self.warn("No tabs found. Select one or more editor tabs first.");
            return Ok(None);
        }

        let Some(group) = self.resolve_group(group_id)? else {
            return Ok(None);
        };

        let added = self.store.merge_tabs_into(&group.id, tabs)?;
        if added == 0 {
            self.info(&format!(
                "All selected tabs are already in \"{}\".",
                group.name
            ));
        } else {
            self.info(&format!("Added {} tab(s) to \"{}\".", added, group.name));
        }

        Ok(Some(added))
    }

    /// Reopen every tab of a group in saved order.
    ///
    /// A tab that cannot be opened is reported and skipped.
    pub fn restore_group(&self, group_id: Option<&str>) -> Result<Option<RestoreReport>> {
        let Some(group) = self.resolve_group(group_id)? else {
            return Ok(None);
        };

        let options = if self.config.restore_preserves_focus {
            ShowOptions::background()
        } else {
            ShowOptions::focused()
        };

        let mut failed = Vec::new();
        for tab in &group.tabs {
            if let Err(e) = self.resolver.resolve_open_target(tab, options) {
                tracing::warn!(group_id = %group.id, uri = %tab.uri, error = %e, "Could not restore tab");
                self.warn(&format!("Could not restore tab: {}", tab.label));
                failed.push(tab.clone());
            }
        }

        let report = RestoreReport {
            group_id: group.id.clone(),
            restored: group.tab_count() - failed.len(),
            total: group.tab_count(),
            failed,
        };

        tracing::info!(
            group_id = %group.id,
            restored = report.restored,
            total = report.total,
            "Restored tab group"
        );
        self.info(&format!(
            "Restored {} of {} tab(s) from \"{}\".",
            report.restored, report.total, group.name
        ));

        Ok(Some(report))
    }

    /// Open one saved tab and focus it. Returns whether it opened.
    pub fn open_saved_tab(&self, tab: &TabReference) -> Result<bool> {
        match self.resolver.resolve_open_target(tab, ShowOptions::focused()) {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::warn!(uri = %tab.uri, error = %e, "Could not open saved tab");
                self.warn(&format!("Could not open tab: {}", tab.label));
                Ok(false)
            }
        }
    }

    /// Close the open editor tabs that belong to a group, in one batch.
    ///
    /// Returns how many tabs were closed.
    pub fn close_group_tabs(&self, group_id: Option<&str>) -> Result<Option<usize>> {
        let Some(group) = self.resolve_group(group_id)? else {
            return Ok(None);
        };

        let targets = self.resolver.resolve_close_targets(&group);
        if targets.is_empty() {
            self.info(&format!("No open tabs belong to \"{}\".", group.name));
            return Ok(Some(0));
        }

        self.resolver.host().close_tabs(&targets, true)?;

        tracing::info!(group_id = %group.id, closed = targets.len(), "Closed group tabs");
        self.info(&format!(
            "Closed {} tab(s) of \"{}\".",
            targets.len(),
            group.name
        ));

        Ok(Some(targets.len()))
    }

    /// Delete a group after explicit confirmation. Returns whether it was
    /// deleted.
    pub fn delete_group(&self, group_id: Option<&str>) -> Result<bool> {
        let Some(group) = self.resolve_group(group_id)? else {
            return Ok(false);
        };

        let confirmed = self.prompter.confirm(
            &format!(
                "Delete group \"{}\" and its {} saved tab(s)?",
                group.name,
                group.tab_count()
            ),
            DELETE_AFFIRM_LABEL,
        );
        if !confirmed {
            tracing::debug!(group_id = %group.id, "Delete declined");
            return Ok(false);
        }

        let removed = self.store.delete(&group.id)?;
        if removed {
            self.info(&format!("Deleted group \"{}\".", group.name));
        } else {
            self.info(&format!("Group \"{}\" no longer exists.", group.name));
        }

        Ok(removed)
    }

    /// The group named by `group_id`, or the one the user picks.
    ///
    /// A passed id is looked up again so a group deleted in the meantime is
    /// reported as not found.
    fn resolve_group(&self, group_id: Option<&str>) -> Result<Option<Group>> {
        if let Some(id) = group_id {
            return Ok(Some(self.store.get(id)?));
        }

        let groups = self.store.list()?;
        if groups.is_empty() {
            self.info("There are no saved groups yet.");
            return Ok(None);
        }

        let items: Vec<QuickPickItem> = groups
            .iter()
            .map(|g| {
                QuickPickItem::new(
                    g.name.clone(),
                    format!("{} • {} tabs", g.color, g.tab_count()),
                )
            })
            .collect();

        let picked = self.prompter.quick_pick(&items, "Select a tab group");
        Ok(picked.and_then(|index| groups.into_iter().nth(index)))
    }

    fn pick_color(&self) -> Option<GroupColor> {
        let items: Vec<QuickPickItem> = GroupColor::ALL
            .iter()
            .map(|c| QuickPickItem::new(c.display_name(), c.as_str()))
            .collect();

        self.prompter
            .quick_pick(&items, "Select a color for the group")
            .and_then(|index| GroupColor::ALL.get(index).copied())
    }

    fn info(&self, message: &str) {
        self.prompter.notify(MessageLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.prompter.notify(MessageLevel::Warning, message);
    }
}

impl Clone for TabGroups {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            store: self.store.clone(),
            resolver: self.resolver.clone(),
            prompter: Arc::clone(&self.prompter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tabgroup_groups::GroupError;
    use tabgroup_host::testing::ScriptedHost;
    use tabgroup_host::HostTab;
    use tabgroup_storage::MemoryStore;

    use crate::CoreError;

    fn setup() -> (TabGroups, ScriptedHost) {
        let host = ScriptedHost::new();
        let store = GroupStore::new(Arc::new(MemoryStore::new()));
        let groups = TabGroups::with_store(
            Config::new(std::env::temp_dir()),
            store,
            Arc::new(host.clone()),
            Arc::new(host.clone()),
        );
        (groups, host)
    }

    fn text_tab(uri: &str, label: &str) -> Value {
        json!({ "label": label, "input": { "kind": "text", "uri": uri } })
    }

    fn tab(uri: &str, label: &str) -> TabReference {
        TabReference::new(uri, label)
    }

    fn color_index(color: GroupColor) -> usize {
        GroupColor::ALL.iter().position(|c| *c == color).unwrap()
    }

    #[test]
    fn test_create_from_selection() {
        let (groups, host) = setup();
        host.queue_input(Some("  Work  "));
        host.queue_pick(Some(color_index(GroupColor::Blue)));

        let group = groups
            .create_group_from_selection(&[json!([
                text_tab("file:///a.ts", "a.ts"),
                text_tab("file:///b.ts", "b.ts"),
            ])])
            .unwrap()
            .unwrap();

        assert_eq!(group.name, "Work");
        assert_eq!(group.color, GroupColor::Blue);
        assert_eq!(group.tabs, vec![tab("file:///a.ts", "a.ts"), tab("file:///b.ts", "b.ts")]);
        assert_eq!(groups.list_groups().unwrap(), vec![group]);

        let colors = &host.pick_lists()[0];
        assert_eq!(colors.len(), 8);
        assert_eq!(colors[0].label, "Grey");
    }

    #[test]
    fn test_create_without_tabs_warns() {
        let (groups, host) = setup();

        assert!(groups.create_group_from_selection(&[]).unwrap().is_none());
        assert_eq!(host.messages_at(MessageLevel::Warning).len(), 1);
        assert!(host.prompts().is_empty());
        assert!(groups.list_groups().unwrap().is_empty());
    }

    #[test]
    fn test_create_cancelled() {
        let (groups, host) = setup();
        let hints = [text_tab("file:///a.ts", "a.ts")];

        host.queue_input(None);
        assert!(groups.create_group_from_selection(&hints).unwrap().is_none());

        host.queue_input(Some("   "));
        assert!(groups.create_group_from_selection(&hints).unwrap().is_none());

        host.queue_input(Some("Work"));
        host.queue_pick(None);
        assert!(groups.create_group_from_selection(&hints).unwrap().is_none());

        assert!(groups.list_groups().unwrap().is_empty());
        assert!(host.messages().is_empty());
    }

    #[test]
    fn test_create_uses_active_tab() {
        let (groups, host) = setup();
        host.set_active_tab(Some(HostTab::text("file:///active.rs", "active.rs")));
        host.queue_input(Some("Solo"));
        host.queue_pick(Some(0));

        let group = groups.create_group_from_selection(&[]).unwrap().unwrap();
        assert_eq!(group.tabs, vec![tab("file:///active.rs", "active.rs")]);
        assert_eq!(group.color, GroupColor::Grey);
    }

    #[test]
    fn test_add_selection_to_picked_group() {
        let (groups, host) = setup();
        let older = groups
            .store()
            .create("Older", GroupColor::Red, vec![tab("file:///a.ts", "A1")])
            .unwrap();
        groups
            .store()
            .create("Newer", GroupColor::Green, vec![tab("file:///z.ts", "z")])
            .unwrap();

        // Newest first, so the older group is the second entry
        host.queue_pick(Some(1));
        let added = groups
            .add_selection_to_group(
                &[json!({ "selectedTabs": [
                    text_tab("file:///a.ts", "A2"),
                    text_tab("file:///b.ts", "b.ts"),
                ]})],
                None,
            )
            .unwrap();

        assert_eq!(added, Some(1));
        assert_eq!(
            groups.store().get(&older.id).unwrap().tabs,
            vec![tab("file:///a.ts", "A1"), tab("file:///b.ts", "b.ts")]
        );
        assert_eq!(host.pick_lists()[0][1].description.as_deref(), Some("red • 1 tabs"));
    }

    #[test]
    fn test_add_selection_to_deleted_group() {
        let (groups, _host) = setup();
        let err = groups
            .add_selection_to_group(&[text_tab("file:///a.ts", "a.ts")], Some("gone"))
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, CoreError::Group(GroupError::NotFound(_))));
    }

    #[test]
    fn test_restore_continues_past_failures() {
        let (groups, host) = setup();
        let group = groups
            .store()
            .create(
                "g",
                GroupColor::Blue,
                vec![tab("file:///gone.ts", "gone.ts"), tab("file:///ok.ts", "ok.ts")],
            )
            .unwrap();
        host.make_unopenable("file:///gone.ts");

        let report = groups.restore_group(Some(&group.id)).unwrap().unwrap();

        assert_eq!(report.restored, 1);
        assert_eq!(report.total, 2);
        assert_eq!(report.failed, vec![tab("file:///gone.ts", "gone.ts")]);
        assert_eq!(
            host.opened(),
            vec![("file:///ok.ts".to_string(), ShowOptions::background())]
        );
        assert_eq!(host.messages_at(MessageLevel::Warning).len(), 1);
        assert!(host.messages_at(MessageLevel::Info)[0].contains("1 of 2"));
    }

    #[test]
    fn test_restore_with_empty_store() {
        let (groups, host) = setup();
        assert!(groups.restore_group(None).unwrap().is_none());
        assert!(host.pick_lists().is_empty());
        assert_eq!(host.messages_at(MessageLevel::Info).len(), 1);
    }

    #[test]
    fn test_open_saved_tab() {
        let (groups, host) = setup();
        host.make_unopenable("file:///gone.ts");

        assert!(groups.open_saved_tab(&tab("file:///a.ts", "a.ts")).unwrap());
        assert!(!groups.open_saved_tab(&tab("file:///gone.ts", "gone.ts")).unwrap());
        assert_eq!(
            host.opened(),
            vec![("file:///a.ts".to_string(), ShowOptions::focused())]
        );
        assert_eq!(host.messages_at(MessageLevel::Warning).len(), 1);
    }

    #[test]
    fn test_close_group_tabs() {
        let (groups, host) = setup();
        let group = groups
            .store()
            .create(
                "g",
                GroupColor::Blue,
                vec![tab("file:///a.ts", "a.ts"), tab("file:///b.ts", "b.ts")],
            )
            .unwrap();
        host.set_open_tabs(vec![
            HostTab::text("file:///a.ts", "a.ts"),
            HostTab::text("file:///keep.ts", "keep.ts"),
        ]);

        assert_eq!(groups.close_group_tabs(Some(&group.id)).unwrap(), Some(1));
        assert_eq!(host.closed(), vec![vec![HostTab::text("file:///a.ts", "a.ts")]]);
        assert_eq!(host.open_tab_list(), vec![HostTab::text("file:///keep.ts", "keep.ts")]);

        assert_eq!(groups.close_group_tabs(Some(&group.id)).unwrap(), Some(0));
        assert_eq!(host.closed().len(), 1);
    }

    #[test]
    fn test_close_failure_propagates() {
        let (groups, host) = setup();
        let group = groups
            .store()
            .create("g", GroupColor::Blue, vec![tab("file:///a.ts", "a.ts")])
            .unwrap();
        host.set_open_tabs(vec![HostTab::text("file:///a.ts", "a.ts")]);
        host.fail_close("editor busy");

        let err = groups.close_group_tabs(Some(&group.id)).unwrap_err();
        assert!(matches!(err, CoreError::Host(_)));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (groups, host) = setup();
        let group = groups
            .store()
            .create("g", GroupColor::Blue, vec![tab("file:///a.ts", "a.ts")])
            .unwrap();

        host.queue_confirm(false);
        assert!(!groups.delete_group(Some(&group.id)).unwrap());
        assert_eq!(groups.list_groups().unwrap().len(), 1);

        host.queue_confirm(true);
        assert!(groups.delete_group(Some(&group.id)).unwrap());
        assert!(groups.list_groups().unwrap().is_empty());

        let requests = host.confirm_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].1, DELETE_AFFIRM_LABEL);
    }
}
