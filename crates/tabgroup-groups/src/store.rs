//! Group Store
//!
//! Every mutation reads the whole group list, changes it in memory and
//! writes the whole list back under a single key.

use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use tabgroup_storage::KeyValueStore;

use crate::color::GroupColor;
use crate::error::GroupError;
use crate::events::{EventEmitter, GroupEvent, SubscriptionId};
use crate::group::Group;
use crate::tab::TabReference;
use crate::Result;

pub const DEFAULT_STORAGE_KEY: &str = "tabGroups.savedGroups";

pub struct GroupStore {
    /// Host state backend
    backend: Arc<dyn KeyValueStore>,
    /// Slot holding the serialized group list
    key: String,
    /// Serializes read-modify-write cycles within this process
    write_lock: Arc<Mutex<()>>,
    events: EventEmitter<GroupEvent>,
}

impl GroupStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            write_lock: Arc::new(Mutex::new(())),
            events: EventEmitter::new(),
        }
    }

    /// All saved groups, newest first
    pub fn list(&self) -> Result<Vec<Group>> {
        Ok(self.load()?.groups)
    }

    pub fn get(&self, group_id: &str) -> Result<Group> {
        self.list()?
            .into_iter()
            .find(|g| g.id == group_id)
            .ok_or_else(|| GroupError::NotFound(group_id.to_string()))
    }

    /// Read the group list, apply `f`, and persist the result.
    ///
    /// Nothing is written when `f` fails. Stored entries that could not be
    /// read are written back after the groups; a stored value that is not a
    /// list is copied to the backup key before it is replaced.
    pub fn modify<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Group>) -> Result<T>,
    {
        let _guard = self.write_lock.lock();

        let StoredGroups {
            mut groups,
            unreadable,
            corrupt,
        } = self.load()?;
        let result = f(&mut groups)?;

        let mut entries = groups
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<Value>, _>>()?;
        entries.extend(unreadable);
        let serialized = serde_json::to_string(&entries)?;

        if let Some(raw) = corrupt {
            let backup = self.backup_key();
            tracing::warn!(key = %self.key, backup = %backup, "Preserving unreadable saved groups before overwrite");
            self.backend.update(&backup, &raw)?;
        }
        self.backend.update(&self.key, &serialized)?;

        Ok(result)
    }

    /// Key that receives a stored value which could not be read as a list
    pub fn backup_key(&self) -> String {
        format!("{}.unreadable", self.key)
    }

    fn load(&self) -> Result<StoredGroups> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(StoredGroups::default());
        };

        let entries = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Ignoring unreadable saved groups");
                return Ok(StoredGroups {
                    corrupt: Some(raw),
                    ..StoredGroups::default()
                });
            }
        };

        let mut stored = StoredGroups::default();
        for (index, entry) in entries.into_iter().enumerate() {
            match Group::deserialize(&entry) {
                Ok(group) => stored.groups.push(group),
                Err(e) => {
                    tracing::warn!(key = %self.key, index, error = %e, "Skipping unreadable saved group");
                    stored.unreadable.push(entry);
                }
            }
        }

        Ok(stored)
    }

    /// Save a new group at the front of the list
    pub fn create(
        &self,
        name: &str,
        color: GroupColor,
        tabs: Vec<TabReference>,
    ) -> Result<Group> {
        let group = Group::new(name, color, tabs)?;

        self.modify(|groups| {
            groups.insert(0, group.clone());
            Ok(())
        })?;

        tracing::info!(
            group_id = %group.id,
            group_name = %group.name,
            tab_count = group.tab_count(),
            "Created tab group"
        );
        self.events.fire(&GroupEvent::Created {
            group_id: group.id.clone(),
        });

        Ok(group)
    }

    /// Add tabs to an existing group, skipping URIs it already holds.
    ///
    /// Returns how many tabs were added.
    pub fn merge_tabs_into(&self, group_id: &str, new_tabs: Vec<TabReference>) -> Result<usize> {
        let added = self.modify(|groups| {
            let group = groups
                .iter_mut()
                .find(|g| g.id == group_id)
                .ok_or_else(|| GroupError::NotFound(group_id.to_string()))?;
            Ok(group.merge_tabs(new_tabs))
        })?;

        tracing::info!(group_id = %group_id, added, "Merged tabs into group");
        self.events.fire(&GroupEvent::TabsMerged {
            group_id: group_id.to_string(),
            added,
        });

        Ok(added)
    }

    /// Remove a group. Returns whether it existed.
    pub fn delete(&self, group_id: &str) -> Result<bool> {
        let removed = self.modify(|groups| {
            let before = groups.len();
            groups.retain(|g| g.id != group_id);
            Ok(groups.len() != before)
        })?;

        if removed {
            tracing::info!(group_id = %group_id, "Deleted tab group");
            self.events.fire(&GroupEvent::Deleted {
                group_id: group_id.to_string(),
            });
        } else {
            tracing::debug!(group_id = %group_id, "Delete skipped, group not found");
        }

        Ok(removed)
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&GroupEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.events.listener_count()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }
}

/// Stored value split into readable groups and entries kept as they are
#[derive(Default)]
struct StoredGroups {
    groups: Vec<Group>,
    unreadable: Vec<Value>,
    /// Raw value that was not a JSON list
    corrupt: Option<String>,
}

impl Clone for GroupStore {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            key: self.key.clone(),
            write_lock: Arc::clone(&self.write_lock),
            events: self.events.clone(),
        }
    }
}
