//! Group data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::color::GroupColor;
use crate::error::GroupError;
use crate::tab::{dedupe_by_uri, TabReference};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Permanent identity, assigned at creation
    pub id: String,
    /// User-chosen name, trimmed, not unique
    pub name: String,
    pub color: GroupColor,
    /// Saved tabs in insertion order, unique by URI
    pub tabs: Vec<TabReference>,
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Build a new group. Duplicate URIs in `tabs` keep the last label.
    pub fn new(name: &str, color: GroupColor, tabs: Vec<TabReference>) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GroupError::EmptyName);
        }
        if tabs.is_empty() {
            return Err(GroupError::EmptyTabs);
        }

        let now = Utc::now();

        Ok(Self {
            id: generate_id(now),
            name: name.to_string(),
            color,
            tabs: dedupe_by_uri(tabs),
            created_at: now,
        })
    }

    /// Append tabs whose URI is not already saved.
    ///
    /// Tabs already in the group keep their stored label. Returns the number
    /// of tabs added.
    pub fn merge_tabs(&mut self, new_tabs: Vec<TabReference>) -> usize {
        let mut known: HashSet<String> = self.tabs.iter().map(|t| t.uri.clone()).collect();
        let before = self.tabs.len();

        for tab in dedupe_by_uri(new_tabs) {
            if known.insert(tab.uri.clone()) {
                self.tabs.push(tab);
            }
        }

        self.tabs.len() - before
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}

/// Creation time in milliseconds plus a short random suffix.
fn generate_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", now.timestamp_millis(), &suffix[..6])
}
