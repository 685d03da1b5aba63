//! Tab resolution
//!
//! Maps host selection payloads to saved tab references, and saved
//! references back to host open/close requests.

use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use url::Url;

use tabgroup_groups::{dedupe_by_uri, Group, TabReference};

use crate::error::HostError;
use crate::host::{ShowOptions, TabHost};
use crate::tab::HostTab;
use crate::Result;

/// Selection payloads nested deeper than this are not searched.
const MAX_SELECTION_DEPTH: usize = 8;

pub struct TabResolver {
    host: Arc<dyn TabHost>,
}

impl TabResolver {
    pub fn new(host: Arc<dyn TabHost>) -> Self {
        Self { host }
    }

    /// Text-document tabs named by a command's arguments.
    ///
    /// Arguments may be tab handles, lists of them, or objects carrying them
    /// in fields such as `tabs` or `selectedTabs`. Falls back to the active
    /// tab when the arguments name none.
    pub fn collect_from_selection(&self, hints: &[Value]) -> Vec<TabReference> {
        let mut found: Vec<HostTab> = Vec::new();
        for hint in hints {
            collect_tabs(hint, 0, &mut found);
        }

        let references = dedupe_by_uri(found.iter().filter_map(HostTab::to_reference));
        if !references.is_empty() {
            tracing::debug!(
                handles = found.len(),
                tabs = references.len(),
                "Resolved tabs from selection"
            );
            return references;
        }

        match self.host.active_tab().and_then(|tab| tab.to_reference()) {
            Some(active) => {
                tracing::debug!(uri = %active.uri, "Using active tab as selection");
                vec![active]
            }
            None => Vec::new(),
        }
    }

    /// Open a saved tab as a pinned editor.
    pub fn resolve_open_target(&self, tab: &TabReference, options: ShowOptions) -> Result<()> {
        if Url::parse(&tab.uri).is_err() {
            return Err(HostError::InvalidUri(tab.uri.clone()));
        }

        let options = ShowOptions {
            preview: false,
            ..options
        };

        self.host.open_document(&tab.uri, options).map_err(|e| match e {
            HostError::OpenFailure { .. } => e,
            other => HostError::OpenFailure {
                uri: tab.uri.clone(),
                reason: other.to_string(),
            },
        })
    }

    /// Open host tabs showing a document saved in `group`.
    pub fn resolve_close_targets(&self, group: &Group) -> Vec<HostTab> {
        let uris: HashSet<&str> = group.tabs.iter().map(|t| t.uri.as_str()).collect();

        self.host
            .open_tabs()
            .into_iter()
            .filter(|tab| {
                tab.input
                    .text_uri()
                    .map(|uri| uris.contains(uri))
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn host(&self) -> &Arc<dyn TabHost> {
        &self.host
    }
}

impl Clone for TabResolver {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
        }
    }
}

fn collect_tabs(value: &Value, depth: usize, found: &mut Vec<HostTab>) {
    if depth > MAX_SELECTION_DEPTH {
        return;
    }

    if let Some(tab) = HostTab::from_value(value) {
        found.push(tab);
        return;
    }

    match value {
        Value::Array(items) => {
            for item in items {
                collect_tabs(item, depth + 1, found);
            }
        }
        Value::Object(fields) => {
            // Insertion order, so later fields win on duplicate URIs
            for field in fields.values() {
                collect_tabs(field, depth + 1, found);
            }
        }
        _ => {}
    }
}
