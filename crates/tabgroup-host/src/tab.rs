//! Host tab handles

use serde::{Deserialize, Serialize};
use serde_json::Value;

use tabgroup_groups::TabReference;

/// What a host tab is showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TabInput {
    /// A text document
    Text { uri: String },
    TextDiff { original: String, modified: String },
    Notebook {
        uri: String,
        #[serde(rename = "notebookType")]
        notebook_type: String,
    },
    Custom {
        uri: String,
        #[serde(rename = "viewType")]
        view_type: String,
    },
    Webview {
        #[serde(rename = "viewType")]
        view_type: String,
    },
    Terminal,
    #[serde(other)]
    Unknown,
}

impl TabInput {
    /// Interpret a raw input descriptor. Descriptors without a `kind` but
    /// with a string `uri` are text documents.
    pub fn from_descriptor(value: &Value) -> Self {
        if value.get("kind").is_none() {
            if let Some(uri) = value.get("uri").and_then(Value::as_str) {
                return TabInput::Text {
                    uri: uri.to_string(),
                };
            }
        }

        serde_json::from_value(value.clone()).unwrap_or(TabInput::Unknown)
    }

    /// URI of the backing text document, if there is one
    pub fn text_uri(&self) -> Option<&str> {
        match self {
            TabInput::Text { uri } => Some(uri),
            _ => None,
        }
    }
}

/// A tab currently open in the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostTab {
    pub label: String,
    pub input: TabInput,
}

impl HostTab {
    pub fn text(uri: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            input: TabInput::Text { uri: uri.into() },
        }
    }

    /// Accept `value` as a tab handle if it has a string `label` and a
    /// non-null `input`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let label = value.get("label")?.as_str()?;
        let input = value.get("input").filter(|input| !input.is_null())?;

        Some(Self {
            label: label.to_string(),
            input: TabInput::from_descriptor(input),
        })
    }

    /// Saved form of this tab, for text documents only
    pub fn to_reference(&self) -> Option<TabReference> {
        self.input
            .text_uri()
            .map(|uri| TabReference::new(uri, self.label.clone()))
    }
}
