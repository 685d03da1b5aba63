//! Tab reference
//!
//! A saved tab is identified by its URI string, compared exactly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabReference {
    /// Document location, compared verbatim
    pub uri: String,
    /// Tab title at the time it was saved
    #[serde(alias = "previewLabel")]
    pub label: String,
}

impl TabReference {
    pub fn new(uri: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            label: label.into(),
        }
    }
}

/// Collapse `tabs` to one entry per URI.
///
/// Each URI keeps the position of its first occurrence and the label of its
/// last occurrence.
pub fn dedupe_by_uri<I>(tabs: I) -> Vec<TabReference>
where
    I: IntoIterator<Item = TabReference>,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<TabReference> = Vec::new();

    for tab in tabs {
        match positions.get(&tab.uri) {
            Some(&index) => deduped[index] = tab,
            None => {
                positions.insert(tab.uri.clone(), deduped.len());
                deduped.push(tab);
            }
        }
    }

    deduped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_label_wins() {
        let tabs = dedupe_by_uri(vec![
            TabReference::new("file:///a.ts", "a (1)"),
            TabReference::new("file:///b.ts", "b"),
            TabReference::new("file:///a.ts", "a (2)"),
        ]);

        assert_eq!(
            tabs,
            vec![
                TabReference::new("file:///a.ts", "a (2)"),
                TabReference::new("file:///b.ts", "b"),
            ]
        );
    }

    #[test]
    fn test_uri_not_normalized() {
        let tabs = dedupe_by_uri(vec![
            TabReference::new("file:///A.ts", "A"),
            TabReference::new("file:///a.ts", "a"),
            TabReference::new("file:///a.ts/", "a/"),
        ]);
        assert_eq!(tabs.len(), 3);
    }

    #[test]
    fn test_reads_legacy_label_field() {
        let tab: TabReference =
            serde_json::from_str(r#"{"uri":"file:///x.rs","previewLabel":"x.rs"}"#).unwrap();
        assert_eq!(tab.label, "x.rs");
    }
}
