//! Host editor traits

use serde::{Deserialize, Serialize};

use crate::tab::HostTab;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowOptions {
    /// Open as a preview tab that the next open may replace
    pub preview: bool,
    /// Keep focus where it is
    pub preserve_focus: bool,
}

impl ShowOptions {
    /// Pinned tab that takes focus
    pub fn focused() -> Self {
        Self {
            preview: false,
            preserve_focus: false,
        }
    }

    /// Pinned tab opened behind the current editor
    pub fn background() -> Self {
        Self {
            preview: false,
            preserve_focus: true,
        }
    }
}

/// Tabs and documents of the host editor.
pub trait TabHost: Send + Sync {
    /// Every open tab across all host tab groups
    fn open_tabs(&self) -> Vec<HostTab>;

    /// Active tab of the active host tab group
    fn active_tab(&self) -> Option<HostTab>;

    fn open_document(&self, uri: &str, options: ShowOptions) -> Result<()>;

    /// Close all `tabs` in one request, without per-tab confirmation.
    fn close_tabs(&self, tabs: &[HostTab], preserve_focus: bool) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputBoxOptions {
    pub prompt: String,
    pub placeholder: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickPickItem {
    pub label: String,
    pub description: Option<String>,
}

impl QuickPickItem {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: Some(description.into()),
        }
    }
}

/// Interactive prompts and notifications of the host editor.
///
/// `None` from a prompt means the user dismissed it.
pub trait Prompter: Send + Sync {
    fn input_box(&self, options: &InputBoxOptions) -> Option<String>;

    /// Returns the index of the chosen item
    fn quick_pick(&self, items: &[QuickPickItem], placeholder: &str) -> Option<usize>;

    /// Modal yes/no. Only choosing `affirm_label` counts as yes.
    fn confirm(&self, message: &str, affirm_label: &str) -> bool;

    fn notify(&self, level: MessageLevel, message: &str);
}
