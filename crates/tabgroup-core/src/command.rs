//! Command identifiers
//!
//! Names under which the extension's actions are registered with the host.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandId {
    /// Redraw the saved groups view
    Refresh,
    /// Open one saved tab
    OpenSavedTab,
    CreateFromSelection,
    AddSelectionToGroup,
    RestoreGroup,
    CloseGroupTabs,
    DeleteGroup,
}

impl CommandId {
    pub const ALL: [CommandId; 7] = [
        CommandId::Refresh,
        CommandId::OpenSavedTab,
        CommandId::CreateFromSelection,
        CommandId::AddSelectionToGroup,
        CommandId::RestoreGroup,
        CommandId::CloseGroupTabs,
        CommandId::DeleteGroup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandId::Refresh => "tabGroups.refresh",
            CommandId::OpenSavedTab => "tabGroups.openSavedTab",
            CommandId::CreateFromSelection => "tabGroups.createFromSelection",
            CommandId::AddSelectionToGroup => "tabGroups.addSelectionToGroup",
            CommandId::RestoreGroup => "tabGroups.restoreGroup",
            CommandId::CloseGroupTabs => "tabGroups.closeGroupTabs",
            CommandId::DeleteGroup => "tabGroups.deleteGroup",
        }
    }

    /// Title shown in the command palette
    pub fn title(&self) -> &'static str {
        match self {
            CommandId::Refresh => "Refresh Saved Groups",
            CommandId::OpenSavedTab => "Open Saved Tab",
            CommandId::CreateFromSelection => "Save Selected Tabs as Group",
            CommandId::AddSelectionToGroup => "Add Selected Tabs to Group",
            CommandId::RestoreGroup => "Restore Group",
            CommandId::CloseGroupTabs => "Close Group Tabs",
            CommandId::DeleteGroup => "Delete Group",
        }
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CommandId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown command: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrips_every_id() {
        for id in CommandId::ALL {
            assert_eq!(id.as_str().parse::<CommandId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_command() {
        assert!("tabGroups.rename".parse::<CommandId>().is_err());
        assert!("restoreGroup".parse::<CommandId>().is_err());
    }
}
