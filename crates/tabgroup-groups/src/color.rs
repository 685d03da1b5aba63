//! Group colors
//!
//! The palette mirrors the host's tab-group colors. Stored lowercase.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupColor {
    #[serde(alias = "gray")]
    Grey,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Pink,
}

impl GroupColor {
    /// Picker order
    pub const ALL: [GroupColor; 8] = [
        GroupColor::Grey,
        GroupColor::Blue,
        GroupColor::Green,
        GroupColor::Yellow,
        GroupColor::Orange,
        GroupColor::Red,
        GroupColor::Purple,
        GroupColor::Pink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupColor::Grey => "grey",
            GroupColor::Blue => "blue",
            GroupColor::Green => "green",
            GroupColor::Yellow => "yellow",
            GroupColor::Orange => "orange",
            GroupColor::Red => "red",
            GroupColor::Purple => "purple",
            GroupColor::Pink => "pink",
        }
    }

    /// Capitalized name shown in pickers
    pub fn display_name(&self) -> &'static str {
        match self {
            GroupColor::Grey => "Grey",
            GroupColor::Blue => "Blue",
            GroupColor::Green => "Green",
            GroupColor::Yellow => "Yellow",
            GroupColor::Orange => "Orange",
            GroupColor::Red => "Red",
            GroupColor::Purple => "Purple",
            GroupColor::Pink => "Pink",
        }
    }

    /// Host theme color id used to tint the group's icon.
    pub fn theme_color(&self) -> &'static str {
        match self {
            GroupColor::Grey => "disabledForeground",
            GroupColor::Blue => "charts.blue",
            GroupColor::Green => "charts.green",
            GroupColor::Yellow => "charts.yellow",
            GroupColor::Orange => "charts.orange",
            GroupColor::Red => "charts.red",
            GroupColor::Purple => "charts.purple",
            GroupColor::Pink => "terminal.ansiMagenta",
        }
    }
}

impl std::fmt::Display for GroupColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GroupColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grey" | "gray" => Ok(GroupColor::Grey),
            "blue" => Ok(GroupColor::Blue),
            "green" => Ok(GroupColor::Green),
            "yellow" => Ok(GroupColor::Yellow),
            "orange" => Ok(GroupColor::Orange),
            "red" => Ok(GroupColor::Red),
            "purple" => Ok(GroupColor::Purple),
            "pink" => Ok(GroupColor::Pink),
            _ => Err(format!("Unknown group color: {}", s)),
        }
    }
}
