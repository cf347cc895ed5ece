//! Tabs — the panels of the control page and their nav buttons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One panel of the control page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Power, colour and brightness controls.
    #[default]
    Control,
    /// Device log viewer.
    Log,
    /// Restart, firmware update and build info.
    Update,
}

impl Tab {
    /// Every tab, in navigation order.
    pub const ALL: [Tab; 3] = [Tab::Control, Tab::Log, Tab::Update];

    /// Identifier of the tab panel.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Control => "control",
            Self::Log => "log",
            Self::Update => "update",
        }
    }

    /// Identifier of the nav button that activates this tab (`btn-<id>`).
    #[must_use]
    pub fn button_id(self) -> &'static str {
        match self {
            Self::Control => "btn-control",
            Self::Log => "btn-log",
            Self::Update => "btn-update",
        }
    }

    /// Caption shown on the nav button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Control => "Bediening",
            Self::Log => "Log",
            Self::Update => "Instellingen",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| ValidationError::UnknownTab(s.to_string()))
    }
}

/// The set of tabs with exactly one of them active.
///
/// Holding the active tab as a single value makes "exactly one active"
/// hold by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabBar {
    active: Tab,
}

impl TabBar {
    /// The currently active tab.
    #[must_use]
    pub fn active(self) -> Tab {
        self.active
    }

    /// Deactivate every tab and activate `tab`.
    #[must_use]
    pub fn show(self, tab: Tab) -> Self {
        Self { active: tab }
    }

    /// Whether `tab` is the active one.
    #[must_use]
    pub fn is_active(self, tab: Tab) -> bool {
        self.active == tab
    }
}
