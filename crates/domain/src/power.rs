//! Power state of the clock face.

use serde::{Deserialize, Serialize};

/// Label shown while the clock is on.
pub const STATUS_ON_TEXT: &str = "Wordclock aan";
/// Label shown while the clock is off.
pub const STATUS_OFF_TEXT: &str = "Wordclock uit";

/// Whether the clock face is lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    #[default]
    Off,
}

impl PowerState {
    /// Interpret a `/status` response body.
    ///
    /// Only the exact body `on` means on. Every other body, malformed ones
    /// included, is read as off.
    #[must_use]
    pub fn from_status_body(body: &str) -> Self {
        if body == "on" { Self::On } else { Self::Off }
    }

    /// Value sent as the `state` query parameter of `/toggle`.
    #[must_use]
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }

    /// Human readable status label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::On => STATUS_ON_TEXT,
            Self::Off => STATUS_OFF_TEXT,
        }
    }

    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for PowerState {
    fn from(checked: bool) -> Self {
        if checked { Self::On } else { Self::Off }
    }
}

impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}
