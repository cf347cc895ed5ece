//! LED colour as six hex digits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An `RRGGBB` colour without the leading `#`.
///
/// The digits keep the case they were entered with; the device accepts
/// either.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse the value of a colour picker (`#rrggbb`), dropping the `#`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidColor`] unless exactly six hex
    /// digits remain.
    pub fn from_picker(value: &str) -> Result<Self, ValidationError> {
        value.strip_prefix('#').unwrap_or(value).parse()
    }

    /// The six digits, as sent in `/setColor?color=`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value a colour picker expects (`#rrggbb`).
    #[must_use]
    pub fn to_picker(&self) -> String {
        format!("#{}", self.0)
    }

    /// Split into red, green and blue channels.
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or_default()
        };
        (channel(0..2), channel(2..4), channel(4..6))
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self("ffffff".to_string())
    }
}

impl FromStr for HexColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 6 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(ValidationError::InvalidColor(s.to_string()))
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
