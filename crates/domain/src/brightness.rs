//! Brightness level of the LEDs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// LED brightness, `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Brightness(u8);

impl Brightness {
    pub const MIN: Brightness = Brightness(0);
    pub const MAX: Brightness = Brightness(u8::MAX);

    #[must_use]
    pub fn new(level: u8) -> Self {
        Self(level)
    }

    /// Build from an arbitrary integer, clamping into `0..=255` the way the
    /// device does.
    #[must_use]
    pub fn from_level(level: i64) -> Self {
        Self(u8::try_from(level.clamp(0, i64::from(u8::MAX))).unwrap_or(u8::MAX))
    }

    #[must_use]
    pub fn level(self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(128)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Parses the plain-integer body of `/getBrightness`.
impl FromStr for Brightness {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self::from_level)
            .map_err(|_| ValidationError::InvalidBrightness(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_plain_integer_body() {
        assert_eq!("75".parse::<Brightness>().unwrap(), Brightness::new(75));
    }

    #[test]
    fn should_tolerate_trailing_newline() {
        assert_eq!("42\n".parse::<Brightness>().unwrap(), Brightness::new(42));
    }

    #[test]
    fn should_reject_non_numeric_body() {
        assert!(matches!(
            "bright".parse::<Brightness>(),
            Err(ValidationError::InvalidBrightness(_))
        ));
    }

    #[test]
    fn should_clamp_out_of_range_levels() {
        assert_eq!(Brightness::from_level(-5), Brightness::MIN);
        assert_eq!(Brightness::from_level(1000), Brightness::MAX);
        assert_eq!(Brightness::from_level(200), Brightness::new(200));
    }

    #[test]
    fn should_display_as_bare_number() {
        assert_eq!(Brightness::new(42).to_string(), "42");
    }
}
