//! Device snapshot — the last known state of the remote wordclock.
//!
//! A snapshot is never mutated in place. Every update produces a new value
//! so readers always see a consistent picture.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::brightness::Brightness;
use crate::color::HexColor;
use crate::log::LogContent;
use crate::power::PowerState;

/// When the device last answered a status or log poll.
pub type PolledAt = DateTime<Utc>;

/// Last known state of the device.
///
/// `None` means the value has not been learned yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub power: Option<PowerState>,
    pub brightness: Option<Brightness>,
    /// Last colour pushed to the device; the device is never asked for it.
    pub color: Option<HexColor>,
    pub log: LogContent,
    pub firmware_version: Option<String>,
    pub last_polled: Option<PolledAt>,
}

impl DeviceSnapshot {
    #[must_use]
    pub fn with_power(self, power: PowerState) -> Self {
        Self {
            power: Some(power),
            ..self
        }
    }

    #[must_use]
    pub fn with_brightness(self, brightness: Brightness) -> Self {
        Self {
            brightness: Some(brightness),
            ..self
        }
    }

    #[must_use]
    pub fn with_color(self, color: HexColor) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    #[must_use]
    pub fn with_log(self, log: LogContent) -> Self {
        Self { log, ..self }
    }

    #[must_use]
    pub fn with_firmware_version(self, version: impl Into<String>) -> Self {
        Self {
            firmware_version: Some(version.into()),
            ..self
        }
    }

    #[must_use]
    pub fn polled_at(self, at: PolledAt) -> Self {
        Self {
            last_polled: Some(at),
            ..self
        }
    }

    /// Stamp the snapshot with the current time.
    #[must_use]
    pub fn polled_now(self) -> Self {
        self.polled_at(Utc::now())
    }
}
