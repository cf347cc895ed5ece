//! # wordclock-adapter-virtual
//!
//! Virtual wordclock that lives in process, for demos and tests.
//!
//! ## Behaviour
//!
//! | Call | Effect |
//! |------|--------|
//! | `status` | `on` / `off` |
//! | `toggle` | sets power, logs the change |
//! | `brightness` / `set_brightness` | integer level `0..=255` |
//! | `set_color` | stores the colour, logs it |
//! | `log` | ring buffer, oldest line first |
//! | `check_for_update` | answers with the configured HTTP status |
//! | `restart` | logs the restart |
//! | `firmware_version` | the configured version string |
//!
//! ## Dependency rule
//!
//! Depends on `wordclock-app` (port traits) and `wordclock-domain` only.

mod log_buffer;

pub use log_buffer::LogBuffer;

use std::sync::{Mutex, MutexGuard, PoisonError};

use wordclock_app::ports::{DeviceApi, UpdateResponse};
use wordclock_domain::brightness::Brightness;
use wordclock_domain::color::HexColor;
use wordclock_domain::error::WordclockError;
use wordclock_domain::power::PowerState;

/// Number of log lines the virtual device keeps.
pub const LOG_CAPACITY: usize = 150;

/// Errors the virtual device can answer with.
#[derive(Debug, thiserror::Error)]
pub enum VirtualDeviceError {
    /// The simulated device is offline.
    #[error("virtual device is offline")]
    Offline,
}

impl From<VirtualDeviceError> for WordclockError {
    fn from(err: VirtualDeviceError) -> Self {
        WordclockError::Device(Box::new(err))
    }
}

#[derive(Debug)]
struct State {
    power: PowerState,
    brightness: Brightness,
    color: HexColor,
    log: LogBuffer,
    update_status: u16,
    online: bool,
}

/// A simulated wordclock.
pub struct VirtualWordclock {
    version: String,
    state: Mutex<State>,
}

impl Default for VirtualWordclock {
    fn default() -> Self {
        let mut log = LogBuffer::new(LOG_CAPACITY);
        log.push("Virtual wordclock started");
        Self {
            version: "virtual".to_string(),
            state: Mutex::new(State {
                power: PowerState::On,
                brightness: Brightness::default(),
                color: HexColor::default(),
                log,
                update_status: 200,
                online: true,
            }),
        }
    }
}

impl VirtualWordclock {
    /// Set the firmware version reported by `/version`.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// HTTP status the device answers `/checkForUpdate` with.
    pub fn set_update_status(&self, status: u16) {
        self.lock().update_status = status;
    }

    /// Take the device off the network (every call fails) or bring it back.
    pub fn set_online(&self, online: bool) {
        self.lock().online = online;
    }

    /// Current power state, as the device sees it.
    #[must_use]
    pub fn power(&self) -> PowerState {
        self.lock().power
    }

    /// Current brightness, as the device sees it.
    #[must_use]
    pub fn brightness_level(&self) -> Brightness {
        self.lock().brightness
    }

    /// Current colour, as the device sees it.
    #[must_use]
    pub fn color(&self) -> HexColor {
        self.lock().color.clone()
    }

    /// Append a line to the device log.
    pub fn log_line(&self, line: impl Into<String>) {
        self.lock().log.push(line);
    }

    /// Run `f` against the state if the device is online.
    fn with_state<T>(&self, f: impl FnOnce(&mut State) -> T) -> Result<T, WordclockError> {
        let mut state = self.lock();
        if !state.online {
            return Err(VirtualDeviceError::Offline.into());
        }
        Ok(f(&mut state))
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeviceApi for VirtualWordclock {
    async fn status(&self) -> Result<String, WordclockError> {
        self.with_state(|state| state.power.as_query_value().to_string())
    }

    async fn log(&self) -> Result<String, WordclockError> {
        self.with_state(|state| state.log.render())
    }

    async fn toggle(&self, power: PowerState) -> Result<(), WordclockError> {
        self.with_state(|state| {
            state.power = power;
            state.log.push(format!("Wordclock turned {power}"));
        })
    }

    async fn brightness(&self) -> Result<String, WordclockError> {
        self.with_state(|state| state.brightness.to_string())
    }

    async fn set_brightness(&self, level: Brightness) -> Result<(), WordclockError> {
        self.with_state(|state| state.brightness = level)
    }

    async fn set_color(&self, color: &HexColor) -> Result<(), WordclockError> {
        self.with_state(|state| {
            let (r, g, b) = color.rgb();
            state.log.push(format!("Color set to R={r} G={g} B={b}"));
            state.color = color.clone();
        })
    }

    async fn check_for_update(&self) -> Result<UpdateResponse, WordclockError> {
        self.with_state(|state| {
            if (200..300).contains(&state.update_status) {
                state.log.push("Firmware update manually started via UI");
                UpdateResponse::Accepted
            } else {
                UpdateResponse::Rejected {
                    status: state.update_status,
                }
            }
        })
    }

    async fn restart(&self) -> Result<(), WordclockError> {
        self.with_state(|state| {
            tracing::info!("virtual wordclock restarting");
            state.log.push("Restart requested via dashboard");
        })
    }

    async fn firmware_version(&self) -> Result<String, WordclockError> {
        self.with_state(|_| self.version.clone())
    }
}
