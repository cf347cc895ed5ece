//! Device port — the wordclock's control endpoints.
//!
//! Every call maps to one plain-text HTTP GET on the device. Read calls
//! return the raw response body; interpreting it is the caller's job so
//! that the same rules apply whichever adapter is plugged in.

use std::future::Future;
use std::sync::Arc;

use wordclock_domain::brightness::Brightness;
use wordclock_domain::color::HexColor;
use wordclock_domain::error::WordclockError;
use wordclock_domain::power::PowerState;

/// How the device answered `/checkForUpdate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResponse {
    /// 2xx — the update has started and the device will restart.
    Accepted,
    /// Any other HTTP status.
    Rejected { status: u16 },
}

/// Client for a wordclock's HTTP endpoints.
///
/// Errors are transport-level: the request did not complete, or (for calls
/// other than [`check_for_update`](Self::check_for_update)) the device
/// answered with a non-success status.
pub trait DeviceApi {
    /// `GET /status` — raw body, normally `on` or `off`.
    fn status(&self) -> impl Future<Output = Result<String, WordclockError>> + Send;

    /// `GET /log` — device log text.
    fn log(&self) -> impl Future<Output = Result<String, WordclockError>> + Send;

    /// `GET /toggle?state=on|off`. The response body is ignored.
    fn toggle(&self, state: PowerState) -> impl Future<Output = Result<(), WordclockError>> + Send;

    /// `GET /getBrightness` — raw body, normally an integer.
    fn brightness(&self) -> impl Future<Output = Result<String, WordclockError>> + Send;

    /// `GET /setBrightness?level=<n>`. The response body is ignored.
    fn set_brightness(
        &self,
        level: Brightness,
    ) -> impl Future<Output = Result<(), WordclockError>> + Send;

    /// `GET /setColor?color=<rrggbb>`. The response body is ignored.
    fn set_color(&self, color: &HexColor)
    -> impl Future<Output = Result<(), WordclockError>> + Send;

    /// `GET /checkForUpdate` — only the status code matters.
    fn check_for_update(
        &self,
    ) -> impl Future<Output = Result<UpdateResponse, WordclockError>> + Send;

    /// `GET /restart`. The response body is ignored.
    fn restart(&self) -> impl Future<Output = Result<(), WordclockError>> + Send;

    /// `GET /version` — firmware version string.
    fn firmware_version(&self) -> impl Future<Output = Result<String, WordclockError>> + Send;
}

impl<T: DeviceApi + Send + Sync> DeviceApi for Arc<T> {
    fn status(&self) -> impl Future<Output = Result<String, WordclockError>> + Send {
        (**self).status()
    }

    fn log(&self) -> impl Future<Output = Result<String, WordclockError>> + Send {
        (**self).log()
    }

    fn toggle(&self, state: PowerState) -> impl Future<Output = Result<(), WordclockError>> + Send {
        (**self).toggle(state)
    }

    fn brightness(&self) -> impl Future<Output = Result<String, WordclockError>> + Send {
        (**self).brightness()
    }

    fn set_brightness(
        &self,
        level: Brightness,
    ) -> impl Future<Output = Result<(), WordclockError>> + Send {
        (**self).set_brightness(level)
    }

    fn set_color(
        &self,
        color: &HexColor,
    ) -> impl Future<Output = Result<(), WordclockError>> + Send {
        (**self).set_color(color)
    }

    fn check_for_update(
        &self,
    ) -> impl Future<Output = Result<UpdateResponse, WordclockError>> + Send {
        (**self).check_for_update()
    }

    fn restart(&self) -> impl Future<Output = Result<(), WordclockError>> + Send {
        (**self).restart()
    }

    fn firmware_version(&self) -> impl Future<Output = Result<String, WordclockError>> + Send {
        (**self).firmware_version()
    }
}
