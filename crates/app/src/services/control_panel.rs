//! Control panel service — every user interaction and poll of the panel.
//!
//! The service owns the [`PanelStore`]; each operation talks to the device
//! through [`DeviceApi`] and then replaces the stored [`PanelState`]. Device
//! failures are logged and swallowed, leaving the affected value stale until
//! the next successful poll. The firmware update flow is the one exception:
//! a refused update is reported through [`PanelHost::alert`].

use std::sync::Arc;
use std::time::Duration;

use wordclock_domain::brightness::Brightness;
use wordclock_domain::color::HexColor;
use wordclock_domain::error::WordclockError;
use wordclock_domain::log::LogContent;
use wordclock_domain::panel::{PanelState, PanelView, UPDATE_FAILED_TEXT, UPDATE_STARTED_TEXT};
use wordclock_domain::power::PowerState;
use wordclock_domain::tab::Tab;

use crate::panel_store::PanelStore;
use crate::ports::{DeviceApi, PanelHost, UpdateResponse};
use crate::write_queue::WriteQueue;

/// Default delay between an accepted update and the page reload.
pub const DEFAULT_RELOAD_DELAY: Duration = Duration::from_millis(10_000);

/// Result of [`ControlPanel::check_for_update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The device accepted; a reload has been scheduled.
    Started,
    /// The device refused; the user has been alerted.
    Failed,
    /// The request never completed; nothing was shown.
    Unreachable,
}

/// Application service behind the control page.
pub struct ControlPanel<D, H> {
    device: Arc<D>,
    host: H,
    store: PanelStore,
    power_writes: WriteQueue,
    brightness_writes: WriteQueue,
    color_writes: WriteQueue,
    reload_delay: Duration,
}

impl<D, H> ControlPanel<D, H>
where
    D: DeviceApi + Send + Sync + 'static,
    H: PanelHost,
{
    /// Create a panel talking to `device` and shown by `host`.
    pub fn new(device: D, host: H) -> Self {
        Self {
            device: Arc::new(device),
            host,
            store: PanelStore::default(),
            power_writes: WriteQueue::in_order("toggle"),
            brightness_writes: WriteQueue::new("brightness"),
            color_writes: WriteQueue::new("color"),
            reload_delay: DEFAULT_RELOAD_DELAY,
        }
    }

    /// Override the delay before the page reloads after an accepted update.
    #[must_use]
    pub fn with_reload_delay(mut self, delay: Duration) -> Self {
        self.reload_delay = delay;
        self
    }

    /// The store holding the current panel state.
    pub fn store(&self) -> &PanelStore {
        &self.store
    }

    /// The device this panel controls.
    pub fn device(&self) -> &D {
        &self.device
    }

    /// The host this panel reports to.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Render the current state.
    pub fn view(&self) -> PanelView {
        self.store.view()
    }

    /// Initial load: show the control tab, poll status and log, and read
    /// the brightness and firmware version.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) {
        tokio::join!(self.update_status_and_log(), self.load_controls());
    }

    /// The part of [`load`](Self::load) a [`StatusPoller`] does not cover:
    /// show the control tab and read the brightness and firmware version.
    ///
    /// [`StatusPoller`]: crate::poller::StatusPoller
    #[tracing::instrument(skip(self))]
    pub async fn load_controls(&self) {
        self.activate(Tab::Control);
        tokio::join!(self.refresh_brightness(), self.refresh_firmware_version());
    }

    /// Make tab `id` the only active tab.
    ///
    /// # Errors
    ///
    /// Returns [`WordclockError::Validation`] when no tab is called `id`;
    /// the active tab is left unchanged.
    pub fn show_tab(&self, id: &str) -> Result<Tab, WordclockError> {
        let tab: Tab = id.parse()?;
        self.activate(tab);
        Ok(tab)
    }

    /// Switch the clock on or off.
    ///
    /// The panel shows the new state at once and the request is queued
    /// behind earlier toggles; this does not wait for the device. A failed
    /// request is not rolled back; the next poll corrects it.
    pub fn toggle_clock(&self, checked: bool) {
        let power = PowerState::from(checked);
        self.store.update(|state| PanelState {
            device: state.device.with_power(power),
            ..state
        });
        let device = Arc::clone(&self.device);
        self.power_writes.submit(async move {
            if let Err(err) = device.toggle(power).await {
                tracing::warn!(%err, state = %power, "failed to toggle clock");
            }
        });
    }

    /// Refresh power state and log from the device.
    ///
    /// Both requests run concurrently and independently; a failure of one
    /// leaves its value stale without affecting the other. The poll time is
    /// only recorded when at least one of them answered.
    #[tracing::instrument(skip(self))]
    pub async fn update_status_and_log(&self) {
        let status = async {
            match self.device.status().await {
                Ok(body) => {
                    let power = PowerState::from_status_body(&body);
                    self.store.update(|state| PanelState {
                        device: state.device.with_power(power),
                        ..state
                    });
                    true
                }
                Err(err) => {
                    tracing::warn!(%err, "failed to fetch status");
                    false
                }
            }
        };
        let log = async {
            match self.device.log().await {
                Ok(body) => {
                    self.store.update(|state| PanelState {
                        device: state.device.with_log(LogContent::from(body)),
                        ..state
                    });
                    true
                }
                Err(err) => {
                    tracing::warn!(%err, "failed to fetch log");
                    false
                }
            }
        };
        let (status_ok, log_ok) = tokio::join!(status, log);

        if status_ok || log_ok {
            self.store.update(|state| PanelState {
                device: state.device.polled_now(),
                ..state
            });
        }
    }

    /// Ask the device to look for and install a firmware update.
    #[tracing::instrument(skip(self))]
    pub async fn check_for_update(&self) -> UpdateOutcome {
        match self.device.check_for_update().await {
            Ok(UpdateResponse::Accepted) => {
                tracing::info!("firmware update started");
                self.store.update(|state| PanelState {
                    update_status: Some(UPDATE_STARTED_TEXT.to_string()),
                    ..state
                });
                self.host.schedule_reload(self.reload_delay);
                UpdateOutcome::Started
            }
            Ok(UpdateResponse::Rejected { status }) => {
                tracing::warn!(status, "firmware update refused");
                self.host.alert(UPDATE_FAILED_TEXT);
                UpdateOutcome::Failed
            }
            Err(err) => {
                tracing::warn!(%err, "failed to reach device for update");
                UpdateOutcome::Unreachable
            }
        }
    }

    /// Show `level` and push it to the device.
    ///
    /// The request is queued; a later level cancels this one if it is still
    /// in flight.
    pub fn update_brightness(&self, level: Brightness) {
        self.store.update(|state| PanelState {
            device: state.device.with_brightness(level),
            ..state
        });
        let device = Arc::clone(&self.device);
        self.brightness_writes.submit(async move {
            if let Err(err) = device.set_brightness(level).await {
                tracing::warn!(%err, %level, "failed to set brightness");
            }
        });
    }

    /// Push the colour picked in a colour picker (`#rrggbb`) to the device.
    ///
    /// # Errors
    ///
    /// Returns [`WordclockError::Validation`] when the value is not a hex
    /// colour; nothing is sent in that case.
    pub fn set_color(&self, picker_value: &str) -> Result<HexColor, WordclockError> {
        let color = HexColor::from_picker(picker_value)?;
        self.store.update(|state| PanelState {
            device: state.device.with_color(color.clone()),
            ..state
        });
        let device = Arc::clone(&self.device);
        let pushed = color.clone();
        self.color_writes.submit(async move {
            if let Err(err) = device.set_color(&pushed).await {
                tracing::warn!(%err, color = %pushed, "failed to set color");
            }
        });
        Ok(color)
    }

    /// Restart the device.
    #[tracing::instrument(skip(self))]
    pub async fn restart_device(&self) {
        if let Err(err) = self.device.restart().await {
            tracing::warn!(%err, "failed to restart device");
        }
    }

    /// Wait until the queued toggle, brightness and colour writes finished.
    pub async fn settle_writes(&self) {
        tokio::join!(
            self.power_writes.settle(),
            self.brightness_writes.settle(),
            self.color_writes.settle(),
        );
    }

    fn activate(&self, tab: Tab) {
        self.store.update(|state| PanelState {
            tabs: state.tabs.show(tab),
            ..state
        });
    }

    async fn refresh_brightness(&self) {
        let body = match self.device.brightness().await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(%err, "failed to fetch brightness");
                return;
            }
        };
        match body.parse::<Brightness>() {
            Ok(level) => self.store.update(|state| PanelState {
                device: state.device.with_brightness(level),
                ..state
            }),
            Err(err) => tracing::warn!(%err, "device sent unreadable brightness"),
        }
    }

    async fn refresh_firmware_version(&self) {
        match self.device.firmware_version().await {
            Ok(version) => self.store.update(|state| PanelState {
                device: state.device.with_firmware_version(version.trim()),
                ..state
            }),
            Err(err) => tracing::warn!(%err, "failed to fetch firmware version"),
        }
    }
}
