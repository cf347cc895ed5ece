//! Panel state and its rendering.
//!
//! [`PanelState`] is everything the control page shows: which tab is
//! active, the last known device snapshot, and the firmware update status
//! line. [`render`] turns it into a [`PanelView`], a flat description of
//! every element on the page. Rendering is a pure function of the state;
//! no element is ever written to directly.

use serde::{Deserialize, Serialize};

use crate::brightness::Brightness;
use crate::color::HexColor;
use crate::snapshot::{DeviceSnapshot, PolledAt};
use crate::tab::{Tab, TabBar};

/// Status line shown after the device accepted an update request.
pub const UPDATE_STARTED_TEXT: &str = "Update gestart. ESP herstart...";
/// Alert raised when the device refused an update request.
pub const UPDATE_FAILED_TEXT: &str = "Update mislukt";

/// Complete state of the control page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelState {
    pub tabs: TabBar,
    pub device: DeviceSnapshot,
    /// Text of the `status` line on the settings tab.
    pub update_status: Option<String>,
}

/// One nav button and its panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabView {
    pub id: &'static str,
    pub button_id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Rendered page: one field per element of the control page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub active_tab: Tab,
    pub tabs: Vec<TabView>,
    /// `clockToggle` checkbox.
    pub clock_checked: bool,
    /// `clockStatusText` label; empty until the power state is known.
    pub clock_status_text: String,
    /// `brightnessSlider` position.
    pub brightness_level: u8,
    /// `brightnessValue` label; `?` until the level is known.
    pub brightness_value: String,
    /// `colorPicker` value (`#rrggbb`).
    pub color_value: String,
    /// `logBox` text content.
    pub log_text: String,
    /// `status` line on the settings tab.
    pub update_status: String,
    pub firmware_version: String,
    pub last_polled: Option<PolledAt>,
}

impl PanelView {
    /// The view of the active tab.
    #[must_use]
    pub fn active(&self) -> Option<&TabView> {
        self.tabs.iter().find(|tab| tab.active)
    }
}

/// Render the page for `state`.
#[must_use]
pub fn render(state: &PanelState) -> PanelView {
    let device = &state.device;
    let tabs = Tab::ALL
        .into_iter()
        .map(|tab| TabView {
            id: tab.id(),
            button_id: tab.button_id(),
            label: tab.label(),
            active: state.tabs.is_active(tab),
        })
        .collect();

    PanelView {
        active_tab: state.tabs.active(),
        tabs,
        clock_checked: device.power.is_some_and(|p| p.is_on()),
        clock_status_text: device
            .power
            .map(|p| p.label().to_string())
            .unwrap_or_default(),
        brightness_level: device.brightness.unwrap_or_default().level(),
        brightness_value: device
            .brightness
            .map_or_else(|| "?".to_string(), |b: Brightness| b.to_string()),
        color_value: device.color.clone().unwrap_or_default().to_picker(),
        log_text: device.log.as_str().to_string(),
        update_status: state.update_status.clone().unwrap_or_default(),
        firmware_version: device.firmware_version.clone().unwrap_or_default(),
        last_polled: device.last_polled,
    }
}
