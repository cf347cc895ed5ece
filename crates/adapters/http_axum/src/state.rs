//! Shared application state for axum handlers.

use std::sync::Arc;
use std::time::Duration;

use wordclock_app::ports::DeviceApi;
use wordclock_app::services::control_panel::ControlPanel;

use crate::host::PageHost;

/// The control panel service as served over HTTP.
pub type Panel<D> = ControlPanel<D, PageHost>;

/// Application state shared across all axum handlers.
///
/// Generic over the device type to avoid dynamic dispatch. `Clone` is
/// implemented manually so `D` does not need to be `Clone`.
pub struct AppState<D> {
    /// Control panel service, shared with the status poller.
    pub panel: Arc<Panel<D>>,
    /// Page refresh interval; matches the poll interval.
    pub refresh: Duration,
}

impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            panel: Arc::clone(&self.panel),
            refresh: self.refresh,
        }
    }
}

impl<D> AppState<D>
where
    D: DeviceApi + Send + Sync + 'static,
{
    /// Create the state from a panel already shared with background tasks.
    pub fn new(panel: Arc<Panel<D>>, refresh: Duration) -> Self {
        Self { panel, refresh }
    }
}
