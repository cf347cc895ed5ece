//! Status poller — refreshes power state and log on a fixed interval.
//!
//! The poller is a tokio task owned by [`StatusPoller`]. It polls once as
//! soon as it starts and then once per interval until [`StatusPoller::stop`]
//! is called or the poller is dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::ports::{DeviceApi, PanelHost};
use crate::services::control_panel::ControlPanel;

/// Default interval between two polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5_000);

/// Handle to the background poll task.
pub struct StatusPoller {
    interval: Duration,
    handle: Option<JoinHandle<()>>,
}

impl StatusPoller {
    /// Spawn the poll loop for `panel`.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn start<D, H>(panel: Arc<ControlPanel<D, H>>, interval: Duration) -> Self
    where
        D: DeviceApi + Send + Sync + 'static,
        H: PanelHost + Send + Sync + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // a slow device delays the next poll instead of causing a burst
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                tracing::debug!("polling status and log");
                panel.update_status_and_log().await;
            }
        });
        tracing::info!(interval_ms = interval.as_millis(), "status poller started");

        Self {
            interval,
            handle: Some(handle),
        }
    }

    /// The interval this poller was started with.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the poll task is still scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop polling. Calling it again has no effect.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::info!("status poller stopped");
        }
    }
}

impl Drop for StatusPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
