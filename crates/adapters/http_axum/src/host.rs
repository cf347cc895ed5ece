//! [`PanelHost`] for a server-rendered page.
//!
//! The page cannot be poked from the server, so alerts and reload requests
//! are parked here and consumed by the next render.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use wordclock_app::ports::PanelHost;

#[derive(Debug, Default)]
struct Pending {
    alerts: Vec<String>,
    reload_after: Option<Duration>,
}

/// Alerts and reloads waiting for the next page render.
#[derive(Debug, Default)]
pub struct PageHost {
    pending: Mutex<Pending>,
}

impl PageHost {
    /// Take every alert raised since the last render.
    pub fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut self.lock().alerts)
    }

    /// Take the scheduled reload delay, if any.
    pub fn take_reload(&self) -> Option<Duration> {
        self.lock().reload_after.take()
    }

    fn lock(&self) -> MutexGuard<'_, Pending> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PanelHost for PageHost {
    fn alert(&self, message: &str) {
        self.lock().alerts.push(message.to_string());
    }

    fn schedule_reload(&self, after: Duration) {
        self.lock().reload_after = Some(after);
    }
}
