//! Host port — the page the panel is shown in.

use std::sync::Arc;
use std::time::Duration;

/// Side effects the panel asks of whatever displays it.
pub trait PanelHost {
    /// Show a blocking message to the user.
    fn alert(&self, message: &str);

    /// Reload the whole page once `after` has elapsed.
    fn schedule_reload(&self, after: Duration);
}

impl<T: PanelHost + ?Sized> PanelHost for Arc<T> {
    fn alert(&self, message: &str) {
        (**self).alert(message);
    }

    fn schedule_reload(&self, after: Duration) {
        (**self).schedule_reload(after);
    }
}
