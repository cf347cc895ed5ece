//! Panel state store backed by a tokio [`watch`] channel.
//!
//! The store holds exactly one [`PanelState`] value. Writers replace it as a
//! whole; readers get a clone, or subscribe to be told when it changes.

use tokio::sync::watch;

use wordclock_domain::panel::{PanelState, PanelView, render};

/// Shared holder of the current [`PanelState`].
pub struct PanelStore {
    sender: watch::Sender<PanelState>,
}

impl Default for PanelStore {
    fn default() -> Self {
        Self::new(PanelState::default())
    }
}

impl PanelStore {
    /// Create a store seeded with `initial`.
    #[must_use]
    pub fn new(initial: PanelState) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> PanelState {
        self.sender.borrow().clone()
    }

    /// Render the current state.
    #[must_use]
    pub fn view(&self) -> PanelView {
        render(&self.sender.borrow())
    }

    /// Replace the state with `f(current)`.
    ///
    /// Succeeds even when nobody is subscribed.
    pub fn update(&self, f: impl FnOnce(PanelState) -> PanelState) {
        self.sender.send_modify(|state| {
            let current = std::mem::take(state);
            *state = f(current);
        });
    }

    /// Subscribe to state changes.
    ///
    /// The receiver sees the current value immediately and every
    /// replacement made afterwards.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PanelState> {
        self.sender.subscribe()
    }
}
