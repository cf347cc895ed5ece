//! # wordclock-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceApi` — the wordclock's plain-text HTTP endpoints
//!   - `PanelHost` — the page hosting the panel (alerts, reloads)
//! - Define the **driving/inbound** use-case struct:
//!   - `ControlPanel` — tabs, toggle, brightness, colour, polling, update
//! - Provide **in-process infrastructure** that doesn't need IO:
//!   - `PanelStore` — watch channel holding the current `PanelState`
//!   - `StatusPoller` — cancellable repeating status/log refresh
//!   - `WriteQueue` — latest-value-wins queue for control writes
//!
//! ## Dependency rule
//! Depends on `wordclock-domain` only (plus `tokio` for tasks and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod panel_store;
pub mod poller;
pub mod ports;
pub mod services;
pub mod write_queue;
