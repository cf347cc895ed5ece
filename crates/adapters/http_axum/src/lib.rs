//! # wordclock-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum) that serves the
//! wordclock control panel.
//!
//! ## Responsibilities
//! - Render the control page server-side with askama templates: tab bar,
//!   power toggle, brightness slider, colour picker, device log and the
//!   firmware update controls
//! - Turn form posts into [`ControlPanel`](wordclock_app::services::control_panel::ControlPanel)
//!   calls and redirect back to the page (PRG pattern)
//! - Keep the page live with `<meta http-equiv="refresh">` at the poll
//!   interval
//! - Expose the rendered panel as JSON under `/api/panel`
//!
//! ## Dependency rule
//! Depends on `wordclock-app` (services and port traits) and
//! `wordclock-domain`. Never leaks axum types into either.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod host;
pub mod router;
pub mod state;
