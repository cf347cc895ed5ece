//! # wordclock-domain
//!
//! Pure domain model for the wordclock control panel.
//!
//! ## Responsibilities
//! - Foundational types: error conventions
//! - Define the **value types** mirrored from the device: power state,
//!   brightness, colour, log content
//! - Define **tabs** and the single-active-tab invariant
//! - Define the immutable **device snapshot** and **panel state**
//! - Render the panel state into a [`panel::PanelView`] (a pure function)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod brightness;
pub mod color;
pub mod log;
pub mod panel;
pub mod power;
pub mod snapshot;
pub mod tab;
