//! # wordclock-adapter-http-device
//!
//! [`DeviceApi`](wordclock_app::ports::DeviceApi) implementation that talks
//! to a real wordclock over HTTP with `reqwest`.
//!
//! Every operation is a single `GET` against the device's base URL. The
//! device answers in plain text; bodies are passed through untouched.
//!
//! ## Dependency rule
//!
//! Depends on `wordclock-app` (port traits) and `wordclock-domain`.

pub mod client;
pub mod config;
pub mod error;

pub use client::HttpDevice;
pub use config::HttpDeviceConfig;
pub use error::DeviceHttpError;
