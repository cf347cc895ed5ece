//! HTTP device adapter error types.

use wordclock_domain::error::WordclockError;

/// Errors raised while talking to the device.
#[derive(Debug, thiserror::Error)]
pub enum DeviceHttpError {
    /// The configured base URL cannot be parsed.
    #[error("invalid device base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request did not complete (DNS, connect, timeout, body read).
    #[error("request to device failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The device answered with a non-success status.
    #[error("device answered {path} with HTTP {status}")]
    Status { path: &'static str, status: u16 },
}

impl From<reqwest::Error> for DeviceHttpError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

impl From<DeviceHttpError> for WordclockError {
    fn from(err: DeviceHttpError) -> Self {
        WordclockError::Device(Box::new(err))
    }
}
