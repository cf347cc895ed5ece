//! Device connection configuration.

use reqwest::Url;
use serde::Deserialize;

use crate::error::DeviceHttpError;

/// Where the wordclock lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpDeviceConfig {
    /// Base URL of the device, e.g. `http://wordclock.local`.
    pub base_url: String,
    /// Per-request timeout in seconds. `None` waits as long as the
    /// connection stays open.
    pub request_timeout_secs: Option<u64>,
}

impl Default for HttpDeviceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://wordclock.local".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl HttpDeviceConfig {
    /// Parse [`base_url`](Self::base_url), with a trailing `/` so endpoints
    /// resolve below its path.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHttpError::InvalidBaseUrl`] when the URL cannot be
    /// parsed or cannot carry a path.
    pub fn parse_base_url(&self) -> Result<Url, DeviceHttpError> {
        let invalid = |reason: String| DeviceHttpError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let mut base = Url::parse(&self.base_url).map_err(|err| invalid(err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("cannot be used as a base URL".to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base)
    }
}
