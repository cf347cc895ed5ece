//! `reqwest` client for the wordclock's HTTP endpoints.

use std::time::Duration;

use reqwest::{Client, Response, Url};
use wordclock_app::ports::{DeviceApi, UpdateResponse};
use wordclock_domain::brightness::Brightness;
use wordclock_domain::color::HexColor;
use wordclock_domain::error::WordclockError;
use wordclock_domain::power::PowerState;

use crate::config::HttpDeviceConfig;
use crate::error::DeviceHttpError;

const STATUS: &str = "status";
const LOG: &str = "log";
const TOGGLE: &str = "toggle";
const GET_BRIGHTNESS: &str = "getBrightness";
const SET_BRIGHTNESS: &str = "setBrightness";
const SET_COLOR: &str = "setColor";
const CHECK_FOR_UPDATE: &str = "checkForUpdate";
const RESTART: &str = "restart";
const VERSION: &str = "version";

/// A wordclock reachable over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDevice {
    client: Client,
    base: Url,
}

impl HttpDevice {
    /// Build a client for the device described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHttpError::InvalidBaseUrl`] when the base URL cannot
    /// be parsed, or [`DeviceHttpError::Transport`] when the HTTP client
    /// cannot be built.
    pub fn new(config: &HttpDeviceConfig) -> Result<Self, DeviceHttpError> {
        let base = config.parse_base_url()?;

        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        tracing::info!(base_url = %base, "wordclock http client ready");
        Ok(Self { client, base })
    }

    /// The URL every endpoint is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    async fn get(
        &self,
        path: &'static str,
        query: Option<(&str, &str)>,
    ) -> Result<Response, DeviceHttpError> {
        let url = self
            .base
            .join(path)
            .map_err(|err| DeviceHttpError::InvalidBaseUrl {
                url: self.base.to_string(),
                reason: err.to_string(),
            })?;
        let mut request = self.client.get(url);
        if let Some(pair) = query {
            request = request.query(&[pair]);
        }
        let response = request.send().await?;
        tracing::debug!(path, status = response.status().as_u16(), "device answered");
        Ok(response)
    }

    /// `GET` that must succeed; the body is returned as text.
    async fn get_text(
        &self,
        path: &'static str,
        query: Option<(&str, &str)>,
    ) -> Result<String, DeviceHttpError> {
        let response = self.get(path, query).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeviceHttpError::Status {
                path,
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }

    /// `GET` that must succeed; the body is discarded.
    async fn send(
        &self,
        path: &'static str,
        query: Option<(&str, &str)>,
    ) -> Result<(), DeviceHttpError> {
        self.get_text(path, query).await.map(drop)
    }
}

impl DeviceApi for HttpDevice {
    async fn status(&self) -> Result<String, WordclockError> {
        Ok(self.get_text(STATUS, None).await?)
    }

    async fn log(&self) -> Result<String, WordclockError> {
        Ok(self.get_text(LOG, None).await?)
    }

    async fn toggle(&self, state: PowerState) -> Result<(), WordclockError> {
        Ok(self
            .send(TOGGLE, Some(("state", state.as_query_value())))
            .await?)
    }

    async fn brightness(&self) -> Result<String, WordclockError> {
        Ok(self.get_text(GET_BRIGHTNESS, None).await?)
    }

    async fn set_brightness(&self, level: Brightness) -> Result<(), WordclockError> {
        let level = level.to_string();
        Ok(self.send(SET_BRIGHTNESS, Some(("level", level.as_str()))).await?)
    }

    async fn set_color(&self, color: &HexColor) -> Result<(), WordclockError> {
        Ok(self.send(SET_COLOR, Some(("color", color.as_str()))).await?)
    }

    async fn check_for_update(&self) -> Result<UpdateResponse, WordclockError> {
        let response = self.get(CHECK_FOR_UPDATE, None).await?;
        let status = response.status();
        if status.is_success() {
            Ok(UpdateResponse::Accepted)
        } else {
            Ok(UpdateResponse::Rejected {
                status: status.as_u16(),
            })
        }
    }

    async fn restart(&self) -> Result<(), WordclockError> {
        Ok(self.send(RESTART, None).await?)
    }

    async fn firmware_version(&self) -> Result<String, WordclockError> {
        Ok(self.get_text(VERSION, None).await?)
    }
}
