//! # wordclockd — wordclock control panel daemon
//!
//! Composition root that wires the adapters together and serves the panel.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise `tracing` with the configured filter
//! - Pick the device adapter: a real wordclock over HTTP or the virtual one
//! - Build the control panel service and the axum router, bind the listener
//! - Load the panel and start the status poller in the background, so a slow
//!   or missing device never holds up the page
//! - Serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

use wordclock_adapter_http_axum::host::PageHost;
use wordclock_adapter_http_axum::router;
use wordclock_adapter_http_axum::state::{AppState, Panel};
use wordclock_adapter_http_device::HttpDevice;
use wordclock_adapter_virtual::VirtualWordclock;
use wordclock_app::poller::StatusPoller;
use wordclock_app::ports::DeviceApi;
use wordclock_app::services::control_panel::ControlPanel;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    if config.device.virtual_enabled {
        tracing::info!("controlling the virtual wordclock");
        serve(VirtualWordclock::default(), &config).await
    } else {
        let device = HttpDevice::new(&config.device.http())
            .context("failed to set up the wordclock client")?;
        serve(device, &config).await
    }
}

async fn serve<D>(device: D, config: &Config) -> anyhow::Result<()>
where
    D: DeviceApi + Send + Sync + 'static,
{
    let panel = Arc::new(
        ControlPanel::new(device, PageHost::default())
            .with_reload_delay(config.panel.reload_delay()),
    );
    let state = AppState::new(Arc::clone(&panel), config.panel.poll_interval());
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "wordclockd listening");

    let background = Background::start(&panel, config.panel.poll_interval());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    background.stop();
    panel.settle_writes().await;
    tracing::info!("wordclockd stopped");
    Ok(())
}

/// Device work that runs next to the server for the panel's lifetime.
struct Background {
    load: JoinHandle<()>,
    poller: StatusPoller,
}

impl Background {
    /// Read the initial controls and start polling, without waiting for the
    /// device. The poller's first tick does the initial status and log fetch.
    fn start<D>(panel: &Arc<Panel<D>>, poll_interval: Duration) -> Self
    where
        D: DeviceApi + Send + Sync + 'static,
    {
        let loading = Arc::clone(panel);
        let load = tokio::spawn(async move { loading.load_controls().await });
        let poller = StatusPoller::start(Arc::clone(panel), poll_interval);
        Self { load, poller }
    }

    fn stop(mut self) {
        self.load.abort();
        self.poller.stop();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use wordclock_app::ports::UpdateResponse;
    use wordclock_domain::brightness::Brightness;
    use wordclock_domain::color::HexColor;
    use wordclock_domain::error::WordclockError;
    use wordclock_domain::power::PowerState;

    /// A device that accepts connections but never answers.
    struct SilentDevice;

    impl DeviceApi for SilentDevice {
        async fn status(&self) -> Result<String, WordclockError> {
            std::future::pending().await
        }
        async fn log(&self) -> Result<String, WordclockError> {
            std::future::pending().await
        }
        async fn toggle(&self, _state: PowerState) -> Result<(), WordclockError> {
            std::future::pending().await
        }
        async fn brightness(&self) -> Result<String, WordclockError> {
            std::future::pending().await
        }
        async fn set_brightness(&self, _level: Brightness) -> Result<(), WordclockError> {
            std::future::pending().await
        }
        async fn set_color(&self, _color: &HexColor) -> Result<(), WordclockError> {
            std::future::pending().await
        }
        async fn check_for_update(&self) -> Result<UpdateResponse, WordclockError> {
            std::future::pending().await
        }
        async fn restart(&self) -> Result<(), WordclockError> {
            std::future::pending().await
        }
        async fn firmware_version(&self) -> Result<String, WordclockError> {
            std::future::pending().await
        }
    }

    fn panel<D>(device: D) -> Arc<Panel<D>>
    where
        D: DeviceApi + Send + Sync + 'static,
    {
        Arc::new(ControlPanel::new(device, PageHost::default()))
    }

    #[tokio::test]
    async fn should_serve_page_while_device_is_silent() {
        let panel = panel(SilentDevice);
        let background = Background::start(&panel, Duration::from_secs(5));
        let app = router::build(AppState::new(Arc::clone(&panel), Duration::from_secs(5)));

        let response = tokio::time::timeout(
            Duration::from_secs(2),
            app.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap()),
        )
        .await
        .expect("page must not wait for the device")
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains(r#"<span id="brightnessValue">?</span>"#));
        background.stop();
    }

    #[tokio::test]
    async fn should_load_controls_and_poll_in_background() {
        let panel = panel(VirtualWordclock::default().with_version("3.0.0"));
        let background = Background::start(&panel, Duration::from_secs(5));

        tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                let view = panel.view();
                if view.firmware_version == "3.0.0" && view.last_polled.is_some() {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("background load must finish");

        let view = panel.view();
        assert!(view.clock_checked);
        assert!(view.log_text.contains("Virtual wordclock started"));
        background.stop();
    }
}
