//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use wordclock_app::ports::DeviceApi;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the JSON API under `/api` and the control page at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level.
pub fn build<D>(state: AppState<D>) -> Router
where
    D: DeviceApi + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use wordclock_app::ports::UpdateResponse;
    use wordclock_app::services::control_panel::ControlPanel;
    use wordclock_domain::brightness::Brightness;
    use wordclock_domain::color::HexColor;
    use wordclock_domain::error::WordclockError;
    use wordclock_domain::power::PowerState;

    use crate::host::PageHost;

    struct StubDevice {
        requests: Mutex<Vec<String>>,
        log: String,
        update: UpdateResponse,
    }

    impl StubDevice {
        fn new(log: &str, update: UpdateResponse) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                log: log.to_string(),
                update,
            }
        }

        fn record(&self, request: String) {
            self.requests.lock().unwrap().push(request);
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl DeviceApi for StubDevice {
        async fn status(&self) -> Result<String, WordclockError> {
            Ok("on".to_string())
        }
        async fn log(&self) -> Result<String, WordclockError> {
            Ok(self.log.clone())
        }
        async fn toggle(&self, state: PowerState) -> Result<(), WordclockError> {
            self.record(format!("/toggle?state={}", state.as_query_value()));
            Ok(())
        }
        async fn brightness(&self) -> Result<String, WordclockError> {
            Ok("75".to_string())
        }
        async fn set_brightness(&self, level: Brightness) -> Result<(), WordclockError> {
            self.record(format!("/setBrightness?level={level}"));
            Ok(())
        }
        async fn set_color(&self, color: &HexColor) -> Result<(), WordclockError> {
            self.record(format!("/setColor?color={color}"));
            Ok(())
        }
        async fn check_for_update(&self) -> Result<UpdateResponse, WordclockError> {
            self.record("/checkForUpdate".to_string());
            Ok(self.update)
        }
        async fn restart(&self) -> Result<(), WordclockError> {
            self.record("/restart".to_string());
            Ok(())
        }
        async fn firmware_version(&self) -> Result<String, WordclockError> {
            Ok("1.4.0".to_string())
        }
    }

    fn test_state(device: StubDevice) -> AppState<StubDevice> {
        let panel = ControlPanel::new(device, PageHost::default());
        AppState::new(Arc::new(panel), Duration::from_secs(5))
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn post(app: &Router, uri: &str, form: &str) -> StatusCode {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(form.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state(StubDevice::new("", UpdateResponse::Accepted)));

        let (status, body) = get(&app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_render_every_panel_element() {
        let state = test_state(StubDevice::new("", UpdateResponse::Accepted));
        state.panel.load().await;
        let app = build(state);

        let (status, body) = get(&app, "/").await;

        assert_eq!(status, StatusCode::OK);
        for id in [
            "clockToggle",
            "clockStatusText",
            "brightnessSlider",
            "brightnessValue",
            "colorPicker",
            "logBox",
            "id=\"status\"",
            "btn-control",
            "btn-log",
            "btn-update",
        ] {
            assert!(body.contains(id), "missing {id}");
        }
        assert!(body.contains("Wordclock aan"));
        assert!(body.contains(r#"<span id="brightnessValue">75</span>"#));
        assert!(body.contains(r#"<meta http-equiv="refresh" content="5">"#));
    }

    #[tokio::test]
    async fn should_escape_device_log() {
        let state = test_state(StubDevice::new("<b>boot</b>\n", UpdateResponse::Accepted));
        state.panel.update_status_and_log().await;
        let app = build(state);

        let (_, body) = get(&app, "/").await;

        assert!(body.contains("&lt;b&gt;boot&lt;/b&gt;"));
        assert!(!body.contains("<b>boot</b>"));
    }

    #[tokio::test]
    async fn should_switch_tab_and_redirect() {
        let state = test_state(StubDevice::new("", UpdateResponse::Accepted));
        let panel = Arc::clone(&state.panel);
        let app = build(state);

        let (status, _) = get(&app, "/tabs/log").await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        let view = panel.view();
        assert_eq!(view.active().map(|tab| tab.button_id), Some("btn-log"));
        let (_, body) = get(&app, "/").await;
        assert!(body.contains(r#"<section id="log" class="tab active">"#));
        assert!(body.contains(r#"<section id="control" class="tab">"#));
        assert!(body.contains(r#"<section id="update" class="tab">"#));
        assert!(body.contains(r#"<button type="submit" id="btn-log" class="active">"#));
        assert!(body.contains(r#"<button type="submit" id="btn-control">"#));
    }

    #[tokio::test]
    async fn should_mark_exactly_one_tab_and_button_active() {
        let state = test_state(StubDevice::new("", UpdateResponse::Accepted));
        let panel = Arc::clone(&state.panel);
        let app = build(state);

        for id in ["log", "update", "control"] {
            panel.show_tab(id).unwrap();
            let (_, body) = get(&app, "/").await;

            assert_eq!(body.matches(r#"class="tab""#).count(), 2, "{id}");
            assert_eq!(body.matches(r#"class="tab active""#).count(), 1, "{id}");
            assert!(body.contains(&format!(r#"<section id="{id}" class="tab active">"#)));
            let nav = &body[body.find("<nav>").unwrap()..body.find("</nav>").unwrap()];
            assert_eq!(nav.matches("<button").count(), 3, "{id}");
            assert_eq!(nav.matches(r#"class="active""#).count(), 1, "{id}");
            assert!(nav.contains(&format!(r#"id="btn-{id}" class="active""#)));
        }
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_tab() {
        let app = build(test_state(StubDevice::new("", UpdateResponse::Accepted)));

        let (status, body) = get(&app, "/tabs/settings").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("error"));
    }

    #[tokio::test]
    async fn should_toggle_on_when_checkbox_submitted() {
        let state = test_state(StubDevice::new("", UpdateResponse::Accepted));
        let panel = Arc::clone(&state.panel);
        let app = build(state);

        let status = post(&app, "/toggle", "state=on").await;
        panel.settle_writes().await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(panel.device().requests(), vec!["/toggle?state=on"]);
        assert!(panel.view().clock_checked);
    }

    #[tokio::test]
    async fn should_toggle_off_when_checkbox_missing() {
        let state = test_state(StubDevice::new("", UpdateResponse::Accepted));
        let panel = Arc::clone(&state.panel);
        let app = build(state);

        post(&app, "/toggle", "").await;
        panel.settle_writes().await;

        assert_eq!(panel.device().requests(), vec!["/toggle?state=off"]);
        assert_eq!(panel.view().clock_status_text, "Wordclock uit");
    }

    #[tokio::test]
    async fn should_push_brightness() {
        let state = test_state(StubDevice::new("", UpdateResponse::Accepted));
        let panel = Arc::clone(&state.panel);
        let app = build(state);

        let status = post(&app, "/brightness", "level=42").await;
        panel.settle_writes().await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(panel.view().brightness_value, "42");
        assert_eq!(panel.device().requests(), vec!["/setBrightness?level=42"]);
    }

    #[tokio::test]
    async fn should_reject_unreadable_brightness() {
        let app = build(test_state(StubDevice::new("", UpdateResponse::Accepted)));

        let status = post(&app, "/brightness", "level=bright").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_push_color_without_hash() {
        let state = test_state(StubDevice::new("", UpdateResponse::Accepted));
        let panel = Arc::clone(&state.panel);
        let app = build(state);

        let status = post(&app, "/color", "color=%231a2b3c").await;
        panel.settle_writes().await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(panel.device().requests(), vec!["/setColor?color=1a2b3c"]);
        assert_eq!(panel.view().color_value, "#1a2b3c");
    }

    #[tokio::test]
    async fn should_reject_invalid_color() {
        let state = test_state(StubDevice::new("", UpdateResponse::Accepted));
        let panel = Arc::clone(&state.panel);
        let app = build(state);

        let status = post(&app, "/color", "color=%23fff").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(panel.device().requests().is_empty());
    }

    #[tokio::test]
    async fn should_reload_after_delay_once_update_started() {
        let app = build(test_state(StubDevice::new("", UpdateResponse::Accepted)));

        let status = post(&app, "/update", "").await;
        assert_eq!(status, StatusCode::SEE_OTHER);

        let (_, body) = get(&app, "/").await;
        assert!(body.contains("Update gestart. ESP herstart..."));
        assert!(body.contains(r#"<meta http-equiv="refresh" content="10">"#));

        let (_, body) = get(&app, "/").await;
        assert!(body.contains(r#"<meta http-equiv="refresh" content="5">"#));
    }

    #[tokio::test]
    async fn should_alert_once_when_update_refused() {
        let app = build(test_state(StubDevice::new(
            "",
            UpdateResponse::Rejected { status: 500 },
        )));

        post(&app, "/update", "").await;

        let (_, body) = get(&app, "/").await;
        assert_eq!(body.matches("Update mislukt").count(), 1);
        assert!(body.contains(r#"<meta http-equiv="refresh" content="5">"#));
        let (_, body) = get(&app, "/").await;
        assert!(!body.contains("Update mislukt"));
    }

    #[tokio::test]
    async fn should_restart_device() {
        let state = test_state(StubDevice::new("", UpdateResponse::Accepted));
        let panel = Arc::clone(&state.panel);
        let app = build(state);

        let status = post(&app, "/restart", "").await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(panel.device().requests(), vec!["/restart"]);
    }

    #[tokio::test]
    async fn should_serve_panel_as_json() {
        let state = test_state(StubDevice::new("boot\n", UpdateResponse::Accepted));
        state.panel.load().await;
        let app = build(state);

        let (status, body) = get(&app, "/api/panel").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["active_tab"], "control");
        assert_eq!(json["clock_checked"], true);
        assert_eq!(json["brightness_value"], "75");
        assert_eq!(json["log_text"], "boot\n");
        assert_eq!(json["firmware_version"], "1.4.0");
    }
}
