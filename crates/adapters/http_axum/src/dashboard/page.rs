//! The control page itself and tab switching.

use std::time::Duration;

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use wordclock_app::ports::DeviceApi;
use wordclock_domain::panel::PanelView;

use crate::error::ApiError;
use crate::state::AppState;

/// Control page template.
#[derive(Template)]
#[template(path = "panel.html")]
pub struct PanelTemplate {
    refresh_seconds: u64,
    alerts: Vec<String>,
    view: PanelView,
}

impl PanelTemplate {
    /// Whether tab `id` is the active one.
    fn is_active(&self, id: &str) -> bool {
        self.view.active_tab.id() == id
    }
}

impl IntoResponse for PanelTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Whole seconds for a meta refresh, rounded up, at least one.
fn refresh_seconds(interval: Duration) -> u64 {
    let secs = interval.as_secs() + u64::from(interval.subsec_nanos() > 0);
    secs.max(1)
}

/// `GET /` — render the panel.
///
/// Alerts raised since the last render are shown once. When the update flow
/// scheduled a reload, this render refreshes after that delay instead of
/// the poll interval.
pub async fn index<D>(State(state): State<AppState<D>>) -> PanelTemplate
where
    D: DeviceApi + Send + Sync + 'static,
{
    let host = state.panel.host();
    let refresh = host.take_reload().unwrap_or(state.refresh);

    PanelTemplate {
        refresh_seconds: refresh_seconds(refresh),
        alerts: host.take_alerts(),
        view: state.panel.view(),
    }
}

/// `GET /tabs/{id}` — activate a tab and go back to the page.
pub async fn show_tab<D>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError>
where
    D: DeviceApi + Send + Sync + 'static,
{
    state.panel.show_tab(&id)?;
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_refresh_up_to_whole_seconds() {
        assert_eq!(refresh_seconds(Duration::from_millis(5_000)), 5);
        assert_eq!(refresh_seconds(Duration::from_millis(2_500)), 3);
        assert_eq!(refresh_seconds(Duration::from_millis(10)), 1);
        assert_eq!(refresh_seconds(Duration::ZERO), 1);
    }
}
