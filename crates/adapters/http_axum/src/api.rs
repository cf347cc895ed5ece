//! JSON API.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use wordclock_app::ports::DeviceApi;
use wordclock_domain::panel::PanelView;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<D>() -> Router<AppState<D>>
where
    D: DeviceApi + Send + Sync + 'static,
{
    Router::new().route("/panel", get(panel::<D>))
}

/// `GET /api/panel` — the rendered panel.
pub async fn panel<D>(State(state): State<AppState<D>>) -> Json<PanelView>
where
    D: DeviceApi + Send + Sync + 'static,
{
    Json(state.panel.view())
}
