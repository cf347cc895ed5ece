//! Server-side rendered control page.
//!
//! Every control is a `<form>` that posts back to the server and redirects
//! to `/` (PRG pattern), so the page works without JavaScript.

#[allow(clippy::missing_errors_doc)]
pub mod controls;
#[allow(clippy::missing_errors_doc)]
pub mod page;

use axum::Router;
use axum::routing::{get, post};

use wordclock_app::ports::DeviceApi;

use crate::state::AppState;

/// Build the dashboard sub-router.
pub fn routes<D>() -> Router<AppState<D>>
where
    D: DeviceApi + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(page::index::<D>))
        .route("/tabs/{id}", get(page::show_tab::<D>))
        .route("/toggle", post(controls::toggle::<D>))
        .route("/brightness", post(controls::brightness::<D>))
        .route("/color", post(controls::color::<D>))
        .route("/update", post(controls::update::<D>))
        .route("/restart", post(controls::restart::<D>))
}
