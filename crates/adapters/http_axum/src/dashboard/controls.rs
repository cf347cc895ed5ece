//! Form handlers for the panel controls.

use axum::extract::{Form, State};
use axum::response::Redirect;
use serde::Deserialize;

use wordclock_app::ports::DeviceApi;
use wordclock_domain::brightness::Brightness;

use crate::error::ApiError;
use crate::state::AppState;

/// Form data for the power toggle.
///
/// An unchecked checkbox is not submitted at all, hence the `Option`.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub state: Option<String>,
}

/// Form data for the brightness slider.
#[derive(Debug, Deserialize)]
pub struct BrightnessForm {
    pub level: String,
}

/// Form data for the colour picker.
#[derive(Debug, Deserialize)]
pub struct ColorForm {
    pub color: String,
}

/// `POST /toggle` — switch the clock on (`state=on`) or off.
pub async fn toggle<D>(
    State(state): State<AppState<D>>,
    Form(form): Form<ToggleForm>,
) -> Redirect
where
    D: DeviceApi + Send + Sync + 'static,
{
    let checked = form.state.as_deref() == Some("on");
    state.panel.toggle_clock(checked);
    Redirect::to("/")
}

/// `POST /brightness` — show and push a brightness level.
pub async fn brightness<D>(
    State(state): State<AppState<D>>,
    Form(form): Form<BrightnessForm>,
) -> Result<Redirect, ApiError>
where
    D: DeviceApi + Send + Sync + 'static,
{
    let level: Brightness = form.level.parse()?;
    state.panel.update_brightness(level);
    Ok(Redirect::to("/"))
}

/// `POST /color` — push the picked colour.
pub async fn color<D>(
    State(state): State<AppState<D>>,
    Form(form): Form<ColorForm>,
) -> Result<Redirect, ApiError>
where
    D: DeviceApi + Send + Sync + 'static,
{
    state.panel.set_color(&form.color)?;
    Ok(Redirect::to("/"))
}

/// `POST /update` — ask the device to install a firmware update.
pub async fn update<D>(State(state): State<AppState<D>>) -> Redirect
where
    D: DeviceApi + Send + Sync + 'static,
{
    state.panel.check_for_update().await;
    Redirect::to("/")
}

/// `POST /restart` — restart the device.
pub async fn restart<D>(State(state): State<AppState<D>>) -> Redirect
where
    D: DeviceApi + Send + Sync + 'static,
{
    state.panel.restart_device().await;
    Redirect::to("/")
}
