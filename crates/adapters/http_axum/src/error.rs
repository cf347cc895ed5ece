//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use wordclock_domain::error::{ValidationError, WordclockError};

/// JSON error body returned by every endpoint.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`WordclockError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(WordclockError);

impl From<WordclockError> for ApiError {
    fn from(err: WordclockError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(WordclockError::Validation(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            WordclockError::Validation(err @ ValidationError::UnknownTab(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            WordclockError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            WordclockError::Device(err) => {
                tracing::error!(error = %err, "device error");
                (StatusCode::BAD_GATEWAY, "wordclock unreachable".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
