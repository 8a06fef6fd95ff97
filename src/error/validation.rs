use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejection raised by the service layer before any repository call is made.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid value for field {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::debug!("Validation error: {}", message);

        (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
    }
}
