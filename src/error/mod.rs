//! Error types for the Registrar server.
//!
//! Domain-specific error types (authentication, configuration, validation) are
//! aggregated into a single [`Error`] enum. All errors implement `IntoResponse`
//! for Axum HTTP responses and use `thiserror` for ergonomic definitions.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, validation::ValidationError},
    model::api::ErrorDto,
};

/// Main error type for the Registrar server.
///
/// Aggregates all domain-specific error types and external library errors into
/// a single unified error type. `#[from]` conversions enable use of the `?`
/// operator throughout the service and controller layers; the `IntoResponse`
/// implementation maps each error to the appropriate HTTP response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, credential, admin record validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request validation error (missing required field, invalid value).
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A record addressed by id does not exist.
    #[error("{entity} with id {id:?} not found")]
    NotFound { entity: &'static str, id: String },
    /// Failed to parse a stored or submitted value.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Catch-all for invariant violations that should not occur.
    #[error("{0}")]
    InternalError(String),
    /// Database error from sea-orm.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session store error from tower-sessions.
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// CSV parse or serialize error.
    #[error(transparent)]
    CsvError(#[from] csv::Error),
    /// JSON column serialization error.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

/// Wrapper that logs the inner error and answers a generic 500 body.
///
/// Internal details are never leaked to API consumers; the full error is
/// written to the tracing log at error level instead.
pub struct InternalServerError<E: std::fmt::Display>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("Internal server error: {}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::ConfigError(err) => err.into_response(),
            Error::AuthError(err) => err.into_response(),
            Error::ValidationError(err) => err.into_response(),
            Error::NotFound { .. } => {
                let message = self.to_string();
                tracing::debug!("{}", message);

                (StatusCode::NOT_FOUND, Json(ErrorDto { error: message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
