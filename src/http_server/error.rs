//! Defines the custom `ApiError` type for the HTTP server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::{notification::error::NotificationError, registry::error::RegistryError};

/// A custom error type for the API that can be converted into an HTTP
/// response.
pub enum ApiError {
    /// Represents a resource that could not be found.
    NotFound(String),

    /// Represents a duplicate identifier on create.
    Conflict(String),

    /// Represents a validation error for an unprocessable entity.
    UnprocessableEntity(String),

    /// Represents a generic internal server error.
    InternalServerError(String),
}

/// Converts a `RegistryError` into an `ApiError`.
///
/// This allows for the convenient use of the `?` operator in handlers
/// on functions that return `Result<_, RegistryError>`.
impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(message) => ApiError::NotFound(message),
            RegistryError::Conflict(message) => ApiError::Conflict(message),
            _ => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<NotificationError> for ApiError {
    fn from(err: NotificationError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

/// Implements the conversion from `ApiError` into an `axum` response.
///
/// This is the central point for mapping internal application errors to
/// user-facing HTTP responses. Error detail text is included in the body;
/// this is an internal admin tool, not a public-facing API.
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Conflict(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::UnprocessableEntity(message) =>
                (StatusCode::UNPROCESSABLE_ENTITY, message),
            ApiError::InternalServerError(message) => {
                tracing::error!("Internal server error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
