//! Fixture server errors and their HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevServerError {
    /// Unknown collection
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failure configured through [`super::FixtureStore::fail`]
    #[error("Injected failure with status {0}")]
    Injected(u16),

    #[error("Server error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error body, shaped like a REST framework `detail` response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: &'static str,
}

impl IntoResponse for DevServerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            DevServerError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            DevServerError::Injected(status) => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                "INJECTED_FAILURE",
            ),
            DevServerError::Internal(_) | DevServerError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        tracing::warn!(
            status = status.as_u16(),
            error_code = %code,
            error_message = %self,
            "Fixture request failed"
        );

        let body = ErrorResponse {
            detail: self.to_string(),
            code,
        };

        (status, Json(body)).into_response()
    }
}
