//! Mock backend errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::FieldErrors;
use thiserror::Error;

/// Handler error, rendered as a plain-text body like the real backend
#[derive(Debug, Error)]
pub enum MockError {
    #[error("Employee not found")]
    NotFound,

    #[error("{0}")]
    Validation(FieldErrors),
}

impl MockError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(%status, error = %self, "Request rejected");
        (status, self.to_string()).into_response()
    }
}

pub type MockResult<T> = Result<T, MockError>;
