//! Client error types

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Client error type
///
/// Every variant's `Display` is the message shown to the operator.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connection refused, DNS, TLS, interrupted body
    #[error("A client-side error occurred: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// A 2xx response whose body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Build a status error from the response code and raw body.
    ///
    /// A JSON object body contributes its `message` string, or nothing when it
    /// has none; any other non-blank body is quoted as-is.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let reason = status.canonical_reason().unwrap_or("Unknown Status");
        let mut message = format!(
            "Server returned code: {}, error message: {}",
            status.as_u16(),
            reason
        );
        if let Some(backend) = backend_message(body) {
            message.push_str(" | Backend Message: ");
            message.push_str(&backend);
        }
        Self::Status { status, message }
    }

    /// HTTP status of the failed response, if the backend answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            Self::InvalidResponse(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

fn backend_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    // A JSON object speaks only through its `message` field
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        return match map.get("message") {
            Some(Value::String(message)) => Some(message.clone()),
            _ => None,
        };
    }
    Some(body.to_string())
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
