//! Error type shared by every REST wrapper.
//!
//! ERROR HANDLING
//! ==============
//! Every endpoint returns `ApiResult<T>` so pages can tell a failed call from
//! one that is still running. Nothing in `net` logs and swallows.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend rejected the bearer token (HTTP 401).
    #[error("session expired, please sign in again")]
    Unauthorized,

    /// The backend answered with a non-success status.
    #[error("request rejected: status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected schema.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The request body could not be built.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// HTTP is only wired up in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// HTTP status carried by the error, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for an inline error paragraph.
    ///
    /// Prefers the backend's `{"message": ...}` payload when one is present.
    pub fn user_message(&self) -> String {
        if let Self::Status { body, .. } = self {
            if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
                if !parsed.message.trim().is_empty() {
                    return parsed.message;
                }
            }
        }
        self.to_string()
    }
}
