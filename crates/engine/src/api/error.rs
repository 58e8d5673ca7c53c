//! API error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::use_cases::management::ManagementError;

pub const CHARACTER_NOT_FOUND: &str = "Character not found";
pub const CHARACTER_DOES_NOT_EXIST: &str = "Character does not exist";
pub const INVALID_CHARACTER_ID: &str = "Invalid character ID";

/// Client-facing error, rendered as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NotFound(&'static str),
    BadRequest(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Translate a use case error. Lookups and mutations word a missing
    /// record differently, so the caller picks the not-found message.
    pub fn from_management(err: ManagementError, not_found: &'static str) -> Self {
        match err {
            ManagementError::NotFound => Self::NotFound(not_found),
            ManagementError::InvalidInput(msg) => Self::BadRequest(msg),
            e @ (ManagementError::DuplicateId | ManagementError::DuplicateName) => {
                Self::BadRequest(e.to_string())
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg) => msg,
            Self::BadRequest(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}
