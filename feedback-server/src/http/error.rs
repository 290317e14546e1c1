//! API error types with IntoResponse
//!
//! Errors are converted to `{"error", "status"}` JSON bodies. Storage and
//! configuration failures are logged in full and reported to the caller
//! with a generic message only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::config::ConfigError;
use crate::db::StoreError;
use crate::models::ValidationError;

/// The store operation a handler was performing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Submit,
    Fetch,
    Summarize,
}

impl StoreAction {
    fn failure_message(self) -> &'static str {
        match self {
            Self::Submit => "Failed to submit feedback",
            Self::Fetch => "Failed to fetch feedback data",
            Self::Summarize => "Failed to fetch feedback summary",
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Database connection settings missing or unusable (500, logged)
    Configuration { message: String },

    /// Store unreachable or schema missing (500, logged)
    Storage {
        action: StoreAction,
        source: StoreError,
    },
}

impl ApiError {
    /// Wrap a store failure for the given action.
    pub fn storage(action: StoreAction, source: StoreError) -> Self {
        match source {
            StoreError::Configuration { message } => Self::Configuration { message },
            source => Self::Storage { action, source },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Configuration { .. } | Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Validation(e) => {
                tracing::warn!("Rejected submission: {}", e);
                e.to_string()
            }
            Self::Configuration { message } => {
                tracing::error!("Configuration error: {}", message);
                "Database URL not configured".to_owned()
            }
            Self::Storage { action, source } => {
                // Log the actual error, return generic message
                tracing::error!(?action, "Database error: {}", source);
                action.failure_message().to_owned()
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ConfigError> for ApiError {
    fn from(e: ConfigError) -> Self {
        Self::Configuration {
            message: e.to_string(),
        }
    }
}
