//! Health check and database connectivity endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;

use super::feedback::format_timestamp;
use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub table_exists: bool,
    pub feedback_count: i64,
    pub timestamp: String,
}

/// Health check failure response
#[derive(Debug, Serialize)]
pub struct UnhealthyResponse {
    pub status: &'static str,
    pub error: &'static str,
    pub timestamp: String,
}

/// Connectivity probe response
#[derive(Debug, Serialize)]
pub struct DbTestResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Response {
    match state.store.count_feedback().await {
        Ok(feedback_count) => Json(HealthResponse {
            status: "healthy",
            database: "connected",
            table_exists: true,
            feedback_count,
            timestamp: format_timestamp(Utc::now()),
        })
        .into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UnhealthyResponse {
                    status: "unhealthy",
                    error: e.summary(),
                    timestamp: format_timestamp(Utc::now()),
                }),
            )
                .into_response()
        }
    }
}

/// GET /test-db - round trip to the database clock
async fn test_db(State(state): State<AppState>) -> Response {
    tracing::debug!("Testing database connection");
    match state.store.server_time().await {
        Ok(now) => {
            tracing::info!(server_time = %now, "Database connection successful");
            Json(DbTestResponse {
                success: true,
                message: Some("Database connection successful"),
                timestamp: Some(format_timestamp(now)),
                error: None,
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!("Database connection failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DbTestResponse {
                    success: false,
                    message: None,
                    timestamp: None,
                    error: Some(e.summary()),
                }),
            )
                .into_response()
        }
    }
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/test-db", get(test_db))
}
