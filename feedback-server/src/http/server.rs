//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing and timeout middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::ServerConfig;
use crate::db::FeedbackStore;

/// Origins allowed when CORS is not permissive
const LOCAL_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:3030",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:3030",
];

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FeedbackStore>,
}

impl AppState {
    pub fn new(store: impl FeedbackStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(LOCAL_ORIGINS.map(HeaderValue::from_static))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::feedback::router())
        .layer(middleware)
        .with_state(state)
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// # Example
///
/// ```ignore
/// let store = PgFeedbackStore::connect_lazy(&DatabaseConfig::from_env()?)?;
/// run_server(AppState::new(store), ServerConfig::default()).await?;
/// ```
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryFeedbackStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app(store: MemoryFeedbackStore) -> Router {
        build_router(AppState::new(store), &ServerConfig::default())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = app(MemoryFeedbackStore::new())
            .oneshot(get("/health"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_submit_then_list() {
        let app = app(MemoryFeedbackStore::new());

        let response = app
            .clone()
            .oneshot(post_json("/feedback", r#"{"branch":"Batch-12","rating":5}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        assert_eq!(created["success"], true);
        assert!(created["id"].is_i64());
        assert!(created["created_at"].is_string());

        let response = app.clone().oneshot(get("/feedback-data")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "no-cache, no-store, must-revalidate"
        );
        let rows = body_json(response).await;
        let row = &rows.as_array().unwrap()[0];
        assert_eq!(row["branch"], "Batch-12");
        assert_eq!(row["rating"], 5);
        assert!(row["name"].is_null());
        assert_eq!(row["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = app(MemoryFeedbackStore::new())
            .oneshot(get("/feedback/1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_local_cors_origin_allowed() {
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = app(MemoryFeedbackStore::new()).oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
    }
}
