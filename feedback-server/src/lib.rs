//! feedback-server: rated feedback collection over HTTP
//!
//! Records branch/rating submissions in a single PostgreSQL table and serves
//! them back newest first, together with health and connectivity probes.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DatabaseConfig, ServerConfig};
pub use db::{FeedbackStore, MemoryFeedbackStore, PgFeedbackStore, StoreError};
pub use http::{build_router, run_server, ApiError, AppState};
