//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is created
//! lazily: no connection is attempted until the first query.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::StoreError;
use crate::config::DatabaseConfig;

/// How long a request waits for a pooled connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a lazily-connecting PostgreSQL pool.
///
/// # Errors
///
/// Returns [`StoreError::Configuration`] if the connection string cannot be
/// parsed. No network call is made here.
///
/// # Example
///
/// ```ignore
/// let config = DatabaseConfig::from_env()?;
/// let pool = create_pool(&config)?;
/// ```
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections())
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy(config.url())?;

    tracing::debug!(
        max_connections = config.max_connections(),
        "database pool created"
    );
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p feedback-server -- --ignored

    #[tokio::test]
    async fn unparseable_url_is_configuration_error() {
        let config = DatabaseConfig::new(Some("not a url".into())).unwrap();
        let err = create_pool(&config).unwrap_err();
        assert!(matches!(err, StoreError::Configuration { .. }));
    }

    #[tokio::test]
    async fn lazy_pool_does_not_connect() {
        // Nothing listens on port 1; creation must still succeed.
        let config = DatabaseConfig::new(Some("postgres://localhost:1/feedback".into())).unwrap();
        let pool = create_pool(&config).unwrap();
        assert_eq!(pool.size(), 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let config = DatabaseConfig::from_env().expect("DATABASE_URL required");
        let pool = create_pool(&config).expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
