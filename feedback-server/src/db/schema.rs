//! Table bootstrap for fresh databases
//!
//! A single idempotent statement; there is no versioning. Existing tables are
//! left untouched.

use sqlx::PgPool;

use super::StoreError;

const CREATE_FEEDBACK_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS feedback (
        id SERIAL PRIMARY KEY,
        name TEXT,
        branch TEXT NOT NULL CHECK (length(btrim(branch)) > 0),
        rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
        valuable_topic TEXT,
        feedback_comments TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_CREATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS feedback_created_at_idx ON feedback (created_at DESC, id DESC)";

/// Create the `feedback` table and its ordering index if missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    tracing::info!("Ensuring feedback table exists...");

    sqlx::query(CREATE_FEEDBACK_TABLE).execute(pool).await?;
    sqlx::query(CREATE_CREATED_AT_INDEX).execute(pool).await?;

    tracing::info!("Feedback table ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_constraints_mirror_validation() {
        assert!(CREATE_FEEDBACK_TABLE.contains("rating BETWEEN 1 AND 5"));
        assert!(CREATE_FEEDBACK_TABLE.contains("branch TEXT NOT NULL"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ensure_schema_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("connect failed");

        ensure_schema(&pool).await.expect("first run");
        ensure_schema(&pool).await.expect("second run");
    }
}
