//! PostgreSQL feedback repository
//!
//! - insert: single INSERT ... RETURNING, timestamp from NOW()
//! - list: single SELECT ordered newest first
//! - count: COUNT(*) for health reporting

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::{create_pool, FeedbackStore, StoreError};
use crate::config::DatabaseConfig;
use crate::models::{CreatedFeedback, FeedbackRecord, NewFeedback};

/// Feedback repository backed by a sqlx pool
#[derive(Debug, Clone)]
pub struct PgFeedbackStore {
    pool: PgPool,
}

impl PgFeedbackStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a store over a lazily-connecting pool.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, StoreError> {
        create_pool(config).map(Self::new)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl FeedbackStore for PgFeedbackStore {
    async fn insert_feedback(&self, feedback: NewFeedback) -> Result<CreatedFeedback, StoreError> {
        let created = sqlx::query_as::<_, CreatedFeedback>(
            r#"
            INSERT INTO feedback (name, branch, rating, valuable_topic, feedback_comments, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id, created_at
            "#,
        )
        .bind(feedback.name.as_deref())
        .bind(feedback.branch.as_str())
        .bind(i32::from(feedback.rating.get()))
        .bind(feedback.valuable_topic.as_deref())
        .bind(feedback.feedback_comments.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, StoreError> {
        let rows = sqlx::query_as::<_, FeedbackRecord>(
            r#"
            SELECT id, name, branch, rating, valuable_topic, feedback_comments, created_at
            FROM feedback
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn count_feedback(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn server_time(&self) -> Result<DateTime<Utc>, StoreError> {
        let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()")
            .fetch_one(&self.pool)
            .await?;
        Ok(now)
    }
}
