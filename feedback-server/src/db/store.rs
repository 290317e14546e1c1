//! Port for feedback persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::StoreError;
use crate::models::{CreatedFeedback, FeedbackRecord, NewFeedback};

/// Feedback persistence used by the HTTP handlers.
///
/// Implementations must be safe to share across request tasks; the
/// PostgreSQL adapter delegates that to the sqlx pool.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Persist one validated submission, stamping `created_at` with the
    /// store's current time.
    async fn insert_feedback(&self, feedback: NewFeedback) -> Result<CreatedFeedback, StoreError>;

    /// All rows, newest first (`created_at DESC, id DESC`).
    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, StoreError>;

    /// Number of stored rows.
    async fn count_feedback(&self) -> Result<i64, StoreError>;

    /// Current time as reported by the store; a cheap connectivity probe.
    async fn server_time(&self) -> Result<DateTime<Utc>, StoreError>;
}
