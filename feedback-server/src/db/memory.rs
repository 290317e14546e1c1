//! In-memory feedback store
//!
//! Mirrors the PostgreSQL adapter's ordering and id/timestamp assignment so
//! handlers can be exercised without a database. It can also be told to fail
//! the way an unreachable or un-migrated database would.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use super::{FeedbackStore, StoreError};
use crate::models::{CreatedFeedback, FeedbackRecord, NewFeedback};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    MissingTable,
    Unreachable,
}

/// Vec-backed [`FeedbackStore`]
#[derive(Debug, Default)]
pub struct MemoryFeedbackStore {
    rows: Mutex<Vec<FeedbackRecord>>,
    failure: Option<Failure>,
}

impl MemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation fails as if the `feedback` table did not exist.
    pub fn missing_table() -> Self {
        Self {
            failure: Some(Failure::MissingTable),
            ..Self::default()
        }
    }

    /// Every operation fails as if the database could not be reached.
    pub fn unreachable() -> Self {
        Self {
            failure: Some(Failure::Unreachable),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        match self.failure {
            None => Ok(()),
            Some(Failure::MissingTable) => Err(StoreError::MissingTable {
                message: r#"relation "feedback" does not exist"#.into(),
            }),
            Some(Failure::Unreachable) => Err(StoreError::Connection {
                message: "connection refused".into(),
            }),
        }
    }
}

#[async_trait]
impl FeedbackStore for MemoryFeedbackStore {
    async fn insert_feedback(&self, feedback: NewFeedback) -> Result<CreatedFeedback, StoreError> {
        self.check()?;
        let mut rows = self.rows.lock().await;

        let id = rows.last().map_or(1, |r| r.id + 1);
        // Keep created_at non-decreasing even if the wall clock steps back
        let now = Utc::now();
        let created_at = rows.last().map_or(now, |r| r.created_at.max(now));

        rows.push(FeedbackRecord {
            id,
            name: feedback.name,
            branch: feedback.branch.as_str().to_owned(),
            rating: i32::from(feedback.rating.get()),
            valuable_topic: feedback.valuable_topic,
            feedback_comments: feedback.feedback_comments,
            created_at,
        });

        Ok(CreatedFeedback { id, created_at })
    }

    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, StoreError> {
        self.check()?;
        let mut rows = self.rows.lock().await.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn count_feedback(&self) -> Result<i64, StoreError> {
        self.check()?;
        Ok(self.rows.lock().await.len() as i64)
    }

    async fn server_time(&self) -> Result<DateTime<Utc>, StoreError> {
        self.check()?;
        Ok(Utc::now())
    }
}
