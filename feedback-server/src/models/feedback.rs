//! Feedback submission and record types
//!
//! The wire payload uses camelCase field names; stored records use the
//! snake_case column names of the `feedback` table.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;

use super::ValidationError;

/// Lowest accepted rating
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating
pub const MAX_RATING: u8 = 5;

/// Star rating in `MIN_RATING..=MAX_RATING`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    /// Create a rating, rejecting values outside 1..=5.
    ///
    /// # Example
    /// ```
    /// use feedback_server::models::Rating;
    ///
    /// assert!(Rating::new(5).is_ok());
    /// assert!(Rating::new(0).is_err());
    /// assert!(Rating::new(6).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "rating",
                min: MIN_RATING.into(),
                max: MAX_RATING.into(),
                value,
            });
        }
        // Range check above guarantees the cast is lossless
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Non-blank branch label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch(String);

impl Branch {
    /// Create a branch label. Whitespace-only input counts as empty; the
    /// value is otherwise kept exactly as submitted.
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "branch" });
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Branch {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Raw submission as decoded from `POST /feedback`.
///
/// Every field is optional at the wire level so that missing required
/// fields surface as [`ValidationError::MissingRequired`] rather than a
/// decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default, alias = "valuable_topic")]
    pub valuable_topic: Option<String>,
    #[serde(default, alias = "feedback_comments")]
    pub feedback_comments: Option<String>,
}

impl FeedbackSubmission {
    /// Validate into a [`NewFeedback`].
    ///
    /// Presence of branch and rating is checked first, then the rating range.
    /// Empty optional strings become `None`.
    pub fn validate(self) -> Result<NewFeedback, ValidationError> {
        let branch = self.branch.filter(|b| !b.trim().is_empty());
        let (Some(branch), Some(rating)) = (branch, self.rating) else {
            return Err(ValidationError::MissingRequired);
        };

        Ok(NewFeedback {
            name: non_empty(self.name),
            branch: Branch::new(branch)?,
            rating: Rating::new(rating)?,
            valuable_topic: non_empty(self.valuable_topic),
            feedback_comments: non_empty(self.feedback_comments),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A validated submission ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub name: Option<String>,
    pub branch: Branch,
    pub rating: Rating,
    pub valuable_topic: Option<String>,
    pub feedback_comments: Option<String>,
}

/// Identity assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct CreatedFeedback {
    pub id: i32,
    pub created_at: DateTime<Utc>,
}

/// Feedback row from the database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FeedbackRecord {
    pub id: i32,
    pub name: Option<String>,
    pub branch: String,
    pub rating: i32,
    pub valuable_topic: Option<String>,
    pub feedback_comments: Option<String>,
    pub created_at: DateTime<Utc>,
}
