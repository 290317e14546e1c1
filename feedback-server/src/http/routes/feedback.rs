//! Feedback endpoints

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::http::error::{ApiError, StoreAction};
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{CreatedFeedback, FeedbackRecord, FeedbackSubmission};

/// Listing responses always reflect current store state
const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// Timestamps keep the store's microsecond precision.
pub(crate) fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Submit response
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub id: i32,
    pub created_at: String,
}

impl From<CreatedFeedback> for SubmitResponse {
    fn from(c: CreatedFeedback) -> Self {
        Self {
            success: true,
            id: c.id,
            created_at: format_timestamp(c.created_at),
        }
    }
}

/// One listed feedback row
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub id: i32,
    pub name: Option<String>,
    pub branch: String,
    pub rating: i32,
    pub valuable_topic: Option<String>,
    pub feedback_comments: Option<String>,
    pub created_at: String,
}

impl From<FeedbackRecord> for FeedbackResponse {
    fn from(r: FeedbackRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            branch: r.branch,
            rating: r.rating,
            valuable_topic: r.valuable_topic,
            feedback_comments: r.feedback_comments,
            created_at: format_timestamp(r.created_at),
        }
    }
}

/// Aggregate view used by the listing page header
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub total: usize,
    /// Mean rating rounded to one decimal; `None` when there is no feedback
    pub average_rating: Option<f64>,
}

impl SummaryResponse {
    fn from_records(records: &[FeedbackRecord]) -> Self {
        let total = records.len();
        let average_rating = (total > 0).then(|| {
            let sum: i64 = records.iter().map(|r| i64::from(r.rating)).sum();
            let mean = sum as f64 / total as f64;
            (mean * 10.0).round() / 10.0
        });
        Self {
            total,
            average_rating,
        }
    }
}

/// POST /feedback - validate and store one submission
async fn submit_feedback(
    State(state): State<AppState>,
    ValidJson(submission): ValidJson<FeedbackSubmission>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let feedback = submission.validate()?;

    let created = state
        .store
        .insert_feedback(feedback)
        .await
        .map_err(|e| ApiError::storage(StoreAction::Submit, e))?;

    tracing::info!(id = created.id, "Feedback submitted");
    Ok(Json(SubmitResponse::from(created)))
}

/// GET /feedback-data - all feedback, newest first
async fn list_feedback(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    tracing::debug!("Fetching feedback data");
    let records = state
        .store
        .list_feedback()
        .await
        .map_err(|e| ApiError::storage(StoreAction::Fetch, e))?;

    tracing::info!("Fetched {} feedback records", records.len());
    let body: Vec<FeedbackResponse> = records.into_iter().map(FeedbackResponse::from).collect();

    Ok(([(header::CACHE_CONTROL, NO_CACHE)], Json(body)))
}

/// GET /feedback-summary - row count and average rating
async fn feedback_summary(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let records = state
        .store
        .list_feedback()
        .await
        .map_err(|e| ApiError::storage(StoreAction::Summarize, e))?;

    Ok((
        [(header::CACHE_CONTROL, NO_CACHE)],
        Json(SummaryResponse::from_records(&records)),
    ))
}

/// Feedback routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/feedback", post(submit_feedback))
        .route("/feedback-data", get(list_feedback))
        .route("/feedback-summary", get(feedback_summary))
}
