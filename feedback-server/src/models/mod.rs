//! Domain models with validation at construction
//!
//! Submissions are decoded into [`FeedbackSubmission`] and validated into
//! [`NewFeedback`] before the store is touched. Invalid input returns
//! ValidationError, not panic.

pub mod feedback;
pub mod validation;

pub use feedback::{
    Branch, CreatedFeedback, FeedbackRecord, FeedbackSubmission, NewFeedback, Rating,
};
pub use validation::ValidationError;
