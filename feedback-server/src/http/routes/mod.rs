//! HTTP route handlers, grouped by resource
//!
//! - feedback: submission, listing and summary
//! - health: health check and database connectivity probe

pub mod feedback;
pub mod health;
