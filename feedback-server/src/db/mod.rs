//! Database layer - feedback store port and its adapters
//!
//! # Design Principles
//!
//! - Handlers depend on the [`FeedbackStore`] trait, never on a global client
//! - PostgreSQL pool is built lazily; the first query opens the first connection
//! - One statement per operation, no retries
//! - Rely on table constraints as the last line of validation

pub mod error;
pub mod memory;
pub mod pool;
pub mod postgres;
pub mod schema;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryFeedbackStore;
pub use pool::create_pool;
pub use postgres::PgFeedbackStore;
pub use store::FeedbackStore;
