//! Error recovery utilities
//!
//! Bounded retry with exponential backoff and jitter, applied only to failures
//! that classify themselves as retryable.

mod retry;
mod types;

pub use retry::{Retryable, RetryOutcome, RetryPolicy};
pub use types::RetryConfig;
