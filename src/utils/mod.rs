//! Utility modules for the tracker gateway
//!
//! - **error**: Error types, HTTP mapping, and retry with backoff
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

use uuid::Uuid;

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
