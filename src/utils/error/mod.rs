//! Error handling utilities
//!
//! This module provides the gateway error type and the retry policy used for
//! transient store failures.

pub mod error;
pub mod recovery;

// Re-export commonly used types
pub use error::*;
pub use recovery::*;
