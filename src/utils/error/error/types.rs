//! Core error types for the Gateway

use crate::storage::StoreError;
use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database connection and driver errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Classified failures from the data access gateway
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller identity could not be established
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Caller lacks program access
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Request payload failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store or dependency unavailable
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
