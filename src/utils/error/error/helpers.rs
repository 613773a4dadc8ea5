//! Helper functions for creating specific error types

use super::types::GatewayError;

impl GatewayError {
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Message shown to API callers.
    ///
    /// Client-facing variants expose their payload verbatim; storage and
    /// internal failures are masked.
    pub fn public_message(&self) -> String {
        match self {
            GatewayError::Unauthorized(msg)
            | GatewayError::Forbidden(msg)
            | GatewayError::Validation(msg)
            | GatewayError::BadRequest(msg)
            | GatewayError::NotFound(msg)
            | GatewayError::Unavailable(msg) => msg.clone(),
            GatewayError::Config(_) => self.to_string(),
            GatewayError::Database(_) | GatewayError::Store(_) => {
                "Database operation failed".to_string()
            }
            _ => "An internal server error occurred.".to_string(),
        }
    }
}
