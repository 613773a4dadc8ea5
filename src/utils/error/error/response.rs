//! HTTP response handling for errors

use super::types::GatewayError;
use crate::storage::StoreErrorKind;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl GatewayError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            GatewayError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            GatewayError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            GatewayError::Store(err) => match err.kind {
                StoreErrorKind::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE"),
                StoreErrorKind::Rejected => (StatusCode::BAD_REQUEST, "STORE_REJECTED"),
                StoreErrorKind::TransientContention => {
                    (StatusCode::SERVICE_UNAVAILABLE, "STORE_CONTENTION")
                }
                StoreErrorKind::Other => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            },
            GatewayError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            GatewayError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            GatewayError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            GatewayError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            GatewayError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            GatewayError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.status_and_code().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, code) = self.status_and_code();

        // Rejections carry the procedure's own message, which callers need.
        let details = match self {
            GatewayError::Store(err) if err.kind == StoreErrorKind::Rejected => {
                Some(err.message.clone())
            }
            _ => None,
        };

        HttpResponse::build(status_code).json(ErrorResponse {
            error: self.public_message(),
            code,
            details,
        })
    }
}
