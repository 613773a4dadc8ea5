//! Type conversions for GatewayError

use super::types::GatewayError;
use actix_web::error::JsonPayloadError;

impl From<JsonPayloadError> for GatewayError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                GatewayError::BadRequest("Request body is too large".to_string())
            }
            JsonPayloadError::ContentType => {
                GatewayError::BadRequest("Content-Type must be application/json".to_string())
            }
            other => GatewayError::BadRequest(format!("Invalid JSON body: {}", other)),
        }
    }
}
