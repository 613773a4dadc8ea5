//! Helper functions for middleware

use super::auth::AuthContext;
use crate::utils::error::{GatewayError, Result};
use actix_web::{HttpMessage, HttpRequest};

/// Check if a route is public (doesn't require authentication)
pub fn is_public_route(path: &str) -> bool {
    path == "/" || path == "/api/health" || path.starts_with("/api/health/")
}

/// Caller identity attached by [`super::AuthMiddleware`]
pub fn get_auth_context(req: &HttpRequest) -> Result<AuthContext> {
    req.extensions()
        .get::<AuthContext>()
        .cloned()
        .ok_or_else(|| GatewayError::unauthorized("User not found or not authorized"))
}
