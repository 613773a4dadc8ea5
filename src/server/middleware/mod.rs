//! HTTP middleware implementations
//!
//! - Access control: resolves the caller's principal before protected routes
//! - Request ID tracking

mod auth;
mod helpers;
mod request_id;


pub use auth::{AuthContext, AuthMiddleware, AuthMiddlewareService};
pub use helpers::{get_auth_context, is_public_route};
pub use request_id::{REQUEST_ID_HEADER, RequestIdMiddleware, RequestIdMiddlewareService};
