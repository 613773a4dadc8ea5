//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod auth;
pub mod health;
pub mod tracked_items;

use crate::utils::error::GatewayError;
use actix_web::{HttpRequest, HttpResponse, web};

/// Register every route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .configure(health::configure_routes)
        .configure(auth::configure_routes)
        .configure(tracked_items::configure_routes);
}

/// Plain-text liveness banner
async fn root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Tracker gateway is running!")
}

/// Map JSON extractor failures to the gateway error body
pub fn json_error_handler(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    GatewayError::from(err).into()
}
