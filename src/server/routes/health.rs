//! Health check endpoints

use crate::server::state::AppState;
use crate::storage::StoreErrorKind;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::{debug, warn};

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/health")
            .route("", web::get().to(health_check))
            .route("/db", web::get().to(database_health)),
    );
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Seconds since the process started
    pub uptime: f64,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    /// `connected`, `disconnected` or `error`
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Basic health check endpoint
///
/// Answers without touching the store; used by load balancers.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    HttpResponse::Ok().json(HealthStatus {
        status: "OK",
        timestamp: chrono::Utc::now(),
        uptime: state.uptime_secs(),
    })
}

/// Store connectivity check
pub async fn database_health(state: web::Data<AppState>) -> HttpResponse {
    let timestamp = chrono::Utc::now();

    match state.store.ping().await {
        Ok(()) => HttpResponse::Ok().json(DatabaseHealth {
            database: "connected",
            error: None,
            timestamp,
        }),
        Err(e) => {
            warn!("Database health check failed: {}", e);
            let database = match e.kind {
                StoreErrorKind::Unavailable => "disconnected",
                _ => "error",
            };
            HttpResponse::ServiceUnavailable().json(DatabaseHealth {
                database,
                error: Some(e.message),
                timestamp,
            })
        }
    }
}
