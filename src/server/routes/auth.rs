//! Caller identity endpoint

use crate::auth::ProgramAccess;
use crate::server::middleware::get_auth_context;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

/// Configure auth routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/auth/me", web::get().to(current_user));
}

#[derive(Debug, Serialize)]
pub struct CurrentUser {
    pub user_id: i32,
    pub username: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub is_system_admin: bool,
    pub program_access: Vec<ProgramAccess>,
    pub accessible_programs: Vec<i32>,
    #[serde(rename = "certificateInfo")]
    pub certificate_info: CertificateInfo,
}

#[derive(Debug, Serialize)]
pub struct CertificateInfo {
    pub subject: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: CurrentUser,
    /// `certificate`, `fallback` or `disabled`
    #[serde(rename = "extractedFrom")]
    pub extracted_from: &'static str,
}

/// The principal resolved for this request
pub async fn current_user(req: HttpRequest) -> Result<HttpResponse> {
    let context = get_auth_context(&req)?;
    let extracted_from = match (&context.subject, context.from_certificate) {
        (None, _) => "disabled",
        (Some(_), true) => "certificate",
        (Some(_), false) => "fallback",
    };

    let principal = context.principal;
    let accessible_programs = principal.accessible_programs();

    Ok(HttpResponse::Ok().json(CurrentUserResponse {
        user: CurrentUser {
            user_id: principal.user_id,
            username: principal.user_name,
            display_name: principal.display_name,
            is_system_admin: principal.is_system_admin,
            program_access: principal.program_access,
            accessible_programs,
            certificate_info: CertificateInfo {
                subject: context.subject,
            },
        },
        extracted_from,
    }))
}
