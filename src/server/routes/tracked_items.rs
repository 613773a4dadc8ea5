//! Tracked-item step progress endpoints

use crate::auth::AccessLevel;
use crate::server::middleware::get_auth_context;
use crate::server::state::AppState;
use crate::services::BatchStepProgressBody;
use crate::services::step_progress::{parse_positive_id, validate_batch_request};
use crate::utils::error::{GatewayError, Result};
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::{Map, Value};
use tracing::{error, info};

/// Configure tracked-item routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/tracked-items")
            .route(
                "/batch-step-progress",
                web::post().to(batch_step_progress),
            )
            .route(
                "/{item_id}/steps/{step_id}",
                web::post().to(update_step_progress),
            )
            .route(
                "/{item_id}/steps/{step_id}",
                web::put().to(update_step_progress),
            ),
    );
}

/// Check program scope when the body names a program
fn authorize_program(req: &HttpRequest, program_id: Option<i32>) -> Result<()> {
    if let Some(program_id) = program_id {
        get_auth_context(req)?
            .principal
            .require_program_access(program_id, AccessLevel::Write)?;
    }
    Ok(())
}

/// Apply one progress update to many tracked items
///
/// 200 when at least one item was updated, 500 when none were; the body
/// always lists every item's outcome.
pub async fn batch_step_progress(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<BatchStepProgressBody>,
) -> Result<HttpResponse> {
    let request = validate_batch_request(body.into_inner(), state.config.batch().max_batch_size)?;
    authorize_program(&req, request.program_id)?;

    let result = state.step_progress.run(&request).await;
    Ok(HttpResponse::build(result.status_code()).json(result.to_response()))
}

/// Update progress of one step on one tracked item
///
/// The body is forwarded to the store with the path ids taking precedence.
pub async fn update_step_progress(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
    body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse> {
    let (raw_item_id, raw_step_id) = path.into_inner();
    let item_id = parse_positive_id(&Value::String(raw_item_id))
        .ok_or_else(|| GatewayError::validation("itemId must be a positive integer"))?;
    let step_id = parse_positive_id(&Value::String(raw_step_id))
        .ok_or_else(|| GatewayError::validation("stepId must be a positive integer"))?;

    let mut document = body.into_inner();
    let program_id = match document.get("program_id") {
        None | Some(Value::Null) => None,
        Some(value) => Some(
            parse_positive_id(value)
                .ok_or_else(|| GatewayError::validation("program_id must be a positive integer"))?,
        ),
    };
    authorize_program(&req, program_id)?;

    document.insert("item_id".to_string(), Value::from(item_id));
    document.insert("step_id".to_string(), Value::from(step_id));

    let outcome = state.step_progress.apply_document(document).await;
    match outcome.result {
        Ok(output) => {
            if let Some(message) = output.error_message() {
                info!(item_id, step_id, "Step progress update rejected: {}", message);
                return Ok(HttpResponse::BadRequest().json(output.into_json()));
            }
            Ok(HttpResponse::Ok().json(output.into_json()))
        }
        Err(e) => {
            error!(
                item_id,
                step_id,
                attempts = outcome.attempts,
                kind = ?e.kind,
                "Step progress update failed: {}",
                e
            );
            Err(GatewayError::internal(e.message))
        }
    }
}
