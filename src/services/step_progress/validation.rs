//! Validation of batch step-progress requests
//!
//! Runs before any store access.

use super::types::{BatchStepProgressBody, ProgressUpdateRequest, StepStatus};
use crate::utils::error::{GatewayError, Result};
use serde_json::Value;

pub const ITEM_IDS_REQUIRED: &str = "itemIds array is required and must not be empty";
pub const ITEM_IDS_NOT_POSITIVE: &str = "itemIds must contain only positive integers";
pub const STEP_ID_REQUIRED: &str = "stepId is required";
pub const STEP_ID_NOT_POSITIVE: &str = "stepId must be a positive integer";
pub const STATUS_REQUIRED: &str = "status is required";
pub const STATUS_NOT_STRING: &str = "status must be a string";
pub const PROGRAM_ID_NOT_POSITIVE: &str = "program_id must be a positive integer";
pub const USER_NAME_NOT_STRING: &str = "completed_by_user_name must be a string";

/// Accept a JSON integer or numeric string in `1..=i32::MAX`
pub fn parse_positive_id(value: &Value) -> Option<i32> {
    let id = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };

    i32::try_from(id).ok().filter(|id| *id > 0)
}

/// Values a client sends when it means "no step"
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Turn a raw body into a [`ProgressUpdateRequest`]
pub fn validate_batch_request(
    body: BatchStepProgressBody,
    max_batch_size: usize,
) -> Result<ProgressUpdateRequest> {
    let raw_ids = match body.item_ids {
        Some(Value::Array(ids)) if !ids.is_empty() => ids,
        _ => return Err(GatewayError::validation(ITEM_IDS_REQUIRED)),
    };

    if raw_ids.len() > max_batch_size {
        return Err(GatewayError::validation(format!(
            "itemIds must not contain more than {} entries",
            max_batch_size
        )));
    }

    let item_ids = raw_ids
        .iter()
        .map(parse_positive_id)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| GatewayError::validation(ITEM_IDS_NOT_POSITIVE))?;

    let step_id = match body.step_id {
        None => return Err(GatewayError::validation(STEP_ID_REQUIRED)),
        Some(ref value) if is_blank(value) => {
            return Err(GatewayError::validation(STEP_ID_REQUIRED));
        }
        Some(ref value) => {
            parse_positive_id(value).ok_or_else(|| GatewayError::validation(STEP_ID_NOT_POSITIVE))?
        }
    };

    let status = match body.status {
        None | Some(Value::Null) => return Err(GatewayError::validation(STATUS_REQUIRED)),
        Some(Value::String(s)) if s.trim().is_empty() => {
            return Err(GatewayError::validation(STATUS_REQUIRED));
        }
        Some(Value::String(s)) => StepStatus::parse(&s),
        Some(_) => return Err(GatewayError::validation(STATUS_NOT_STRING)),
    };

    let program_id = match body.program_id {
        None | Some(Value::Null) => None,
        Some(ref value) => Some(
            parse_positive_id(value)
                .ok_or_else(|| GatewayError::validation(PROGRAM_ID_NOT_POSITIVE))?,
        ),
    };

    let completed_by_user_name = match body.completed_by_user_name {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => Some(name.trim().to_string()).filter(|name| !name.is_empty()),
        Some(_) => return Err(GatewayError::validation(USER_NAME_NOT_STRING)),
    };

    Ok(ProgressUpdateRequest {
        item_ids,
        step_id,
        status,
        completed_by_user_name,
        program_id,
    })
}
