//! Request, outcome and wire types for step-progress updates

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress status of a step on a tracked item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    NotStarted,
    InProgress,
    Complete,
    NotApplicable,
    /// Any other value, forwarded to the store unchanged
    Other(String),
}

impl StepStatus {
    /// Map known spellings to their canonical value
    pub fn parse(raw: &str) -> Self {
        let key: String = raw
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "notstarted" | "pending" => StepStatus::NotStarted,
            "inprogress" | "started" => StepStatus::InProgress,
            "complete" | "completed" | "done" => StepStatus::Complete,
            "n/a" | "na" | "notapplicable" => StepStatus::NotApplicable,
            _ => StepStatus::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StepStatus::NotStarted => "Not Started",
            StepStatus::InProgress => "In Progress",
            StepStatus::Complete => "Complete",
            StepStatus::NotApplicable => "N/A",
            StepStatus::Other(raw) => raw,
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StepStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A validated batch update: one progress change applied to every item
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdateRequest {
    pub item_ids: Vec<i32>,
    pub step_id: i32,
    pub status: StepStatus,
    pub completed_by_user_name: Option<String>,
    /// Program the items belong to, when the caller scopes the update
    pub program_id: Option<i32>,
}

/// Single-item payload handed to the store as `ProgressJson`
#[derive(Debug, Serialize)]
pub(super) struct ProgressPayload<'a> {
    pub item_id: i32,
    pub step_id: i32,
    pub status: &'a StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_by_user_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<i32>,
}

impl<'a> ProgressPayload<'a> {
    pub fn for_item(request: &'a ProgressUpdateRequest, item_id: i32) -> Self {
        Self {
            item_id,
            step_id: request.step_id,
            status: &request.status,
            completed_by_user_name: request.completed_by_user_name.as_deref(),
            program_id: request.program_id,
        }
    }
}

/// Final state of one item after its retry sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerTargetOutcome {
    pub item_id: i32,
    #[serde(rename = "success")]
    pub succeeded: bool,
    pub attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PerTargetOutcome {
    pub fn succeeded(item_id: i32, attempts: u32) -> Self {
        Self {
            item_id,
            succeeded: true,
            attempts,
            error: None,
        }
    }

    pub fn failed<S: Into<String>>(item_id: i32, attempts: u32, error: S) -> Self {
        Self {
            item_id,
            succeeded: false,
            attempts,
            error: Some(error.into()),
        }
    }
}

/// Failure entry reported in `errors`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureDetail {
    pub item_id: i32,
    pub error: String,
    pub attempts: u32,
}

/// Outcomes of one batch, in processing order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResult {
    outcomes: Vec<PerTargetOutcome>,
}

impl BatchResult {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, outcome: PerTargetOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[PerTargetOutcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded).count()
    }

    pub fn failure_count(&self) -> usize {
        self.total() - self.success_count()
    }

    pub fn failures(&self) -> Vec<FailureDetail> {
        self.outcomes
            .iter()
            .filter(|o| !o.succeeded)
            .map(|o| FailureDetail {
                item_id: o.item_id,
                error: o.error.clone().unwrap_or_default(),
                attempts: o.attempts,
            })
            .collect()
    }

    /// 200 when anything was updated, 500 when every item failed
    pub fn status_code(&self) -> StatusCode {
        if self.success_count() > 0 {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    pub fn to_response(&self) -> BatchStepProgressResponse {
        let errors = self.failures();
        BatchStepProgressResponse {
            success: self.success_count(),
            failed: self.failure_count(),
            total: self.total(),
            results: self.outcomes.clone(),
            errors: (!errors.is_empty()).then_some(errors),
        }
    }
}

/// Raw request body of `POST /api/tracked-items/batch-step-progress`
///
/// Fields stay loosely typed so validation can answer with precise messages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchStepProgressBody {
    #[serde(rename = "itemIds", default)]
    pub item_ids: Option<serde_json::Value>,
    #[serde(rename = "stepId", default)]
    pub step_id: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default)]
    pub completed_by_user_name: Option<serde_json::Value>,
    #[serde(default)]
    pub program_id: Option<serde_json::Value>,
}

/// Response body of the batch endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchStepProgressResponse {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
    pub results: Vec<PerTargetOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FailureDetail>>,
}
