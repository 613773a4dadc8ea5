//! Sequential batch coordinator

use super::types::{BatchResult, PerTargetOutcome, ProgressPayload, ProgressUpdateRequest};
use crate::storage::{ProcedureOutput, ProcedureParams, StoreError, StoreGateway};
use crate::utils::error::{RetryOutcome, RetryPolicy};
use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span, warn};

/// Stored operation that records progress for one item and step
pub const UPDATE_STEP_PROGRESS_PROCEDURE: &str = "usp_UpdateTrackedItemStepProgress";

/// Name of the JSON parameter carrying the progress payload
pub const PROGRESS_PARAM: &str = "ProgressJson";

/// Applies step-progress updates through the store, retrying transient contention
#[derive(Clone)]
pub struct BatchStepProgressCoordinator {
    store: Arc<dyn StoreGateway>,
    retry: RetryPolicy,
}

impl BatchStepProgressCoordinator {
    pub fn new(store: Arc<dyn StoreGateway>, retry: RetryPolicy) -> Self {
        Self { store, retry }
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Apply `request` to every item, strictly one after another in input order.
    ///
    /// Items are never updated concurrently; a failed item never stops the batch.
    pub async fn run(&self, request: &ProgressUpdateRequest) -> BatchResult {
        info!(
            items = request.item_ids.len(),
            step_id = request.step_id,
            status = %request.status,
            "Processing batch step progress update"
        );

        let mut result = BatchResult::with_capacity(request.item_ids.len());
        for &item_id in &request.item_ids {
            let span = info_span!("step_progress_item", item_id, step_id = request.step_id);
            let outcome = self.apply_target(request, item_id).instrument(span).await;
            result.push(outcome);
        }

        info!(
            succeeded = result.success_count(),
            failed = result.failure_count(),
            total = result.total(),
            "Batch step progress update completed"
        );
        result
    }

    async fn apply_target(&self, request: &ProgressUpdateRequest, item_id: i32) -> PerTargetOutcome {
        let payload = ProgressPayload::for_item(request, item_id);
        let params = match ProcedureParams::new().json(PROGRESS_PARAM, &payload) {
            Ok(params) => params,
            Err(e) => {
                warn!("Failed to encode progress payload: {}", e);
                return PerTargetOutcome::failed(item_id, 1, format!("Invalid progress payload: {}", e));
            }
        };

        let RetryOutcome { result, attempts } = self.execute(&params).await;
        match result.and_then(ProcedureOutput::into_result) {
            Ok(_) => {
                debug!(attempts, "Updated step progress");
                PerTargetOutcome::succeeded(item_id, attempts)
            }
            Err(e) => {
                warn!(attempts, kind = ?e.kind, code = ?e.code, "Failed to update step progress: {}", e);
                PerTargetOutcome::failed(item_id, attempts, e.message)
            }
        }
    }

    /// Apply one progress document as-is.
    ///
    /// An error document from the procedure is returned as a successful
    /// output; callers decide how to surface it.
    pub async fn apply_document(
        &self,
        document: serde_json::Map<String, serde_json::Value>,
    ) -> RetryOutcome<ProcedureOutput, StoreError> {
        let params = match ProcedureParams::new()
            .json(PROGRESS_PARAM, &serde_json::Value::Object(document))
        {
            Ok(params) => params,
            Err(e) => {
                return RetryOutcome {
                    result: Err(StoreError::other(format!("Invalid progress payload: {}", e))),
                    attempts: 1,
                };
            }
        };

        self.execute(&params).await
    }

    async fn execute(&self, params: &ProcedureParams) -> RetryOutcome<ProcedureOutput, StoreError> {
        let store: &dyn StoreGateway = self.store.as_ref();
        self.retry
            .call(move |attempt| {
                debug!(attempt, "Executing {}", UPDATE_STEP_PROGRESS_PROCEDURE);
                store.execute_procedure(UPDATE_STEP_PROGRESS_PROCEDURE, params)
            })
            .await
    }
}
