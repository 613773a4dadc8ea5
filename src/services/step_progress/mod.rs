//! Step-progress updates for tracked items
//!
//! A batch applies one progress update to many tracked items. Items are
//! processed one at a time, in request order, each through the retry policy;
//! a failed item never aborts the rest of the batch.

mod coordinator;
mod types;
mod validation;


pub use coordinator::{
    BatchStepProgressCoordinator, PROGRESS_PARAM, UPDATE_STEP_PROGRESS_PROCEDURE,
};
pub use types::{
    BatchResult, BatchStepProgressBody, BatchStepProgressResponse, FailureDetail,
    PerTargetOutcome, ProgressUpdateRequest, StepStatus,
};
pub use validation::{parse_positive_id, validate_batch_request};
