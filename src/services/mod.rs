//! Services module
//!
//! This module contains business logic and service implementations

pub mod step_progress;

pub use step_progress::{
    BatchResult, BatchStepProgressBody, BatchStepProgressCoordinator, BatchStepProgressResponse,
    FailureDetail, PerTargetOutcome, ProgressUpdateRequest, StepStatus,
};
