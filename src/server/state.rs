//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::services::BatchStepProgressCoordinator;
use crate::storage::StoreGateway;
use crate::utils::error::RetryPolicy;
use std::sync::Arc;
use std::time::Instant;

/// HTTP server state shared across handlers
///
/// All fields are cheap to clone; actix clones the state into every worker.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Data access gateway
    pub store: Arc<dyn StoreGateway>,
    /// Step-progress coordinator sharing `store`
    pub step_progress: BatchStepProgressCoordinator,
    /// Process start, reported as uptime
    pub started_at: Instant,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, store: Arc<dyn StoreGateway>) -> Self {
        let retry = RetryPolicy::new(config.batch().retry_config());
        let step_progress = BatchStepProgressCoordinator::new(Arc::clone(&store), retry);

        Self {
            config: Arc::new(config),
            store,
            step_progress,
            started_at: Instant::now(),
        }
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
