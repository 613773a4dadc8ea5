//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::storage::StoreGateway;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    store: Option<Arc<dyn StoreGateway>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use an existing store instead of connecting to the configured database
    pub fn with_store(mut self, store: Arc<dyn StoreGateway>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        match self.store {
            Some(store) => Ok(HttpServer::with_store(config, store)),
            None => HttpServer::new(&config).await,
        }
    }
}

/// Connect the store and serve until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting tracker gateway v{}", crate::VERSION);
    crate::config::models::auth::warn_insecure_config(config.auth());

    let server = ServerBuilder::new().with_config(config).build().await?;
    info!("Server starting at: http://{}", server.config().address());
    info!("API Endpoints:");
    info!("   GET  /api/health - Liveness");
    info!("   GET  /api/health/db - Database connectivity");
    info!("   GET  /api/auth/me - Resolved caller");
    info!("   POST /api/tracked-items/batch-step-progress - Batch step progress update");
    info!("   POST /api/tracked-items/{{itemId}}/steps/{{stepId}} - Single step progress update");

    server.start().await
}
