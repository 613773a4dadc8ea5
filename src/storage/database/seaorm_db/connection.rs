use crate::config::DatabaseConfig;
use crate::storage::StoreError;
use crate::utils::error::{GatewayError, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DbErr};
use std::time::Duration;
use tracing::info;

use super::classify::classify_store_error;
use super::types::{DatabaseBackendType, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Create a new database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(config.acquire_timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        let db = Database::connect(opt)
            .await
            .map_err(GatewayError::Database)?;

        let backend_type = match db.get_database_backend() {
            DatabaseBackend::Postgres => DatabaseBackendType::PostgreSQL,
            _ => DatabaseBackendType::Other,
        };

        info!("Database connection established ({:?})", backend_type);
        Ok(Self {
            db,
            backend_type,
            transient_error_codes: config.transient_error_codes.clone(),
        })
    }

    /// Get the backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Classify a driver error with this connection's transient code list
    pub(super) fn classify(&self, err: DbErr) -> StoreError {
        classify_store_error(&err, &self.transient_error_codes)
    }

    /// Close the connection pool
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(GatewayError::Database)?;
        info!("Database connection closed");
        Ok(())
    }
}
