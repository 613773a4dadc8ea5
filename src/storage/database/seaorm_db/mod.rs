// Module declarations
mod classify;
mod connection;
mod principal_ops;
mod procedure_ops;
mod types;

// Re-export public types
pub use classify::classify_store_error;
pub use types::{DatabaseBackendType, SeaOrmDatabase};

use crate::auth::Principal;
use crate::storage::{ProcedureOutput, ProcedureParams, StoreError, StoreGateway};
use async_trait::async_trait;

#[async_trait]
impl StoreGateway for SeaOrmDatabase {
    async fn execute_procedure(
        &self,
        name: &str,
        params: &ProcedureParams,
    ) -> Result<ProcedureOutput, StoreError> {
        self.call_procedure(name, params).await
    }

    async fn find_principal(&self, subject: &str) -> Result<Option<Principal>, StoreError> {
        self.load_principal(subject).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db
            .ping()
            .await
            .map_err(|e| self.classify(e))
    }
}
