//! Storage layer for the Gateway
//!
//! Everything the facade knows about the database goes through the
//! [`StoreGateway`] trait: named transactional operations with a typed
//! parameter bag, principal lookup for access control, and a liveness probe.

/// Database storage module
pub mod database;
mod gateway;
mod params;

pub use gateway::{ProcedureOutput, StoreError, StoreErrorKind, StoreGateway};
pub use params::{ParamValue, ProcedureParam, ProcedureParams};
