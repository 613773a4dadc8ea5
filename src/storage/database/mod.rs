//! Database storage implementation using SeaORM
//!
//! This module provides the SeaORM-backed [`StoreGateway`](crate::storage::StoreGateway).

/// SeaORM database implementation module
pub mod seaorm_db;

// Re-export the main database interface
pub use seaorm_db::SeaOrmDatabase as Database;
pub use seaorm_db::{DatabaseBackendType, classify_store_error};
