//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Pool acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout: u64,
    /// Vendor error codes treated as transient contention (retried)
    #[serde(default = "default_transient_error_codes")]
    pub transient_error_codes: Vec<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
            acquire_timeout: default_acquire_timeout(),
            transient_error_codes: default_transient_error_codes(),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("Database URL is required".to_string());
        }
        if self.max_connections == 0 {
            return Err("max_connections must be greater than 0".to_string());
        }
        if self.connection_timeout == 0 {
            return Err("connection_timeout must be greater than 0".to_string());
        }
        if self.transient_error_codes.iter().any(|c| c.trim().is_empty()) {
            return Err("transient_error_codes cannot contain empty codes".to_string());
        }
        Ok(())
    }
}

fn default_database_url() -> String {
    "postgresql://localhost/tracker".to_string()
}

fn default_acquire_timeout() -> u64 {
    30
}

/// `40P01` deadlock_detected, `40001` serialization_failure, `1205` deadlock victim
fn default_transient_error_codes() -> Vec<String> {
    vec!["40P01".to_string(), "40001".to_string(), "1205".to_string()]
}
