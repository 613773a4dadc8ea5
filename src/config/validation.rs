//! Configuration validation

use super::models::*;

/// Configuration sections that can check their own invariants
pub trait Validate {
    /// Section name used in error messages
    const SECTION: &'static str;

    fn validate(&self) -> Result<(), String>;
}

impl Validate for ServerConfig {
    const SECTION: &'static str = "Server";

    fn validate(&self) -> Result<(), String> {
        ServerConfig::validate(self)?;
        self.cors.validate().map_err(|e| format!("CORS: {}", e))
    }
}

impl Validate for DatabaseConfig {
    const SECTION: &'static str = "Database";

    fn validate(&self) -> Result<(), String> {
        DatabaseConfig::validate(self)
    }
}

impl Validate for AuthConfig {
    const SECTION: &'static str = "Auth";

    fn validate(&self) -> Result<(), String> {
        AuthConfig::validate(self)
    }
}

impl Validate for BatchConfig {
    const SECTION: &'static str = "Batch";

    fn validate(&self) -> Result<(), String> {
        BatchConfig::validate(self)
    }
}

impl Validate for LoggingConfig {
    const SECTION: &'static str = "Logging";

    fn validate(&self) -> Result<(), String> {
        LoggingConfig::validate(self)
    }
}
