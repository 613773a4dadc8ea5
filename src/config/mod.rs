//! Configuration management for the Gateway
//!
//! Configuration is read from a YAML file, then environment variables override
//! individual settings, then the whole tree is validated.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Main configuration struct for the Gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let gateway: GatewayConfig = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists (defaults otherwise), then apply environment overrides
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            warn!("Config file {:?} not found, using defaults", path);
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides read through `lookup` (normally the process environment)
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gateway = &mut self.gateway;

        if let Some(host) = lookup("GATEWAY_HOST") {
            gateway.server.host = host;
        }
        if let Some(port) = lookup("GATEWAY_PORT") {
            gateway.server.port = parse_env("GATEWAY_PORT", &port)?;
        }
        if let Some(workers) = lookup("GATEWAY_WORKERS") {
            gateway.server.workers = Some(parse_env("GATEWAY_WORKERS", &workers)?);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            gateway.storage.database.url = url;
        }
        if let Some(max) = lookup("DATABASE_MAX_CONNECTIONS") {
            gateway.storage.database.max_connections = parse_env("DATABASE_MAX_CONNECTIONS", &max)?;
        }
        if let Some(subject) = lookup("AUTH_FALLBACK_SUBJECT") {
            let subject = subject.trim().to_string();
            gateway.auth.fallback_subject = (!subject.is_empty()).then_some(subject);
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            gateway.logging.level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            gateway.logging.format = format.parse().map_err(GatewayError::Config)?;
        }

        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.gateway.storage
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.gateway.auth
    }

    /// Get batch configuration
    pub fn batch(&self) -> &BatchConfig {
        &self.gateway.batch
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.gateway.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        check(&self.gateway.server)?;
        check(&self.gateway.storage.database)?;
        check(&self.gateway.auth)?;
        check(&self.gateway.batch)?;
        check(&self.gateway.logging)?;

        // Warn about insecure configurations
        crate::config::models::auth::warn_insecure_config(&self.gateway.auth);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn check<T: Validate>(section: &T) -> Result<()> {
    Validate::validate(section)
        .map_err(|e| GatewayError::Config(format!("{} config error: {}", T::SECTION, e)))
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| GatewayError::Config(format!("Invalid value for {}: {}", key, e)))
}
