//! Authentication configuration

use super::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Require a resolved principal on protected routes
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Header carrying the client certificate subject
    #[serde(default = "default_subject_header")]
    pub subject_header: String,
    /// Subject assumed when the header is absent (development only)
    #[serde(default)]
    pub fallback_subject: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            subject_header: default_subject_header(),
            fallback_subject: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.subject_header.trim().is_empty() {
            return Err("subject_header cannot be empty".to_string());
        }
        if actix_web::http::header::HeaderName::from_bytes(self.subject_header.as_bytes())
            .is_err()
        {
            return Err(format!("Invalid subject_header: {}", self.subject_header));
        }
        Ok(())
    }
}

/// Warn about settings that should not reach production
pub fn warn_insecure_config(config: &AuthConfig) {
    if !config.enabled {
        warn!("Authentication is disabled; every caller is treated as a system admin");
    }
    if config.fallback_subject.is_some() {
        warn!("A fallback certificate subject is configured; requests without a certificate will be attributed to it");
    }
}

fn default_subject_header() -> String {
    "x-arr-clientcert".to_string()
}
