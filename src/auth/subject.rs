//! Caller subject extraction

use crate::config::AuthConfig;
use actix_web::http::header::HeaderMap;

/// Subject from the configured certificate header, else the fallback subject.
///
/// The header value is used as-is; certificate decoding happens upstream.
pub fn resolve_subject(headers: &HeaderMap, config: &AuthConfig) -> Option<String> {
    headers
        .get(config.subject_header.as_str())
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .or_else(|| config.fallback_subject.clone())
}
