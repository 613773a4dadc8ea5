//! Data access gateway contract

use super::params::ProcedureParams;
use crate::auth::Principal;
use crate::utils::error::Retryable;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Classification of a failed store call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreErrorKind {
    /// Lock or deadlock victim; expected to clear if retried shortly after
    TransientContention,
    /// The operation ran and reported an error payload
    Rejected,
    /// No usable connection to the store
    Unavailable,
    /// Any other failure
    Other,
}

/// Failure returned by the data access gateway
///
/// The vendor code is retained for logging only; retry decisions use `kind`.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub code: Option<String>,
    pub message: String,
}

impl StoreError {
    pub fn new<S: Into<String>>(kind: StoreErrorKind, message: S) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
        }
    }

    pub fn transient<S: Into<String>>(message: S) -> Self {
        Self::new(StoreErrorKind::TransientContention, message)
    }

    pub fn rejected<S: Into<String>>(message: S) -> Self {
        Self::new(StoreErrorKind::Rejected, message)
    }

    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::new(StoreErrorKind::Unavailable, message)
    }

    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::new(StoreErrorKind::Other, message)
    }

    /// Attach the vendor error code
    pub fn with_code<S: Into<String>>(mut self, code: S) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn is_transient(&self) -> bool {
        self.kind == StoreErrorKind::TransientContention
    }
}

impl Retryable for StoreError {
    fn is_retryable(&self) -> bool {
        self.is_transient()
    }
}

/// Document produced by a successful operation
///
/// Operations answer with a single JSON document (or nothing). A document with
/// a top-level `error` member is the operation refusing the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcedureOutput {
    pub document: Option<serde_json::Value>,
}

impl ProcedureOutput {
    pub fn empty() -> Self {
        Self { document: None }
    }

    pub fn from_document(document: serde_json::Value) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// Parse the raw text column returned by the store
    pub fn from_text(text: Option<&str>) -> Result<Self, StoreError> {
        match text.map(str::trim) {
            None | Some("") => Ok(Self::empty()),
            Some(raw) => serde_json::from_str(raw)
                .map(Self::from_document)
                .map_err(|e| StoreError::other(format!("Malformed operation result: {}", e))),
        }
    }

    /// Error message reported inside the document, if any
    pub fn error_message(&self) -> Option<String> {
        let error = self.document.as_ref()?.get("error")?;
        if error.is_null() {
            return None;
        }
        Some(match error {
            serde_json::Value::String(message) => message.clone(),
            serde_json::Value::Object(fields) => fields
                .get("ErrorMessage")
                .or_else(|| fields.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string()),
            other => other.to_string(),
        })
    }

    /// Turn an in-band error document into a [`StoreErrorKind::Rejected`] failure
    pub fn into_result(self) -> Result<Self, StoreError> {
        match self.error_message() {
            Some(message) => Err(StoreError::rejected(message)),
            None => Ok(self),
        }
    }

    /// Body to return to HTTP callers; an empty result is `[]`
    pub fn into_json(self) -> serde_json::Value {
        self.document
            .unwrap_or_else(|| serde_json::Value::Array(Vec::new()))
    }
}

/// Data access gateway
///
/// Each call is one transactional unit in the store. Implementations classify
/// their failures into [`StoreErrorKind`] before returning.
#[async_trait]
pub trait StoreGateway: Send + Sync {
    /// Execute a named transactional operation
    async fn execute_procedure(
        &self,
        name: &str,
        params: &ProcedureParams,
    ) -> Result<ProcedureOutput, StoreError>;

    /// Resolve an active user and their program access by certificate subject
    async fn find_principal(&self, subject: &str) -> Result<Option<Principal>, StoreError>;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<(), StoreError>;
}
