use crate::storage::{ParamValue, ProcedureOutput, ProcedureParams, StoreError};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement, Value};
use tracing::debug;

use super::types::{DatabaseBackendType, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Run a stored operation and read its single JSON document.
    ///
    /// Operations are PostgreSQL functions returning one `json`/`text` value.
    pub(super) async fn call_procedure(
        &self,
        name: &str,
        params: &ProcedureParams,
    ) -> Result<ProcedureOutput, StoreError> {
        if self.backend_type != DatabaseBackendType::PostgreSQL {
            return Err(StoreError::other(
                "Stored operations require a PostgreSQL backend",
            ));
        }

        let (sql, values) = build_call(name, params)?;
        debug!(procedure = name, params = params.len(), "Executing stored operation");

        let row = self
            .db
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                sql,
                values,
            ))
            .await
            .map_err(|e| self.classify(e))?;

        let text = match row {
            Some(row) => row
                .try_get_by_index::<Option<String>>(0)
                .map_err(|e| self.classify(e))?,
            None => None,
        };

        ProcedureOutput::from_text(text.as_deref())
    }
}

/// Build `SELECT CAST(name($1::type, ...) AS text)` with bound values
pub(super) fn build_call(
    name: &str,
    params: &ProcedureParams,
) -> Result<(String, Vec<Value>), StoreError> {
    if !is_valid_identifier(name) {
        return Err(StoreError::other(format!(
            "Invalid stored operation name: {}",
            name
        )));
    }

    let mut placeholders = Vec::with_capacity(params.len());
    let mut values = Vec::with_capacity(params.len());

    for (index, param) in params.iter().enumerate() {
        let position = index + 1;
        let (cast, value) = match &param.value {
            ParamValue::Int(v) => ("integer", Value::from(*v)),
            ParamValue::Text(v) => ("text", Value::from(v.clone())),
            ParamValue::Json(v) => ("jsonb", Value::from(v.clone())),
        };
        placeholders.push(format!("${}::{}", position, cast));
        values.push(value);
    }

    let sql = format!(
        "SELECT CAST({}({}) AS text) AS result",
        name,
        placeholders.join(", ")
    );
    Ok((sql, values))
}

/// `name` or `schema.name`, ASCII identifiers only
fn is_valid_identifier(name: &str) -> bool {
    let mut parts = name.split('.');
    let valid_part = |part: &str| {
        let mut chars = part.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    };

    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), None, None) => valid_part(name),
        (Some(schema), Some(name), None) => valid_part(schema) && valid_part(name),
        _ => false,
    }
}
