//! Driver error classification
//!
//! Raw vendor codes stop here; callers only see [`StoreErrorKind`].

use crate::storage::{StoreError, StoreErrorKind};
use sea_orm::DbErr;
use tracing::debug;

/// Map a SeaORM error onto the gateway's error kinds
pub fn classify_store_error(err: &DbErr, transient_codes: &[String]) -> StoreError {
    let message = err.to_string();

    if matches!(err, DbErr::ConnectionAcquire(_) | DbErr::Conn(_)) {
        return StoreError::unavailable(message);
    }

    classify_code(vendor_code(err), message, transient_codes)
}

pub(super) fn classify_code(
    code: Option<String>,
    message: String,
    transient_codes: &[String],
) -> StoreError {
    let Some(code) = code else {
        return StoreError::other(message);
    };

    let kind = if transient_codes.iter().any(|c| c.eq_ignore_ascii_case(&code)) {
        StoreErrorKind::TransientContention
    } else {
        StoreErrorKind::Other
    };

    debug!(code = %code, ?kind, "Classified store error");
    StoreError::new(kind, message).with_code(code)
}

#[cfg(feature = "postgres")]
fn vendor_code(err: &DbErr) -> Option<String> {
    use sea_orm::RuntimeErr;

    match err {
        DbErr::Exec(RuntimeErr::SqlxError(e))
        | DbErr::Query(RuntimeErr::SqlxError(e))
        | DbErr::Conn(RuntimeErr::SqlxError(e)) => e
            .as_database_error()
            .and_then(|db_err| db_err.code())
            .map(|code| code.into_owned()),
        _ => None,
    }
}

#[cfg(not(feature = "postgres"))]
fn vendor_code(_err: &DbErr) -> Option<String> {
    None
}
