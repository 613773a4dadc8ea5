//! Authentication and authorization
//!
//! Callers are identified by the subject of their client certificate, which a
//! TLS-terminating proxy forwards in a header. The subject resolves to a
//! [`Principal`] carrying per-program access grants; handlers then gate writes
//! with [`Principal::require_program_access`].

mod access;
mod subject;
mod types;


pub use subject::resolve_subject;
pub use types::{AccessLevel, Principal, ProgramAccess};
