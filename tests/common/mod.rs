//! Common test utilities for tracker-gateway
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{fixtures, ScriptedStore};
//!
//! let store = ScriptedStore::new().with_principal(fixtures::SUBJECT, fixtures::operator());
//! let app = test::init_service(create_app(fixtures::app_state(store.clone()))).await;
//! ```

pub mod fixtures;
pub mod store;

pub use store::{Reply, ScriptedStore};
