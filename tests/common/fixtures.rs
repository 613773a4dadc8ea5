//! Test fixtures
//!
//! Principals, configurations and request bodies with sensible defaults.

use actix_web::web;
use serde_json::{Value, json};
use std::sync::Arc;
use tracker_gateway::config::BatchConfig;
use tracker_gateway::server::AppState;
use tracker_gateway::{AccessLevel, Config, Principal, ProgramAccess, StoreError, StoreGateway};

/// Certificate subject of [`operator`]
pub const SUBJECT: &str = "CN=Line Operator, OU=Production, O=Example";

/// Certificate subject of [`admin`]
pub const ADMIN_SUBJECT: &str = "CN=Plant Admin, OU=IT, O=Example";

pub const SUBJECT_HEADER: &str = "x-arr-clientcert";

/// Non-admin user with Write on program 1 and Read on program 2
pub fn operator() -> Principal {
    Principal {
        user_id: 42,
        user_name: "line.operator".to_string(),
        display_name: Some("Line Operator".to_string()),
        is_system_admin: false,
        program_access: vec![
            grant(1, AccessLevel::Write, "Assembly"),
            grant(2, AccessLevel::Read, "Calibration"),
        ],
    }
}

pub fn admin() -> Principal {
    Principal {
        user_id: 1,
        user_name: "plant.admin".to_string(),
        display_name: None,
        is_system_admin: true,
        program_access: Vec::new(),
    }
}

fn grant(program_id: i32, access_level: AccessLevel, name: &str) -> ProgramAccess {
    ProgramAccess {
        program_id,
        access_level,
        program_name: name.to_string(),
        program_code: Some(name.to_uppercase()),
    }
}

/// Default config with millisecond backoff so HTTP tests stay fast
pub fn fast_retry_config() -> Config {
    let mut config = Config::default();
    config.gateway.batch = BatchConfig {
        base_delay_ms: 1,
        max_delay_ms: 10,
        max_jitter_ms: 0,
        ..BatchConfig::default()
    };
    config
}

pub fn app_state(store: Arc<impl StoreGateway + 'static>) -> web::Data<AppState> {
    app_state_with(fast_retry_config(), store)
}

pub fn app_state_with(config: Config, store: Arc<impl StoreGateway + 'static>) -> web::Data<AppState> {
    web::Data::new(AppState::new(config, store))
}

/// Batch body with step 5 marked complete
pub fn batch_body(item_ids: Value) -> Value {
    json!({
        "itemIds": item_ids,
        "stepId": 5,
        "status": "Complete",
        "completed_by_user_name": "line.operator"
    })
}

pub fn deadlock() -> Result<tracker_gateway::ProcedureOutput, StoreError> {
    Err(StoreError::transient("Transaction (Process ID 61) was deadlocked on lock resources")
        .with_code("1205"))
}
