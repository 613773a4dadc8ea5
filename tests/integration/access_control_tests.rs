//! Access control filter

use crate::common::ScriptedStore;
use crate::common::fixtures::{self, ADMIN_SUBJECT, SUBJECT, SUBJECT_HEADER, batch_body};
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};
use tracker_gateway::server::create_app;

#[actix_web::test]
async fn test_request_without_subject_is_rejected() {
    let store = ScriptedStore::new().with_principal(SUBJECT, fixtures::operator());
    let app = test::init_service(create_app(fixtures::app_state(store.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/api/tracked-items/batch-step-progress")
        .set_json(batch_body(json!([1])))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(store.calls().is_empty());
    assert!(store.principal_lookups().is_empty());
}

#[actix_web::test]
async fn test_unknown_subject() {
    let store = ScriptedStore::new().with_principal(SUBJECT, fixtures::operator());
    let app = test::init_service(create_app(fixtures::app_state(store.clone()))).await;

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header((SUBJECT_HEADER, "CN=Nobody"))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "User not found or not authorized");
    assert_eq!(store.principal_lookups(), vec!["CN=Nobody".to_string()]);
}

#[actix_web::test]
async fn test_fallback_subject_is_used_without_header() {
    let store = ScriptedStore::new().with_principal(SUBJECT, fixtures::operator());
    let mut config = fixtures::fast_retry_config();
    config.gateway.auth.fallback_subject = Some(SUBJECT.to_string());
    let app = test::init_service(create_app(fixtures::app_state_with(config, store))).await;

    let req = test::TestRequest::get().uri("/api/auth/me").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["extractedFrom"], "fallback");
    assert_eq!(body["user"]["user_id"], 42);
    assert_eq!(body["user"]["program_access"][0]["access_level"], "Write");
}

#[actix_web::test]
async fn test_program_without_grant_is_forbidden() {
    let store = ScriptedStore::new().with_principal(SUBJECT, fixtures::operator());
    let app = test::init_service(create_app(fixtures::app_state(store.clone()))).await;

    let mut body = batch_body(json!([1, 2]));
    body["program_id"] = json!(99);
    let req = test::TestRequest::post()
        .uri("/api/tracked-items/batch-step-progress")
        .insert_header((SUBJECT_HEADER, SUBJECT))
        .set_json(body)
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Access denied to this program");
    assert!(store.calls().is_empty());
}

#[actix_web::test]
async fn test_read_only_grant_cannot_update() {
    let store = ScriptedStore::new().with_principal(SUBJECT, fixtures::operator());
    let app = test::init_service(create_app(fixtures::app_state(store.clone()))).await;

    let req = test::TestRequest::put()
        .uri("/api/tracked-items/3/steps/5")
        .insert_header((SUBJECT_HEADER, SUBJECT))
        .set_json(json!({ "status": "Complete", "program_id": 2 }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Insufficient access level. Required: Write");
    assert!(store.calls().is_empty());
}

#[actix_web::test]
async fn test_system_admin_bypasses_program_checks() {
    let store = ScriptedStore::new().with_principal(ADMIN_SUBJECT, fixtures::admin());
    let app = test::init_service(create_app(fixtures::app_state(store.clone()))).await;

    let mut body = batch_body(json!([1]));
    body["program_id"] = json!(99);
    let req = test::TestRequest::post()
        .uri("/api/tracked-items/batch-step-progress")
        .insert_header((SUBJECT_HEADER, ADMIN_SUBJECT))
        .set_json(body)
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(store.calls().len(), 1);
}
