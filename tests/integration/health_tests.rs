//! Public endpoints

use crate::common::ScriptedStore;
use crate::common::fixtures;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;
use tracker_gateway::StoreError;
use tracker_gateway::server::create_app;

#[actix_web::test]
async fn test_health_needs_no_certificate() {
    let store = ScriptedStore::new();
    let app = test::init_service(create_app(fixtures::app_state(store.clone()))).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers().get("server").unwrap(), "tracker-gateway");

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].is_string());
    assert!(store.principal_lookups().is_empty());
}

#[actix_web::test]
async fn test_database_connected() {
    let app = test::init_service(create_app(fixtures::app_state(ScriptedStore::new()))).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/health/db").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["database"], "connected");
    assert!(body.get("error").is_none());
}

#[actix_web::test]
async fn test_database_error() {
    let store = ScriptedStore::new().failing_ping(StoreError::other("permission denied for function"));
    let app = test::init_service(create_app(fixtures::app_state(store))).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/health/db").to_request()).await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["database"], "error");
}

#[actix_web::test]
async fn test_root_banner() {
    let app = test::init_service(create_app(fixtures::app_state(ScriptedStore::new()))).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = test::read_body(res).await;
    assert_eq!(std::str::from_utf8(&body).unwrap(), "Tracker gateway is running!");
}
