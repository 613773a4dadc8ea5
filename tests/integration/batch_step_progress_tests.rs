//! Batch step-progress endpoint

use crate::common::fixtures::{self, SUBJECT, SUBJECT_HEADER, batch_body, deadlock};
use crate::common::{Reply, ScriptedStore};
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tracker_gateway::server::create_app;
use tracker_gateway::utils::error::{RetryConfig, RetryPolicy};
use tracker_gateway::{BatchStepProgressCoordinator, ProgressUpdateRequest, StepStatus, StoreError};

const BATCH_URI: &str = "/api/tracked-items/batch-step-progress";

async fn post_batch(store: Arc<ScriptedStore>, body: Value) -> (StatusCode, Value) {
    let store = store.with_principal(SUBJECT, fixtures::operator());
    let app = test::init_service(create_app(fixtures::app_state(store))).await;

    let req = test::TestRequest::post()
        .uri(BATCH_URI)
        .insert_header((SUBJECT_HEADER, SUBJECT))
        .set_json(body)
        .to_request();
    let res = test::call_service(&app, req).await;
    let status = res.status();
    let body: Value = test::read_body_json(res).await;
    (status, body)
}

fn exhausted() -> Vec<Reply> {
    vec![deadlock(), deadlock(), deadlock()]
}

#[actix_web::test]
async fn test_results_cover_every_item_in_order() {
    let store = ScriptedStore::new();
    let (status, body) = post_batch(store.clone(), batch_body(json!([12, 3, 7, 40]))).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["itemId"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![12, 3, 7, 40]);

    let called: Vec<i64> = store
        .calls()
        .iter()
        .map(|c| c.payload["item_id"].as_i64().unwrap())
        .collect();
    assert_eq!(called, vec![12, 3, 7, 40]);
}

#[actix_web::test]
async fn test_missing_or_empty_item_ids_touch_no_procedure() {
    for body in [
        json!({ "stepId": 5, "status": "Complete" }),
        batch_body(json!([])),
        batch_body(json!("1,2,3")),
    ] {
        let store = ScriptedStore::new();
        let (status, response) = post_batch(store.clone(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response["error"],
            "itemIds array is required and must not be empty"
        );
        assert!(store.calls().is_empty());
    }
}

#[actix_web::test]
async fn test_missing_step_and_status() {
    let (status, body) = post_batch(
        ScriptedStore::new(),
        json!({ "itemIds": [1], "status": "Complete" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "stepId is required");

    let (status, body) =
        post_batch(ScriptedStore::new(), json!({ "itemIds": [1], "stepId": 5 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "status is required");
}

#[actix_web::test]
async fn test_oversized_batch_is_rejected() {
    let ids: Vec<i32> = (1..=501).collect();
    let store = ScriptedStore::new();
    let (status, body) = post_batch(store.clone(), batch_body(json!(ids))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "itemIds must not contain more than 500 entries");
    assert!(store.calls().is_empty());
}

#[actix_web::test]
async fn test_first_attempt_success() {
    let (status, body) = post_batch(ScriptedStore::new(), batch_body(json!([9]))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": 1,
            "failed": 0,
            "total": 1,
            "results": [{ "itemId": 9, "success": true, "attempts": 1 }]
        })
    );
}

#[actix_web::test]
async fn test_deadlock_twice_then_success() {
    let store = ScriptedStore::new().script(9, vec![deadlock(), deadlock()]);
    let (status, body) = post_batch(store.clone(), batch_body(json!([9]))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["success"], true);
    assert_eq!(body["results"][0]["attempts"], 3);
    assert_eq!(store.calls_for(9).len(), 3);
}

#[actix_web::test]
async fn test_non_transient_failure_is_not_retried() {
    let store = ScriptedStore::new().script(
        9,
        vec![Err(StoreError::other("Invalid object name 'TrackedItemSteps'").with_code("208"))],
    );
    let (status, body) = post_batch(store.clone(), batch_body(json!([9]))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["results"][0]["attempts"], 1);
    assert_eq!(body["results"][0]["success"], false);
    assert_eq!(store.calls_for(9).len(), 1);
}

#[actix_web::test]
async fn test_partial_success_is_200_with_only_failures_in_errors() {
    let store = ScriptedStore::new().script(20, exhausted());
    let (status, body) = post_batch(store, batch_body(json!([10, 20, 30]))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], 2);
    assert_eq!(body["failed"], 1);
    assert_eq!(body["total"], 3);

    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["itemId"], 20);
    assert_eq!(errors[0]["attempts"], 3);
    assert!(errors[0]["error"].as_str().unwrap().contains("deadlocked"));
}

#[actix_web::test]
async fn test_single_exhausted_item_is_500() {
    let store = ScriptedStore::new().script(10, exhausted());
    let (status, body) = post_batch(store, batch_body(json!([10]))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], 0);
    assert_eq!(body["failed"], 1);
    assert_eq!(body["total"], 1);
    assert_eq!(body["results"][0]["attempts"], 3);
}

#[actix_web::test]
async fn test_payload_per_item() {
    let store = ScriptedStore::new();
    let body = json!({
        "itemIds": ["4", 5],
        "stepId": "5",
        "status": "in progress",
        "completed_by_user_name": "line.operator",
        "program_id": 1
    });
    let (status, _) = post_batch(store.clone(), body).await;
    assert_eq!(status, StatusCode::OK);

    let calls = store.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|c| c.procedure == "usp_UpdateTrackedItemStepProgress"));
    assert_eq!(
        calls[0].payload,
        json!({
            "item_id": 4,
            "step_id": 5,
            "status": "In Progress",
            "completed_by_user_name": "line.operator",
            "program_id": 1
        })
    );
}

#[tokio::test(start_paused = true)]
async fn test_backoff_grows_between_attempts() {
    let store = ScriptedStore::new().script(1, vec![deadlock(), deadlock()]);
    let coordinator = BatchStepProgressCoordinator::new(
        store.clone(),
        RetryPolicy::new(RetryConfig::default()),
    );
    let request = ProgressUpdateRequest {
        item_ids: vec![1],
        step_id: 5,
        status: StepStatus::Complete,
        completed_by_user_name: None,
        program_id: None,
    };

    let result = coordinator.run(&request).await;
    assert_eq!(result.outcomes()[0].attempts, 3);

    let calls = store.calls_for(1);
    let first = calls[1].at - calls[0].at;
    let second = calls[2].at - calls[1].at;
    assert!(first >= Duration::from_millis(100) && first < Duration::from_millis(150));
    assert!(second >= Duration::from_millis(200) && second < Duration::from_millis(250));
}

#[actix_web::test]
async fn test_non_string_user_name_does_not_mask_missing_item_ids() {
    let store = ScriptedStore::new();
    let (status, body) = post_batch(store.clone(), json!({ "completed_by_user_name": 5 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "itemIds array is required and must not be empty");
    assert!(store.calls().is_empty());
}
