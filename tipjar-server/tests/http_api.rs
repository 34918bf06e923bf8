//! HTTP API integration tests
//!
//! Drive the router in-process (no network stack) against an in-memory
//! document store.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use tipjar_server::api;
use tipjar_server::core::{Config, ServerState};
use tipjar_server::db::TipStore;

fn test_state() -> ServerState {
    let config = Config::with_overrides("/tmp/tipjar-unused", 0);
    let store = TipStore::open_in_memory().unwrap();
    ServerState::with_store(config, store).unwrap()
}

fn test_app(state: &ServerState) -> Router {
    api::build_app().with_state(state.clone())
}

async fn request(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    request(
        app,
        Request::builder().uri(path).body(Body::empty()).unwrap(),
    )
    .await
}

async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    request(
        app,
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn register_alice(app: &Router) -> String {
    let (status, body) = post(app, "/staff", json!({"name": "Alice"})).await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_str().unwrap().to_string()
}

async fn mint_token(app: &Router, staff_id: &str) -> String {
    let (status, body) = post(
        app,
        "/qr",
        json!({"staffId": staff_id, "pointType": "Table", "pointLabel": "5"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health() {
    let state = test_state();
    let app = test_app(&state);

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn test_register_staff_defaults_role() {
    let state = test_state();
    let app = test_app(&state);

    let (status, body) = post(&app, "/staff", json!({"name": "Alice"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["role"], "Staff");
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_staff_missing_name_is_400() {
    let state = test_state();
    let app = test_app(&state);

    let (status, body) = post(&app, "/staff", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_mint_and_resolve() {
    let state = test_state();
    let app = test_app(&state);
    let staff_id = register_alice(&app).await;

    let (status, body) = post(
        &app,
        "/qr",
        json!({"staffId": staff_id, "pointType": "Table", "pointLabel": "5"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let token = body["token"].as_str().unwrap();
    assert_eq!(
        body["url"],
        format!("{}/t/{}", state.config.public_base_url, token)
    );
    assert_eq!(body["record"]["staffId"], staff_id.as_str());
    assert!(body["record"]["createdAt"].as_str().is_some());

    let (status, body) = get(&app, &format!("/qr/{}", token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"], token);
    assert_eq!(body["staff"]["name"], "Alice");
    assert_eq!(body["pointType"], "Table");
    assert_eq!(body["pointLabel"], "5");
}

#[tokio::test]
async fn test_mint_missing_staff_id_is_400() {
    let state = test_state();
    let app = test_app(&state);

    let (status, _) = post(&app, "/qr", json!({"pointType": "Table"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mint_unknown_staff_is_404() {
    let state = test_state();
    let app = test_app(&state);

    let (status, body) = post(&app, "/qr", json!({"staffId": "no-such-staff"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "not found"}));
}

#[tokio::test]
async fn test_resolve_unknown_token_is_404() {
    let state = test_state();
    let app = test_app(&state);

    let (status, body) = get(&app, "/qr/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "not found"}));
}

#[tokio::test]
async fn test_checkout_without_processor_is_simulated() {
    let state = test_state();
    let app = test_app(&state);
    let staff_id = register_alice(&app).await;
    let token = mint_token(&app, &staff_id).await;

    let (status, body) = post(&app, "/checkout", json!({"token": token, "amount": 10})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["url"],
        format!(
            "{}/success?token={}&amount=10",
            state.config.public_base_url, token
        )
    );
    assert_eq!(body["simulated"], true);
}

#[tokio::test]
async fn test_checkout_missing_fields_is_400() {
    let state = test_state();
    let app = test_app(&state);

    let (status, _) = post(&app, "/checkout", json!({"amount": 10})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&app, "/checkout", json!({"token": "abc"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_checkout_unknown_token_is_404() {
    let state = test_state();
    let app = test_app(&state);

    let (status, _) = post(
        &app,
        "/checkout",
        json!({"token": "does-not-exist", "amount": 10}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_record_appends_to_ledger() {
    let state = test_state();
    let app = test_app(&state);
    let staff_id = register_alice(&app).await;
    let token = mint_token(&app, &staff_id).await;

    let before = state.store.load().unwrap().tips.len();

    let (status, body) = post(&app, "/record", json!({"token": token, "amount": 10})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));

    let snapshot = state.store.load().unwrap();
    assert_eq!(snapshot.tips.len(), before + 1);
    assert_eq!(snapshot.tips[0].token, token);
    assert_eq!(snapshot.tips[0].amount, 10.0);
}

#[tokio::test]
async fn test_record_unknown_token_is_404() {
    let state = test_state();
    let app = test_app(&state);

    let (status, body) = post(
        &app,
        "/record",
        json!({"token": "does-not-exist", "amount": 10}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "not found"}));
    assert!(state.store.load().unwrap().tips.is_empty());
}
