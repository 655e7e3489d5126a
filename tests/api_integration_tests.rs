//! Integration Tests for API Endpoints
//!
//! Drives the router end to end through `tower::ServiceExt::oneshot`.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use lru_ttl_cache::{api::create_router, AppState, SharedCache};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app(capacity: usize, default_ttl: Duration) -> Router {
    let cache = SharedCache::new(capacity, default_ttl).unwrap();
    create_router(AppState::new(cache))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn put(app: &Router, key: &str, value: Value, ttl: Option<u64>) -> StatusCode {
    let mut body = json!({ "key": key, "value": value });
    if let Some(ttl) = ttl {
        body["ttl"] = json!(ttl);
    }
    send(app, "PUT", "/set", Some(body)).await.0
}

// == SET / GET ==

#[tokio::test]
async fn test_set_then_get_returns_value() {
    let app = create_test_app(100, Duration::from_secs(300));

    assert_eq!(put(&app, "user", json!({"name": "Alex"}), None).await, StatusCode::OK);

    let (status, json) = send(&app, "GET", "/get/user", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], "user");
    assert_eq!(json["value"]["name"], "Alex");
}

#[tokio::test]
async fn test_set_response_message() {
    let app = create_test_app(100, Duration::from_secs(300));

    let (status, json) = send(
        &app,
        "PUT",
        "/set",
        Some(json!({"key": "test_key", "value": "test_value"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains("test_key"));
}

#[tokio::test]
async fn test_set_with_max_ttl_at_capacity() {
    let app = create_test_app(1, Duration::ZERO);
    assert_eq!(put(&app, "old", json!(1), None).await, StatusCode::OK);

    assert_eq!(put(&app, "huge", json!(2), Some(u64::MAX)).await, StatusCode::OK);

    let (status, json) = send(&app, "GET", "/get/huge", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"], 2);
    assert_eq!(send(&app, "GET", "/get/old", None).await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_missing_key_is_404() {
    let app = create_test_app(100, Duration::from_secs(300));

    let (status, json) = send(&app, "GET", "/get/nonexistent_key", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("nonexistent_key"));
}

// == DELETE ==

#[tokio::test]
async fn test_delete_removes_key() {
    let app = create_test_app(100, Duration::from_secs(300));
    put(&app, "delete_key", json!("delete_value"), None).await;

    let (status, json) = send(&app, "DELETE", "/del/delete_key", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["removed"], true);

    let (status, _) = send(&app, "GET", "/get/delete_key", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_absent_key_is_noop() {
    let app = create_test_app(100, Duration::from_secs(300));

    let (status, json) = send(&app, "DELETE", "/del/nonexistent_key", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["removed"], false);
}

// == Eviction ==

#[tokio::test]
async fn test_get_protects_key_from_eviction() {
    let app = create_test_app(2, Duration::ZERO);

    put(&app, "A", json!(1), None).await;
    put(&app, "B", json!(2), None).await;
    send(&app, "GET", "/get/A", None).await;
    put(&app, "C", json!(3), None).await;

    assert_eq!(send(&app, "GET", "/get/A", None).await.0, StatusCode::OK);
    assert_eq!(send(&app, "GET", "/get/B", None).await.0, StatusCode::NOT_FOUND);

    let (_, keys) = send(&app, "GET", "/keys", None).await;
    assert_eq!(keys["keys"], json!(["A", "C"]));

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["evictions"], 1);
}

// == STATS / HEALTH ==

#[tokio::test]
async fn test_stats_endpoint_counts() {
    let app = create_test_app(100, Duration::from_secs(300));

    put(&app, "stats_key", json!("stats_value"), None).await;
    send(&app, "GET", "/get/stats_key", None).await; // hit
    send(&app, "GET", "/get/nonexistent", None).await; // miss

    let (status, json) = send(&app, "GET", "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["total_entries"], 1);
    assert_eq!(json["capacity"], 100);
    assert_eq!(json["hit_rate"], 0.5);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(100, Duration::from_secs(300));

    let (status, json) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Error Responses ==

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app(100, Duration::from_secs(300));

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/set")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"invalid json"#))
                .unwrap(),
        )
        .await
        .unwrap();

    // Axum rejects malformed JSON before the handler runs
    assert!(
        response.status() == StatusCode::BAD_REQUEST
            || response.status() == StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[tokio::test]
async fn test_empty_key_request() {
    let app = create_test_app(100, Duration::from_secs(300));

    let (status, json) = send(&app, "PUT", "/set", Some(json!({"key": "", "value": "test"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

// == TTL ==

#[tokio::test]
async fn test_ttl_expiration_via_api() {
    let app = create_test_app(100, Duration::from_secs(300));

    put(&app, "ttl_test", json!("expires_soon"), Some(1)).await;
    assert_eq!(send(&app, "GET", "/get/ttl_test", None).await.0, StatusCode::OK);

    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert_eq!(
        send(&app, "GET", "/get/ttl_test", None).await.0,
        StatusCode::NOT_FOUND
    );

    // Lazily hidden: the entry still holds its slot
    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["total_entries"], 1);
    assert_eq!(stats["expired"], 1);
}
