//! Router-level tests against the in-memory store and a store that always fails.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use tutorial_api::{app, ApiSettings, AppState, InMemoryTutorialStore, StoreError, Tutorial, TutorialStore};

const LIMIT: usize = 64 * 1024;

fn router() -> Router {
    router_with(ApiSettings::default())
}

fn router_with(settings: ApiSettings) -> Router {
    let store: Arc<dyn TutorialStore> = Arc::new(InMemoryTutorialStore::new());
    app(AppState::new(store, settings), "/api", LIMIT)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, title: &str, description: &str) -> Value {
    let (status, body) = send_json(
        app,
        Method::POST,
        "/api/tutorials",
        Some(json!({"title": title, "description": description})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_endpoint_returns_fixed_text() {
    let app = router();
    let (status, bytes) = send(&app, Method::GET, "/api/test", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"Test endpoint response");
}

#[tokio::test]
async fn full_lifecycle() {
    let app = router();

    let created = create(&app, "Spring Boot", "intro").await;
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(created["published"], json!(false));

    let (status, got) = send_json(&app, Method::GET, &format!("/api/tutorials/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(got, created);

    let (status, updated) = send_json(
        &app,
        Method::PUT,
        &format!("/api/tutorials/{}", id),
        Some(json!({"title": "Spring Boot 2", "description": "intro2", "published": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({"id": id, "title": "Spring Boot 2", "description": "intro2", "published": true})
    );

    let (status, published) = send_json(&app, Method::GET, "/api/tutorials/published", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(published, json!([updated]));

    let (status, bytes) = send(&app, Method::DELETE, &format!("/api/tutorials/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    let (status, bytes) = send(&app, Method::GET, &format!("/api/tutorials/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn create_forces_unpublished_and_ignores_client_id() {
    let app = router();
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/tutorials",
        Some(json!({"id": 500, "title": "Tokio", "description": "async", "published": true})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["published"], json!(false));
    assert_ne!(body["id"], json!(500));

    let (status, _) = send(&app, Method::GET, "/api/tutorials/published", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn create_without_fields_stores_nulls() {
    let app = router();
    let (status, body) = send_json(&app, Method::POST, "/api/tutorials", Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], Value::Null);
    assert_eq!(body["description"], Value::Null);
}

#[tokio::test]
async fn required_title_is_enforced_when_configured() {
    let app = router_with(ApiSettings { require_title: true });
    let (status, bytes) = send(&app, Method::POST, "/api/tutorials", Some(json!({"description": "x"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(bytes.is_empty());

    let (status, _) = send(&app, Method::GET, "/api/tutorials", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn missing_id_wins_over_required_title_on_update() {
    let app = router_with(ApiSettings { require_title: true });
    let (status, _) = send(&app, Method::PUT, "/api/tutorials/8", Some(json!({"description": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let created = create(&app, "Serde", "json").await;
    let id = created["id"].as_i64().unwrap();
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/tutorials/{}", id),
        Some(json!({"description": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_filters_by_title_ignoring_case() {
    let app = router();
    create(&app, "mysql tutorial", "db").await;
    create(&app, "Learn Go", "lang").await;
    create(&app, "Rust in Action", "lang").await;

    let (status, all) = send_json(&app, Method::GET, "/api/tutorials", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (_, sql) = send_json(&app, Method::GET, "/api/tutorials?title=SQL", None).await;
    assert_eq!(titles(&sql), vec!["mysql tutorial"]);

    for needle in ["go", "GO", "Go"] {
        let (status, body) = send_json(&app, Method::GET, &format!("/api/tutorials?title={}", needle), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(titles(&body), vec!["Learn Go"]);
        assert!(body.as_array().unwrap().len() <= all.as_array().unwrap().len());
    }

    let (status, bytes) = send(&app, Method::GET, "/api/tutorials?title=haskell", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn update_of_missing_id_is_404_and_creates_nothing() {
    let app = router();
    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/tutorials/41",
        Some(json!({"title": "ghost", "description": "", "published": true})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/api/tutorials", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn update_overwrites_every_mutable_field() {
    let app = router();
    let created = create(&app, "Axum", "web").await;
    let id = created["id"].as_i64().unwrap();

    // Unchanged values still round-trip; an omitted field is overwritten with null/false.
    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/tutorials/{}", id),
        Some(json!({"id": id + 10, "title": "Axum"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": id, "title": "Axum", "description": null, "published": false}));
}

#[tokio::test]
async fn delete_of_absent_id_is_no_content() {
    let app = router();
    let (status, _) = send(&app, Method::DELETE, "/api/tutorials/12345", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_all_then_list_is_empty() {
    let app = router();
    create(&app, "a", "1").await;
    create(&app, "b", "2").await;

    let (status, _) = send(&app, Method::DELETE, "/api/tutorials", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, "/api/tutorials", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let app = router();
    let (status, _) = send(&app, Method::GET, "/api/tutorials/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn common_routes_are_mounted_at_root() {
    let app = router();
    let (status, body) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = send_json(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], json!("ok"));

    let (status, body) = send_json(&app, Method::GET, "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], json!("tutorial-api"));

    let (status, body) = send_json(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/tutorials/{id}"].is_object());
}

/// Store whose every call fails, for the 500 paths.
struct BrokenStore;

fn broken() -> StoreError {
    StoreError::Unavailable("connection refused".into())
}

#[async_trait]
impl TutorialStore for BrokenStore {
    async fn find_all(&self) -> Result<Vec<Tutorial>, StoreError> {
        Err(broken())
    }
    async fn find_by_title_containing(&self, _title: &str) -> Result<Vec<Tutorial>, StoreError> {
        Err(broken())
    }
    async fn find_by_id(&self, _id: i64) -> Result<Option<Tutorial>, StoreError> {
        Err(broken())
    }
    async fn save(&self, _tutorial: Tutorial) -> Result<Tutorial, StoreError> {
        Err(broken())
    }
    async fn delete_by_id(&self, _id: i64) -> Result<(), StoreError> {
        Err(broken())
    }
    async fn delete_all(&self) -> Result<(), StoreError> {
        Err(broken())
    }
    async fn find_by_published(&self, _published: bool) -> Result<Vec<Tutorial>, StoreError> {
        Err(broken())
    }
    async fn ping(&self) -> Result<(), StoreError> {
        Err(broken())
    }
}

#[tokio::test]
async fn persistence_failures_become_500_with_empty_body() {
    let store: Arc<dyn TutorialStore> = Arc::new(BrokenStore);
    let app = app(AppState::new(store, ApiSettings::default()), "/api", LIMIT);

    let cases = [
        (Method::GET, "/api/tutorials", None),
        (Method::GET, "/api/tutorials?title=x", None),
        (Method::GET, "/api/tutorials/published", None),
        (Method::POST, "/api/tutorials", Some(json!({"title": "t", "description": "d"}))),
        (Method::DELETE, "/api/tutorials/1", None),
        (Method::DELETE, "/api/tutorials", None),
    ];
    for (method, uri, body) in cases {
        let (status, bytes) = send(&app, method.clone(), uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", method, uri);
        assert!(bytes.is_empty());
    }

    let (status, body) = send_json(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"status": "degraded", "database": "unavailable"}));
}

#[tokio::test]
async fn custom_prefix_moves_resource_routes() {
    let store: Arc<dyn TutorialStore> = Arc::new(InMemoryTutorialStore::new());
    let app = app(AppState::new(store, ApiSettings::default()), "", LIMIT);
    let (status, _) = send(&app, Method::GET, "/test", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, "/api/test", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
