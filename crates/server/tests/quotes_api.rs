use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::StorageConfig;
use serde_json::{json, Value};
use service::errors::ServiceError;
use service::quotes::{Quote, QuotePatch, QuoteRepository};
use tower::Service;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::build_router;
use server::startup::build_app;
use server::state::AppState;

struct TestApp {
    router: Router,
    quotes_path: String,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.quotes_path);
    }
}

async fn build_test_app() -> anyhow::Result<TestApp> {
    // Use isolated temp files per test
    let quotes_path = std::env::temp_dir()
        .join(format!("quotes_api_{}.json", Uuid::new_v4()))
        .to_string_lossy()
        .into_owned();
    let storage = StorageConfig { quotes_path: quotes_path.clone(), strict_persistence: false };
    let router = build_app(&storage).await?;
    Ok(TestApp { router, quotes_path })
}

async fn send(app: &TestApp, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.router.clone().call(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    Ok((status, value))
}

#[tokio::test]
async fn crud_scenario_keeps_ids_monotonic() -> anyhow::Result<()> {
    let app = build_test_app().await?;

    let (status, body) = send(&app, "GET", "/api/quotes", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, "POST", "/api/quotes", Some(json!({"author": "Ada Lovelace", "quote": "Think big."}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "author": "Ada Lovelace", "quote": "Think big."}));

    let (status, body) = send(&app, "POST", "/api/quotes", Some(json!({"author": "Alan Turing", "quote": "Compute well."}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 2);

    let (status, body) = send(&app, "DELETE", "/api/quotes/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Quote deleted successfully"}));

    let (_, body) = send(&app, "GET", "/api/quotes", None).await?;
    assert_eq!(body, json!([{"id": 2, "author": "Alan Turing", "quote": "Compute well."}]));

    let (status, body) = send(&app, "POST", "/api/quotes", Some(json!({"author": "Grace Hopper", "quote": "Ship it."}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 3);
    Ok(())
}

#[tokio::test]
async fn get_by_id_and_not_found() -> anyhow::Result<()> {
    let app = build_test_app().await?;

    let (status, body) = send(&app, "GET", "/api/quotes/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Quote not found"}));

    send(&app, "POST", "/api/quotes", Some(json!({"author": "Rumi", "quote": "What you seek is seeking you."}))).await?;
    let (status, body) = send(&app, "GET", "/api/quotes/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"], "Rumi");

    // non-integer ids never match
    let (status, _) = send(&app, "GET", "/api/quotes/abc", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", "/api/quotes/-1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn create_validation() -> anyhow::Result<()> {
    let app = build_test_app().await?;

    let (status, body) = send(&app, "POST", "/api/quotes", Some(json!({"author": "Only Author"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing 'author' or 'quote' in request body"}));

    let (status, _) = send(&app, "POST", "/api/quotes", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/api/quotes", Some(json!("not an object"))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // present but empty: the store rejects it
    let (status, body) = send(&app, "POST", "/api/quotes", Some(json!({"author": "", "quote": "x"}))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Could not add quote"}));

    let (_, body) = send(&app, "GET", "/api/quotes", None).await?;
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn update_partial_and_validation() -> anyhow::Result<()> {
    let app = build_test_app().await?;
    send(&app, "POST", "/api/quotes", Some(json!({"author": "Old", "quote": "Unchanged text."}))).await?;

    let (status, body) = send(&app, "PUT", "/api/quotes/1", Some(json!({"author": "New"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "author": "New", "quote": "Unchanged text."}));

    let (status, body) = send(&app, "PUT", "/api/quotes/1", Some(json!({}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No 'author' or 'quote' field provided for update"}));

    let (status, _) = send(&app, "PUT", "/api/quotes/1", Some(json!({"author": "", "quote": ""}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "PUT", "/api/quotes/1", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No data provided for update"}));

    let (status, _) = send(&app, "PUT", "/api/quotes/99", Some(json!({"quote": "Ghost."}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/api/quotes", None).await?;
    assert_eq!(body, json!([{"id": 1, "author": "New", "quote": "Unchanged text."}]));
    Ok(())
}

#[tokio::test]
async fn delete_unknown_is_not_found() -> anyhow::Result<()> {
    let app = build_test_app().await?;
    let (status, body) = send(&app, "DELETE", "/api/quotes/5", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Quote not found"}));
    Ok(())
}

#[tokio::test]
async fn random_on_empty_and_filled_store() -> anyhow::Result<()> {
    let app = build_test_app().await?;

    let (status, body) = send(&app, "GET", "/api/quotes/random", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No quotes available"}));

    send(&app, "POST", "/api/quotes", Some(json!({"author": "A", "quote": "One."}))).await?;
    send(&app, "POST", "/api/quotes", Some(json!({"author": "B", "quote": "Two."}))).await?;
    for _ in 0..10 {
        let (status, body) = send(&app, "GET", "/api/quotes/random", None).await?;
        assert_eq!(status, StatusCode::OK);
        let id = body["id"].as_u64().unwrap_or_default();
        assert!(id == 1 || id == 2, "unexpected {body}");
    }
    Ok(())
}

#[tokio::test]
async fn generate_creates_quotes() -> anyhow::Result<()> {
    let app = build_test_app().await?;

    let (status, first) = send(&app, "POST", "/api/quotes/generate", None).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["id"], 1);
    assert!(first["author"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(first["quote"].as_str().is_some_and(|s| s.ends_with('.')));

    let (status, second) = send(&app, "POST", "/api/quotes/generate", None).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second["id"], 2);

    let (_, all) = send(&app, "GET", "/api/quotes", None).await?;
    assert_eq!(all, json!([first, second]));

    // GET on the generate path is not an id lookup
    let (status, _) = send(&app, "GET", "/api/quotes/generate", None).await?;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    Ok(())
}

#[tokio::test]
async fn home_health_and_docs() -> anyhow::Result<()> {
    let app = build_test_app().await?;

    let (status, body) = send(&app, "GET", "/", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_str().is_some_and(|s| s.starts_with("Welcome to the Quote API!")));

    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/quotes/{id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn cors_headers_present() -> anyhow::Result<()> {
    let app = build_test_app().await?;
    let req = Request::builder()
        .method("GET")
        .uri("/api/quotes")
        .header("origin", "http://example.com")
        .body(Body::empty())?;
    let resp = app.router.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("access-control-allow-origin"));
    Ok(())
}

#[tokio::test]
async fn data_survives_rebuild() -> anyhow::Result<()> {
    let app = build_test_app().await?;
    send(&app, "POST", "/api/quotes", Some(json!({"author": "Anaïs Nin", "quote": "We see things as we are."}))).await?;

    let storage = StorageConfig { quotes_path: app.quotes_path.clone(), strict_persistence: false };
    let rebuilt = TestApp { router: build_app(&storage).await?, quotes_path: app.quotes_path.clone() };
    let (_, body) = send(&rebuilt, "GET", "/api/quotes", None).await?;
    assert_eq!(body, json!([{"id": 1, "author": "Anaïs Nin", "quote": "We see things as we are."}]));

    let raw = std::fs::read_to_string(&app.quotes_path)?;
    assert!(raw.contains("Anaïs Nin"));
    Ok(())
}

/// Read-only repository: one fixed quote, every write rejected.
struct ReadOnlyRepo;

#[async_trait]
impl QuoteRepository for ReadOnlyRepo {
    async fn list(&self) -> Vec<Quote> {
        vec![Quote { id: 7, author: "Seneca".into(), quote: "Luck is preparation.".into() }]
    }
    async fn get(&self, id: u64) -> Option<Quote> {
        self.list().await.into_iter().find(|q| q.id == id)
    }
    async fn add(&self, _author: &str, _quote: &str) -> Result<Quote, ServiceError> {
        Err(ServiceError::Persistence("read-only".into()))
    }
    async fn update(&self, _id: u64, _patch: QuotePatch) -> Result<Option<Quote>, ServiceError> {
        Err(ServiceError::Persistence("read-only".into()))
    }
    async fn delete(&self, _id: u64) -> Result<bool, ServiceError> {
        Err(ServiceError::Persistence("read-only".into()))
    }
}

#[tokio::test]
async fn handlers_use_any_repository() -> anyhow::Result<()> {
    let router = build_router(AppState::new(Arc::new(ReadOnlyRepo)), CorsLayer::very_permissive());
    let app = TestApp { router, quotes_path: String::new() };

    let (status, body) = send(&app, "GET", "/api/quotes", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 7, "author": "Seneca", "quote": "Luck is preparation."}]));

    let (status, body) = send(&app, "GET", "/api/quotes/7", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"], "Seneca");

    let (status, body) = send(&app, "GET", "/api/quotes/random", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 7);

    let (status, body) = send(&app, "POST", "/api/quotes", Some(json!({"author": "a", "quote": "b"}))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Could not add quote"}));

    let (status, body) = send(&app, "POST", "/api/quotes/generate", None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to generate and add quote"}));

    let (status, _) = send(&app, "PUT", "/api/quotes/7", Some(json!({"author": "Lucius"}))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(&app, "DELETE", "/api/quotes/7", None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}
