//! In-process tests for the prediction API
//!
//! Drives the router directly with `tower::ServiceExt::oneshot`, so the
//! suite needs no listening socket.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use filter_rs::api::{ApiServer, AppState};
use filter_rs::config::Config;
use filter_rs::inference::InferenceService;
use filter_rs::pipeline::{Dataset, TrainingPipeline};
use filter_rs::store::{ArtifactStore, FsArtifactStore};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Build a router backed by a freshly trained model
async fn ready_router(dir: &TempDir) -> axum::Router {
    let config = Config::default();
    let store = FsArtifactStore::new(dir.path());

    let outcome = TrainingPipeline::new(config.training.clone())
        .run(&Dataset::sample())
        .unwrap();
    store
        .save_json(&config.artifacts.vectorizer_name, &outcome.vectorizer)
        .unwrap();
    store
        .save_json(&config.artifacts.classifier_name, &outcome.classifier)
        .unwrap();

    let service = Arc::new(InferenceService::new(
        store,
        config.artifacts.vectorizer_name.clone(),
        config.artifacts.classifier_name.clone(),
    ));
    service.load().await.unwrap();

    let state = Arc::new(AppState { service });
    ApiServer::new(state, "127.0.0.1:0".to_string()).router()
}

/// Router over an empty store: the service never becomes Ready
fn uninitialized_router(dir: &TempDir) -> axum::Router {
    let config = Config::default();
    let service = Arc::new(InferenceService::new(
        FsArtifactStore::new(dir.path()),
        config.artifacts.vectorizer_name.clone(),
        config.artifacts.classifier_name.clone(),
    ));

    let state = Arc::new(AppState { service });
    ApiServer::new(state, "127.0.0.1:0".to_string()).router()
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_predict_spam() {
    let dir = TempDir::new().unwrap();
    let router = ready_router(&dir).await;

    let response = router
        .oneshot(json_request(
            "/predict/",
            json!({"email": "Claim your free prize now!!!"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["prediction"], "spam");
}

#[tokio::test]
async fn test_predict_ham() {
    let dir = TempDir::new().unwrap();
    let router = ready_router(&dir).await;

    let response = router
        .oneshot(json_request(
            "/predict/",
            json!({"email": "Please find the attached project report."}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["prediction"], "ham");
}

#[tokio::test]
async fn test_predict_raw_returns_header_line() {
    let dir = TempDir::new().unwrap();
    let router = ready_router(&dir).await;

    let request = Request::builder()
        .method("POST")
        .uri("/predict/raw")
        .body(Body::from("Win big money today, click here!"))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["header"], "X-Spam-ML-Score: yes");
}

#[tokio::test]
async fn test_predict_raw_ham_header() {
    let dir = TempDir::new().unwrap();
    let router = ready_router(&dir).await;

    let request = Request::builder()
        .method("POST")
        .uri("/predict/raw")
        .body(Body::from("Thanks for your help yesterday."))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["header"], "X-Spam-ML-Score: no");
}

#[tokio::test]
async fn test_blank_input_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let router = ready_router(&dir).await;

    let response = router
        .oneshot(json_request("/predict/", json!({"email": "   "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("invalid input"));
}

#[tokio::test]
async fn test_predict_without_model_is_service_unavailable() {
    let dir = TempDir::new().unwrap();
    let router = uninitialized_router(&dir);

    let response = router
        .oneshot(json_request(
            "/predict/",
            json!({"email": "free lottery ticket"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("model not ready"));
}

#[tokio::test]
async fn test_health_reports_readiness() {
    let dir = TempDir::new().unwrap();
    let router = uninitialized_router(&dir);

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["ready"], false);

    let dir = TempDir::new().unwrap();
    let router = ready_router(&dir).await;
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let body = response_json(response).await;
    assert_eq!(body["ready"], true);
}
