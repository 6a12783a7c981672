//! End-to-end tests for the scan API over an in-process server.

use std::fs;
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use tempfile::TempDir;

use techscan_core::{
    ScanError, ScanResult, TechScanner, WalkingScanner,
};
use techscan_server::{AppState, create_app, infra::config::Config};

fn spawn_app(scanner: Arc<dyn TechScanner>) -> TestServer {
    let config = Config {
        dev_mode: true,
        ..Config::default()
    };
    let state = AppState::new(Arc::new(config), scanner);
    TestServer::new(create_app(state)).unwrap()
}

fn spawn_walking_app() -> TestServer {
    spawn_app(Arc::new(WalkingScanner::new()))
}

#[tokio::test]
async fn scan_detects_single_csproj() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Billing.csproj"), b"<Project/>").unwrap();

    let server = spawn_walking_app();
    let response = server
        .post("/api/scan")
        .json(&json!({ "path": temp_dir.path() }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["filesScanned"], 1);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "CSharpProject");
    assert_eq!(items[0]["name"], "Billing");
    assert!(
        items[0]["evidence"]
            .as_str()
            .unwrap()
            .ends_with("Billing.csproj")
    );
}

#[tokio::test]
async fn scan_detects_node_and_docker() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("package.json"), b"{}").unwrap();
    fs::write(temp_dir.path().join("Dockerfile"), b"FROM scratch").unwrap();

    let server = spawn_walking_app();
    let response = server
        .post("/api/scan")
        .json(&json!({ "path": temp_dir.path() }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["filesScanned"], 2);

    let mut kinds: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["kind"].as_str().unwrap())
        .collect();
    kinds.sort_unstable();
    assert_eq!(kinds, vec!["Docker", "NodeProject"]);
    assert!(body.get("startedAt").is_some());
}

#[tokio::test]
async fn scan_of_nonexistent_path_is_empty_not_an_error() {
    let server = spawn_walking_app();
    let response = server
        .post("/api/scan")
        .json(&json!({ "path": "/definitely/not/a/real/path" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["filesScanned"], 0);
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn whitespace_path_is_rejected() {
    let server = spawn_walking_app();
    let response = server
        .post("/api/scan")
        .json(&json!({ "path": "   " }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["title"], "Invalid Path");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn missing_body_is_rejected() {
    let server = spawn_walking_app();
    let response = server.post("/api/scan").await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["title"], "Invalid Request");
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let server = spawn_walking_app();
    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body.get("version").is_some());
}

struct FailingScanner;

#[async_trait]
impl TechScanner for FailingScanner {
    async fn scan(&self, _path: &str) -> Result<ScanResult, ScanError> {
        Err(ScanError::Internal("disk fell over".to_string()))
    }
}

#[tokio::test]
async fn internal_scanner_errors_map_to_500_with_generic_detail() {
    let server = spawn_app(Arc::new(FailingScanner));
    let response = server
        .post("/api/scan")
        .json(&json!({ "path": "/srv/code" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["title"], "Internal Server Error");
    // The underlying cause stays server-side
    assert!(!body["detail"].as_str().unwrap().contains("disk fell over"));
}

struct PickyScanner;

#[async_trait]
impl TechScanner for PickyScanner {
    async fn scan(&self, path: &str) -> Result<ScanResult, ScanError> {
        Err(ScanError::InvalidPath(format!("unusable path: {path}")))
    }
}

#[tokio::test]
async fn invalid_path_scanner_errors_map_to_400() {
    let server = spawn_app(Arc::new(PickyScanner));
    let response = server
        .post("/api/scan")
        .json(&json!({ "path": "/srv/code" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["title"], "Invalid Argument");
    assert_eq!(body["detail"], "unusable path: /srv/code");
}
