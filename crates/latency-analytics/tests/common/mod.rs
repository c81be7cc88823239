#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use latency_analytics::settings::Settings;
use serde_json::Value;
use std::{io::Write, path::Path};
use tempfile::NamedTempFile;
use tower::ServiceExt;

pub const ENDPOINT: &str = "/api/analytics";

/// Write `data` to a temp file that lives as long as the returned handle.
pub fn write_dataset(data: &Value) -> NamedTempFile {
    write_raw_dataset(&data.to_string())
}

pub fn write_raw_dataset(raw: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(raw.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Create test settings pointing at the given dataset
pub fn create_test_settings(data_file: &Path) -> Settings {
    Settings {
        data_file: data_file.to_path_buf(),
        ..Settings::default()
    }
}

pub async fn send(app: Router, request: Request<Body>) -> (Response<Body>, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap().to_vec();
    (Response::from_parts(parts, Body::empty()), bytes)
}

pub fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(ENDPOINT)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn sample_dataset() -> Value {
    serde_json::json!([
        {"region": "apac", "service": "catalog", "latency_ms": 140.2, "uptime_pct": 98.9},
        {"region": "apac", "service": "checkout", "latency_ms": 210.7, "uptime_pct": 97.1},
        {"region": "APAC", "service": "support", "latency_ms": 176.0, "uptime_pct": 99.4},
        {"region": "emea", "service": "catalog", "latency_ms": 120.5, "uptime_pct": 99.2},
        {"region": "emea", "service": "recommendations", "latency_ms": 198.3, "uptime_pct": 98.0},
        {"region": "amer", "service": "analytics", "latency_ms": 165.0, "uptime_pct": 0.991},
    ])
}
