//! Shared helpers for HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::Router;
use http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use scenario_risk::adapters::http::{api_router, AppState};
use scenario_risk::config::ServerConfig;
use scenario_risk::domain::analysis::ScenarioAnalyzer;
use scenario_risk::ports::ScenarioStore;

pub fn router_with(store: Arc<dyn ScenarioStore>) -> Router {
    let state = AppState::new(store, Arc::new(ScenarioAnalyzer::standard()));
    api_router(state, &ServerConfig::default())
}

/// Sends one request and decodes the body as JSON (or a JSON string for plain text).
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}
