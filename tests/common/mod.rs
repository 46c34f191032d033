//! Common test utilities

use std::sync::Arc;

use axum::{body::Body, http::Response, Router};
use http_body_util::BodyExt;
use profit_mock::{build_router, Config};

/// Full application router with default configuration
pub fn test_app() -> Router {
    build_router(Arc::new(Config::default()))
}

/// Read a response body as UTF-8 text
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

/// Read a response body as JSON
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let text = body_text(response).await;
    serde_json::from_str(&text).expect("Body is not JSON")
}
