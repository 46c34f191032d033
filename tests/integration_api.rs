//! JSON API Integration Tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use std::sync::Arc;

use profit_mock::api::{self, routes::ValidateRequest};
use profit_mock::Config;
use tower::util::ServiceExt;

mod common;

fn validate_request(cash: &str, credit: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/validate")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&ValidateRequest {
                cash: cash.to_string(),
                credit: credit.to_string(),
            })
            .unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = common::test_app();
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_text(response).await, "OK");
}

#[tokio::test]
async fn test_validate_accepts_amounts() {
    let app = common::test_app();
    let response = app.oneshot(validate_request("500000", "250000")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["cash"], 500000);
    assert_eq!(json["credit"], 250000);
    assert_eq!(json["location"], "/profit?credit=250000&cash=500000");
}

#[tokio::test]
async fn test_validate_rejects_with_generic_error() {
    let app = common::test_app();

    for (cash, credit) in [("0", "100"), ("1.5", "100"), ("100000000001", "1"), ("100", "abc")] {
        let response = app.clone().oneshot(validate_request(cash, credit)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{cash:?}/{credit:?}");

        let json = common::body_json(response).await;
        assert_eq!(json["error_code"], "invalid_amount");
        assert_eq!(json["error"], "1〜100億円までの正の整数を入力してください");
    }
}

#[tokio::test]
async fn test_validate_missing_field_rejected() {
    let app = common::test_app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/validate")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"cash": "500000"}"#))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = common::body_json(response).await;
    assert_eq!(json["error_code"], "invalid_amount");
}

#[tokio::test]
async fn test_validate_malformed_body() {
    let app = common::test_app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/validate")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = common::body_json(response).await;
    assert_eq!(json["error_code"], "invalid_request");
}

#[tokio::test]
async fn test_profit_summary() {
    let app = common::test_app();
    let req = Request::builder()
        .uri("/api/v1/profit?cash=93890&credit=396927")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["cash_display"], "+93,890円");
    assert_eq!(json["credit_display"], "+396,927円");
    assert_eq!(json["total_display"], "+490,817円");
    assert_eq!(json["is_gain"], true);
}

#[tokio::test]
async fn test_profit_summary_tolerates_bad_query() {
    let app = common::test_app();
    let req = Request::builder()
        .uri("/api/v1/profit?credit=100&cash=oops")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["cash_display"], "+0円");
    assert_eq!(json["credit_display"], "+100円");
    assert_eq!(json["total_display"], "+100円");
}

#[tokio::test]
async fn test_profit_summary_without_query() {
    let app = common::test_app();
    let req = Request::builder().uri("/api/v1/profit").body(Body::empty()).unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["total_display"], "+0円");
}

#[tokio::test]
async fn test_correlation_id_echoed() {
    let app = common::test_app();
    let id = "0b7e6a3c-8d3f-4a55-9a65-2c4a3b1d9e10";
    let req = Request::builder()
        .uri("/health")
        .header("x-correlation-id", id)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.headers()["x-correlation-id"], id);
}

#[tokio::test]
async fn test_profit_summary_repeated_keys_last_wins() {
    let app = common::test_app();
    let req = Request::builder()
        .uri("/api/v1/profit?cash=1&cash=2&credit=3")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["cash_display"], "+2円");
    assert_eq!(json["total_display"], "+5円");
}

#[tokio::test]
async fn test_validate_without_logging_middleware() {
    // handlers must not depend on the correlation extension being present
    let app = api::create_router().with_state(Arc::new(Config::default()));
    let req = Request::builder()
        .method("POST")
        .uri("/validate")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"cash": "500000", "credit": "250000"}"#))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["location"], "/profit?credit=250000&cash=500000");
}
