use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::banks::router::{
    brackets_handler, recommend_handler, RecommendationRequest,
};
use crate::banks::{bank_router, AmountBracket, BankDirectory};
use crate::error::AppError;

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn recommend_handler_resolves_bracket_to_target_amount() {
    let directory = Arc::new(sample_directory());
    let request = RecommendationRequest {
        loan_type: "PERSONAL".to_string(),
        target_amount: None,
        amount_bracket: Some(AmountBracket::ThreeToFiveLakhs),
    };

    let Json(body) = recommend_handler(State(directory), Json(request))
        .await
        .expect("recommendation builds");

    assert_eq!(body.target_amount, 400_000);
    assert!(body.matched);
    assert!(!body.offers.is_empty() && body.offers.len() <= 3);
}

#[tokio::test]
async fn recommend_handler_requires_an_amount() {
    let directory = Arc::new(sample_directory());
    let request = RecommendationRequest {
        loan_type: "Personal".to_string(),
        target_amount: None,
        amount_bracket: None,
    };

    let result = recommend_handler(State(directory), Json(request)).await;

    match result {
        Err(AppError::InvalidRequest(_)) => {}
        other => panic!("expected invalid request, got {other:?}"),
    }
}

#[tokio::test]
async fn brackets_handler_lists_every_bracket() {
    let Json(body) = brackets_handler().await;
    assert_eq!(body.len(), AmountBracket::ALL.len());
    assert_eq!(body[0].label, "1-3 Lakhs");
    assert_eq!(body[0].target_amount, 200_000);
}

#[tokio::test]
async fn router_returns_fallback_listing_when_unmatched() {
    let app = bank_router(Arc::new(sample_directory()));
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/banks/recommendations")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "loan_type": "Gold", "amount_bracket": "1-3 Lakhs" }).to_string(),
        ))
        .expect("request builds");

    let response = app.oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["matched"], json!(false));
    assert_eq!(body["offers"].as_array().map(Vec::len), Some(6));
}

#[tokio::test]
async fn router_lists_loan_types() {
    let app = bank_router(Arc::new(sample_directory()));
    let request = Request::builder()
        .uri("/api/v1/banks/loan-types")
        .body(Body::empty())
        .expect("request builds");

    let response = app.oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["loan_types"], json!(["Personal", "Home"]));
}

#[tokio::test]
async fn router_surfaces_schema_errors_as_server_errors() {
    let directory = Arc::new(BankDirectory::from_csv("Bank Name\nAxis Bank\n"));
    let app = bank_router(directory);
    let request = Request::builder()
        .uri("/api/v1/banks/loan-types")
        .body(Body::empty())
        .expect("request builds");

    let response = app.oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("missing required columns"));
}
