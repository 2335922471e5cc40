use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::directory::BankDirectory;
use super::domain::{AmountBracket, BankOfferView, LoanQuery};
use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub loan_type: String,
    #[serde(default)]
    pub target_amount: Option<u64>,
    #[serde(default)]
    pub amount_bracket: Option<AmountBracket>,
}

impl RecommendationRequest {
    /// An explicit amount wins over a bracket.
    pub fn into_query(self) -> Result<LoanQuery, AppError> {
        let target_amount = match (self.target_amount, self.amount_bracket) {
            (Some(amount), _) => amount,
            (None, Some(bracket)) => bracket.target_amount(),
            (None, None) => {
                return Err(AppError::InvalidRequest(
                    "either target_amount or amount_bracket is required".to_string(),
                ))
            }
        };

        if self.loan_type.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "loan_type must not be empty".to_string(),
            ));
        }

        Ok(LoanQuery::new(self.loan_type, target_amount))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResponse {
    pub loan_type: String,
    pub target_amount: u64,
    pub matched: bool,
    pub offers: Vec<BankOfferView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanTypesResponse {
    pub loan_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketEntry {
    pub label: &'static str,
    pub target_amount: u64,
}

/// Router builder exposing the bank recommendation endpoints.
pub fn bank_router(directory: Arc<BankDirectory>) -> Router {
    Router::new()
        .route("/api/v1/banks/loan-types", get(loan_types_handler))
        .route("/api/v1/banks/brackets", get(brackets_handler))
        .route("/api/v1/banks/recommendations", post(recommend_handler))
        .with_state(directory)
}

pub(crate) async fn loan_types_handler(
    State(directory): State<Arc<BankDirectory>>,
) -> Result<Json<LoanTypesResponse>, AppError> {
    let loan_types = directory.loan_types()?;
    Ok(Json(LoanTypesResponse { loan_types }))
}

pub(crate) async fn brackets_handler() -> Json<Vec<BracketEntry>> {
    Json(
        AmountBracket::ALL
            .iter()
            .map(|bracket| BracketEntry {
                label: bracket.label(),
                target_amount: bracket.target_amount(),
            })
            .collect(),
    )
}

pub(crate) async fn recommend_handler(
    State(directory): State<Arc<BankDirectory>>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let query = request.into_query()?;
    let result = directory.recommend_or_fallback(&query)?;

    Ok(Json(RecommendationResponse {
        loan_type: query.loan_type,
        target_amount: query.target_amount,
        matched: result.matched,
        offers: result.offers,
    }))
}
