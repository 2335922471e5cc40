use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::approval::{check_loan_approval, LoanApplication, LoanDecision};
use super::credit::{
    calculate_credit_score, estimate_credit_score, CreditFactors, CreditScoreEstimate,
};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IncomeDebtRequest {
    pub income: f64,
    pub debt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IncomeDebtResponse {
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanApprovalResponse {
    pub decision: LoanDecision,
    pub approved: bool,
    pub message: &'static str,
}

/// Router builder exposing the credit score and loan approval tools.
pub fn decision_router() -> Router {
    Router::new()
        .route("/api/v1/credit-score/estimate", post(estimate_handler))
        .route("/api/v1/credit-score/income-debt", post(income_debt_handler))
        .route("/api/v1/loan-approval", post(loan_approval_handler))
}

pub(crate) async fn estimate_handler(
    Json(factors): Json<CreditFactors>,
) -> Json<CreditScoreEstimate> {
    Json(estimate_credit_score(&factors.clamped()))
}

pub(crate) async fn income_debt_handler(
    Json(request): Json<IncomeDebtRequest>,
) -> Result<Json<IncomeDebtResponse>, AppError> {
    let score = calculate_credit_score(request.income, request.debt)?;
    Ok(Json(IncomeDebtResponse { score }))
}

pub(crate) async fn loan_approval_handler(
    Json(application): Json<LoanApplication>,
) -> Json<LoanApprovalResponse> {
    let decision = check_loan_approval(&application);
    info!(approved = decision.is_approved(), "loan approval checked");
    Json(LoanApprovalResponse {
        decision,
        approved: decision.is_approved(),
        message: decision.label(),
    })
}
