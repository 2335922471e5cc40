//! Stateless decision tools: credit score formulas and the loan approval gate.

pub mod approval;
pub mod credit;
pub mod router;

pub use approval::{
    check_loan_approval, CreditHistory, Education, Gender, LoanApplication, LoanDecision,
    PropertyArea, MINIMUM_APPLICANT_INCOME,
};
pub use credit::{
    calculate_credit_score, estimate_credit_score, CreditFactors, CreditMix, CreditScoreError,
    CreditScoreEstimate,
};
pub use router::decision_router;
