use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Applicant income must exceed this for approval.
pub const MINIMUM_APPLICANT_INCOME: u64 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditHistory {
    #[serde(alias = "good", alias = "GOOD")]
    Good,
    #[serde(alias = "bad", alias = "BAD")]
    Bad,
}

impl FromStr for CreditHistory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "good" => Ok(CreditHistory::Good),
            "bad" => Ok(CreditHistory::Bad),
            other => Err(format!("credit history must be Good or Bad (got '{other}')")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    Graduate,
    #[serde(rename = "Not Graduate")]
    NotGraduate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyArea {
    Urban,
    Rural,
    Semiurban,
}

/// The loan application form. Only income and credit history are used by
/// [`check_loan_approval`]; the other answers are recorded as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanApplication {
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub married: Option<bool>,
    #[serde(default)]
    pub education: Option<Education>,
    #[serde(default)]
    pub self_employed: Option<bool>,
    pub applicant_income: u64,
    #[serde(default)]
    pub coapplicant_income: u64,
    /// In thousands.
    #[serde(default)]
    pub loan_amount: u64,
    /// In days.
    #[serde(default)]
    pub loan_amount_term: u64,
    pub credit_history: CreditHistory,
    #[serde(default)]
    pub property_area: Option<PropertyArea>,
}

impl LoanApplication {
    pub fn new(applicant_income: u64, credit_history: CreditHistory) -> Self {
        Self {
            gender: None,
            married: None,
            education: None,
            self_employed: None,
            applicant_income,
            coapplicant_income: 0,
            loan_amount: 0,
            loan_amount_term: 0,
            credit_history,
            property_area: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanDecision {
    Approved,
    Rejected,
}

impl LoanDecision {
    pub fn is_approved(&self) -> bool {
        matches!(self, LoanDecision::Approved)
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoanDecision::Approved => "Loan Approved",
            LoanDecision::Rejected => "Loan Rejected",
        }
    }
}

impl fmt::Display for LoanDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn check_loan_approval(application: &LoanApplication) -> LoanDecision {
    if application.applicant_income > MINIMUM_APPLICANT_INCOME
        && application.credit_history == CreditHistory::Good
    {
        LoanDecision::Approved
    } else {
        LoanDecision::Rejected
    }
}
