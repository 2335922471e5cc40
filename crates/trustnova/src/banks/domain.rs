use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::amount::{AmountRange, LAKH};

/// One row of the bank table with its amount bounds resolved at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct BankOffer {
    pub bank_name: String,
    pub loan_type: String,
    pub interest_rate: f64,
    pub processing_time_days: f64,
    pub amount_range_text: String,
    pub min_amount: u64,
    pub max_amount: u64,
}

impl BankOffer {
    pub fn amount_range(&self) -> AmountRange {
        AmountRange {
            min: self.min_amount,
            max: self.max_amount,
        }
    }

    pub fn matches(&self, query: &LoanQuery) -> bool {
        self.loan_type.to_lowercase() == query.loan_type.trim().to_lowercase()
            && self.amount_range().contains(query.target_amount)
    }

    pub fn view(&self) -> BankOfferView {
        BankOfferView {
            bank_name: self.bank_name.clone(),
            loan_type: self.loan_type.clone(),
            interest_rate: self.interest_rate,
            processing_time_days: self.processing_time_days,
        }
    }
}

/// Projection of a [`BankOffer`] returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankOfferView {
    pub bank_name: String,
    pub loan_type: String,
    pub interest_rate: f64,
    pub processing_time_days: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanQuery {
    pub loan_type: String,
    pub target_amount: u64,
}

impl LoanQuery {
    pub fn new(loan_type: impl Into<String>, target_amount: u64) -> Self {
        Self {
            loan_type: loan_type.into(),
            target_amount,
        }
    }

    pub fn for_bracket(loan_type: impl Into<String>, bracket: AmountBracket) -> Self {
        Self::new(loan_type, bracket.target_amount())
    }
}

/// Ranked offers for a query. When `matched` is false no offer passed the
/// filter and `offers` is either empty or the fallback listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub offers: Vec<BankOfferView>,
    pub matched: bool,
}

impl RecommendationResult {
    pub(crate) fn unmatched() -> Self {
        Self {
            offers: Vec::new(),
            matched: false,
        }
    }

    /// Substitutes the full table when nothing matched.
    pub fn or_fallback(self, all_offers: &[BankOffer]) -> Self {
        if self.matched {
            return self;
        }
        Self {
            offers: all_offers.iter().map(BankOffer::view).collect(),
            matched: false,
        }
    }
}

/// Loan amount brackets offered on the recommendation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmountBracket {
    #[serde(rename = "1-3 Lakhs")]
    OneToThreeLakhs,
    #[serde(rename = "3-5 Lakhs")]
    ThreeToFiveLakhs,
    #[serde(rename = "5-10 Lakhs")]
    FiveToTenLakhs,
    #[serde(rename = "10-15 Lakhs")]
    TenToFifteenLakhs,
    #[serde(rename = "15-20 Lakhs")]
    FifteenToTwentyLakhs,
}

impl AmountBracket {
    pub const ALL: [AmountBracket; 5] = [
        AmountBracket::OneToThreeLakhs,
        AmountBracket::ThreeToFiveLakhs,
        AmountBracket::FiveToTenLakhs,
        AmountBracket::TenToFifteenLakhs,
        AmountBracket::FifteenToTwentyLakhs,
    ];

    /// Bounds in lakhs.
    pub fn bounds(&self) -> (u64, u64) {
        match self {
            AmountBracket::OneToThreeLakhs => (1, 3),
            AmountBracket::ThreeToFiveLakhs => (3, 5),
            AmountBracket::FiveToTenLakhs => (5, 10),
            AmountBracket::TenToFifteenLakhs => (10, 15),
            AmountBracket::FifteenToTwentyLakhs => (15, 20),
        }
    }

    /// Whole-lakh midpoint in rupees; `5-10 Lakhs` resolves to 7 lakhs.
    pub fn target_amount(&self) -> u64 {
        let (low, high) = self.bounds();
        ((low + high) / 2) * LAKH
    }

    pub fn label(&self) -> &'static str {
        match self {
            AmountBracket::OneToThreeLakhs => "1-3 Lakhs",
            AmountBracket::ThreeToFiveLakhs => "3-5 Lakhs",
            AmountBracket::FiveToTenLakhs => "5-10 Lakhs",
            AmountBracket::TenToFifteenLakhs => "10-15 Lakhs",
            AmountBracket::FifteenToTwentyLakhs => "15-20 Lakhs",
        }
    }
}

impl fmt::Display for AmountBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AmountBracket {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted: String = value
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        AmountBracket::ALL
            .into_iter()
            .find(|bracket| {
                let (low, high) = bracket.bounds();
                wanted == format!("{low}-{high}lakhs") || wanted == format!("{low}-{high}")
            })
            .ok_or_else(|| format!("unknown amount bracket '{value}'"))
    }
}
