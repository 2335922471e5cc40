//! Bank recommendation: table loading, amount-range parsing and similarity
//! ranking of matching offers.

pub mod amount;
mod directory;
pub mod domain;
mod loader;
pub mod ranking;
pub mod router;

#[cfg(test)]
mod tests;

use thiserror::Error;

pub use amount::{parse_amount, parse_amount_range, AmountRange, ParseError, LAKH};
pub use directory::{BankDirectory, BankSource};
pub use domain::{
    AmountBracket, BankOffer, BankOfferView, LoanQuery, RecommendationResult,
};
pub use ranking::{recommend, MAX_RECOMMENDATIONS};
pub use router::bank_router;

/// Failures while loading the bank table.
#[derive(Debug, Error)]
pub enum BankDataError {
    #[error("failed to read bank table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid bank table CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("bank table is missing required columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },
    #[error("bank table row {row} has a non-finite '{column}' value")]
    NonFinite { row: usize, column: &'static str },
    #[error("bank table row {row} has an unreadable amount range: {source}")]
    Parse {
        row: usize,
        #[source]
        source: ParseError,
    },
}
