use serde::Deserialize;
use std::io::Read;

use super::amount::parse_amount_range;
use super::domain::BankOffer;
use super::BankDataError;

pub(crate) const BANK_NAME: &str = "Bank Name";
pub(crate) const LOAN_TYPE: &str = "Loan Type";
pub(crate) const INTEREST_RATE: &str = "Interest Rate (%)";
pub(crate) const PROCESSING_TIME: &str = "Processing Time (days)";
pub(crate) const AMOUNT_RANGE: &str = "Loan Amount Range (INR)";

pub(crate) const REQUIRED_COLUMNS: [&str; 5] = [
    BANK_NAME,
    LOAN_TYPE,
    INTEREST_RATE,
    PROCESSING_TIME,
    AMOUNT_RANGE,
];

#[derive(Debug, Deserialize)]
struct BankRow {
    #[serde(rename = "Bank Name")]
    bank_name: String,
    #[serde(rename = "Loan Type")]
    loan_type: String,
    #[serde(rename = "Interest Rate (%)")]
    interest_rate: f64,
    #[serde(rename = "Processing Time (days)")]
    processing_time_days: f64,
    #[serde(rename = "Loan Amount Range (INR)")]
    amount_range: String,
}

/// Reads the bank table, trimming headers and cells, and resolves each row's
/// amount range.
pub(crate) fn parse_offers<R: Read>(reader: R) -> Result<Vec<BankOffer>, BankDataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(BankDataError::Schema { missing });
    }

    let mut offers = Vec::new();
    for (index, record) in csv_reader.deserialize::<BankRow>().enumerate() {
        let row = record?;
        for (column, value) in [
            (INTEREST_RATE, row.interest_rate),
            (PROCESSING_TIME, row.processing_time_days),
        ] {
            if !value.is_finite() {
                return Err(BankDataError::NonFinite {
                    row: index + 1,
                    column,
                });
            }
        }
        let range =
            parse_amount_range(&row.amount_range).map_err(|source| BankDataError::Parse {
                row: index + 1,
                source,
            })?;

        offers.push(BankOffer {
            bank_name: row.bank_name,
            loan_type: row.loan_type,
            interest_rate: row.interest_rate,
            processing_time_days: row.processing_time_days,
            amount_range_text: row.amount_range,
            min_amount: range.min,
            max_amount: range.max,
        });
    }

    Ok(offers)
}

/// Distinct non-empty loan types in first-seen order.
pub(crate) fn loan_types(offers: &[BankOffer]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for offer in offers {
        if offer.loan_type.is_empty() || types.contains(&offer.loan_type) {
            continue;
        }
        types.push(offer.loan_type.clone());
    }
    types
}
