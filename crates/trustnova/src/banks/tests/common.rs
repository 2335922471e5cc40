use crate::banks::{BankDirectory, BankOffer};

/// Headers padded with whitespace the way spreadsheet exports leave them.
pub(crate) const SAMPLE_CSV: &str = " Bank Name , Loan Type ,Interest Rate (%), Processing Time (days) ,Loan Amount Range (INR)
Axis Bank,Personal,10.5,3,1-5L
HDFC Bank,Personal,10.75,2,\"50,000-4L\"
ICICI Bank,Personal,11.25,4,1L-10L
Axis Bank,Personal,10.6,3,2L-6L
State Bank of India,Home,8.4,10,5L-75L
Kotak Mahindra Bank,Home,8.7,7,10L-50L
";

pub(crate) fn sample_directory() -> BankDirectory {
    BankDirectory::from_csv(SAMPLE_CSV)
}

pub(crate) fn offer(
    bank_name: &str,
    loan_type: &str,
    interest_rate: f64,
    processing_time_days: f64,
) -> BankOffer {
    BankOffer {
        bank_name: bank_name.to_string(),
        loan_type: loan_type.to_string(),
        interest_rate,
        processing_time_days,
        amount_range_text: "1L-10L".to_string(),
        min_amount: 100_000,
        max_amount: 1_000_000,
    }
}
