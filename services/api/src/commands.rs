use clap::Args;
use std::path::PathBuf;
use trustnova::banks::{
    parse_amount, AmountBracket, BankDirectory, BankOfferView, LoanQuery,
};
use trustnova::config::AppConfig;
use trustnova::error::AppError;
use trustnova::tools::{
    calculate_credit_score, check_loan_approval, estimate_credit_score, CreditFactors,
    CreditHistory, CreditMix, LoanApplication,
};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Loan type to match (case-insensitive), e.g. Personal
    #[arg(long)]
    pub(crate) loan_type: String,
    /// Amount bracket such as "1-3 Lakhs"
    #[arg(long, conflicts_with = "amount")]
    pub(crate) bracket: Option<AmountBracket>,
    /// Exact amount in rupees; accepts lakh notation such as 2.5L
    #[arg(long, value_parser = parse_amount_arg)]
    pub(crate) amount: Option<u64>,
    /// Bank table CSV (defaults to APP_BANKS_CSV)
    #[arg(long)]
    pub(crate) banks_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct LoanTypesArgs {
    /// Bank table CSV (defaults to APP_BANKS_CSV)
    #[arg(long)]
    pub(crate) banks_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Payment history, 0-100 %
    #[arg(long, default_value_t = 80)]
    pub(crate) payment_history: u32,
    /// Credit utilization, 0-100 %
    #[arg(long, default_value_t = 30)]
    pub(crate) credit_utilization: u32,
    /// Length of credit history, 0-30 years
    #[arg(long, default_value_t = 5)]
    pub(crate) length_of_credit: u32,
    /// Credit mix: Good, Fair or Poor
    #[arg(long, default_value = "Good")]
    pub(crate) credit_mix: CreditMix,
    /// New credit lines opened, 0-10
    #[arg(long, default_value_t = 2)]
    pub(crate) new_credit: u32,
}

#[derive(Args, Debug)]
pub(crate) struct IncomeDebtArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) income: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) debt: f64,
}

#[derive(Args, Debug)]
pub(crate) struct ApprovalArgs {
    #[arg(long)]
    pub(crate) applicant_income: u64,
    /// Good or Bad
    #[arg(long)]
    pub(crate) credit_history: CreditHistory,
}

fn parse_amount_arg(raw: &str) -> Result<u64, String> {
    parse_amount(raw).map_err(|err| err.to_string())
}

fn directory_for(banks_csv: Option<PathBuf>) -> Result<BankDirectory, AppError> {
    let path = match banks_csv {
        Some(path) => path,
        None => AppConfig::load()?.data.banks_csv,
    };
    Ok(BankDirectory::from_path(path))
}

pub(crate) fn run_bank_recommendation(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        loan_type,
        bracket,
        amount,
        banks_csv,
    } = args;

    let target_amount = match (amount, bracket) {
        (Some(amount), _) => amount,
        (None, Some(bracket)) => bracket.target_amount(),
        (None, None) => {
            return Err(AppError::InvalidRequest(
                "pass either --amount or --bracket".to_string(),
            ))
        }
    };

    let directory = directory_for(banks_csv)?;
    let query = LoanQuery::new(loan_type, target_amount);
    let result = directory.recommend_or_fallback(&query)?;

    println!("Bank recommendations");
    println!(
        "Loan type: {} | Amount: {} INR",
        query.loan_type, query.target_amount
    );
    if result.matched {
        println!("\nTop bank recommendations");
    } else {
        println!("\nNo exact match found. Showing all available banks.");
    }
    render_offers(&result.offers);

    Ok(())
}

pub(crate) fn run_loan_types(args: LoanTypesArgs) -> Result<(), AppError> {
    let directory = directory_for(args.banks_csv)?;
    let loan_types = directory.loan_types()?;

    println!("Loan types");
    for loan_type in loan_types {
        println!("- {}", loan_type);
    }
    println!("\nAmount brackets");
    for bracket in AmountBracket::ALL {
        println!("- {} (target {} INR)", bracket, bracket.target_amount());
    }

    Ok(())
}

pub(crate) fn run_credit_estimate(args: EstimateArgs) {
    let factors = CreditFactors {
        payment_history_pct: args.payment_history,
        credit_utilization_pct: args.credit_utilization,
        length_of_credit_years: args.length_of_credit,
        credit_mix: args.credit_mix,
        new_credit_count: args.new_credit,
    }
    .clamped();

    let estimate = estimate_credit_score(&factors);
    println!("Estimated credit score: {}", estimate.whole_score);
}

pub(crate) fn run_income_debt_score(args: IncomeDebtArgs) -> Result<(), AppError> {
    let score = calculate_credit_score(args.income, args.debt)?;
    println!("Credit score: {:.1}", score);
    Ok(())
}

pub(crate) fn run_approval_check(args: ApprovalArgs) {
    let application = LoanApplication::new(args.applicant_income, args.credit_history);
    let decision = check_loan_approval(&application);
    println!("{}", decision);
}

fn render_offers(offers: &[BankOfferView]) {
    if offers.is_empty() {
        println!("- no banks available");
        return;
    }

    for offer in offers {
        println!(
            "- {} | {} | {:.2}% | {} days",
            offer.bank_name, offer.loan_type, offer.interest_rate, offer.processing_time_days
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_argument_accepts_lakh_notation() {
        assert_eq!(parse_amount_arg("2.5L"), Ok(250_000));
        assert_eq!(parse_amount_arg("3,00,000"), Ok(300_000));
        assert!(parse_amount_arg("lots").is_err());
    }

    #[test]
    fn recommendation_requires_amount_or_bracket() {
        let args = RecommendArgs {
            loan_type: "Home".to_string(),
            bracket: None,
            amount: None,
            banks_csv: Some(PathBuf::from("unused.csv")),
        };

        match run_bank_recommendation(args) {
            Err(AppError::InvalidRequest(_)) => {}
            other => panic!("expected invalid request, got {other:?}"),
        }
    }

    #[test]
    fn recommendation_surfaces_missing_table() {
        let args = RecommendArgs {
            loan_type: "Home".to_string(),
            bracket: Some(AmountBracket::FiveToTenLakhs),
            amount: None,
            banks_csv: Some(PathBuf::from("./does-not-exist.csv")),
        };

        match run_bank_recommendation(args) {
            Err(AppError::BankData(_)) => {}
            other => panic!("expected bank data error, got {other:?}"),
        }
    }
}
