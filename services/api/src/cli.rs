use crate::commands::{
    run_approval_check, run_bank_recommendation, run_credit_estimate, run_income_debt_score,
    run_loan_types, ApprovalArgs, EstimateArgs, IncomeDebtArgs, LoanTypesArgs, RecommendArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use trustnova::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "TrustNova",
    about = "Loan approval, credit score and bank recommendation tools",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Query the bank recommendation engine
    Banks {
        #[command(subcommand)]
        command: BanksCommand,
    },
    /// Run one of the credit score formulas
    Credit {
        #[command(subcommand)]
        command: CreditCommand,
    },
    /// Check a loan application against the approval rule
    Approval {
        #[command(subcommand)]
        command: ApprovalCommand,
    },
}

#[derive(Subcommand, Debug)]
enum BanksCommand {
    /// Recommend up to three banks for a loan type and amount
    Recommend(RecommendArgs),
    /// List the loan types present in the bank table
    Types(LoanTypesArgs),
}

#[derive(Subcommand, Debug)]
enum CreditCommand {
    /// Five-factor credit score estimate
    Estimate(EstimateArgs),
    /// Clamped score from income and debt
    IncomeDebt(IncomeDebtArgs),
}

#[derive(Subcommand, Debug)]
enum ApprovalCommand {
    /// Decide a loan application from income and credit history
    Check(ApprovalArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured bank table CSV
    #[arg(long)]
    pub(crate) banks_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Banks {
            command: BanksCommand::Recommend(args),
        } => run_bank_recommendation(args),
        Command::Banks {
            command: BanksCommand::Types(args),
        } => run_loan_types(args),
        Command::Credit {
            command: CreditCommand::Estimate(args),
        } => {
            run_credit_estimate(args);
            Ok(())
        }
        Command::Credit {
            command: CreditCommand::IncomeDebt(args),
        } => run_income_debt_score(args),
        Command::Approval {
            command: ApprovalCommand::Check(args),
        } => {
            run_approval_check(args);
            Ok(())
        }
    }
}
