use crate::quote::{run_quote, QuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_intake::error::AppError;
use loan_intake::workflows::offers::InterestModel;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Intake API",
    about = "Serve the loan application intake API or quote installments from the command line",
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
    /// Print installment offers for an amount and term using the partner roster
    Quote(QuoteArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured interest model (flat or bank_rate)
    #[arg(long, value_parser = parse_interest_model)]
    pub(crate) offer_mode: Option<InterestModel>,
}

pub(crate) fn parse_interest_model(raw: &str) -> Result<InterestModel, String> {
    InterestModel::parse(raw).ok_or_else(|| format!("unknown offer mode '{raw}'"))
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quote(args) => run_quote(args),
    }
}
