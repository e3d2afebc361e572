use crate::cli::parse_interest_model;
use crate::infra::build_catalog;
use clap::Args;
use loan_intake::error::AppError;
use loan_intake::workflows::applications::message::group_thousands;
use loan_intake::workflows::offers::{
    BankOffer, FlatEstimate, InterestModel, LoanTerms, OfferCalculator, OfferEstimate,
};

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Requested principal in TL (25000-450000)
    #[arg(long)]
    pub(crate) amount: f64,
    /// Term in months (3-60)
    #[arg(long)]
    pub(crate) months: u32,
    /// Interest model to quote with (flat or bank_rate)
    #[arg(long, value_parser = parse_interest_model, default_value = "bank_rate")]
    pub(crate) mode: InterestModel,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let QuoteArgs {
        amount,
        months,
        mode,
    } = args;

    let terms = LoanTerms::new(amount, months)?;
    let catalog = build_catalog(true);
    let estimate = OfferCalculator::new(mode).calculate(terms, &catalog.list_active());

    print!("{}", render_quote(&terms, &estimate));
    Ok(())
}

fn render_quote(terms: &LoanTerms, estimate: &OfferEstimate) -> String {
    let mut out = format!(
        "Quote for {} TL over {} months\n",
        group_thousands(terms.amount()),
        terms.months()
    );

    match estimate {
        OfferEstimate::Flat { estimate } => out.push_str(&render_flat(estimate)),
        OfferEstimate::BankRate { offers } if offers.is_empty() => {
            out.push_str("No partner bank lends this amount.\n");
        }
        OfferEstimate::BankRate { offers } => {
            for offer in offers {
                out.push_str(&render_offer(offer));
            }
        }
    }
    out
}

fn render_flat(estimate: &FlatEstimate) -> String {
    format!(
        "- flat: {} TL/month, {} TL total, no interest\n",
        group_thousands(estimate.monthly_payment),
        group_thousands(estimate.total_payment)
    )
}

fn render_offer(offer: &BankOffer) -> String {
    format!(
        "- {} ({:.2}%): {} TL/month, {} TL total, {} TL interest\n",
        offer.bank.name,
        offer.bank.interest_rate,
        group_thousands(offer.monthly_payment),
        group_thousands(offer.total_payment),
        group_thousands(offer.total_interest)
    )
}
