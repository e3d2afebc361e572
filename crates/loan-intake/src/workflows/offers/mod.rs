//! Installment estimates in flat or per-bank annuity mode.

pub mod calculator;
pub mod router;

pub use calculator::{
    annuity_payment, bank_offers, flat_estimate, round_currency, BankOffer, FlatEstimate,
    InterestModel, LoanTerms, OfferBank, OfferCalculator, OfferError, OfferEstimate, MAX_AMOUNT,
    MAX_MONTHS, MIN_AMOUNT, MIN_MONTHS,
};
pub use router::{offer_router, CalculateRequest};
