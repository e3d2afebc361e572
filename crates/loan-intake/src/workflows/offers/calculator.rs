use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::workflows::banks::{BankId, BankRecord};

pub const MIN_AMOUNT: f64 = 25_000.0;
pub const MAX_AMOUNT: f64 = 450_000.0;
pub const MIN_MONTHS: u32 = 3;
pub const MAX_MONTHS: u32 = 60;

/// Validation failures for a requested principal/term pair.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OfferError {
    #[error("amount and months are required")]
    MissingTerms,
    #[error("amount must be between {min} and {max} TL (found {found})")]
    AmountOutOfRange { min: f64, max: f64, found: f64 },
    #[error("months must be between {min} and {max} (found {found})")]
    MonthsOutOfRange { min: u32, max: u32, found: u32 },
}

/// Which installment model produces estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestModel {
    /// One zero-interest estimate, no bank filtering.
    #[default]
    Flat,
    /// Per-bank annuity offers sorted by rate.
    BankRate,
}

impl InterestModel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "flat" => Some(Self::Flat),
            "bank_rate" | "bank" | "annuity" => Some(Self::BankRate),
            _ => None,
        }
    }
}

/// A principal and term already checked against the lending bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    amount: f64,
    months: u32,
}

impl LoanTerms {
    pub fn new(amount: f64, months: u32) -> Result<Self, OfferError> {
        if !amount.is_finite() || !(MIN_AMOUNT..=MAX_AMOUNT).contains(&amount) {
            return Err(OfferError::AmountOutOfRange {
                min: MIN_AMOUNT,
                max: MAX_AMOUNT,
                found: amount,
            });
        }
        if !(MIN_MONTHS..=MAX_MONTHS).contains(&months) {
            return Err(OfferError::MonthsOutOfRange {
                min: MIN_MONTHS,
                max: MAX_MONTHS,
                found: months,
            });
        }
        Ok(Self { amount, months })
    }

    /// Accepts partially filled request input, as both the JSON body and query string allow.
    pub fn from_parts(amount: Option<f64>, months: Option<u32>) -> Result<Self, OfferError> {
        match (amount, months) {
            (Some(amount), Some(months)) => Self::new(amount, months),
            _ => Err(OfferError::MissingTerms),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn months(&self) -> u32 {
        self.months
    }
}

/// Zero-interest estimate produced in flat mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatEstimate {
    pub amount: f64,
    pub months: u32,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub interest_rate: f64,
}

/// Bank identity carried on each bank-rate offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferBank {
    pub id: BankId,
    pub name: String,
    pub logo: String,
    pub interest_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,
}

/// Amortized repayment plan from one bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankOffer {
    pub bank: OfferBank,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Result of a calculation, shaped by the active interest model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OfferEstimate {
    Flat { estimate: FlatEstimate },
    BankRate { offers: Vec<BankOffer> },
}

/// Rounds half away from zero to two decimals.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Level monthly payment for `principal` over `months` at `annual_rate` percent.
pub fn annuity_payment(principal: f64, annual_rate: f64, months: u32) -> f64 {
    let rate = annual_rate / 100.0 / 12.0;
    if rate == 0.0 {
        return principal / f64::from(months);
    }
    let growth = (1.0 + rate).powi(months as i32);
    principal * rate * growth / (growth - 1.0)
}

pub fn flat_estimate(terms: LoanTerms) -> FlatEstimate {
    FlatEstimate {
        amount: terms.amount,
        months: terms.months,
        monthly_payment: round_currency(terms.amount / f64::from(terms.months)),
        total_payment: round_currency(terms.amount),
        total_interest: 0.0,
        interest_rate: 0.0,
    }
}

/// Offers from every active bank that has a rate and lends the requested amount, cheapest
/// rate first. Catalog order breaks ties.
pub fn bank_offers(terms: LoanTerms, banks: &[BankRecord]) -> Vec<BankOffer> {
    let mut offers: Vec<BankOffer> = banks
        .iter()
        .filter(|bank| bank.is_active && bank.lends(terms.amount))
        .filter_map(|bank| {
            let rate = bank.interest_rate?;
            let monthly = annuity_payment(terms.amount, rate, terms.months);
            let total = monthly * f64::from(terms.months);
            Some(BankOffer {
                bank: OfferBank {
                    id: bank.id,
                    name: bank.name.clone(),
                    logo: bank.logo.clone(),
                    interest_rate: rate,
                    max_amount: bank.max_amount,
                },
                monthly_payment: round_currency(monthly),
                total_payment: round_currency(total),
                total_interest: round_currency(total - terms.amount),
            })
        })
        .collect();

    offers.sort_by(|left, right| {
        left.bank
            .interest_rate
            .partial_cmp(&right.bank.interest_rate)
            .unwrap_or(Ordering::Equal)
    });
    offers
}

/// Stateless calculator bound to one interest model.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfferCalculator {
    model: InterestModel,
}

impl OfferCalculator {
    pub fn new(model: InterestModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> InterestModel {
        self.model
    }

    pub fn calculate(&self, terms: LoanTerms, banks: &[BankRecord]) -> OfferEstimate {
        match self.model {
            InterestModel::Flat => OfferEstimate::Flat {
                estimate: flat_estimate(terms),
            },
            InterestModel::BankRate => OfferEstimate::BankRate {
                offers: bank_offers(terms, banks),
            },
        }
    }
}
