use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::workflows::banks::BankId;
use crate::workflows::offers::LoanTerms;

/// Sequential identifier assigned by the application log.
pub type ApplicationId = u64;

/// Applicant-provided payload. Unknown fields (including any password field) are dropped
/// during deserialization and never stored or forwarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSubmission {
    pub tc_kimlik: String,
    pub telefon: String,
    /// Free-text bank name; ignored when `bank_id` is present.
    #[serde(default)]
    pub bank_name: Option<String>,
    /// Catalog bank; the stored name is taken from the catalog.
    #[serde(default)]
    pub bank_id: Option<BankId>,
    pub amount: f64,
    pub months: u32,
}

/// Applications never leave `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
        }
    }
}

/// Validated submission waiting for an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub tc_kimlik: String,
    pub telefon: String,
    pub bank_name: String,
    pub terms: LoanTerms,
    pub created_at: DateTime<FixedOffset>,
}

/// Entry in the append-only application log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub tc_kimlik: String,
    pub telefon: String,
    pub bank_name: String,
    pub amount: f64,
    pub months: u32,
    pub status: ApplicationStatus,
    pub created_at: DateTime<FixedOffset>,
}

impl ApplicationRecord {
    pub fn from_new(id: ApplicationId, application: NewApplication) -> Self {
        let NewApplication {
            tc_kimlik,
            telefon,
            bank_name,
            terms,
            created_at,
        } = application;

        Self {
            id,
            tc_kimlik,
            telefon,
            bank_name,
            amount: terms.amount(),
            months: terms.months(),
            status: ApplicationStatus::Pending,
            created_at,
        }
    }
}
