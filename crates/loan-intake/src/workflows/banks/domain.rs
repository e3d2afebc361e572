use serde::{Deserialize, Serialize};

/// Catalog-assigned identifier for a partner bank.
pub type BankId = u32;

/// Partner bank as listed to applicants and consulted by the offer calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRecord {
    pub id: BankId,
    pub name: String,
    pub logo: String,
    pub campaign: String,
    pub color: String,
    pub is_active: bool,
    /// Declared for partners but not enforced anywhere.
    #[serde(default)]
    pub max_applications: Option<u32>,
    /// Annual percentage rate used in bank-rate mode.
    #[serde(default)]
    pub interest_rate: Option<f64>,
    /// Largest principal the bank will lend; `None` means uncapped.
    #[serde(default)]
    pub max_amount: Option<f64>,
}

impl BankRecord {
    pub(crate) fn from_draft(id: BankId, draft: BankDraft) -> Self {
        Self {
            id,
            name: draft.name,
            logo: draft.logo,
            campaign: draft.campaign,
            color: draft.color,
            is_active: draft.is_active,
            max_applications: draft.max_applications,
            interest_rate: draft.interest_rate,
            max_amount: draft.max_amount,
        }
    }

    pub(crate) fn apply(&mut self, patch: BankPatch) {
        let BankPatch {
            name,
            logo,
            campaign,
            color,
            is_active,
            max_applications,
            interest_rate,
            max_amount,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(logo) = logo {
            self.logo = logo;
        }
        if let Some(campaign) = campaign {
            self.campaign = campaign;
        }
        if let Some(color) = color {
            self.color = color;
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
        if max_applications.is_some() {
            self.max_applications = max_applications;
        }
        if interest_rate.is_some() {
            self.interest_rate = interest_rate;
        }
        if max_amount.is_some() {
            self.max_amount = max_amount;
        }
    }

    /// Whether this bank lends `amount` in bank-rate mode.
    pub fn lends(&self, amount: f64) -> bool {
        self.max_amount.map_or(true, |cap| cap >= amount)
    }
}

/// Full set of bank fields, used for create and full replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankDraft {
    pub name: String,
    pub logo: String,
    pub campaign: String,
    pub color: String,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    #[serde(default)]
    pub max_applications: Option<u32>,
    #[serde(default)]
    pub interest_rate: Option<f64>,
    #[serde(default)]
    pub max_amount: Option<f64>,
}

fn active_by_default() -> bool {
    true
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub campaign: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub max_applications: Option<u32>,
    #[serde(default)]
    pub interest_rate: Option<f64>,
    #[serde(default)]
    pub max_amount: Option<f64>,
}
