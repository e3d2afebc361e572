//! Partner bank catalog: ordered, soft-deleting, and shared by the calculator and intake.

pub mod catalog;
pub mod domain;
pub mod router;
pub mod seed;

pub use catalog::{BankCatalog, CatalogError};
pub use domain::{BankDraft, BankId, BankPatch, BankRecord};
pub use router::bank_router;
pub use seed::default_partners;
