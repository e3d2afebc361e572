use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use super::domain::{BankDraft, BankId, BankPatch, BankRecord};

/// Error raised by catalog lookups.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("bank {0} not found")]
    NotFound(BankId),
}

/// Ordered, soft-deleting collection of partner banks.
///
/// Every read and write goes through one mutex, so id assignment and append are a single
/// critical section.
#[derive(Debug, Default)]
pub struct BankCatalog {
    records: Mutex<Vec<BankRecord>>,
}

impl BankCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog pre-populated with the given drafts, ids assigned in order.
    pub fn with_drafts(drafts: impl IntoIterator<Item = BankDraft>) -> Self {
        let catalog = Self::new();
        for draft in drafts {
            catalog.create(draft);
        }
        catalog
    }

    fn lock(&self) -> MutexGuard<'_, Vec<BankRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list_active(&self) -> Vec<BankRecord> {
        self.lock()
            .iter()
            .filter(|record| record.is_active)
            .cloned()
            .collect()
    }

    pub fn list_all(&self) -> Vec<BankRecord> {
        self.lock().clone()
    }

    pub fn get(&self, id: BankId) -> Result<BankRecord, CatalogError> {
        self.lock()
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    pub fn create(&self, draft: BankDraft) -> BankRecord {
        let mut records = self.lock();
        let id = records.iter().map(|record| record.id).max().unwrap_or(0) + 1;
        let record = BankRecord::from_draft(id, draft);
        records.push(record.clone());
        info!(bank_id = id, name = %record.name, "bank created");
        record
    }

    pub fn replace(&self, id: BankId, draft: BankDraft) -> Result<BankRecord, CatalogError> {
        self.modify(id, |record| *record = BankRecord::from_draft(id, draft))
    }

    pub fn patch(&self, id: BankId, patch: BankPatch) -> Result<BankRecord, CatalogError> {
        self.modify(id, |record| record.apply(patch))
    }

    /// Soft-deletes a bank. Repeating the call on an inactive bank succeeds.
    pub fn deactivate(&self, id: BankId) -> Result<(), CatalogError> {
        self.modify(id, |record| record.is_active = false)?;
        Ok(())
    }

    fn modify<F>(&self, id: BankId, change: F) -> Result<BankRecord, CatalogError>
    where
        F: FnOnce(&mut BankRecord),
    {
        let mut records = self.lock();
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        change(record);
        debug!(bank_id = id, is_active = record.is_active, "bank updated");
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> BankDraft {
        BankDraft {
            name: name.to_string(),
            logo: format!("https://cdn.example.com/{}.svg", name.to_lowercase()),
            campaign: "3 Ay vadeli nakit avans".to_string(),
            color: "red".to_string(),
            is_active: true,
            max_applications: None,
            interest_rate: Some(2.1),
            max_amount: Some(100_000.0),
        }
    }

    #[test]
    fn sequential_creates_number_from_one() {
        let catalog = BankCatalog::new();
        let ids: Vec<BankId> = ["Akbank", "QNB", "TEB", "Enpara"]
            .into_iter()
            .map(|name| catalog.create(draft(name)).id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn create_continues_after_highest_id() {
        let catalog = BankCatalog::with_drafts([draft("Akbank"), draft("QNB")]);
        catalog.deactivate(2).expect("bank exists");
        let created = catalog.create(draft("TEB"));
        assert_eq!(created.id, 3);
    }

    #[test]
    fn deactivated_banks_stay_in_full_listing() {
        let catalog = BankCatalog::with_drafts([draft("Akbank"), draft("QNB"), draft("TEB")]);
        catalog.deactivate(2).expect("bank exists");

        let active: Vec<_> = catalog.list_active().into_iter().map(|b| b.id).collect();
        let all: Vec<_> = catalog.list_all().into_iter().map(|b| b.id).collect();
        assert_eq!(active, vec![1, 3]);
        assert_eq!(all, vec![1, 2, 3]);
        assert!(!catalog.get(2).expect("still queryable").is_active);
    }

    #[test]
    fn deactivate_is_idempotent() {
        let catalog = BankCatalog::with_drafts([draft("Akbank")]);
        catalog.deactivate(1).expect("first deactivation");
        catalog.deactivate(1).expect("second deactivation");
        assert!(!catalog.get(1).expect("present").is_active);
        assert_eq!(catalog.list_all().len(), 1);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let catalog = BankCatalog::with_drafts([draft("Akbank")]);
        assert_eq!(catalog.deactivate(9), Err(CatalogError::NotFound(9)));
        assert_eq!(
            catalog.replace(9, draft("QNB")),
            Err(CatalogError::NotFound(9))
        );
        assert_eq!(
            catalog.patch(9, BankPatch::default()),
            Err(CatalogError::NotFound(9))
        );
    }

    #[test]
    fn replace_overwrites_every_field() {
        let catalog = BankCatalog::with_drafts([draft("Akbank")]);
        let mut replacement = draft("Garanti BBVA");
        replacement.is_active = false;
        replacement.interest_rate = None;

        let replaced = catalog.replace(1, replacement).expect("bank exists");
        assert_eq!(replaced.id, 1);
        assert_eq!(replaced.name, "Garanti BBVA");
        assert!(!replaced.is_active);
        assert_eq!(replaced.interest_rate, None);
        assert_eq!(catalog.list_active().len(), 0);
    }

    #[test]
    fn patch_changes_only_supplied_fields() {
        let catalog = BankCatalog::with_drafts([draft("Akbank")]);
        let before = catalog.get(1).expect("present");

        let patched = catalog
            .patch(
                1,
                BankPatch {
                    color: Some("gold".to_string()),
                    ..BankPatch::default()
                },
            )
            .expect("bank exists");

        assert_eq!(patched.color, "gold");
        assert_eq!(patched.name, before.name);
        assert_eq!(patched.logo, before.logo);
        assert_eq!(patched.campaign, before.campaign);
        assert_eq!(patched.is_active, before.is_active);
        assert_eq!(patched.interest_rate, before.interest_rate);
    }

    #[test]
    fn concurrent_creates_never_share_ids() {
        let catalog = std::sync::Arc::new(BankCatalog::new());
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let catalog = catalog.clone();
                std::thread::spawn(move || {
                    (0..25)
                        .map(|n| catalog.create(draft(&format!("Bank {worker}-{n}"))).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<BankId> = handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("thread joins"))
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=200).collect::<Vec<_>>());
        assert_eq!(catalog.list_all().len(), 200);
    }
}
