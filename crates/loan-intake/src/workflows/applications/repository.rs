use std::sync::{Mutex, MutexGuard, PoisonError};

use super::domain::{ApplicationId, ApplicationRecord, NewApplication};

/// Storage abstraction so the intake service can be exercised in isolation.
pub trait ApplicationLog: Send + Sync {
    /// Assigns the next id and appends in one step.
    fn append(&self, application: NewApplication) -> Result<ApplicationRecord, RepositoryError>;
    fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}

/// Error enumeration for log failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("application log unavailable: {0}")]
    Unavailable(String),
}

/// Process-local append-only log. Ids are `len + 1` at insertion time.
#[derive(Debug, Default)]
pub struct InMemoryApplicationLog {
    records: Mutex<Vec<ApplicationRecord>>,
}

impl InMemoryApplicationLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ApplicationRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl ApplicationLog for InMemoryApplicationLog {
    fn append(&self, application: NewApplication) -> Result<ApplicationRecord, RepositoryError> {
        let mut records = self.lock();
        let id = records.len() as ApplicationId + 1;
        let record = ApplicationRecord::from_new(id, application);
        records.push(record.clone());
        Ok(record)
    }

    fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(self.lock().clone())
    }
}
