use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use tokio::task::JoinHandle;
use tracing::info;

use super::domain::{ApplicationRecord, ApplicationSubmission, NewApplication};
use super::message::render_notification;
use super::repository::{ApplicationLog, RepositoryError};
use super::validation::{
    normalize_phone, resolve_bank_name, validate_national_id, ValidationError,
};
use crate::notifications::{DeliveryOutcome, NotificationDispatcher, NotificationSink};
use crate::workflows::banks::BankCatalog;
use crate::workflows::offers::LoanTerms;

/// Timestamps are stamped in Turkey time.
pub const ISTANBUL_UTC_OFFSET_SECS: i32 = 3 * 3600;

pub fn istanbul_offset() -> FixedOffset {
    FixedOffset::east_opt(ISTANBUL_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Stored record plus the detached notification attempt.
///
/// Dropping `delivery` leaves the notification running.
#[derive(Debug)]
pub struct IntakeReceipt {
    pub record: ApplicationRecord,
    pub delivery: JoinHandle<DeliveryOutcome>,
}

/// Service composing validation, the application log, and the chat notifier.
pub struct ApplicationIntakeService<L, S> {
    log: Arc<L>,
    catalog: Arc<BankCatalog>,
    notifier: NotificationDispatcher<S>,
    offset: FixedOffset,
}

impl<L, S> ApplicationIntakeService<L, S>
where
    L: ApplicationLog + 'static,
    S: NotificationSink + 'static,
{
    pub fn new(log: Arc<L>, catalog: Arc<BankCatalog>, notifier: NotificationDispatcher<S>) -> Self {
        Self {
            log,
            catalog,
            notifier,
            offset: istanbul_offset(),
        }
    }

    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    /// Validates the submission without touching the log.
    pub fn screen(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<NewApplication, ValidationError> {
        let ApplicationSubmission {
            tc_kimlik,
            telefon,
            bank_name,
            bank_id,
            amount,
            months,
        } = submission;

        Ok(NewApplication {
            tc_kimlik: validate_national_id(&tc_kimlik)?,
            telefon: normalize_phone(&telefon)?,
            bank_name: resolve_bank_name(&self.catalog, bank_id, bank_name.as_deref())?,
            terms: LoanTerms::new(amount, months)?,
            created_at: self.now(),
        })
    }

    /// Persists first, then hands the summary to the notifier. Notification problems never
    /// reach the caller and never undo the stored record.
    pub fn submit(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<IntakeReceipt, IntakeError> {
        let application = self.screen(submission)?;
        let record = self.log.append(application)?;
        info!(
            application_id = record.id,
            bank = %record.bank_name,
            amount = record.amount,
            months = record.months,
            "application received"
        );

        let delivery = self.notifier.dispatch(render_notification(&record));
        Ok(IntakeReceipt { record, delivery })
    }

    pub fn list(&self) -> Result<Vec<ApplicationRecord>, IntakeError> {
        Ok(self.log.list()?)
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
