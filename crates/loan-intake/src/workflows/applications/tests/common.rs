use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::notifications::{
    NotificationDispatcher, NotificationError, NotificationSettings, NotificationSettingsStore,
    NotificationSink,
};
use crate::workflows::applications::domain::{ApplicationRecord, ApplicationSubmission};
use crate::workflows::applications::repository::{
    ApplicationLog, InMemoryApplicationLog, RepositoryError,
};
use crate::workflows::applications::{ApplicationIntakeService, NewApplication};
use crate::workflows::banks::{default_partners, BankCatalog};

pub(super) fn submission() -> ApplicationSubmission {
    ApplicationSubmission {
        tc_kimlik: "12345678901".to_string(),
        telefon: "0532 123 45 67".to_string(),
        bank_name: Some("Akbank".to_string()),
        bank_id: None,
        amount: 75_000.0,
        months: 24,
    }
}

pub(super) fn configured_settings() -> Arc<NotificationSettingsStore> {
    Arc::new(NotificationSettingsStore::new(NotificationSettings::new(
        "123456:test-token",
        "-4915858013",
    )))
}

pub(super) fn catalog() -> Arc<BankCatalog> {
    Arc::new(BankCatalog::with_drafts(default_partners()))
}

pub(super) fn build_service<S>(
    sink: Arc<S>,
) -> (
    ApplicationIntakeService<InMemoryApplicationLog, S>,
    Arc<InMemoryApplicationLog>,
)
where
    S: NotificationSink + 'static,
{
    let log = Arc::new(InMemoryApplicationLog::new());
    let dispatcher =
        NotificationDispatcher::new(sink, configured_settings(), Duration::from_secs(1));
    let service = ApplicationIntakeService::new(log.clone(), catalog(), dispatcher);
    (service, log)
}

#[derive(Default)]
pub(super) struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub(super) fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("sink mutex poisoned").clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn deliver(
        &self,
        _settings: &NotificationSettings,
        text: &str,
    ) -> Result<(), NotificationError> {
        self.messages
            .lock()
            .expect("sink mutex poisoned")
            .push(text.to_string());
        Ok(())
    }
}

pub(super) struct FailingSink;

#[async_trait]
impl NotificationSink for FailingSink {
    async fn deliver(
        &self,
        _settings: &NotificationSettings,
        _text: &str,
    ) -> Result<(), NotificationError> {
        Err(NotificationError::Unavailable("chat api down".to_string()))
    }
}

pub(super) struct UnavailableLog;

impl ApplicationLog for UnavailableLog {
    fn append(&self, _application: NewApplication) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
