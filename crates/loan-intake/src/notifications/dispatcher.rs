use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::settings::{NotificationSettings, NotificationSettingsStore};
use super::sink::NotificationSink;

/// What happened to one notification attempt. Never surfaced to applicants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    /// Credentials were empty at dispatch time.
    Skipped,
    Failed(String),
    TimedOut,
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }
}

/// Fire-and-forget delivery bounded by a timeout.
pub struct NotificationDispatcher<S> {
    sink: Arc<S>,
    settings: Arc<NotificationSettingsStore>,
    timeout: Duration,
}

impl<S> Clone for NotificationDispatcher<S> {
    fn clone(&self) -> Self {
        Self {
            sink: self.sink.clone(),
            settings: self.settings.clone(),
            timeout: self.timeout,
        }
    }
}

impl<S> NotificationDispatcher<S>
where
    S: NotificationSink + 'static,
{
    pub fn new(sink: Arc<S>, settings: Arc<NotificationSettingsStore>, timeout: Duration) -> Self {
        Self {
            sink,
            settings,
            timeout,
        }
    }

    /// Snapshots the current credentials and delivers on a detached task.
    pub fn dispatch(&self, text: String) -> JoinHandle<DeliveryOutcome> {
        let settings = self.settings.get();
        let sink = self.sink.clone();
        let timeout = self.timeout;
        tokio::spawn(async move { deliver(sink.as_ref(), &settings, &text, timeout).await })
    }

    /// Delivers inline with the current credentials.
    pub async fn deliver_now(&self, text: &str) -> DeliveryOutcome {
        let settings = self.settings.get();
        deliver(self.sink.as_ref(), &settings, text, self.timeout).await
    }
}

async fn deliver<S>(
    sink: &S,
    settings: &NotificationSettings,
    text: &str,
    timeout: Duration,
) -> DeliveryOutcome
where
    S: NotificationSink + ?Sized,
{
    if !settings.is_configured() {
        warn!("chat credentials not configured; skipping notification");
        return DeliveryOutcome::Skipped;
    }

    match tokio::time::timeout(timeout, sink.deliver(settings, text)).await {
        Ok(Ok(())) => {
            info!("notification delivered");
            DeliveryOutcome::Delivered
        }
        Ok(Err(error)) => {
            warn!(%error, "notification delivery failed");
            DeliveryOutcome::Failed(error.to_string())
        }
        Err(_) => {
            warn!(timeout_ms = timeout.as_millis() as u64, "notification delivery timed out");
            DeliveryOutcome::TimedOut
        }
    }
}
