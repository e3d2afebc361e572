use async_trait::async_trait;

use super::settings::NotificationSettings;

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("chat endpoint rejected message: {0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

/// One-way delivery of formatted text to a chat destination.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn deliver(
        &self,
        settings: &NotificationSettings,
        text: &str,
    ) -> Result<(), NotificationError>;
}
