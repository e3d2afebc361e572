use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::settings::NotificationSettings;
use super::sink::{NotificationError, NotificationSink};
use crate::config::DEFAULT_TELEGRAM_API_BASE;

/// Sends messages through the Telegram Bot API `sendMessage` method.
#[derive(Debug, Clone)]
pub struct TelegramSink {
    client: Client,
    api_base: String,
}

impl Default for TelegramSink {
    fn default() -> Self {
        Self::new(Client::new(), DEFAULT_TELEGRAM_API_BASE)
    }
}

impl TelegramSink {
    pub fn new(client: Client, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self { client, api_base }
    }

    fn endpoint(&self, bot_token: &str) -> String {
        format!("{}/bot{bot_token}/sendMessage", self.api_base)
    }
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[async_trait]
impl NotificationSink for TelegramSink {
    async fn deliver(
        &self,
        settings: &NotificationSettings,
        text: &str,
    ) -> Result<(), NotificationError> {
        let payload = SendMessage {
            chat_id: &settings.chat_id,
            text,
        };

        let response = self
            .client
            .post(self.endpoint(&settings.bot_token))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(NotificationError::Rejected(format!("{status}: {body}")));
        }

        Ok(())
    }
}
