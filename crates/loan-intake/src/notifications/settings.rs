use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::config::NotificationConfig;

/// Chat credentials used for every delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub bot_token: String,
    pub chat_id: String,
}

impl NotificationSettings {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.bot_token.trim().is_empty() && !self.chat_id.trim().is_empty()
    }

    /// Copy safe to echo back over the admin API: only the token's last four characters remain.
    pub fn masked(&self) -> Self {
        let visible: String = {
            let tail: Vec<char> = self.bot_token.chars().rev().take(4).collect();
            tail.into_iter().rev().collect()
        };
        let bot_token = if self.bot_token.chars().count() <= 4 {
            "*".repeat(self.bot_token.chars().count())
        } else {
            format!("****{visible}")
        };
        Self {
            bot_token,
            chat_id: self.chat_id.clone(),
        }
    }
}

impl From<&NotificationConfig> for NotificationSettings {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            bot_token: config.bot_token.clone().unwrap_or_default(),
            chat_id: config.chat_id.clone().unwrap_or_default(),
        }
    }
}

/// Process-wide settings slot; writes replace the whole value.
#[derive(Debug, Default)]
pub struct NotificationSettingsStore {
    current: RwLock<NotificationSettings>,
}

impl NotificationSettingsStore {
    pub fn new(initial: NotificationSettings) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub fn get(&self) -> NotificationSettings {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set(&self, bot_token: impl Into<String>, chat_id: impl Into<String>) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = NotificationSettings::new(bot_token, chat_id);
    }
}
