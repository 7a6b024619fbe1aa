use anyhow::Result;
use chrono::Utc;

use crate::config::settings::AppConfig;
use crate::domain::{ChatMessage, UserRecord};
use crate::errors::DomainError;
use crate::repository::MessageRepository;

/// Global chat: append-only writes, bounded-window reads.
pub struct ChatService<M> {
    messages: M,
    config: AppConfig,
}

impl<M: MessageRepository> ChatService<M> {
    pub fn new(messages: M, config: AppConfig) -> Self {
        Self { messages, config }
    }

    pub async fn post(&self, user: &UserRecord, text: &str) -> Result<ChatMessage> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyMessage.into());
        }

        let message = ChatMessage {
            text: trimmed.to_string(),
            user_id: user.user_id.clone(),
            created_at: Utc::now(),
        };
        self.messages.append(message.clone()).await?;
        Ok(message)
    }

    /// The configured window of most recent messages, oldest first.
    pub async fn recent(&self) -> Result<Vec<ChatMessage>> {
        self.messages.recent(self.config.chat.window_size).await
    }
}
