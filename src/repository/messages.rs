use anyhow::Result;

use crate::domain::ChatMessage;

/// Append-only global chat log.
#[allow(async_fn_in_trait)]
pub trait MessageRepository {
    async fn append(&self, message: ChatMessage) -> Result<()>;

    /// Most recent `limit` messages, oldest of the window first.
    async fn recent(&self, limit: usize) -> Result<Vec<ChatMessage>>;
}
