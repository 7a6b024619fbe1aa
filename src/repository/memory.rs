use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use log::debug;
use tokio::sync::RwLock;

use crate::domain::{ChallengeRecord, ChatMessage, UserRecord};
use crate::errors::DomainError;
use crate::repository::{BlobStore, ChallengeRepository, MessageRepository, UserRepository};

/// In-process implementation of all four store capabilities. Clones share
/// the same underlying maps, so one store can serve several services.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    /// email -> user document
    users: RwLock<HashMap<String, UserRecord>>,
    /// url slug -> challenge document
    challenges: RwLock<HashMap<String, ChallengeRecord>>,
    messages: RwLock<Vec<ChatMessage>>,
    blobs: RwLock<HashMap<String, StoredBlob>>,
}

struct StoredBlob {
    content_type: String,
    bytes: Vec<u8>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content type and size of a stored object, if present.
    pub async fn blob_meta(&self, path: &str) -> Option<(String, usize)> {
        let blobs = self.inner.blobs.read().await;
        blobs
            .get(path)
            .map(|blob| (blob.content_type.clone(), blob.bytes.len()))
    }
}

impl UserRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let users = self.inner.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>> {
        let users = self.inner.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn top_by_points(&self, min_points: i64, limit: usize) -> Result<Vec<UserRecord>> {
        let users = self.inner.users.read().await;
        let mut rows: Vec<UserRecord> = users
            .values()
            .filter(|user| user.points >= min_points)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.points.cmp(&a.points));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn create(&self, user: UserRecord) -> Result<()> {
        let mut users = self.inner.users.write().await;
        debug!("Storing user document for {}", user.email);
        users.insert(user.email.clone(), user);
        Ok(())
    }

    async fn record_completion(
        &self,
        email: &str,
        challenge_url: &str,
        earned_points: i64,
    ) -> Result<()> {
        let mut users = self.inner.users.write().await;
        let user = users
            .get_mut(email)
            .ok_or_else(|| DomainError::UserNotFound(email.to_string()))?;

        user.challenges.insert(challenge_url.to_string(), true);
        user.points += earned_points;
        debug!("{email} completed {challenge_url} for {earned_points} points");
        Ok(())
    }

    async fn set_avatar(&self, email: &str, avatar_url: &str) -> Result<()> {
        let mut users = self.inner.users.write().await;
        let user = users
            .get_mut(email)
            .ok_or_else(|| DomainError::UserNotFound(email.to_string()))?;
        user.avatar = Some(avatar_url.to_string());
        Ok(())
    }
}

impl ChallengeRepository for MemoryStore {
    async fn list_all(&self) -> Result<Vec<ChallengeRecord>> {
        let challenges = self.inner.challenges.read().await;
        Ok(challenges.values().cloned().collect())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<ChallengeRecord>> {
        let challenges = self.inner.challenges.read().await;
        Ok(challenges.get(url).cloned())
    }

    async fn create(&self, challenge: ChallengeRecord) -> Result<()> {
        let mut challenges = self.inner.challenges.write().await;
        debug!("Storing challenge document {}", challenge.url);
        challenges.insert(challenge.url.clone(), challenge);
        Ok(())
    }

    async fn update(&self, challenge: ChallengeRecord) -> Result<()> {
        let mut challenges = self.inner.challenges.write().await;
        if !challenges.contains_key(&challenge.url) {
            return Err(DomainError::ChallengeNotFound(challenge.url).into());
        }
        challenges.insert(challenge.url.clone(), challenge);
        Ok(())
    }

    async fn delete(&self, url: &str) -> Result<()> {
        let mut challenges = self.inner.challenges.write().await;
        challenges
            .remove(url)
            .ok_or_else(|| DomainError::ChallengeNotFound(url.to_string()))?;
        Ok(())
    }

    async fn increment_completed_by(&self, url: &str) -> Result<()> {
        let mut challenges = self.inner.challenges.write().await;
        let challenge = challenges
            .get_mut(url)
            .ok_or_else(|| DomainError::ChallengeNotFound(url.to_string()))?;
        challenge.completed_by += 1;
        Ok(())
    }

    async fn set_rating(&self, url: &str, user_id: &str, value: f64) -> Result<()> {
        let mut challenges = self.inner.challenges.write().await;
        let challenge = challenges
            .get_mut(url)
            .ok_or_else(|| DomainError::ChallengeNotFound(url.to_string()))?;
        challenge.ratings.insert(user_id.to_string(), value);
        Ok(())
    }
}

impl MessageRepository for MemoryStore {
    async fn append(&self, message: ChatMessage) -> Result<()> {
        let mut messages = self.inner.messages.write().await;
        messages.push(message);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ChatMessage>> {
        let messages = self.inner.messages.read().await;
        let mut window: Vec<ChatMessage> = messages.iter().cloned().collect();
        window.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        let start = window.len().saturating_sub(limit);
        Ok(window.split_off(start))
    }
}

impl BlobStore for MemoryStore {
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<String> {
        let mut blobs = self.inner.blobs.write().await;
        blobs.insert(
            path.to_string(),
            StoredBlob {
                content_type: content_type.to_string(),
                bytes,
            },
        );
        Ok(blob_url(path))
    }

    async fn public_url(&self, path: &str) -> Result<Option<String>> {
        let blobs = self.inner.blobs.read().await;
        Ok(blobs.get(path).map(|_| blob_url(path)))
    }
}

fn blob_url(path: &str) -> String {
    format!("memory://{path}")
}
