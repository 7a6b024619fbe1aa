use anyhow::Result;

use crate::domain::UserRecord;

/// User documents, keyed by email.
#[allow(async_fn_in_trait)]
pub trait UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>>;

    /// Full collection snapshot, no ordering guarantee.
    async fn list_all(&self) -> Result<Vec<UserRecord>>;

    /// Users with at least `min_points`, ordered by points descending,
    /// capped at `limit`.
    async fn top_by_points(&self, min_points: i64, limit: usize) -> Result<Vec<UserRecord>>;

    async fn create(&self, user: UserRecord) -> Result<()>;

    /// Completion update: mark `challenge_url` solved and add
    /// `earned_points` to the running total, as one document update.
    async fn record_completion(
        &self,
        email: &str,
        challenge_url: &str,
        earned_points: i64,
    ) -> Result<()>;

    /// Overwrite the avatar URL field.
    async fn set_avatar(&self, email: &str, avatar_url: &str) -> Result<()>;
}
