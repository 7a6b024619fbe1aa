use anyhow::Result;

use crate::domain::ChallengeRecord;

/// Challenge documents, keyed by url slug.
#[allow(async_fn_in_trait)]
pub trait ChallengeRepository {
    async fn list_all(&self) -> Result<Vec<ChallengeRecord>>;

    async fn find_by_url(&self, url: &str) -> Result<Option<ChallengeRecord>>;

    async fn create(&self, challenge: ChallengeRecord) -> Result<()>;

    /// Whole-document overwrite.
    async fn update(&self, challenge: ChallengeRecord) -> Result<()>;

    async fn delete(&self, url: &str) -> Result<()>;

    /// Atomic counter bump when someone solves the challenge.
    async fn increment_completed_by(&self, url: &str) -> Result<()>;

    /// Idempotently overwrite one user's rating; only the latest value
    /// counts.
    async fn set_rating(&self, url: &str, user_id: &str, value: f64) -> Result<()>;
}
