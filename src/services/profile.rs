use anyhow::Result;
use log::debug;

use crate::aggregation::ranking::{by_points, by_solved_count};
use crate::aggregation::{aggregate_stats, rank};
use crate::domain::{ChallengeStats, UserRecord};
use crate::repository::{BlobStore, ChallengeRepository, UserRepository};
use crate::view::ProfileStatsView;

/// Derived profile data: per-difficulty completion stats, rankings, avatar
/// upload. Works on snapshots handed back by the repositories.
pub struct ProfileService<C, U, B> {
    challenges: C,
    users: U,
    blobs: B,
}

impl<C, U, B> ProfileService<C, U, B>
where
    C: ChallengeRepository,
    U: UserRepository,
    B: BlobStore,
{
    pub fn new(challenges: C, users: U, blobs: B) -> Self {
        Self {
            challenges,
            users,
            blobs,
        }
    }

    /// Completion stats for a profile page, ranking (by solved count)
    /// merged in.
    pub async fn challenge_stats(&self, user: &UserRecord) -> Result<ChallengeStats> {
        let catalogue = self.challenges.list_all().await?;
        let mut stats = aggregate_stats(&catalogue, &user.challenges)?;

        let peers = self.users.list_all().await?;
        let entries = by_solved_count(&peers);
        stats.ranking = rank(&entries, &user.user_id, user.solved_count() as f64);

        debug!(
            "{}: {}/{} solved, rank {}",
            user.user_id, stats.solved_challenges, stats.total_challenges, stats.ranking
        );
        Ok(stats)
    }

    /// Stats with guarded per-bucket percentages, ready for rendering.
    pub async fn stats_view(&self, user: &UserRecord) -> Result<ProfileStatsView> {
        let stats = self.challenge_stats(user).await?;
        Ok(ProfileStatsView::from_stats(stats))
    }

    /// Rank by total points, for the leaderboard header.
    pub async fn points_rank(&self, user: &UserRecord) -> Result<usize> {
        let peers = self.users.list_all().await?;
        let entries = by_points(&peers);
        Ok(rank(&entries, &user.user_id, user.points as f64))
    }

    /// Store a new avatar and point the user document at its public URL.
    pub async fn upload_avatar(
        &self,
        user: &UserRecord,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String> {
        let path = format!("avatars/{}", user.user_id);
        let url = self.blobs.upload(&path, bytes, content_type).await?;
        self.users.set_avatar(&user.email, &url).await?;
        Ok(url)
    }
}
