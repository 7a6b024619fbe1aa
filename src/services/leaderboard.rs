use anyhow::Result;
use log::debug;

use crate::config::settings::AppConfig;
use crate::repository::UserRepository;
use crate::view::LeaderboardEntry;

/// Points leaderboard built from the ordered-limited repository read.
/// Ranks are positional within the returned page; the metric-based `rank`
/// function serves the single-user case on the profile side.
pub struct LeaderboardService<U> {
    users: U,
    config: AppConfig,
}

impl<U: UserRepository> LeaderboardService<U> {
    pub fn new(users: U, config: AppConfig) -> Self {
        Self { users, config }
    }

    pub async fn top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        let capped = limit.min(self.config.leaderboard.max_entries);
        let rows = self
            .users
            .top_by_points(self.config.leaderboard.min_points, capped)
            .await?;

        debug!("Leaderboard page with {} entries", rows.len());
        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(i, user)| LeaderboardEntry {
                rank: i + 1,
                user_id: user.user_id,
                username: user.username,
                points: user.points,
                avatar: user.avatar,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRecord;
    use crate::repository::MemoryStore;
    use std::collections::HashMap;

    fn user(id: &str, points: i64) -> UserRecord {
        UserRecord {
            user_id: id.to_string(),
            email: format!("{id}@example.com"),
            username: id.to_string(),
            bio: String::new(),
            avatar: None,
            points,
            challenges: HashMap::new(),
        }
    }

    async fn seed(store: &MemoryStore, rows: &[(&str, i64)]) {
        for (id, points) in rows {
            UserRepository::create(store, user(id, *points)).await.unwrap();
        }
    }

    #[tokio::test]
    async fn entries_are_ranked_by_points_descending() {
        let store = MemoryStore::new();
        seed(&store, &[("a", 50), ("b", 100), ("c", 10)]).await;
        let service = LeaderboardService::new(store, AppConfig::new());

        let board = service.top(10).await.unwrap();
        let rows: Vec<(usize, &str, i64)> = board
            .iter()
            .map(|e| (e.rank, e.user_id.as_str(), e.points))
            .collect();
        assert_eq!(rows, vec![(1, "b", 100), (2, "a", 50), (3, "c", 10)]);
    }

    #[tokio::test]
    async fn zero_point_users_are_not_listed() {
        let store = MemoryStore::new();
        seed(&store, &[("a", 0), ("b", 5)]).await;
        let service = LeaderboardService::new(store, AppConfig::new());

        let board = service.top(10).await.unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].user_id, "b");
    }

    #[tokio::test]
    async fn requested_page_size_is_capped() {
        let store = MemoryStore::new();
        seed(&store, &[("a", 1), ("b", 2), ("c", 3)]).await;

        let mut config = AppConfig::new();
        config.leaderboard.max_entries = 2;
        let service = LeaderboardService::new(store, config);

        let board = service.top(10).await.unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].user_id, "c");
    }

    #[tokio::test]
    async fn empty_store_gives_an_empty_board() {
        let service = LeaderboardService::new(MemoryStore::new(), AppConfig::new());
        assert!(service.top(10).await.unwrap().is_empty());
    }
}
