use serde::Serialize;

use crate::aggregation::{challenge_rating, completion_percentage};
use crate::domain::{ChallengeRecord, ChallengeStats};

/// One leaderboard row, rank already assigned.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user_id: String,
    pub username: String,
    pub points: i64,
    pub avatar: Option<String>,
}

/// Profile stats plus per-bucket completion percentages, ready to render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStatsView {
    #[serde(flatten)]
    pub stats: ChallengeStats,
    pub easy_percent: f64,
    pub medium_percent: f64,
    pub hard_percent: f64,
    pub total_percent: f64,
}

impl ProfileStatsView {
    pub fn from_stats(stats: ChallengeStats) -> Self {
        let easy_percent =
            completion_percentage(stats.solved_easy_challenges, stats.total_easy_challenges);
        let medium_percent =
            completion_percentage(stats.solved_medium_challenges, stats.total_medium_challenges);
        let hard_percent =
            completion_percentage(stats.solved_hard_challenges, stats.total_hard_challenges);
        let total_percent =
            completion_percentage(stats.solved_challenges, stats.total_challenges);

        Self {
            stats,
            easy_percent,
            medium_percent,
            hard_percent,
            total_percent,
        }
    }
}

/// Listing row for the challenge browser. `stars` is the whole-star
/// display rating; `rating` keeps the raw mean.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeListItem {
    pub url: String,
    pub title: String,
    pub difficulty: String,
    pub points: i64,
    pub completed_by: u64,
    pub rating: f64,
    pub stars: u8,
    pub image: Option<String>,
}

impl ChallengeListItem {
    pub fn from_record(challenge: &ChallengeRecord, empty_rating_default: f64) -> Self {
        let rating = challenge_rating(challenge, empty_rating_default);
        Self {
            url: challenge.url.clone(),
            title: challenge.title.clone(),
            difficulty: challenge.difficulty.clone(),
            points: challenge.points,
            completed_by: challenge.completed_by,
            rating,
            stars: rating.round() as u8,
            image: challenge.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;

    #[test]
    fn percentages_guard_empty_buckets() {
        let stats = ChallengeStats {
            solved_challenges: 1,
            solved_easy_challenges: 1,
            total_easy_challenges: 2,
            total_challenges: 2,
            ..Default::default()
        };

        let view = ProfileStatsView::from_stats(stats);
        assert_eq!(view.easy_percent, 50.0);
        assert_eq!(view.medium_percent, 0.0);
        assert_eq!(view.hard_percent, 0.0);
        assert_eq!(view.total_percent, 50.0);
    }

    #[test]
    fn stats_view_serializes_flat_camel_case() {
        let view = ProfileStatsView::from_stats(ChallengeStats::default());
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["solvedChallenges"], 0);
        assert_eq!(value["totalEasyChallenges"], 0);
        assert_eq!(value["totalPercent"], 0.0);
    }

    #[test]
    fn list_item_rounds_to_whole_stars() {
        let mut ratings = HashMap::new();
        ratings.insert("u1".to_string(), 4.0);
        ratings.insert("u2".to_string(), 5.0);
        ratings.insert("u3".to_string(), 4.0);

        let challenge = ChallengeRecord {
            url: "flag-of-poland".to_string(),
            title: "Flag of Poland".to_string(),
            description: String::new(),
            difficulty: "easy".to_string(),
            points: 5,
            key: "poland".to_string(),
            completed_by: 10,
            ratings,
            user_id: "author".to_string(),
            created_at: Utc::now(),
            image: None,
        };

        let item = ChallengeListItem::from_record(&challenge, 5.0);
        assert!((item.rating - 13.0 / 3.0).abs() < 1e-12);
        assert_eq!(item.stars, 4);
    }

    #[test]
    fn unrated_list_item_shows_the_default() {
        let challenge = ChallengeRecord {
            url: "flag-of-japan".to_string(),
            title: "Flag of Japan".to_string(),
            description: String::new(),
            difficulty: "hard".to_string(),
            points: 15,
            key: "japan".to_string(),
            completed_by: 0,
            ratings: HashMap::new(),
            user_id: "author".to_string(),
            created_at: Utc::now(),
            image: None,
        };

        let item = ChallengeListItem::from_record(&challenge, 5.0);
        assert_eq!(item.rating, 5.0);
        assert_eq!(item.stars, 5);
    }
}
