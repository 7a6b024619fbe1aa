use crate::domain::Difficulty;

#[derive(Debug, Clone)]
pub struct RatingSettings {
    /// Mean rating reported for a challenge nobody has rated yet.
    pub empty_rating_default: f64,
    pub min_rating: f64,
    pub max_rating: f64,
    /// Submission granularity (half stars).
    pub rating_step: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            empty_rating_default: 5.0,
            min_rating: 1.0,
            max_rating: 5.0,
            rating_step: 0.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub easy_points: i64,
    pub medium_points: i64,
    pub hard_points: i64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            easy_points: 5,
            medium_points: 10,
            hard_points: 15,
        }
    }
}

impl ScoringSettings {
    pub fn points_for(&self, difficulty: Difficulty) -> i64 {
        match difficulty {
            Difficulty::Easy => self.easy_points,
            Difficulty::Medium => self.medium_points,
            Difficulty::Hard => self.hard_points,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeaderboardSettings {
    /// Users below this point total are not listed.
    pub min_points: i64,
    pub max_entries: usize,
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            min_points: 1,
            max_entries: 100,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatSettings {
    /// Bounded window of most recent messages returned by a read.
    pub window_size: usize,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self { window_size: 50 }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rating: RatingSettings,
    pub scoring: ScoringSettings,
    pub leaderboard: LeaderboardSettings,
    pub chat: ChatSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            scoring: ScoringSettings::default(),
            leaderboard: LeaderboardSettings::default(),
            chat: ChatSettings::default(),
        }
    }
}

// Passed explicitly (dependency injection) rather than held in a global.
