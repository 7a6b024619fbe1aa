pub mod models;

pub use models::{ChallengeListItem, LeaderboardEntry, ProfileStatsView};
