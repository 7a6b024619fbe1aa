pub mod models;
pub mod slug;

pub use models::{ChallengeRecord, ChallengeStats, ChatMessage, Difficulty, UserRecord};
pub use slug::slug_from_title;
