pub mod challenges;
pub mod chat;
pub mod leaderboard;
pub mod profile;

pub use challenges::{ChallengeService, ChallengeUpdate, NewChallenge, SubmissionOutcome};
pub use chat::ChatService;
pub use leaderboard::LeaderboardService;
pub use profile::ProfileService;
