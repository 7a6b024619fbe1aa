use thiserror::Error;

/// Typed errors for the domain core. Storage/network failures stay in the
/// repository layer as `anyhow` errors; these cover rule violations the
/// caller may want to match on.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    /// A stored difficulty value outside {easy, medium, hard}. Fatal to the
    /// aggregation call that saw it, never silently skipped.
    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),

    /// A rating outside the configured bounds or off the star granularity.
    #[error("Invalid rating value: {0}")]
    InvalidRating(f64),

    #[error("Challenge not found: {0}")]
    ChallengeNotFound(String),

    #[error("Challenge already exists: {0}")]
    ChallengeExists(String),

    #[error("Only the author may modify challenge: {0}")]
    NotChallengeAuthor(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Challenge title produces an empty slug")]
    EmptyTitle,

    #[error("Chat message is empty")]
    EmptyMessage,
}
