use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Difficulty bucket for a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(DomainError::InvalidDifficulty(other.to_string())),
        }
    }
}

/// Challenge document as persisted in the external store.
///
/// The store is schemaless, so `difficulty` stays a raw string here and is
/// parsed where it matters (stats aggregation fails on an unknown value
/// instead of corrupting bucket totals). Sparse fields carry serde defaults:
/// a document without `ratings` behaves as an empty map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRecord {
    /// Unique key, lowercase-hyphen slug derived from the title.
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub difficulty: String,
    pub points: i64,
    /// Correct answer, compared case-insensitively against submissions.
    pub key: String,
    #[serde(default)]
    pub completed_by: u64,
    /// Rater userID -> latest rating value. Keys unique, no ordering.
    #[serde(default)]
    pub ratings: HashMap<String, f64>,
    /// Author userID.
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ChallengeRecord {
    pub fn parsed_difficulty(&self) -> Result<Difficulty, DomainError> {
        self.difficulty.parse()
    }
}

/// User document, keyed by email in the external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub points: i64,
    /// Completion map: challenge url -> true. Presence implies completion;
    /// the value is never written as false.
    #[serde(default)]
    pub challenges: HashMap<String, bool>,
}

impl UserRecord {
    pub fn has_completed(&self, url: &str) -> bool {
        self.challenges.get(url).copied().unwrap_or(false)
    }

    pub fn solved_count(&self) -> usize {
        self.challenges.values().filter(|&&done| done).count()
    }
}

/// Global chat message. Append-only, read as a bounded recent window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub text: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Derived per-profile completion statistics. Output only, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeStats {
    pub solved_challenges: u32,
    pub solved_easy_challenges: u32,
    pub solved_medium_challenges: u32,
    pub solved_hard_challenges: u32,
    pub total_easy_challenges: u32,
    pub total_medium_challenges: u32,
    pub total_hard_challenges: u32,
    pub total_challenges: u32,
    /// 1-based rank by solved count, merged in by the profile service.
    pub ranking: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_canonical_values() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }

    #[test]
    fn unknown_difficulty_is_an_error() {
        let err = "extreme".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, DomainError::InvalidDifficulty("extreme".to_string()));
    }

    #[test]
    fn challenge_document_without_ratings_deserializes_to_empty_map() {
        let json = r#"{
            "url": "flag-of-poland",
            "title": "Flag of Poland",
            "difficulty": "easy",
            "points": 5,
            "key": "poland",
            "userId": "author-1",
            "createdAt": "2024-03-01T12:00:00Z"
        }"#;

        let challenge: ChallengeRecord = serde_json::from_str(json).unwrap();
        assert!(challenge.ratings.is_empty());
        assert_eq!(challenge.completed_by, 0);
        assert_eq!(challenge.description, "");
        assert_eq!(challenge.image, None);
    }

    #[test]
    fn challenge_document_round_trips_camel_case() {
        let challenge = ChallengeRecord {
            url: "flag-of-japan".to_string(),
            title: "Flag of Japan".to_string(),
            description: "Which country?".to_string(),
            difficulty: "hard".to_string(),
            points: 15,
            key: "Japan".to_string(),
            completed_by: 3,
            ratings: HashMap::new(),
            user_id: "author-2".to_string(),
            created_at: "2024-03-01T12:00:00Z".parse().unwrap(),
            image: None,
        };

        let value = serde_json::to_value(&challenge).unwrap();
        assert_eq!(value["completedBy"], 3);
        assert_eq!(value["userId"], "author-2");
        assert!(value.get("image").is_none());
    }

    #[test]
    fn completion_map_presence_is_the_source_of_truth() {
        let mut challenges = HashMap::new();
        challenges.insert("flag-of-poland".to_string(), true);

        let user = UserRecord {
            user_id: "u1".to_string(),
            email: "u1@example.com".to_string(),
            username: "u1".to_string(),
            bio: String::new(),
            avatar: None,
            points: 5,
            challenges,
        };

        assert!(user.has_completed("flag-of-poland"));
        assert!(!user.has_completed("flag-of-japan"));
        assert_eq!(user.solved_count(), 1);
    }
}
