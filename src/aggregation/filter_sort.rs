use crate::aggregation::rating::challenge_rating;
use crate::domain::{ChallengeRecord, Difficulty};

/// Conjunctive listing filter. Unset (or empty/zero) criteria match
/// everything.
#[derive(Debug, Clone, Default)]
pub struct ChallengeFilter {
    /// Case-insensitive substring match on the title.
    pub title_contains: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Keep challenges whose mean rating is at least this. The empty-rating
    /// default applies first, so an unrated challenge counts as 5.0 and
    /// passes a "4+ stars" filter.
    pub min_rating: Option<f64>,
}

/// Listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first.
    DateCreated,
    /// Ascending by title, case-aware, locale-naive.
    Alphabetical,
    /// Most completed first.
    Popularity,
}

impl SortKey {
    /// Parse a UI sort parameter; anything unrecognized means "leave the
    /// input order alone".
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "dateCreated" => Some(SortKey::DateCreated),
            "alphabetical" => Some(SortKey::Alphabetical),
            "popularity" => Some(SortKey::Popularity),
            _ => None,
        }
    }
}

/// Filter a challenge collection, then order the survivors. Returns a new
/// vector; the input is never mutated. Sorting is stable, so ties keep
/// their relative input order.
pub fn filter_and_sort(
    challenges: &[ChallengeRecord],
    filter: &ChallengeFilter,
    sort_key: Option<SortKey>,
    empty_rating_default: f64,
) -> Vec<ChallengeRecord> {
    let mut selected: Vec<ChallengeRecord> = challenges
        .iter()
        .filter(|challenge| matches_filter(challenge, filter, empty_rating_default))
        .cloned()
        .collect();

    if let Some(key) = sort_key {
        sort_challenges(&mut selected, key);
    }

    selected
}

fn matches_filter(
    challenge: &ChallengeRecord,
    filter: &ChallengeFilter,
    empty_rating_default: f64,
) -> bool {
    matches_title(challenge, filter.title_contains.as_deref())
        && matches_difficulty(challenge, filter.difficulty)
        && matches_min_rating(challenge, filter.min_rating, empty_rating_default)
}

fn matches_title(challenge: &ChallengeRecord, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(text) if text.is_empty() => true,
        Some(text) => challenge
            .title
            .to_lowercase()
            .contains(&text.to_lowercase()),
    }
}

fn matches_difficulty(challenge: &ChallengeRecord, wanted: Option<Difficulty>) -> bool {
    match wanted {
        None => true,
        Some(difficulty) => challenge.difficulty == difficulty.as_str(),
    }
}

fn matches_min_rating(
    challenge: &ChallengeRecord,
    min_rating: Option<f64>,
    empty_rating_default: f64,
) -> bool {
    match min_rating {
        None => true,
        Some(min) if min <= 0.0 => true,
        Some(min) => challenge_rating(challenge, empty_rating_default) >= min,
    }
}

fn sort_challenges(challenges: &mut [ChallengeRecord], key: SortKey) {
    match key {
        SortKey::DateCreated => {
            challenges.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        SortKey::Alphabetical => {
            challenges.sort_by(|a, b| a.title.cmp(&b.title));
        }
        SortKey::Popularity => {
            challenges.sort_by(|a, b| b.completed_by.cmp(&a.completed_by));
        }
    }
}
