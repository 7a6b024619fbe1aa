use std::collections::HashMap;

use crate::domain::ChallengeRecord;

/// Arithmetic mean of a sparse user->rating map.
///
/// An empty map yields `empty_default`; the result is never NaN. No
/// rounding happens here, display formatting is a presentation concern.
pub fn mean_rating(ratings: &HashMap<String, f64>, empty_default: f64) -> f64 {
    if ratings.is_empty() {
        return empty_default;
    }

    let sum: f64 = ratings.values().sum();
    sum / ratings.len() as f64
}

/// Mean rating of a challenge, missing ratings treated as an empty map.
pub fn challenge_rating(challenge: &ChallengeRecord, empty_default: f64) -> f64 {
    mean_rating(&challenge.ratings, empty_default)
}
