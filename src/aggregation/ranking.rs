use crate::domain::UserRecord;

/// One user's value for whatever metric a ranking is computed over.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricEntry {
    pub id: String,
    pub metric: f64,
}

/// 1-based rank of a subject among peers: one plus the number of other
/// users with a strictly smaller metric. Peers at or above the subject do
/// not lower it, so ties share a rank. The subject's own entry, if present
/// in `users`, is excluded by identity.
pub fn rank(users: &[MetricEntry], subject_id: &str, subject_metric: f64) -> usize {
    let below = users
        .iter()
        .filter(|user| user.id != subject_id && user.metric < subject_metric)
        .count();
    1 + below
}

/// Leaderboard metric: total points.
pub fn by_points(users: &[UserRecord]) -> Vec<MetricEntry> {
    users
        .iter()
        .map(|user| MetricEntry {
            id: user.user_id.clone(),
            metric: user.points as f64,
        })
        .collect()
}

/// Profile metric: number of solved challenges.
pub fn by_solved_count(users: &[UserRecord]) -> Vec<MetricEntry> {
    users
        .iter()
        .map(|user| MetricEntry {
            id: user.user_id.clone(),
            metric: user.solved_count() as f64,
        })
        .collect()
}
