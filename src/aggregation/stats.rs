use std::collections::HashMap;

use crate::domain::{ChallengeRecord, ChallengeStats, Difficulty};
use crate::errors::DomainError;

/// Single pass over the catalogue: bucket totals per difficulty plus solved
/// counts from the user's completion map. Order-independent, input
/// untouched. A difficulty outside {easy, medium, hard} fails the whole
/// call; zero-filling it would corrupt the bucket totals.
///
/// The `ranking` field of the result is left at 0 here; the profile service
/// merges it in from a separate `rank` call.
pub fn aggregate_stats(
    all_challenges: &[ChallengeRecord],
    completed_map: &HashMap<String, bool>,
) -> Result<ChallengeStats, DomainError> {
    let mut stats = ChallengeStats::default();

    for challenge in all_challenges {
        let difficulty = challenge.parsed_difficulty()?;
        let solved = completed_map
            .get(&challenge.url)
            .copied()
            .unwrap_or(false);

        stats.total_challenges += 1;
        if solved {
            stats.solved_challenges += 1;
        }

        match difficulty {
            Difficulty::Easy => {
                stats.total_easy_challenges += 1;
                if solved {
                    stats.solved_easy_challenges += 1;
                }
            }
            Difficulty::Medium => {
                stats.total_medium_challenges += 1;
                if solved {
                    stats.solved_medium_challenges += 1;
                }
            }
            Difficulty::Hard => {
                stats.total_hard_challenges += 1;
                if solved {
                    stats.solved_hard_challenges += 1;
                }
            }
        }
    }

    Ok(stats)
}

/// `100 * solved / total`, with an empty bucket reading 0% rather than
/// NaN or infinity.
pub fn completion_percentage(solved: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * solved as f64 / total as f64
}
