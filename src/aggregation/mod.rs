pub mod filter_sort;
pub mod ranking;
pub mod rating;
pub mod stats;

pub use filter_sort::{filter_and_sort, ChallengeFilter, SortKey};
pub use ranking::{rank, MetricEntry};
pub use rating::{challenge_rating, mean_rating};
pub use stats::{aggregate_stats, completion_percentage};
