pub mod aggregation;
pub mod config;
pub mod domain;
pub mod errors;
pub mod repository;
pub mod services;
pub mod view;

pub use aggregation::{aggregate_stats, filter_and_sort, mean_rating, rank};
pub use config::settings::AppConfig;
pub use errors::DomainError;
