use std::collections::HashMap;

use anyhow::Result;
use chrono::Utc;
use log::info;

use crate::aggregation::{filter_and_sort, ChallengeFilter, SortKey};
use crate::config::settings::{AppConfig, RatingSettings};
use crate::domain::{slug_from_title, ChallengeRecord, Difficulty, UserRecord};
use crate::errors::DomainError;
use crate::repository::{ChallengeRepository, UserRepository};
use crate::view::ChallengeListItem;

/// Author input for a new challenge. Slug, points and counters are derived
/// here, never supplied by the caller.
#[derive(Debug, Clone)]
pub struct NewChallenge {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub key: String,
    pub image: Option<String>,
}

/// Author-editable fields for an existing challenge. Unset fields keep
/// their stored value; the slug, difficulty, points and counters are fixed
/// at creation and cannot be edited.
#[derive(Debug, Clone, Default)]
pub struct ChallengeUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub key: Option<String>,
    pub image: Option<String>,
}

/// Result of an answer submission. Only `Solved` changes any state.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Solved { points_earned: i64 },
    Incorrect,
    AlreadySolved,
    OwnChallenge,
}

pub struct ChallengeService<C, U> {
    challenges: C,
    users: U,
    config: AppConfig,
}

impl<C: ChallengeRepository, U: UserRepository> ChallengeService<C, U> {
    pub fn new(challenges: C, users: U, config: AppConfig) -> Self {
        Self {
            challenges,
            users,
            config,
        }
    }

    pub async fn create_challenge(
        &self,
        author: &UserRecord,
        new: NewChallenge,
    ) -> Result<ChallengeRecord> {
        let url = slug_from_title(&new.title);
        if url.is_empty() {
            return Err(DomainError::EmptyTitle.into());
        }
        if self.challenges.find_by_url(&url).await?.is_some() {
            return Err(DomainError::ChallengeExists(url).into());
        }

        let record = ChallengeRecord {
            url: url.clone(),
            title: new.title,
            description: new.description,
            difficulty: new.difficulty.as_str().to_string(),
            points: self.config.scoring.points_for(new.difficulty),
            key: new.key,
            completed_by: 0,
            ratings: HashMap::new(),
            user_id: author.user_id.clone(),
            created_at: Utc::now(),
            image: new.image,
        };

        self.challenges.create(record.clone()).await?;
        info!("Challenge {url} created by {}", author.user_id);
        Ok(record)
    }

    /// Filtered, sorted listing snapshot for the challenge browser.
    pub async fn list(
        &self,
        filter: &ChallengeFilter,
        sort_key: Option<SortKey>,
    ) -> Result<Vec<ChallengeRecord>> {
        let all = self.challenges.list_all().await?;
        Ok(filter_and_sort(
            &all,
            filter,
            sort_key,
            self.config.rating.empty_rating_default,
        ))
    }

    /// Listing mapped into the card-shaped view the challenge browser
    /// renders, with the mean rating already resolved.
    pub async fn list_view(
        &self,
        filter: &ChallengeFilter,
        sort_key: Option<SortKey>,
    ) -> Result<Vec<ChallengeListItem>> {
        let records = self.list(filter, sort_key).await?;
        Ok(records
            .iter()
            .map(|record| {
                ChallengeListItem::from_record(record, self.config.rating.empty_rating_default)
            })
            .collect())
    }

    /// Apply an author edit to a challenge. Only the author may edit, and
    /// only the presentation fields and the answer key change; the slug,
    /// points and counters stay as created.
    pub async fn update_challenge(
        &self,
        user: &UserRecord,
        url: &str,
        update: ChallengeUpdate,
    ) -> Result<ChallengeRecord> {
        let mut challenge = self
            .challenges
            .find_by_url(url)
            .await?
            .ok_or_else(|| DomainError::ChallengeNotFound(url.to_string()))?;

        if challenge.user_id != user.user_id {
            return Err(DomainError::NotChallengeAuthor(url.to_string()).into());
        }

        if let Some(title) = update.title {
            challenge.title = title;
        }
        if let Some(description) = update.description {
            challenge.description = description;
        }
        if let Some(key) = update.key {
            challenge.key = key;
        }
        if let Some(image) = update.image {
            challenge.image = Some(image);
        }

        self.challenges.update(challenge.clone()).await?;
        info!("Challenge {url} updated by {}", user.user_id);
        Ok(challenge)
    }

    /// Check a submission against the hidden answer and, on the first
    /// correct attempt, apply the completion updates: bump the challenge
    /// counter, mark the user's completion map, award the points.
    pub async fn submit_answer(
        &self,
        user: &UserRecord,
        url: &str,
        submission: &str,
    ) -> Result<SubmissionOutcome> {
        let challenge = self
            .challenges
            .find_by_url(url)
            .await?
            .ok_or_else(|| DomainError::ChallengeNotFound(url.to_string()))?;

        if challenge.user_id == user.user_id {
            return Ok(SubmissionOutcome::OwnChallenge);
        }
        if user.has_completed(url) {
            return Ok(SubmissionOutcome::AlreadySolved);
        }
        if !answer_matches(&challenge.key, submission) {
            return Ok(SubmissionOutcome::Incorrect);
        }

        // User first: the completion mark is the source of truth, and a
        // failed user write must not leave the counter overcounted.
        self.users
            .record_completion(&user.email, url, challenge.points)
            .await?;
        self.challenges.increment_completed_by(url).await?;

        info!(
            "{} solved {url} for {} points",
            user.user_id, challenge.points
        );
        Ok(SubmissionOutcome::Solved {
            points_earned: challenge.points,
        })
    }

    /// Store or replace one user's rating of a challenge. Only the latest
    /// value counts; the author's own rating is not excluded from the mean.
    pub async fn rate_challenge(&self, user: &UserRecord, url: &str, value: f64) -> Result<()> {
        if !is_valid_rating(value, &self.config.rating) {
            return Err(DomainError::InvalidRating(value).into());
        }
        if self.challenges.find_by_url(url).await?.is_none() {
            return Err(DomainError::ChallengeNotFound(url.to_string()).into());
        }
        self.challenges.set_rating(url, &user.user_id, value).await
    }

    pub async fn delete_challenge(&self, user: &UserRecord, url: &str) -> Result<()> {
        let challenge = self
            .challenges
            .find_by_url(url)
            .await?
            .ok_or_else(|| DomainError::ChallengeNotFound(url.to_string()))?;

        if challenge.user_id != user.user_id {
            return Err(DomainError::NotChallengeAuthor(url.to_string()).into());
        }
        self.challenges.delete(url).await
    }
}

fn answer_matches(key: &str, submission: &str) -> bool {
    key.trim().to_lowercase() == submission.trim().to_lowercase()
}

fn is_valid_rating(value: f64, settings: &RatingSettings) -> bool {
    if value < settings.min_rating || value > settings.max_rating {
        return false;
    }
    let steps = value / settings.rating_step;
    (steps - steps.round()).abs() < 1e-9
}
