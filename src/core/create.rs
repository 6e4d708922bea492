/// Story creation requests — validation and the simulated generation step.

use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::core::ids::IdSource;
use crate::schema::genre::Genre;

/// Allowed range for the requested episode count.
pub const MIN_REQUESTED_EPISODES: u32 = 1;
pub const MAX_REQUESTED_EPISODES: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("a story title is required")]
    MissingTitle,
    #[error("a concept or prompt is required")]
    MissingConcept,
    #[error("a genre is required")]
    MissingGenre,
    #[error("unknown genre: '{0}'")]
    UnknownGenre(String),
    #[error("episode count {0} is outside 1..=10")]
    EpisodesOutOfRange(u32),
}

fn default_episodes() -> u32 {
    3
}

/// Raw form input from the create page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRequest {
    pub title: String,
    pub concept: String,
    /// Any spelling accepted by `Genre::from_str`.
    #[serde(default)]
    pub genre: String,
    #[serde(default = "default_episodes")]
    pub episodes: u32,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryBrief {
    pub title: String,
    pub concept: String,
    pub genre: Genre,
    pub episodes: u32,
}

impl StoryRequest {
    pub fn validate(&self) -> Result<StoryBrief, RequestError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(RequestError::MissingTitle);
        }
        let concept = self.concept.trim();
        if concept.is_empty() {
            return Err(RequestError::MissingConcept);
        }
        if self.genre.trim().is_empty() {
            return Err(RequestError::MissingGenre);
        }
        let genre: Genre = self
            .genre
            .parse()
            .map_err(|_| RequestError::UnknownGenre(self.genre.clone()))?;
        if !(MIN_REQUESTED_EPISODES..=MAX_REQUESTED_EPISODES).contains(&self.episodes) {
            return Err(RequestError::EpisodesOutOfRange(self.episodes));
        }

        Ok(StoryBrief {
            title: title.to_string(),
            concept: concept.to_string(),
            genre,
            episodes: self.episodes,
        })
    }
}

/// Validate `request`, wait out the simulated generation `delay`, then mint
/// the id under which the new story can be fabricated.
///
/// Blocks the calling thread for `delay`. There is no cancellation and no
/// retry; an invalid request returns immediately without waiting.
pub fn submit(
    request: &StoryRequest,
    delay: Duration,
    ids: &mut dyn IdSource,
) -> Result<String, RequestError> {
    let brief = request.validate().map_err(|e| {
        warn!(error = %e, "rejected story request");
        e
    })?;

    if !delay.is_zero() {
        thread::sleep(delay);
    }

    let id = ids.next_id();
    info!(
        id = %id,
        title = %brief.title,
        genre = %brief.genre,
        episodes = brief.episodes,
        "story request completed"
    );
    Ok(id)
}
