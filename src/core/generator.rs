/// Story and library assembly: id → seed → table lookups → `StoryData`.
///
/// The generator holds no mutable state. The clock is the only input
/// besides the id, and library assembly additionally draws identifiers
/// from a caller-supplied `IdSource`.

use chrono::{Days, NaiveDate};
use std::fmt::Write;
use tracing::{debug, info};

use crate::config::{ConfigError, GeneratorConfig};
use crate::core::clock::{Clock, SystemClock};
use crate::core::ids::{IdSource, RandomIds};
use crate::core::seed::Seed;
use crate::genre_templates;
use crate::schema::story::{Episode, StoryData};

/// Fabricates stories. Built via `StoryGenerator::builder()`.
pub struct StoryGenerator {
    clock: Box<dyn Clock + Send + Sync>,
    config: GeneratorConfig,
}

/// Builder for constructing a `StoryGenerator`.
pub struct StoryGeneratorBuilder {
    clock: Option<Box<dyn Clock + Send + Sync>>,
    config: GeneratorConfig,
}

impl StoryGenerator {
    pub fn builder() -> StoryGeneratorBuilder {
        StoryGeneratorBuilder {
            clock: None,
            config: GeneratorConfig::default(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Fabricate the story for `id`. Any string is accepted.
    pub fn generate_story(&self, id: &str) -> StoryData {
        let seed = Seed::from_id(id);
        let genre = seed.genre();
        let title = genre_templates::titles(genre)[seed.title_index()];
        let description = genre_templates::description(genre, title);

        let episodes: Vec<Episode> = genre_templates::episode_titles(genre)
            .iter()
            .take(seed.episode_count())
            .enumerate()
            .map(|(i, episode_title)| Episode {
                title: episode_title.to_string(),
                content: genre_templates::episode_content(title, episode_title),
                summary: genre_templates::episode_summary(episode_title),
                audio_url: genre_templates::audio_url(i),
                thumbnails: genre_templates::thumbnails(i),
                duration: format!("{}:00", seed.duration_minutes(i)),
            })
            .collect();

        debug!(
            id,
            seed = seed.0,
            genre = %genre,
            episodes = episodes.len(),
            "fabricated story"
        );

        StoryData {
            id: id.to_string(),
            title: title.to_string(),
            description,
            genre,
            created_at: self.created_at(seed),
            episodes,
        }
    }

    /// Fabricate `count` stories, each under a fresh id drawn from `ids`.
    pub fn generate_library(&self, count: usize, ids: &mut dyn IdSource) -> Vec<StoryData> {
        let stories: Vec<StoryData> = (0..count)
            .map(|_| self.generate_story(&ids.next_id()))
            .collect();
        info!(count = stories.len(), "assembled library");
        stories
    }

    /// Library of the configured default size.
    pub fn generate_default_library(&self, ids: &mut dyn IdSource) -> Vec<StoryData> {
        self.generate_library(self.config.library_size, ids)
    }

    fn created_at(&self, seed: Seed) -> String {
        let today = self.clock.today();
        let date = today
            .checked_sub_days(Days::new(seed.age_days()))
            .unwrap_or(today);
        format_date(date, &self.config.date_format)
    }
}

/// Format `date` with a strftime pattern, falling back to ISO-8601 when
/// the pattern cannot be rendered.
fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(pattern)) {
        Ok(()) => out,
        Err(_) => date.format("%Y-%m-%d").to_string(),
    }
}

impl StoryGeneratorBuilder {
    /// Pin the time source. Defaults to the system clock.
    pub fn clock<C>(mut self, clock: C) -> Self
    where
        C: Clock + Send + Sync + 'static,
    {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<StoryGenerator, ConfigError> {
        self.config.validate()?;
        Ok(StoryGenerator {
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            config: self.config,
        })
    }
}

impl Default for StoryGenerator {
    fn default() -> Self {
        Self {
            clock: Box::new(SystemClock),
            config: GeneratorConfig::default(),
        }
    }
}

/// Fabricate the story for `id` against the system clock.
pub fn generate_story(id: &str) -> StoryData {
    StoryGenerator::default().generate_story(id)
}

/// Fabricate `count` stories under random ids, against the system clock.
pub fn generate_library(count: usize) -> Vec<StoryData> {
    StoryGenerator::default().generate_library(count, &mut RandomIds::thread_local())
}
