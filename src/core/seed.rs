/// Seed derivation — maps an identifier string to the integer that drives
/// every table lookup for a story.

use crate::schema::genre::Genre;

/// Fewest episodes a story can have.
pub const MIN_EPISODES: usize = 3;
/// Most episodes a story can have; also the length of every episode-title table.
pub const MAX_EPISODES: usize = 5;

/// Sum of the code points of every character in `id`.
///
/// Total over all strings; the empty string yields 0.
pub fn derive_seed(id: &str) -> u64 {
    id.chars().fold(0u64, |acc, c| acc.wrapping_add(c as u64))
}

/// Newtype wrapper around a derived seed, exposing the individual
/// selections made from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed(pub u64);

impl Seed {
    pub fn from_id(id: &str) -> Self {
        Self(derive_seed(id))
    }

    pub fn genre(&self) -> Genre {
        Genre::from_seed(self.0)
    }

    /// Index into the genre's three candidate titles.
    pub fn title_index(&self) -> usize {
        (self.0 % 3) as usize
    }

    /// `3 + (seed mod 3)`, always within `MIN_EPISODES..=MAX_EPISODES`.
    pub fn episode_count(&self) -> usize {
        MIN_EPISODES + (self.0 % 3) as usize
    }

    /// Episode length in minutes: `(seed + index) mod 16 + 15`.
    pub fn duration_minutes(&self, episode_index: usize) -> u64 {
        self.0.wrapping_add(episode_index as u64) % 16 + 15
    }

    /// How many days before "today" the story claims to have been created.
    pub fn age_days(&self) -> u64 {
        self.0 % 30
    }
}
