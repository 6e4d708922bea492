/// Library search — narrowing a fabricated collection by text and genre.

use std::fmt;
use std::str::FromStr;

use crate::schema::genre::{Genre, UnknownGenre};
use crate::schema::story::StoryData;

/// Genre restriction for a library query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenreFilter {
    #[default]
    All,
    Only(Genre),
}

impl GenreFilter {
    pub fn accepts(&self, genre: Genre) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == genre,
        }
    }
}

impl FromStr for GenreFilter {
    type Err = UnknownGenre;

    /// "all" (any case) or any spelling accepted by `Genre::from_str`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(genre) => f.write_str(genre.slug()),
        }
    }
}

/// Text and genre criteria applied to a library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryQuery {
    /// Matched case-insensitively against title and description.
    /// Empty matches everything.
    pub search: String,
    pub genre: GenreFilter,
}

impl LibraryQuery {
    pub fn new(search: impl Into<String>, genre: GenreFilter) -> Self {
        Self {
            search: search.into(),
            genre,
        }
    }

    pub fn matches(&self, story: &StoryData) -> bool {
        self.genre.accepts(story.genre)
            && (self.search.is_empty() || story.matches_text(&self.search))
    }

    /// Stories satisfying the query, in their original order.
    pub fn filter<'a>(&self, stories: &'a [StoryData]) -> Vec<&'a StoryData> {
        stories.iter().filter(|s| self.matches(s)).collect()
    }
}
