use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown genre: '{0}'")]
pub struct UnknownGenre(pub String);

/// The closed set of story genres.
///
/// Variant order is significant: the seed selects a genre by indexing
/// `Genre::ALL`, so reordering changes every fabricated story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Fantasy,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Mystery,
    Romance,
    Thriller,
    Horror,
    Historical,
    Adventure,
    Comedy,
}

impl Genre {
    pub const ALL: [Genre; 9] = [
        Genre::Fantasy,
        Genre::SciFi,
        Genre::Mystery,
        Genre::Romance,
        Genre::Thriller,
        Genre::Horror,
        Genre::Historical,
        Genre::Adventure,
        Genre::Comedy,
    ];

    /// Select a genre from a seed: `ALL[seed mod 9]`.
    pub fn from_seed(seed: u64) -> Genre {
        Self::ALL[(seed % Self::ALL.len() as u64) as usize]
    }

    /// Display name as shown on story cards: "Fantasy", "Sci-Fi", ...
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fantasy => "Fantasy",
            Self::SciFi => "Sci-Fi",
            Self::Mystery => "Mystery",
            Self::Romance => "Romance",
            Self::Thriller => "Thriller",
            Self::Horror => "Horror",
            Self::Historical => "Historical",
            Self::Adventure => "Adventure",
            Self::Comedy => "Comedy",
        }
    }

    /// Form value used by the create and library pages: "fantasy", "sci-fi", ...
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Fantasy => "fantasy",
            Self::SciFi => "sci-fi",
            Self::Mystery => "mystery",
            Self::Romance => "romance",
            Self::Thriller => "thriller",
            Self::Horror => "horror",
            Self::Historical => "historical",
            Self::Adventure => "adventure",
            Self::Comedy => "comedy",
        }
    }

    /// Long label used in genre pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SciFi => "Science Fiction",
            other => other.name(),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Genre {
    type Err = UnknownGenre;

    /// Accepts the display name, slug or label, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| {
                [g.name(), g.slug(), g.label()]
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(needle))
            })
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}
