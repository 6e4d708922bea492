//! StoryArc — deterministic story fabrication.
//!
//! Turns an arbitrary identifier string into a reproducible multi-episode
//! story (title, description, transcripts, summaries and placeholder media
//! references) using a checksum seed and fixed per-genre content tables.

pub mod config;
pub mod core;
pub mod genre_templates;
pub mod schema;

pub use crate::core::generator::{generate_library, generate_story, StoryGenerator};
pub use crate::schema::genre::Genre;
pub use crate::schema::story::{Episode, StoryData};
