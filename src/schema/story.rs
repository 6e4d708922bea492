use serde::{Deserialize, Serialize};

use super::genre::Genre;

/// One segment of a story. Field names serialize in camelCase to match
/// the browser demo's JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub audio_url: String,
    pub thumbnails: Vec<String>,
    /// Formatted as `minutes:seconds`.
    pub duration: String,
}

/// A fabricated story. Everything except `created_at` is a pure function
/// of `id`; `created_at` also depends on the injected clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub genre: Genre,
    pub created_at: String,
    pub episodes: Vec<Episode>,
}

impl StoryData {
    /// Returns the episode at `index`, if the story has that many.
    pub fn episode(&self, index: usize) -> Option<&Episode> {
        self.episodes.get(index)
    }

    /// Case-insensitive substring match against title and description.
    pub fn matches_text(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_story() -> StoryData {
        StoryData {
            id: "abc".to_string(),
            title: "The Tudor Secret".to_string(),
            description: "Set against the backdrop of history.".to_string(),
            genre: Genre::Historical,
            created_at: "October 16, 2026".to_string(),
            episodes: vec![Episode {
                title: "The Beginning".to_string(),
                content: "text".to_string(),
                summary: "summary".to_string(),
                audio_url: "/placeholder-audio-1.mp3".to_string(),
                thumbnails: vec!["/placeholder.svg".to_string(); 5],
                duration: "20:00".to_string(),
            }],
        }
    }

    #[test]
    fn serializes_camel_case_fields() {
        let json = serde_json::to_value(make_story()).unwrap();
        assert_eq!(json["createdAt"], "October 16, 2026");
        assert_eq!(json["genre"], "Historical");
        assert_eq!(json["episodes"][0]["audioUrl"], "/placeholder-audio-1.mp3");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn episode_lookup() {
        let story = make_story();
        assert_eq!(story.episode(0).map(|e| e.title.as_str()), Some("The Beginning"));
        assert!(story.episode(1).is_none());
    }

    #[test]
    fn text_match_ignores_case() {
        let story = make_story();
        assert!(story.matches_text("tudor"));
        assert!(story.matches_text("BACKDROP"));
        assert!(story.matches_text(""));
        assert!(!story.matches_text("dragon"));
    }
}
