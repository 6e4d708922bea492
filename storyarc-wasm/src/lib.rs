//! WASM bindings for storyarc — powers the browser demo's library, story
//! and create pages.

use wasm_bindgen::prelude::*;

use storyarc::config::GeneratorConfig;
use storyarc::core::create::StoryRequest;
use storyarc::core::ids::{IdSource, RandomIds};
use storyarc::core::library::{GenreFilter, LibraryQuery};
use storyarc::schema::genre::Genre;
use storyarc::schema::story::StoryData;
use storyarc::StoryGenerator;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct GenreInfo {
    name: &'static str,
    slug: &'static str,
    label: &'static str,
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

// ---------------------------------------------------------------------------
// StoryArcDemo — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct StoryArcDemo {
    generator: StoryGenerator,
}

#[wasm_bindgen]
impl StoryArcDemo {
    /// Create a demo instance with the default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<StoryArcDemo, JsError> {
        Self::build(GeneratorConfig::default())
    }

    /// Create a demo instance from a RON settings string.
    pub fn with_config(config_ron: &str) -> Result<StoryArcDemo, JsError> {
        let config = GeneratorConfig::parse_ron(config_ron)
            .map_err(|e| JsError::new(&format!("Config error: {e}")))?;
        Self::build(config)
    }

    /// Fabricate the story for `id` (the story page's route parameter).
    /// Returns a JSON `StoryData` object.
    pub fn generate_story(&self, id: &str) -> Result<String, JsError> {
        to_json(&self.generator.generate_story(id))
    }

    /// Fabricate `count` stories under fresh random ids. Returns a JSON array.
    pub fn generate_library(&self, count: usize) -> Result<String, JsError> {
        to_json(&self.generator.generate_library(count, &mut self.ids()))
    }

    /// Fabricate a library of the configured default size.
    pub fn generate_default_library(&self) -> Result<String, JsError> {
        to_json(&self.generator.generate_default_library(&mut self.ids()))
    }

    /// Filter a JSON array of stories by search text and genre ("all" or a
    /// genre name/slug). Returns the matching stories as a JSON array.
    pub fn search_library(
        &self,
        library_json: &str,
        search: &str,
        genre: &str,
    ) -> Result<String, JsError> {
        let stories: Vec<StoryData> = serde_json::from_str(library_json)
            .map_err(|e| JsError::new(&format!("Invalid library JSON: {e}")))?;
        let genre: GenreFilter = genre
            .parse()
            .map_err(|e| JsError::new(&format!("{e}")))?;
        let query = LibraryQuery::new(search, genre);
        to_json(&query.filter(&stories))
    }

    /// Validate a create-page request and mint the new story's id.
    ///
    /// Expected JSON shape:
    /// ```json
    /// { "title": "...", "concept": "...", "genre": "sci-fi", "episodes": 3 }
    /// ```
    ///
    /// Does not wait: the page schedules navigation after
    /// `generation_delay_ms()`.
    pub fn submit_request(&self, request_json: &str) -> Result<String, JsError> {
        let request: StoryRequest = serde_json::from_str(request_json)
            .map_err(|e| JsError::new(&format!("Invalid request JSON: {e}")))?;
        request
            .validate()
            .map_err(|e| JsError::new(&format!("{e}")))?;
        Ok(self.ids().next_id())
    }

    /// Simulated generation delay in milliseconds.
    pub fn generation_delay_ms(&self) -> u32 {
        u32::try_from(self.generator.config().generation_delay_ms).unwrap_or(u32::MAX)
    }

    /// Return a JSON array of `{ name, slug, label }` for every genre.
    pub fn genres() -> String {
        let genres: Vec<GenreInfo> = Genre::ALL
            .iter()
            .map(|g| GenreInfo {
                name: g.name(),
                slug: g.slug(),
                label: g.label(),
            })
            .collect();
        serde_json::to_string(&genres).unwrap_or_else(|_| "[]".to_string())
    }
}

// Private helpers
impl StoryArcDemo {
    fn build(config: GeneratorConfig) -> Result<StoryArcDemo, JsError> {
        let generator = StoryGenerator::builder()
            .config(config)
            .build()
            .map_err(|e| JsError::new(&format!("Generator build error: {e}")))?;
        Ok(StoryArcDemo { generator })
    }

    fn ids(&self) -> RandomIds<rand::rngs::ThreadRng> {
        RandomIds::new(rand::thread_rng(), self.generator.config().id_length)
    }
}
