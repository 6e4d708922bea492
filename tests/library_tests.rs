/// Library assembly, search and story-creation integration tests.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::time::Duration;
use storyarc::config::GeneratorConfig;
use storyarc::core::clock::FixedClock;
use storyarc::core::create::{submit, StoryRequest};
use storyarc::core::ids::RandomIds;
use storyarc::core::library::{GenreFilter, LibraryQuery};
use storyarc::schema::genre::Genre;
use storyarc::StoryGenerator;

fn pinned_with(config: GeneratorConfig) -> StoryGenerator {
    StoryGenerator::builder()
        .clock(FixedClock(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()))
        .config(config)
        .build()
        .unwrap()
}

#[test]
fn default_library_has_nine_consistent_stories() {
    let generator = pinned_with(GeneratorConfig::default());
    let mut ids = RandomIds::new(StdRng::seed_from_u64(9), 8);
    let library = generator.generate_default_library(&mut ids);

    assert_eq!(library.len(), 9);
    for story in &library {
        assert_eq!(story.id.len(), 8);
        assert!((3..=5).contains(&story.episodes.len()));
        assert_eq!(*story, generator.generate_story(&story.id));
    }
}

#[test]
fn separate_libraries_differ() {
    let generator = pinned_with(GeneratorConfig::default());
    let first = generator.generate_library(9, &mut RandomIds::new(StdRng::seed_from_u64(1), 8));
    let second = generator.generate_library(9, &mut RandomIds::new(StdRng::seed_from_u64(2), 8));
    let first_ids: Vec<&str> = first.iter().map(|s| s.id.as_str()).collect();
    let second_ids: Vec<&str> = second.iter().map(|s| s.id.as_str()).collect();
    assert_ne!(first_ids, second_ids);
}

#[test]
fn free_function_library_uses_fresh_ids() {
    let first = storyarc::generate_library(9);
    let second = storyarc::generate_library(9);
    assert_eq!(first.len(), 9);
    let first_ids: Vec<&str> = first.iter().map(|s| s.id.as_str()).collect();
    let second_ids: Vec<&str> = second.iter().map(|s| s.id.as_str()).collect();
    assert_ne!(first_ids, second_ids);
}

#[test]
fn config_fixture_drives_library() {
    let config = GeneratorConfig::load_from_ron(Path::new("tests/fixtures/generator.ron")).unwrap();
    let id_length = config.id_length;
    let generator = pinned_with(config);
    let mut ids = RandomIds::new(StdRng::seed_from_u64(3), id_length);
    let library = generator.generate_default_library(&mut ids);

    assert_eq!(library.len(), 6);
    for story in &library {
        assert_eq!(story.id.len(), 10);
        // "%Y-%m-%d" within the last 30 days of the pinned date
        assert!(story.created_at.starts_with("2026-"), "{}", story.created_at);
    }
}

#[test]
fn search_results_are_subsets() {
    let generator = pinned_with(GeneratorConfig::default());
    let mut ids = RandomIds::new(StdRng::seed_from_u64(77), 8);
    let library = generator.generate_library(40, &mut ids);

    for genre in Genre::ALL {
        let query = LibraryQuery::new("", GenreFilter::Only(genre));
        let found = query.filter(&library);
        assert!(found.iter().all(|s| s.genre == genre));
        let expected = library.iter().filter(|s| s.genre == genre).count();
        assert_eq!(found.len(), expected);
    }

    let query = LibraryQuery::new("the", GenreFilter::All);
    for story in query.filter(&library) {
        let haystack = format!("{} {}", story.title, story.description).to_lowercase();
        assert!(haystack.contains("the"));
    }
}

#[test]
fn created_story_can_be_fabricated() {
    let generator = pinned_with(GeneratorConfig::default());
    let request = StoryRequest {
        title: "Tides".to_string(),
        concept: "Two lighthouse keepers trade letters.".to_string(),
        genre: "romance".to_string(),
        episodes: 5,
    };
    let mut ids = RandomIds::new(StdRng::seed_from_u64(5), 8);
    let id = submit(&request, Duration::ZERO, &mut ids).unwrap();
    assert_eq!(id.len(), 8);

    let story = generator.generate_story(&id);
    assert_eq!(story.id, id);
    assert!((3..=5).contains(&story.episodes.len()));
}
