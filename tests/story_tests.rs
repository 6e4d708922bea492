/// Story fabrication integration tests — properties over many identifiers.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use storyarc::core::clock::FixedClock;
use storyarc::core::ids::{IdSource, RandomIds};
use storyarc::core::seed::derive_seed;
use storyarc::schema::genre::Genre;
use storyarc::StoryGenerator;

fn pinned() -> StoryGenerator {
    StoryGenerator::builder()
        .clock(FixedClock(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()))
        .build()
        .unwrap()
}

fn sample_ids() -> Vec<String> {
    let mut ids = RandomIds::new(StdRng::seed_from_u64(2026), 8);
    let mut out: Vec<String> = (0..200).map(|_| ids.next_id()).collect();
    out.extend(
        ["", "abc", "a", "Z", "ünïcödé", "🦀🦀", "a very long identifier indeed"]
            .iter()
            .map(|s| s.to_string()),
    );
    out
}

#[test]
fn story_is_a_pure_function_of_id() {
    let first = pinned();
    let second = pinned();
    for id in sample_ids() {
        assert_eq!(first.generate_story(&id), second.generate_story(&id), "id {id:?}");
    }
}

#[test]
fn every_story_satisfies_shape_invariants() {
    let generator = pinned();
    for id in sample_ids() {
        let story = generator.generate_story(&id);
        assert!(
            (3..=5).contains(&story.episodes.len()),
            "id {id:?} has {} episodes",
            story.episodes.len()
        );
        assert!(Genre::ALL.contains(&story.genre));
        for episode in &story.episodes {
            assert_eq!(episode.thumbnails.len(), 5);
            let minutes: u64 = episode
                .duration
                .strip_suffix(":00")
                .and_then(|m| m.parse().ok())
                .unwrap();
            assert!((15..=30).contains(&minutes));
        }
    }
}

#[test]
fn selections_follow_the_seed() {
    let generator = pinned();
    for id in sample_ids() {
        let seed = derive_seed(&id);
        let story = generator.generate_story(&id);
        assert_eq!(story.genre, Genre::ALL[(seed % 9) as usize]);
        assert_eq!(story.episodes.len(), 3 + (seed % 3) as usize);
    }
}

#[test]
fn episodes_are_in_narrative_order() {
    let story = pinned().generate_story("abcde");
    for (i, episode) in story.episodes.iter().enumerate() {
        assert_eq!(episode.audio_url, format!("/placeholder-audio-{}.mp3", i + 1));
        assert!(episode.thumbnails[0].contains(&format!("Episode {} Thumbnail 1", i + 1)));
    }
}

#[test]
fn created_at_tracks_the_clock() {
    let earlier = StoryGenerator::builder()
        .clock(FixedClock(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()))
        .build()
        .unwrap();
    // seed 0: created today
    assert_eq!(earlier.generate_story("").created_at, "January 1, 2026");
    // seed 294: 24 days back, across the year boundary
    assert_eq!(earlier.generate_story("abc").created_at, "December 8, 2025");
}

#[test]
fn story_json_contract() {
    let story = pinned().generate_story("abc");
    let json = serde_json::to_value(&story).unwrap();
    assert_eq!(json["id"], "abc");
    assert_eq!(json["title"], "The Tudor Secret");
    assert_eq!(json["genre"], "Historical");
    assert_eq!(json["createdAt"], "September 22, 2026");
    assert_eq!(json["episodes"].as_array().unwrap().len(), 3);
    assert_eq!(json["episodes"][0]["duration"], "21:00");
}
