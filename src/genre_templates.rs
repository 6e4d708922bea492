//! Built-in content tables, keyed by the closed `Genre` enum.
//!
//! Every genre has exactly three story titles and five episode titles;
//! the array types enforce this at compile time.

use crate::schema::genre::Genre;

/// Number of placeholder thumbnails attached to every episode.
pub const THUMBNAILS_PER_EPISODE: usize = 5;

/// Candidate story titles, selected by `seed mod 3`.
pub fn titles(genre: Genre) -> &'static [&'static str; 3] {
    match genre {
        Genre::Fantasy => &["The Crystal Kingdom", "Whispers of Magic", "The Last Enchanter"],
        Genre::SciFi => &["Quantum Paradox", "The Mars Colony", "Beyond the Stars"],
        Genre::Mystery => &["The Silent Witness", "Shadows in the Fog", "The Forgotten Case"],
        Genre::Romance => &["Hearts Entwined", "Summer Love", "The Unexpected Match"],
        Genre::Thriller => &["The Silent Killer", "Midnight Chase", "The Perfect Crime"],
        Genre::Horror => &["Whispers in the Dark", "The Haunting", "Shadows of Fear"],
        Genre::Historical => &["The Tudor Secret", "Echoes of War", "The Victorian Mystery"],
        Genre::Adventure => &["The Lost Expedition", "Treasure Hunters", "Journey to the Unknown"],
        Genre::Comedy => &["The Misadventures of Tim", "Family Chaos", "Office Shenanigans"],
    }
}

/// Episode titles in narrative order, indexed by episode position.
pub fn episode_titles(genre: Genre) -> &'static [&'static str; 5] {
    match genre {
        Genre::Fantasy => &[
            "The Awakening",
            "The Journey Begins",
            "The Dark Forest",
            "The Mountain of Fire",
            "The Final Battle",
        ],
        Genre::SciFi => &[
            "First Contact",
            "The Discovery",
            "The Anomaly",
            "The Time Shift",
            "The Return",
        ],
        Genre::Mystery => &["The Body", "The Suspects", "The Clue", "The Revelation", "The Truth"],
        Genre::Romance => &[
            "The Meeting",
            "The Misunderstanding",
            "The Reconciliation",
            "The Proposal",
            "The Wedding",
        ],
        Genre::Thriller => &[
            "The Warning",
            "The Chase",
            "The Trap",
            "The Escape",
            "The Confrontation",
        ],
        Genre::Horror => &[
            "The House",
            "The Presence",
            "The Possession",
            "The Exorcism",
            "The Aftermath",
        ],
        Genre::Historical => &[
            "The Beginning",
            "The Conflict",
            "The Battle",
            "The Resolution",
            "The Legacy",
        ],
        Genre::Adventure => &["The Map", "The Journey", "The Island", "The Treasure", "The Return"],
        Genre::Comedy => &[
            "The Mistake",
            "The Confusion",
            "The Misunderstanding",
            "The Resolution",
            "The Party",
        ],
    }
}

/// Genre-specific blurb with the story title embedded.
pub fn description(genre: Genre, title: &str) -> String {
    match genre {
        Genre::Fantasy => format!(
            "In a world where magic flows like water and creatures of legend roam freely, {title} takes you on an epic journey of discovery and wonder."
        ),
        Genre::SciFi => format!(
            "Set in a future where technology has advanced beyond our wildest dreams, {title} explores the consequences of humanity's relentless pursuit of progress."
        ),
        Genre::Mystery => format!(
            "A puzzling case that has baffled the authorities for years, {title} follows a brilliant detective as they unravel the threads of a complex mystery."
        ),
        Genre::Romance => format!(
            "Two souls destined to meet, {title} is a heartwarming tale of love, loss, and the courage to open your heart again."
        ),
        Genre::Thriller => format!(
            "A race against time, {title} will keep you on the edge of your seat as the protagonist navigates a web of deceit and danger."
        ),
        Genre::Horror => format!(
            "Prepare to be terrified as {title} delves into the darkest corners of the human psyche and the supernatural forces that lurk in the shadows."
        ),
        Genre::Historical => format!(
            "Set against the backdrop of a pivotal moment in history, {title} weaves fact and fiction into a compelling narrative of courage and resilience."
        ),
        Genre::Adventure => format!(
            "Embark on an epic journey with {title}, where danger lurks around every corner and only the brave will survive."
        ),
        Genre::Comedy => format!(
            "Laugh out loud with {title}, a hilarious tale of mishaps, misunderstandings, and the absurdity of everyday life."
        ),
    }
}

/// Episode transcript: four paragraphs separated by blank lines.
pub fn episode_content(story_title: &str, episode_title: &str) -> String {
    let paragraphs = [
        format!(
            "In this episode of {story_title}, we follow our protagonist as they navigate the challenges of {}.",
            episode_title.to_lowercase()
        ),
        "The story begins with a surprising revelation that changes everything they thought they knew. As they process this new information, they must make difficult decisions that will affect not only their own future but the futures of those around them.".to_string(),
        "Along the way, they encounter allies and adversaries, each with their own motivations and secrets. Trust becomes a precious commodity as the lines between friend and foe blur.".to_string(),
        "As the episode progresses, tension builds to a climactic confrontation that leaves our protagonist forever changed. The episode ends with a tantalizing cliffhanger, setting the stage for what comes next.".to_string(),
    ];
    paragraphs.join("\n\n")
}

pub fn episode_summary(episode_title: &str) -> String {
    format!(
        "In \"{episode_title}\", our protagonist faces a life-changing revelation and must navigate a complex web of allies and adversaries to uncover the truth."
    )
}

/// Placeholder audio reference for the zero-based episode `index`.
pub fn audio_url(index: usize) -> String {
    format!("/placeholder-audio-{}.mp3", index + 1)
}

/// Placeholder image references for the zero-based episode `index`.
pub fn thumbnails(index: usize) -> Vec<String> {
    (1..=THUMBNAILS_PER_EPISODE)
        .map(|n| {
            format!(
                "/placeholder.svg?height=720&width=1280&text=Episode {} Thumbnail {}",
                index + 1,
                n
            )
        })
        .collect()
}
