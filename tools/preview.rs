/// Preview — print fabricated stories and libraries from the command line.
///
/// Usage:
///   preview story <ID>
///   preview library [--count N] [--search TEXT] [--genre GENRE]
///
/// Global flags: --config <file.ron>, --date YYYY-MM-DD, --json

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storyarc::config::GeneratorConfig;
use storyarc::core::clock::FixedClock;
use storyarc::core::ids::RandomIds;
use storyarc::core::library::{GenreFilter, LibraryQuery};
use storyarc::schema::story::StoryData;
use storyarc::StoryGenerator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "preview", about = "Print fabricated StoryArc stories")]
struct Cli {
    /// RON file with generator settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pin "today" for createdAt (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fabricate the story for an id
    Story { id: String },
    /// Fabricate a library under random ids
    Library {
        /// Number of stories (defaults to the configured library size)
        #[arg(long)]
        count: Option<usize>,
        /// Keep stories whose title or description contains this text
        #[arg(long, default_value = "")]
        search: String,
        /// "all" or a genre name
        #[arg(long, default_value = "all")]
        genre: GenreFilter,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GeneratorConfig::load_from_ron(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    let id_length = config.id_length;

    let mut builder = StoryGenerator::builder().config(config);
    if let Some(date) = cli.date {
        builder = builder.clock(FixedClock(date));
    }
    let generator = builder.build()?;

    match cli.command {
        Command::Story { id } => {
            let story = generator.generate_story(&id);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&story)?);
            } else {
                print_story(&story);
            }
        }
        Command::Library {
            count,
            search,
            genre,
        } => {
            let mut ids = RandomIds::new(rand::thread_rng(), id_length);
            let count = count.unwrap_or(generator.config().library_size);
            let library = generator.generate_library(count, &mut ids);
            let query = LibraryQuery::new(search, genre);
            let found = query.filter(&library);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else if found.is_empty() {
                println!("No stories found. Try adjusting your search or filter criteria.");
            } else {
                for story in found {
                    println!(
                        "{:<10} {:<26} {:<11} {} episodes  {}",
                        story.id,
                        story.title,
                        story.genre.name(),
                        story.episodes.len(),
                        story.created_at
                    );
                }
            }
        }
    }
    Ok(())
}

fn print_story(story: &StoryData) {
    println!("{} [{}]", story.title, story.id);
    println!("{} • {} Episodes • {}", story.genre, story.episodes.len(), story.created_at);
    println!();
    println!("{}", story.description);
    for (i, episode) in story.episodes.iter().enumerate() {
        println!();
        println!("── Episode {}: {} ({})", i + 1, episode.title, episode.duration);
        println!("{}", episode.summary);
        println!("audio: {}", episode.audio_url);
    }
}
