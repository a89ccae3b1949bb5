use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use config::Config;
use deck::Deck;
use dictionary::{Category, Dictionary, SynonymOrder, WordPipeline};
use slides::{BatchUpdate, Slides};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use utilities::{read_word_list, DEFAULT_WORDS};

mod config;
mod deck;
mod slides;
mod utilities;

#[derive(Debug, Parser)]
#[command(
    name = "vocab-deck",
    about = "Builds a vocabulary slide deck with a definition, an example sentence and a picture per word"
)]
struct Cli {
    /// Words to put on slides, in order
    words: Vec<String>,
    /// File with one word per line, appended after the positional words
    #[arg(long)]
    words_file: Option<PathBuf>,
    #[arg(long, default_value = "Vocabulary")]
    title: String,
    #[arg(long)]
    subtitle: Option<String>,
    /// Overrides PRESENTATION_ID
    #[arg(long)]
    presentation_id: Option<String>,
    /// Limit for every single provider request
    #[arg(long, default_value_t = 15)]
    timeout_secs: u64,
    #[arg(long, value_enum, default_value_t = Order::Reverse)]
    sentence_order: Order,
    #[arg(long, value_enum, default_value_t = Order::Forward)]
    image_order: Order,
    /// Print the batch update instead of submitting it
    #[arg(long)]
    dry_run: bool,
    /// Print the resolved words as JSON and stop before building slides
    #[arg(long)]
    records: bool,
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Order in which synonyms are tried when a word has nothing.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    Forward,
    Reverse,
}

impl From<Order> for SynonymOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Forward => SynonymOrder::Forward,
            Order::Reverse => SynonymOrder::Reverse,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let config = Config::from_env(
        cli.presentation_id.as_deref(),
        Duration::from_secs(cli.timeout_secs),
        cli.dry_run || cli.records,
    )?;
    let words = collect_words(&cli)?;
    info!(count = words.len(), "building deck");

    let dict = Dictionary::new(config.dictionary).context("could not set up the http client")?;
    let pipeline = WordPipeline::new(dict)
        .with_order(Category::Sentence, cli.sentence_order.into())
        .with_order(Category::Image, cli.image_order.into());
    let records = pipeline.resolve_all(&words).await;
    if records.len() < words.len() {
        warn!(skipped = words.len() - records.len(), "some words were left out");
    }

    if cli.records {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let mut deck = Deck::new(&cli.title, cli.subtitle.as_deref());
    for record in &records {
        deck.push_word(record);
    }

    if cli.dry_run {
        let body = serde_json::to_string_pretty(&BatchUpdate {
            requests: deck.requests(),
        })?;
        println!("{body}");
        return Ok(());
    }
    let Some(slides) = config.slides else {
        anyhow::bail!("no presentation to submit to");
    };
    Slides::new(slides.base, slides.access_token)
        .batch_update(&slides.presentation_id, deck.requests())
        .await?;
    info!(slides = records.len() + 1, "deck submitted");
    Ok(())
}

fn collect_words(cli: &Cli) -> anyhow::Result<Vec<String>> {
    let mut words = cli.words.clone();
    if let Some(path) = &cli.words_file {
        words.extend(read_word_list(path)?);
    }
    if words.is_empty() {
        info!("no words given, using the built-in list");
        words = DEFAULT_WORDS.iter().map(|word| word.to_string()).collect();
    }
    Ok(words)
}
