use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use lexi_config::Config;
use lexi_core::{Direction, Lookup, RenderOptions, RenderedMessage};
use lexi_fetch::HttpFetcher;
use lexi_lang_greek::{GreekSpeller, greek_english};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lexi", about = "Look up a word on WordReference", version)]
struct Args {
    /// Word to look up. A random word is picked when omitted.
    word: Option<String>,

    /// Look the word up from the reference language side (English -> Greek)
    #[arg(long)]
    reverse: bool,

    /// Hide translations behind spoiler markers
    #[arg(long)]
    hide: bool,

    /// Maximum number of senses shown
    #[arg(long)]
    max_items: Option<usize>,

    /// JSON config file. Environment variables are used otherwise.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn render_options(args: &Args, config: &Config) -> RenderOptions {
    let mut options = RenderOptions::from(&config.lookup);
    if args.hide {
        options.hide_words = true;
    }
    if let Some(max_items) = args.max_items {
        options.max_items_shown = max_items.max(1);
    }
    // Random words are a quiz
    if args.word.is_none() {
        options.hide_words = true;
        options.min_sentences = options.min_sentences.max(1);
    }
    options
}

fn print_message(message: &RenderedMessage) {
    println!("{}", message.title);
    println!("{}", message.url);
    println!();
    print!("{}", message.body);
    if !message.footer.is_empty() {
        println!();
        println!("{}", message.footer);
    }
}

async fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::new(),
    };
    let pair = config.languages.clone().unwrap_or_else(greek_english);
    let options = render_options(&args, &config);
    let direction = Direction::from_forward(!args.reverse);

    let fetcher = HttpFetcher::new(&config.network)?;
    let speller = GreekSpeller::new(fetcher.clone(), config.site.clone());
    let lookup = Lookup::new(fetcher, config.site.clone(), pair)
        .with_max_random_attempts(config.lookup.max_random_attempts);

    match lookup
        .fetch_with_correction(args.word.as_deref(), direction, &options, &speller)
        .await
    {
        Ok(message) => {
            print_message(&message);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::warn!("Lookup failed: {e}");
            eprintln!("no result");
            Ok(ExitCode::FAILURE)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
