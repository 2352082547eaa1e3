use clap::Parser;
use deckhand::config::Config;
use deckhand::deck::try_assemble;
use deckhand::logging;
use deckhand::ooxml::pptx::PresentationWriter;
use deckhand::pipeline::{DeckOutline, DirectorySource, SlideCount, export_file_name, prepare_deck};
use std::path::PathBuf;
use std::process::ExitCode;

/// Lay out a deck outline and export it as a PowerPoint file.
#[derive(Debug, Parser)]
#[command(name = "deckhand", version, about)]
struct Cli {
    /// Deck outline (JSON)
    #[arg(long)]
    outline: PathBuf,

    /// Directory holding slide-<n>.<png|jpg|jpeg|gif|bmp> illustrations
    #[arg(long)]
    images: Option<PathBuf>,

    /// Output directory, overrides [output] dir
    #[arg(long)]
    out: Option<PathBuf>,

    /// Use only the first N slides of the outline (1-20)
    #[arg(long)]
    count: Option<SlideCount>,

    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Illustration reads in flight at once, overrides [fetch] workers
    #[arg(long)]
    workers: Option<usize>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match run(cli).await {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        },
        Err(err) => {
            tracing::error!(error = %err, "deck export failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}

async fn run(cli: Cli) -> deckhand::Result<PathBuf> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(workers) = cli.workers {
        config.fetch.workers = workers;
    }
    if let Some(dir) = cli.out {
        config.output.dir = dir;
    }
    config.validate()?;

    let mut outline = DeckOutline::load(&cli.outline)?;
    if let Some(count) = cli.count {
        outline.truncate(count);
    }
    tracing::info!(title = %outline.title, slides = outline.slides.len(), "outline loaded");

    let spec = match cli.images {
        Some(dir) => {
            let source = DirectorySource::new(dir);
            prepare_deck(outline, &source, config.fetch.workers).await
        },
        None => outline.into_deck_spec(Vec::new()),
    };

    let deck = try_assemble(spec, &config.layout)?;

    std::fs::create_dir_all(&config.output.dir)?;
    let path = config.output.dir.join(export_file_name(&deck.title));
    PresentationWriter::new(&deck).save(&path)?;

    tracing::info!(path = %path.display(), slides = deck.slide_count(), "deck exported");
    Ok(path)
}
