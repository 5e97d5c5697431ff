use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use flashdeck::CardLayout;
use flashdeck::core::config::{load_config, resolve};
use flashdeck::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "flashdeck", about = "Turn a PDF or a block of text into flashcards")]
struct Args {
    /// Base URL of the flashcard generation service
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Cards shown per page
    #[arg(short, long, value_enum)]
    layout: Option<CardLayout>,

    /// PDF to preselect on startup
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to flashdeck.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("flashdeck.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = load_config().map_err(|e| std::io::Error::other(e.to_string()))?;
    let resolved = resolve(&config, args.endpoint.as_deref(), args.layout);

    log::info!(
        "flashdeck starting up against {} ({:?} layout)",
        resolved.endpoint,
        resolved.layout
    );

    tui::run(resolved, args.file)
}
