//! futurama-roster: A terminal roster of Futurama characters

use clap::Parser;
use color_eyre::{Result, eyre::eyre};
use futurama_roster_core::{FetchController, Locale, format_created_at, present_all};
use futurama_roster_tui::App;
use futurama_rs::{ApiConfig, FuturamaClient};
use std::fs::File;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{EnvFilter, prelude::*};

/// futurama-roster: Browse characters from the Futurama API
#[derive(Parser, Debug)]
#[command(name = "futurama-roster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API base URL (overrides the config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Path to config file (default: ~/.config/futurama-roster/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Display language: en or es (overrides the config file)
    #[arg(long)]
    locale: Option<Locale>,

    /// Fetch once, print the roster and exit
    #[arg(long)]
    once: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Log file path (default: /tmp/futurama-roster.log)
    #[arg(long, default_value = "/tmp/futurama-roster.log")]
    log_file: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    color_eyre::install()?;

    // Log to a file so the TUI owns stdout
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let log_file = File::create(&cli.log_file)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_file)
                .with_ansi(false)
                .with_target(false),
        )
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .init();

    tracing::info!("Starting futurama-roster");

    let config = match &cli.config {
        Some(path) => ApiConfig::load_from(path)?,
        None => ApiConfig::load_default()?,
    }
    .with_overrides(cli.base_url.clone(), None);

    let locale = match cli.locale {
        Some(locale) => locale,
        None => match config.locale.as_deref() {
            Some(tag) => tag.parse::<Locale>().map_err(|e| eyre!(e))?,
            None => Locale::default(),
        },
    };

    let client = FuturamaClient::from_config(&config)?;
    tracing::info!("Using {} (locale {})", client.base_url(), locale.code());

    if cli.once {
        print_once(&client, locale).await?;
    } else {
        let mut app = App::new(client, locale);
        app.run().await?;
    }

    tracing::info!("Goodbye!");
    Ok(())
}

/// Headless mode: one fetch, rows to stdout
async fn print_once(client: &FuturamaClient, locale: Locale) -> Result<()> {
    let mut controller = FetchController::new(locale);
    let state = controller.fetch(client).await;

    if let Some(message) = state.error_message() {
        return Err(eyre!("{}", message));
    }
    if state.show_empty_message() {
        println!("{}", locale.messages().empty);
        return Ok(());
    }

    for row in present_all(state.characters()) {
        println!(
            "{:>4}  {:<32}  {} {:<8}  {:<12}  {:<8}  {:<10}  {}",
            row.id,
            row.name,
            row.category.symbol(),
            row.status,
            row.species,
            row.gender,
            format_created_at(&row.created_at),
            row.image.source()
        );
    }
    Ok(())
}
