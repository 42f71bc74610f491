use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use opiniones_core::{load_config, AppShell, FetchState, Review, TrendingTopic};
use tracing_subscriber::EnvFilter;

/// Fetch and show reviews and trending topics from the opiniones API.
#[derive(Debug, Parser)]
#[command(name = "opiniones", version)]
struct Cli {
    /// TOML config file (defaults to ./opiniones.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List reviews.
    Reviews,
    /// List trending topics.
    Trending,
    /// Fetch both collections and print the rendered HTML page.
    Page,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(url) = cli.base_url {
        config.api_base_url = url;
    }
    tracing::debug!(base_url = %config.api_base_url, "configuration loaded");

    let shell = AppShell::new(config).context("failed to build HTTP client")?;

    match cli.command {
        Command::Reviews => {
            shell.opiniones().fetch_items().await;
            print_reviews(&shell.opiniones().snapshot());
        }
        Command::Trending => {
            shell.trending().fetch_items().await;
            print_trending(&shell.trending().snapshot());
        }
        Command::Page => {
            shell.load_all().await;
            print!("{}", shell.render_page());
        }
    }

    Ok(())
}

fn print_reviews(state: &FetchState<Review>) {
    if let Some(error) = &state.error {
        eprintln!("{error}");
    }
    for review in &state.items {
        println!("{}", review.text().unwrap_or("(sin texto)"));
        if let Some(sentimiento) = review.sentimiento() {
            println!("  sentimiento: {sentimiento}");
        }
        if let Some(categoria) = review.categoria() {
            println!("  categoría:   {categoria}");
        }
        if let Some(temas) = review.temas() {
            println!("  temas:       {temas}");
        }
        println!("{}", "-".repeat(40));
    }
}

fn print_trending(state: &FetchState<TrendingTopic>) {
    if let Some(error) = &state.error {
        eprintln!("{error}");
    }
    for (rank, topic) in state.items.iter().enumerate() {
        let name = topic.topic().unwrap_or("(sin nombre)");
        match topic.url() {
            Some(url) => println!("{:>2}. {name}  {url}", rank + 1),
            None => println!("{:>2}. {name}", rank + 1),
        }
    }
}
