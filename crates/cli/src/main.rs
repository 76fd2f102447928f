use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod backends;
mod commands;
mod demo;

#[derive(Parser)]
#[command(name = "stardex")]
#[command(about = "Item catalog browser and search for the Starbound item database", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(short, long, default_value = "4567")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Search items and record the search
    Search { query: String },
    /// Print search statistics
    Stats,
    /// Print one catalog page as JSON
    Page {
        #[arg(default_value = "1")]
        page: u64,
    },
    /// Create the items table in PostgreSQL
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::Search { query } => commands::search::run_search(&query).await,
        Commands::Stats => commands::search::run_stats().await,
        Commands::Page { page } => commands::page::run(page).await,
        Commands::Migrate => commands::migrate::run().await,
    }
}
