mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use capsule::config::CapsuleConfig;

#[derive(Parser)]
#[command(name = "capsule", version, about = "Inspiration capsule: store snippets, draw one at random")]
struct Cli {
    /// Print records as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Store a new inspiration (auto-classified unless --category is given)
    Add {
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
        #[arg(long, short)]
        category: Option<String>,
    },
    /// Draw one inspiration at random
    Next {
        /// Restrict the draw to these categories (repeatable)
        #[arg(long = "category", short)]
        categories: Vec<String>,
    },
    /// Keyword search, newest first
    Search { query: String },
    /// Show a single inspiration
    Show { id: String },
    /// Delete an inspiration by id
    Delete { id: String },
    /// List distinct categories
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = CapsuleConfig::load()?;

    // Log to stderr so stdout stays clean for --json output.
    let filter = EnvFilter::try_new(&config.log.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Add { content, category } => {
            cli::add::add(&config, &content.join(" "), category.as_deref(), cli.json).await?;
        }
        Command::Next { categories } => {
            cli::draw::next(&config, &categories, cli.json).await?;
        }
        Command::Search { query } => {
            cli::search::search(&config, &query, cli.json).await?;
        }
        Command::Show { id } => {
            cli::show::show(&config, &id, cli.json).await?;
        }
        Command::Delete { id } => {
            cli::delete::delete(&config, &id).await?;
        }
        Command::Categories => {
            cli::categories::categories(&config, cli.json).await?;
        }
    }

    Ok(())
}
