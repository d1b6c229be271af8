use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use pokedex_explorer::{Catalog, PageCursor, Pokedex, PokedexConfig, PokedexResult};

/// Far beyond any real listing; keeps the requested offset meaningful.
const MAX_PAGE: i64 = 1_000_000;

#[derive(Parser)]
#[command(name = "pokedex", version, about = "Browse the creature catalog in your language")]
struct Cli {
    /// RON config file (defaults to ./pokedex.ron when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target language tag (e.g. es, en, fr)
    #[arg(long)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the detail card for one entry
    Show {
        /// Name or pokedex number
        identifier: String,
        /// Print the view model as JSON
        #[arg(long)]
        json: bool,
    },
    /// List one page of the catalog
    List {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_PAGE))]
        page: u32,
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> PokedexResult<()> {
    let mut config = PokedexConfig::resolve(cli.config.as_deref())?;
    if let Some(lang) = cli.lang {
        config = config.with_language(lang);
    }

    match cli.command {
        Command::Show { identifier, json } => {
            let pokedex = Pokedex::from_config(&config)?;
            let view = pokedex.aggregate(&identifier).await?;
            if json {
                println!("{}", view.to_json()?);
            } else {
                println!("{}", view);
            }
        }
        Command::List { page, limit } => {
            let pokedex = Pokedex::from_config(&config)?;
            // The total is unknown until the first load, so jump to the page directly.
            let cursor = PageCursor {
                page,
                ..PageCursor::new(limit.unwrap_or(config.page_limit))
            };
            let listing = Catalog::load_page(pokedex.gateway(), cursor).await?;

            println!(
                "Page {}/{} ({} entries)",
                listing.cursor.page,
                listing.cursor.total_pages(),
                listing.cursor.total
            );
            for entry in &listing.entries {
                println!("  #{:03} {:<16} {}", entry.id, entry.name, entry.types.join(" / "));
            }
        }
    }

    Ok(())
}
