use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use quotesync_cli::session::{open_endpoint, save_endpoint};
use quotesync_cli::{render, QuoteBook};
use quotesync_core::config::QuoteConfig;
use quotesync_core::constants::{ALL_CATEGORIES, VERSION};
use quotesync_core::traits::IPersistedStore;
use quotesync_observability::init_tracing;
use quotesync_storage::{open_store, RecordStore};
use quotesync_sync::{Endpoint, SyncScheduler};

type Book = QuoteBook<Arc<dyn IPersistedStore>, Endpoint>;

#[derive(Parser)]
#[command(name = "quotesync", version, about = "Local quote collection synced with a quote server")]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a quote locally; it is pushed on the next sync
    Add {
        text: String,
        #[arg(long, short)]
        category: String,
    },

    /// List quotes, optionally filtered by category (remembered for next time)
    List {
        #[arg(long, short)]
        category: Option<String>,
    },

    /// Show a random quote
    Random,

    /// List the known categories
    Categories,

    /// Run one sync pass against the configured server
    Sync,

    /// Sync on the configured interval until interrupted
    Watch,

    /// Write all quotes to a JSON file
    Export { file: PathBuf },

    /// Append quotes from a JSON file
    Import { file: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => QuoteConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => QuoteConfig::default(),
    };
    init_tracing(&config.observability);
    tracing::debug!(version = VERSION, backend = ?config.storage.backend, "quotesync: starting");

    let backend = open_store(&config.storage)?;
    let remote = open_endpoint(&config.remote, &backend)?;
    let book: Book = QuoteBook::open(RecordStore::open(backend.clone())?, remote);

    match cli.command {
        Commands::Add { text, category } => {
            let status = book.add_quote(&text, &category).await?;
            println!("{}", render::status(&status));
        }
        Commands::List { category } => {
            let category = match category {
                Some(c) => c,
                None => book.selected_filter().await?,
            };
            let records = book.filter(&category).await?;
            println!("{}", render::record_list(&records, &category));
        }
        Commands::Random => {
            let record = book.random_quote().await?;
            println!("{}", render::quote(record.as_ref()));
        }
        Commands::Categories => {
            let selected = book.selected_filter().await?;
            for category in book.categories().await {
                let marker = if category == selected { "*" } else { " " };
                let label = if category == ALL_CATEGORIES {
                    "All Categories"
                } else {
                    category.as_str()
                };
                println!("{marker} {label}");
            }
        }
        Commands::Sync => {
            let status = book.sync().await;
            save_endpoint(book.engine().remote(), &backend)?;
            println!("{}", render::status(&status));
        }
        Commands::Watch => {
            watch(&book, &config).await;
            save_endpoint(book.engine().remote(), &backend)?;
        }
        Commands::Export { file } => {
            let json = book.export_json().await?;
            std::fs::write(&file, json)
                .with_context(|| format!("writing {}", file.display()))?;
            println!("Exported {} quotes to {}", book.records().await.len(), file.display());
        }
        Commands::Import { file } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let added = book.import_json(&bytes).await?;
            println!("Quotes imported successfully! ({added} added)");
        }
    }

    Ok(())
}

/// Print every published status until ctrl-c, then stop the scheduler.
async fn watch(book: &Book, config: &QuoteConfig) {
    let scheduler = SyncScheduler::spawn(book.engine().clone(), &config.sync);
    let mut status = scheduler.subscribe();
    println!("{}", render::status(&status.borrow_and_update()));

    loop {
        tokio::select! {
            changed = status.changed() => {
                if changed.is_err() {
                    break;
                }
                println!("{}", render::status(&status.borrow_and_update()));
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    scheduler.shutdown().await;
}
