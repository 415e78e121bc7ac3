use std::path::{Path, PathBuf};

use anyhow::Context;
use book_recommender::{
    InteractionKind, Item, ItemId, MemoryCatalog, MemoryInteractions, RecommendError,
    RecommendationService, RecommenderConfig, Snapshot, UserId,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "book-recommender", about = "Content-based book recommendations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recommend books for a user.
    Recommend {
        /// Snapshot file (.json or CBOR)
        #[arg(long)]
        store: PathBuf,
        #[arg(long)]
        user: UserId,
        /// Path to config file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Toggle a favorite/read interaction and save the snapshot.
    Interact {
        #[arg(long)]
        store: PathBuf,
        #[arg(long)]
        user: UserId,
        #[arg(long)]
        item: ItemId,
        /// favorite or read
        #[arg(long)]
        kind: String,
    },

    /// List books, optionally one category or one id.
    Books {
        #[arg(long)]
        store: PathBuf,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, conflicts_with = "category")]
        id: Option<ItemId>,
    },

    /// List distinct categories.
    Categories {
        #[arg(long)]
        store: PathBuf,
    },

    /// Create a snapshot from a JSON array of books.
    Import {
        #[arg(long)]
        catalog: PathBuf,
        #[arg(long)]
        store: PathBuf,
    },
}

#[derive(Serialize)]
struct InteractResponse {
    message: String,
    action: book_recommender::ToggleAction,
}

fn load_stores(path: &Path) -> anyhow::Result<(MemoryCatalog, MemoryInteractions)> {
    let snapshot = Snapshot::load(path).with_context(|| format!("loading {}", path.display()))?;
    Ok(snapshot.into_stores())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend { store, user, config } => {
            let config = match config {
                Some(path) => RecommenderConfig::from_json_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => RecommenderConfig::default(),
            };
            let (catalog, interactions) = load_stores(&store)?;
            let service = RecommendationService::new(catalog, interactions, config);
            let items = service.recommend(user)?;
            print_json(&items)?;
        }
        Commands::Interact { store, user, item, kind } => {
            let kind: InteractionKind = kind.parse()?;
            let (catalog, interactions) = load_stores(&store)?;
            let mut service =
                RecommendationService::new(catalog, interactions, RecommenderConfig::default());
            let action = service.interact(user, item, kind)?;
            let (catalog, interactions) = service.into_parts();
            Snapshot::from_stores(&catalog, &interactions).save(&store)?;
            info!(user, item, %kind, %action, "interaction saved");
            print_json(&InteractResponse {
                message: format!("Interaction {action}"),
                action,
            })?;
        }
        Commands::Books { store, category, id } => {
            let (catalog, _) = load_stores(&store)?;
            if let Some(id) = id {
                let item = catalog.get_item(id).ok_or(RecommendError::ItemNotFound(id))?;
                print_json(item)?;
            } else {
                let items: Vec<Item> = match category {
                    Some(name) => catalog.items_by_category(&name),
                    None => catalog.iter().cloned().collect(),
                };
                print_json(&items)?;
            }
        }
        Commands::Categories { store } => {
            let (catalog, _) = load_stores(&store)?;
            print_json(&catalog.categories())?;
        }
        Commands::Import { catalog, store } => {
            let raw = std::fs::read_to_string(&catalog)
                .with_context(|| format!("reading {}", catalog.display()))?;
            let items: Vec<Item> = serde_json::from_str(&raw)?;
            let snapshot = Snapshot { items, interactions: Vec::new() };
            snapshot.save(&store)?;
            info!(items = snapshot.items.len(), "imported catalog");
        }
    }
    Ok(())
}
