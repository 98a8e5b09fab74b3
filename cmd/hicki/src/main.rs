//! # Hicki Binary
//!
//! Assembles the item store on top of the local file slot and exposes it as
//! a small command line for inspecting and editing local data.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configs::Settings;
use domains::{Category, ListingType, NewListing};
use services::{
    filter_threads, id_for_display_name, pair_thread_id, HydrateOutcome, ItemStore,
    ListingFilter, UserDirectory,
};
use storage_adapters::{FileSlot, TimeOrderedIds};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hicki")]
#[command(about = "Browse, post and claim local Hicki listings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List listings, most recent first
    List {
        #[arg(long)]
        category: Option<Category>,
        #[arg(long = "type")]
        kind: Option<ListingType>,
        /// Case-insensitive text search
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show one listing
    Show { id: String },

    /// Post a new listing
    Add {
        #[arg(long = "type")]
        kind: ListingType,
        #[arg(long)]
        category: Category,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long)]
        location: String,
        #[arg(long, default_value_t = 0.0)]
        distance_km: f64,
        #[arg(long)]
        owner: String,
        #[arg(long)]
        posted_ago: Option<String>,
        #[arg(long)]
        days_left: Option<String>,
        #[arg(long)]
        start_at: Option<String>,
        #[arg(long)]
        stock: Option<u32>,
    },

    /// Claim ("snag") a listing
    Claim {
        id: String,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },

    /// Print the thread id for two users
    Thread { a: String, b: String },

    /// Print the header label of a thread id
    Title {
        thread_id: String,
        /// Viewer id (defaults to the configured current user)
        #[arg(long = "as")]
        viewer: Option<String>,
    },

    /// List demo message threads
    Threads {
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Derive a user id from a display name
    Slug { name: String },
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if settings.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load().context("loading settings")?;
    init_tracing(&settings);

    let store = ItemStore::with_seed(
        Arc::new(FileSlot::new(&settings.storage.data_dir)),
        Arc::new(TimeOrderedIds),
    )
    .with_key(&settings.storage.items_key);

    if let HydrateOutcome::Restored { count } = store.hydrate().await {
        info!(count, data_dir = %settings.storage.data_dir.display(), "using saved listings");
    }

    let me = settings.identity.current_user_id.as_str();
    let users = UserDirectory::demo();

    match cli.command {
        Commands::List { category, kind, query } => {
            let filter = ListingFilter { category, kind, query };
            print_json(&store.search(&filter))?;
        }
        Commands::Show { id } => match store.get_by_id(&id) {
            Some(listing) => print_json(&listing)?,
            None => anyhow::bail!("listing {id} not found"),
        },
        Commands::Add {
            kind,
            category,
            title,
            description,
            image,
            location,
            distance_km,
            owner,
            posted_ago,
            days_left,
            start_at,
            stock,
        } => {
            let id = store
                .add_listing(NewListing {
                    kind,
                    category,
                    title,
                    description,
                    image,
                    location,
                    distance_km,
                    owner,
                    posted_ago,
                    days_left,
                    start_at,
                    stock_left: stock,
                })
                .await?;
            println!("{id}");
        }
        Commands::Claim { id, quantity } => {
            let receipt = store.claim(&id, quantity).await?;
            print_json(&receipt)?;
        }
        Commands::Thread { a, b } => println!("{}", pair_thread_id(&a, &b)),
        Commands::Title { thread_id, viewer } => {
            let viewer = viewer.as_deref().unwrap_or(me);
            println!("{}", users.thread_title(&thread_id, viewer));
        }
        Commands::Threads { query } => {
            let rows = users.seed_threads_for(me);
            let rows = match query {
                Some(q) => filter_threads(&rows, &q),
                None => rows,
            };
            print_json(&rows)?;
        }
        Commands::Slug { name } => println!("{}", id_for_display_name(&name)),
    }

    Ok(())
}
