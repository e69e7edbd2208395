//! Shopfront CLI - Terminal storefront.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog, filtered and paged
//! shop items --color Red --max-price 100 --page 2
//!
//! # List the filter values present in the catalog
//! shop facets
//!
//! # Show one item
//! shop item 4
//!
//! # Manage the cart
//! shop cart add 4 --quantity 2 --color '#1e3a8a'
//! shop cart set-quantity 4 3
//! shop cart show
//!
//! # Toggle a favorite
//! shop favorites toggle 4
//! ```
//!
//! Cart and favorites persist under `--data-dir` (or `SHOP_DATA_DIR`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use shopfront_core::ItemId;

mod commands;
mod render;

use commands::{CommandError, Context};

#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about = "Shopfront terminal storefront")]
struct Cli {
    /// Catalog endpoint base URL (overrides `SHOP_CATALOG_URL`)
    #[arg(long, global = true)]
    catalog_url: Option<String>,

    /// Directory for persisted cart and favorites (overrides `SHOP_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog items
    Items {
        /// Only items of this color (repeatable)
        #[arg(long = "color")]
        colors: Vec<String>,

        /// Only items in this category (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Only items in this collection (repeatable)
        #[arg(long = "collection")]
        collections: Vec<String>,

        /// Maximum price, inclusive
        #[arg(long)]
        max_price: Option<String>,

        /// Case-insensitive title search
        #[arg(long)]
        search: Option<String>,

        /// Page to show (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// List the colors, categories and collections in the catalog
    Facets,
    /// Show a single item
    Item {
        /// Item id
        id: ItemId,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart and its total
    Show,
    /// Add an item to the cart
    Add {
        /// Item id
        id: ItemId,

        /// Number of units
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,

        /// Swatch color, one of the item's two swatches
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Change the quantity of the first line for an item
    SetQuantity {
        /// Item id
        id: ItemId,

        /// New quantity
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,
    },
    /// Remove every line for an item
    Remove {
        /// Item id
        id: ItemId,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List favorited items
    Show,
    /// Favorite or unfavorite an item
    Toggle {
        /// Item id
        id: ItemId,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries rendered output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfront=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let ctx = Context::new(cli.catalog_url.as_deref(), cli.data_dir)?;

    match cli.command {
        Commands::Items {
            colors,
            categories,
            collections,
            max_price,
            search,
            page,
        } => {
            let query = commands::items::ItemsQuery {
                colors,
                categories,
                collections,
                max_price,
                search,
                page,
            };
            commands::items::list(&ctx, query).await?;
        }
        Commands::Facets => commands::items::facets(&ctx).await?,
        Commands::Item { id } => commands::item::show(&ctx, id).await?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&ctx)?,
            CartAction::Add {
                id,
                quantity,
                color,
            } => commands::cart::add(&ctx, id, quantity, color.as_deref()).await?,
            CartAction::SetQuantity { id, quantity } => {
                commands::cart::set_quantity(&ctx, id, quantity)?;
            }
            CartAction::Remove { id } => commands::cart::remove(&ctx, id)?,
            CartAction::Clear => commands::cart::clear(&ctx)?,
        },
        Commands::Favorites { action } => match action {
            FavoritesAction::Show => commands::favorites::show(&ctx).await?,
            FavoritesAction::Toggle { id } => commands::favorites::toggle(&ctx, id)?,
        },
    }
    Ok(())
}
