//! Clementine CLI - drive the headless storefront engine.
//!
//! # Usage
//!
//! ```bash
//! # List the generated catalog (optionally filtered)
//! clem catalog list
//! clem catalog list --category books --sale
//!
//! # Show one product
//! clem catalog show prod-17
//!
//! # Walk the whole flow: add to cart, adjust, check out, place the order
//! clem demo
//!
//! # Profile and theme
//! clem profile show
//! clem theme toggle
//! ```
//!
//! # Commands
//!
//! - `catalog` - Inspect the generated product catalog
//! - `demo` - Scripted end-to-end cart and checkout walk-through
//! - `profile` - Show the persisted user profile
//! - `theme` - Show or toggle the persisted theme preference

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "clem")]
#[command(author, version, about = "Clementine storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the generated product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Run a scripted cart and checkout walk-through
    Demo,
    /// Manage the user profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Manage the theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products, optionally filtered
    List {
        /// Filter by category (e.g., `books`, `home-goods`)
        #[arg(short, long)]
        category: Option<String>,

        /// Only show products on sale
        #[arg(short, long)]
        sale: bool,

        /// Case-insensitive search over names and descriptions
        #[arg(short = 'q', long)]
        search: Option<String>,
    },
    /// Show one product by id
    Show {
        /// Product id (e.g., `prod-17`)
        id: String,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the persisted profile
    Show,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the current theme
    Show,
    /// Toggle between light and dark
    Toggle,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                category,
                sale,
                search,
            } => commands::catalog::list(category.as_deref(), sale, search.as_deref())?,
            CatalogAction::Show { id } => commands::catalog::show(&id)?,
        },
        Commands::Demo => commands::demo::run().await?,
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show()?,
        },
        Commands::Theme { action } => match action {
            ThemeAction::Show => commands::theme::show()?,
            ThemeAction::Toggle => commands::theme::toggle()?,
        },
    }
    Ok(())
}
