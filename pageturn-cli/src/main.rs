//! Pageturn CLI - browse the BookVault catalog from a terminal

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pageturn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON catalog to use instead of the built-in books
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List and search the catalog
    List {
        /// Match titles and authors containing this text
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only show books of this genre ("all" for every genre)
        #[arg(short, long, default_value = "all")]
        genre: String,

        /// Sort selector (featured, rating, trending)
        #[arg(long, default_value = "featured")]
        sort: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the detail page of a book
    Show {
        /// Book id
        id: String,

        /// Purchase format (digital, hardcopy)
        #[arg(short, long, default_value = "digital")]
        format: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List genres with their book counts
    Genres,

    /// Open the reader for a book
    Read {
        /// Book id
        id: String,

        /// Page to open
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Font size in pixels (12-24)
        #[arg(long, default_value = "16")]
        font_size: u32,
    },

    /// Show support topics and FAQs
    Support {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate buying a book
    Buy {
        /// Book id
        id: String,

        /// Purchase format (digital, hardcopy)
        #[arg(short, long, default_value = "digital")]
        format: String,

        /// Use the card quick-buy instead of "Buy Now"
        #[arg(long)]
        quick: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "pageturn_cli=debug,pageturn_core=debug"
    } else {
        "pageturn_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = commands::load_catalog(cli.catalog.as_deref()).await?;

    match cli.command {
        Commands::List {
            search,
            genre,
            sort,
            json,
        } => commands::list(&catalog, &search, &genre, &sort, json),

        Commands::Show { id, format, json } => commands::show(&catalog, &id, &format, json),

        Commands::Genres => commands::genres(&catalog),

        Commands::Read {
            id,
            page,
            font_size,
        } => commands::read(&catalog, &id, page, font_size),

        Commands::Support { json } => commands::support(json),

        Commands::Buy { id, format, quick } => commands::buy(&catalog, &id, &format, quick).await,
    }
}
