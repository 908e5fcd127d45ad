//! Quillpress CLI - Command-line front end for EPUB creation
//!
//! Stands in for the interactive shell: it loads a book manifest,
//! drives the chapter store and metadata record, and asks the core to
//! export an EPUB.

mod commands;
mod manifest;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quillpress")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an EPUB from a book manifest
    Build {
        /// Path to the book manifest (JSON)
        manifest: String,

        /// Output file path (defaults to a name derived from the title)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Render a Markdown chapter to an HTML fragment on stdout
    Preview {
        /// Input Markdown file path
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "quillpress_cli=debug,quillpress_core=debug"
    } else {
        "quillpress_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Build { manifest, output } => commands::build(&manifest, output.as_deref()),

        Commands::Preview { input } => commands::preview(&input),
    }
}
