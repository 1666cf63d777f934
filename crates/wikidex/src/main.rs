//! Command-line interface for the `wikidex` page search tool.

use std::{
    io,
    net::SocketAddr,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use wikidex_index::{Indexer, search_pages};

mod page;
mod server;

use page::result_url;
use server::ServerState;

/// Default base URL prefixed to page ids in result links.
const DEFAULT_BASE_URL: &str = "https://es.wikipedia.org/wiki/";

/// Default stemmer language for the page corpus.
const DEFAULT_LANGUAGE: &str = "spanish";

#[derive(Parser)]
#[command(name = "wikidex")]
#[command(about = "Full-text search over a directory of HTML pages")]
/// Top-level CLI options.
struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    command: Commands,
}

#[derive(Subcommand)]
/// Supported `wikidex` subcommands.
enum Commands {
    /// Rebuild the search index from a page directory
    Index {
        /// Directory containing the HTML pages
        #[arg(long)]
        pages: PathBuf,

        /// Index directory
        #[arg(long, default_value = "index")]
        index: PathBuf,

        /// Stemmer language
        #[arg(long, default_value = DEFAULT_LANGUAGE)]
        language: String,
    },

    /// Run a one-shot query against the index
    Search {
        /// Search query (supports & | ~ operators)
        query: String,

        /// Index directory
        #[arg(long, default_value = "index")]
        index: PathBuf,

        /// Stemmer language
        #[arg(long, default_value = DEFAULT_LANGUAGE)]
        language: String,

        /// Base URL prefixed to page ids
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Serve the search page and static files over HTTP
    Serve {
        /// Root directory for static files
        #[arg(long)]
        root: PathBuf,

        /// Index directory
        #[arg(long, default_value = "index")]
        index: PathBuf,

        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8000")]
        addr: SocketAddr,

        /// Stemmer language
        #[arg(long, default_value = DEFAULT_LANGUAGE)]
        language: String,

        /// Base URL prefixed to page ids
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Index {
            pages,
            index,
            language,
        } => cmd_index(&pages, &index, &language),
        Commands::Search {
            query,
            index,
            language,
            base_url,
        } => cmd_search(&query, &index, &language, &base_url),
        Commands::Serve {
            root,
            index,
            addr,
            language,
            base_url,
        } => cmd_serve(root, index, addr, language, base_url),
    }
}

/// Implements the `wikidex index` command.
fn cmd_index(pages: &Path, index: &Path, language: &str) -> ExitCode {
    let indexer = Indexer::new(pages, index, language);

    let stats = match indexer.rebuild() {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "indexed {} pages ({} empty, {} unreadable, {} rejected)",
        stats.pages_indexed,
        stats.pages_empty,
        stats.read_errors.len(),
        stats.write_errors.len()
    );

    for (path, message) in &stats.read_errors {
        eprintln!("warning: could not read {}: {message}", path.display());
    }

    for (path, message) in &stats.write_errors {
        eprintln!("warning: could not index {}: {message}", path.display());
    }

    ExitCode::SUCCESS
}

/// Implements the `wikidex search` command.
fn cmd_search(query: &str, index: &Path, language: &str, base_url: &str) -> ExitCode {
    let outcome = search_pages(index, language, query);

    println!(
        "{} results ({:.6} seconds):",
        outcome.hits.len(),
        outcome.elapsed.as_secs_f32()
    );

    for hit in &outcome.hits {
        println!("{}", result_url(base_url, &hit.id));
    }

    ExitCode::SUCCESS
}

/// Implements the `wikidex serve` command.
fn cmd_serve(
    root: PathBuf,
    index: PathBuf,
    addr: SocketAddr,
    language: String,
    base_url: String,
) -> ExitCode {
    let state = Arc::new(ServerState {
        static_root: root,
        index_dir: index,
        language,
        base_url,
    });

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "failed to start runtime");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = runtime.block_on(server::serve(state, addr)) {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
