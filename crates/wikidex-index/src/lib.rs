//! Tantivy-based page index and search for wikidex.
//!
//! This crate provides the storage half of the pipeline:
//! - Page discovery under a directory root
//! - Index creation, wholesale rebuild, and commit
//! - Boolean match execution over a parsed query AST
//! - The search service entry point with wall-clock timing
//!
//! # Example
//!
//! ```no_run
//! use wikidex_index::{Indexer, search_pages};
//!
//! let indexer = Indexer::new("./pages".as_ref(), "./index".as_ref(), "spanish");
//! let stats = indexer.rebuild().unwrap();
//! println!("{} pages indexed", stats.pages_indexed);
//!
//! let outcome = search_pages("./index".as_ref(), "spanish", "paris&~texas");
//! for hit in &outcome.hits {
//!     println!("{}", hit.id);
//! }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod compile;
mod discovery;
mod error;
mod indexer;
mod schema;
mod searcher;
mod service;
mod writer;

pub use analyzer::{build_analyzer, build_analyzer_from_name, parse_language};
pub use discovery::discover_pages;
pub use error::IndexError;
pub use indexer::{IndexStats, Indexer};
pub use schema::PageSchema;
pub use searcher::{SearchHit, Searcher};
pub use service::{SearchOutcome, search_pages};
pub use writer::PageWriter;
