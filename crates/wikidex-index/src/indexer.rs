//! Batch indexing pipeline.
//!
//! The [`Indexer`] orchestrates the offline write path:
//! 1. Discover HTML pages under the page root
//! 2. Extract text and derive a page id per file
//! 3. Upsert `(id, text)` pairs into the index
//! 4. Commit once at the end of the batch
//!
//! An index run replaces the prior contents wholesale: existing entries are
//! cleared first, and a single commit materializes the new state. Indexing
//! is an offline batch operation, so bulk build throughput is preferred over
//! incremental-update latency.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::{IndexError, PageWriter, discover_pages};

/// Statistics from an indexing run.
#[derive(Debug, Clone, Default)]
pub struct IndexStats {
    /// Number of pages indexed.
    pub pages_indexed: usize,
    /// Number of pages skipped because extraction yielded no text.
    pub pages_empty: usize,
    /// Pages that could not be read (path, error message). A read failure
    /// excludes that page and the run continues.
    pub read_errors: Vec<(PathBuf, String)>,
    /// Pages the index refused to accept (path, error message). Like a read
    /// failure, a refused upsert excludes that page and the run continues.
    pub write_errors: Vec<(PathBuf, String)>,
}

impl IndexStats {
    /// Returns true if every discovered page was read and stored successfully.
    pub fn is_success(&self) -> bool {
        self.read_errors.is_empty() && self.write_errors.is_empty()
    }

    /// Returns the total number of pages the run looked at.
    pub fn pages_seen(&self) -> usize {
        self.pages_indexed + self.pages_empty + self.read_errors.len() + self.write_errors.len()
    }
}

/// Orchestrates the batch indexing pipeline.
pub struct Indexer {
    /// Directory containing the HTML pages.
    pages_dir: PathBuf,
    /// Directory holding the index artifact.
    index_dir: PathBuf,
    /// Stemmer language name.
    language: String,
}

impl Indexer {
    /// Creates a new indexer.
    pub fn new(pages_dir: &Path, index_dir: &Path, language: &str) -> Self {
        Self {
            pages_dir: pages_dir.to_path_buf(),
            index_dir: index_dir.to_path_buf(),
            language: language.to_string(),
        }
    }

    /// Rebuilds the index from the page directory.
    ///
    /// Prior index contents are cleared, every discovered page is extracted
    /// and upserted, and a single commit makes the new state visible.
    /// Running twice over an unchanged page set yields the same queryable
    /// state - the second run replaces the first.
    ///
    /// Per-page failures - an unreadable file, an upsert the index refuses -
    /// are recorded in the returned stats and do not abort the run. Only
    /// storage open and commit failures are fatal.
    pub fn rebuild(&self) -> Result<IndexStats, IndexError> {
        let pages = discover_pages(&self.pages_dir)?;

        let mut writer = PageWriter::open(&self.index_dir, &self.language)?;
        writer.delete_all()?;

        let mut stats = IndexStats::default();

        for path in &pages {
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let id = wikidex_extract::page_id(&filename);

            let text = match wikidex_extract::extract_file(path) {
                Ok(text) => text,
                Err(e) => {
                    warn!(page = %path.display(), error = %e, "skipping unreadable page");
                    stats.read_errors.push((path.clone(), e.to_string()));
                    continue;
                }
            };

            // Pages that strip down to nothing carry no searchable content.
            if text.is_empty() {
                stats.pages_empty += 1;
                continue;
            }

            if let Err(e) = writer.upsert(&id, &text) {
                warn!(page = %path.display(), error = %e, "skipping page the index refused");
                stats.write_errors.push((path.clone(), e.to_string()));
                continue;
            }
            stats.pages_indexed += 1;
        }

        writer.commit()?;

        Ok(stats)
    }

    /// Returns the path to the index directory.
    pub fn index_dir(&self) -> &Path {
        &self.index_dir
    }
}
