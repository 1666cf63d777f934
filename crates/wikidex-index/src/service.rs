//! Search service entry point.
//!
//! One call per inbound query: translate the raw string, parse it, open the
//! index, execute the match, and time the storage work. Each invocation
//! opens and closes its own handle; concurrent callers are as safe as the
//! underlying index's concurrent readers.
//!
//! Storage failures never propagate to the caller as errors: an unopenable
//! or failing index is logged and reported as zero results, so a broken
//! index degrades the search page instead of crashing the server.

use std::{
    path::Path,
    time::{Duration, Instant},
};

use tracing::{debug, error, warn};

use wikidex_query::{parse, translate};

use crate::{SearchHit, Searcher};

/// The outcome of one search request.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Matching pages in relevance order.
    pub hits: Vec<SearchHit>,
    /// Wall-clock time spent in the index (open + match). Translation and
    /// parsing are excluded.
    pub elapsed: Duration,
}

/// Runs one search request against the index.
///
/// The raw query may contain the `&`/`|`/`~` operators; it is translated
/// and parsed before any index work. An empty or unparseable query yields
/// zero hits without touching the index.
pub fn search_pages(index_dir: &Path, language: &str, raw_query: &str) -> SearchOutcome {
    let expression = translate(raw_query);

    let expr = match parse(&expression) {
        Ok(Some(expr)) => expr,
        Ok(None) => {
            debug!(query = raw_query, "empty query, nothing to match");
            return SearchOutcome::default();
        }
        Err(e) => {
            warn!(query = raw_query, error = %e, "malformed query");
            return SearchOutcome::default();
        }
    };

    let start = Instant::now();
    let result =
        Searcher::open(index_dir, language).and_then(|mut searcher| searcher.matching_ids(&expr));
    let elapsed = start.elapsed();

    match result {
        Ok(hits) => SearchOutcome { hits, elapsed },
        Err(e) => {
            error!(query = raw_query, error = %e, "search failed");
            SearchOutcome {
                hits: Vec::new(),
                elapsed,
            }
        }
    }
}
