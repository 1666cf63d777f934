//! Search execution for the page index.
//!
//! Provides the [`Searcher`] read-side handle: open an existing index,
//! compile a query AST, execute it, and return matching page ids in
//! relevance order. No re-ranking, deduplication, or pagination happens
//! here - the order is whatever the index's scoring produces.

use std::path::Path;

use tantivy::{
    Index, TantivyDocument, collector::TopDocs, directory::MmapDirectory, schema::Value,
};

use wikidex_query::QueryExpr;

use crate::{
    IndexError,
    analyzer::{PAGE_TOKENIZER, build_analyzer_from_name},
    compile::QueryCompiler,
    schema::PageSchema,
};

/// A matching page returned from the index.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// Page identifier.
    pub id: String,
    /// Relevance score assigned by the index.
    pub score: f32,
}

/// Searches the page index.
pub struct Searcher {
    /// The Tantivy index.
    index: Index,
    /// Schema with field handles.
    schema: PageSchema,
    /// Query compiler for AST-to-query conversion.
    compiler: QueryCompiler,
}

impl Searcher {
    /// Opens an existing index for searching.
    ///
    /// Fails with [`IndexError::OpenIndex`] if the index directory does not
    /// exist - searching never creates an index.
    pub fn open(path: &Path, language: &str) -> Result<Self, IndexError> {
        if !path.exists() {
            return Err(IndexError::OpenIndex {
                path: path.to_path_buf(),
                message: "index directory does not exist".to_string(),
            });
        }

        let schema = PageSchema::new();

        let dir = MmapDirectory::open(path).map_err(|e| {
            let err: tantivy::TantivyError = e.into();
            IndexError::open_index(path.to_path_buf(), &err)
        })?;

        let index = Index::open(dir).map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;

        let analyzer = build_analyzer_from_name(language)?;
        index.tokenizers().register(PAGE_TOKENIZER, analyzer);

        let compiler = QueryCompiler::new(schema.clone(), language)?;

        Ok(Self {
            index,
            schema,
            compiler,
        })
    }

    /// Executes a boolean match and returns every matching page id in
    /// relevance order (highest score first).
    pub fn matching_ids(&mut self, expr: &QueryExpr) -> Result<Vec<SearchHit>, IndexError> {
        let Some(query) = self.compiler.compile(expr) else {
            return Ok(Vec::new());
        };

        let reader = self.index.reader().map_err(|e| IndexError::search(&e))?;
        let searcher = reader.searcher();

        // Every match, not a page of them; the collector needs a bound, so
        // use the total document count.
        let limit = usize::try_from(searcher.num_docs()).unwrap_or(usize::MAX).max(1);

        let top_docs = searcher
            .search(&*query, &TopDocs::with_limit(limit))
            .map_err(|e| IndexError::search(&e))?;

        let mut hits = Vec::with_capacity(top_docs.len());

        for (score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher
                .doc(doc_address)
                .map_err(|e| IndexError::search(&e))?;

            let id = doc
                .get_first(self.schema.id)
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string();

            hits.push(SearchHit { id, score });
        }

        Ok(hits)
    }

    /// Returns the number of pages in the index.
    pub fn num_docs(&self) -> Result<u64, IndexError> {
        let reader = self.index.reader().map_err(|e| IndexError::search(&e))?;
        Ok(reader.searcher().num_docs())
    }
}
