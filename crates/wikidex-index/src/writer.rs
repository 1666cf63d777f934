//! Index writer for adding pages to the Tantivy index.

use std::{fs, path::Path};

use tantivy::{
    Index, IndexWriter as TantivyIndexWriter, TantivyDocument, Term, directory::MmapDirectory,
};

use crate::{
    analyzer::{PAGE_TOKENIZER, build_analyzer_from_name},
    error::IndexError,
    schema::PageSchema,
};

/// Default heap size for the index writer (50 MB).
const DEFAULT_HEAP_SIZE: usize = 50_000_000;

/// Writes pages to a Tantivy index.
///
/// The writer opens or creates an index at the specified path and provides
/// methods to upsert, clear, and commit pages. Upserted entries become
/// visible to searchers only after [`commit`](Self::commit).
pub struct PageWriter {
    /// The Tantivy index.
    index: Index,
    /// The underlying Tantivy writer.
    writer: TantivyIndexWriter,
    /// Schema with field handles.
    schema: PageSchema,
}

impl PageWriter {
    /// Opens or creates an index at the given path.
    ///
    /// If the index doesn't exist, it is created with the page schema. The
    /// text analyzer for the given stemmer language is registered on open.
    pub fn open(path: &Path, language: &str) -> Result<Self, IndexError> {
        let schema = PageSchema::new();
        let analyzer = build_analyzer_from_name(language)?;

        // Ensure directory exists
        fs::create_dir_all(path)?;

        let dir = MmapDirectory::open(path).map_err(|e| {
            let err: tantivy::TantivyError = e.into();
            IndexError::open_index(path.to_path_buf(), &err)
        })?;

        let index = Index::open_or_create(dir, schema.schema().clone())
            .map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;
        index.tokenizers().register(PAGE_TOKENIZER, analyzer);

        let writer = index
            .writer(DEFAULT_HEAP_SIZE)
            .map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;

        Ok(Self {
            index,
            writer,
            schema,
        })
    }

    /// Upserts a page into the index.
    ///
    /// Any previously staged or committed entry with the same id is deleted
    /// first, so re-indexing the same page replaces rather than duplicates.
    /// The change is staged until [`commit`](Self::commit) is called.
    pub fn upsert(&mut self, id: &str, body: &str) -> Result<(), IndexError> {
        let term = Term::from_field_text(self.schema.id, id);
        self.writer.delete_term(term);

        let mut doc = TantivyDocument::new();
        doc.add_text(self.schema.id, id);
        doc.add_text(self.schema.body, body);

        self.writer
            .add_document(doc)
            .map_err(|e| IndexError::write(&e))?;
        Ok(())
    }

    /// Deletes all pages from the index.
    pub fn delete_all(&mut self) -> Result<(), IndexError> {
        self.writer
            .delete_all_documents()
            .map_err(|e| IndexError::write(&e))?;
        Ok(())
    }

    /// Commits all pending changes to the index.
    ///
    /// This makes all upserted and deleted pages visible to readers.
    pub fn commit(&mut self) -> Result<(), IndexError> {
        self.writer.commit().map_err(|e| IndexError::commit(&e))?;
        Ok(())
    }

    /// Returns the number of committed pages in the index.
    pub fn num_docs(&self) -> Result<u64, IndexError> {
        let reader = self
            .index
            .reader()
            .map_err(|e| IndexError::search(&e))?;
        Ok(reader.searcher().num_docs())
    }
}
