//! Index schema definition for the page index.
//!
//! Two fields are enough for this store:
//! - `id`: the page identifier (raw single token, stored - used both for
//!   result retrieval and as the upsert key)
//! - `body`: the extracted page text (tokenized with positions, not stored -
//!   search only ever returns ids)

use tantivy::schema::{
    Field, IndexRecordOption, STORED, STRING, Schema, TextFieldIndexing, TextOptions,
};

use crate::analyzer::PAGE_TOKENIZER;

/// Handles to all fields in the index schema.
#[derive(Debug, Clone)]
pub struct PageSchema {
    /// The underlying Tantivy schema.
    schema: Schema,
    /// Page identifier (filename minus extension, quotes elided).
    pub id: Field,
    /// Extracted page text.
    pub body: Field,
}

impl PageSchema {
    /// Creates a new index schema with all fields configured.
    pub fn new() -> Self {
        let mut builder = Schema::builder();

        // ID field: single raw token, stored. Indexed so upserts can delete
        // by exact term.
        let id = builder.add_text_field("id", STRING | STORED);

        // Body field: tokenized text with positions (phrase queries need
        // them), not stored.
        let body_options = TextOptions::default().set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer(PAGE_TOKENIZER)
                .set_index_option(IndexRecordOption::WithFreqsAndPositions),
        );
        let body = builder.add_text_field("body", body_options);

        let schema = builder.build();

        Self { schema, id, body }
    }

    /// Returns a reference to the underlying Tantivy schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl Default for PageSchema {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tantivy::schema::FieldType;

    use super::*;

    #[test]
    fn schema_has_all_fields() {
        let schema = PageSchema::new();
        let tantivy_schema = schema.schema();

        assert!(tantivy_schema.get_field("id").is_ok());
        assert!(tantivy_schema.get_field("body").is_ok());
    }

    #[test]
    fn id_field_is_raw_and_stored() {
        let schema = PageSchema::new();
        let entry = schema.schema().get_field_entry(schema.id);

        assert!(entry.is_indexed());
        assert!(entry.is_stored());

        if let FieldType::Str(opts) = entry.field_type() {
            let indexing = opts.get_indexing_options().unwrap();
            assert_eq!(indexing.tokenizer(), "raw");
        } else {
            panic!("id field should be text type");
        }
    }

    #[test]
    fn body_field_is_tokenized_not_stored() {
        let schema = PageSchema::new();
        let entry = schema.schema().get_field_entry(schema.body);

        assert!(entry.is_indexed());
        assert!(!entry.is_stored());

        if let FieldType::Str(opts) = entry.field_type() {
            let indexing = opts.get_indexing_options().unwrap();
            assert_eq!(indexing.tokenizer(), PAGE_TOKENIZER);
        } else {
            panic!("body field should be text type");
        }
    }
}
