//! Query compiler.
//!
//! Compiles a parsed [`QueryExpr`] AST into Tantivy queries against the
//! body field. Query terms pass through the same analyzer as indexed text,
//! so they meet the stored tokens in the same normal form.

use tantivy::{
    Term,
    query::{BooleanQuery, Occur, PhraseQuery, Query, TermQuery},
    schema::IndexRecordOption,
    tokenizer::{TextAnalyzer, TokenStream},
};

use wikidex_query::QueryExpr;

use crate::{IndexError, analyzer::build_analyzer_from_name, schema::PageSchema};

/// Compiles query AST nodes into Tantivy queries.
pub(crate) struct QueryCompiler {
    /// Index schema for field references.
    schema: PageSchema,
    /// Text analyzer for tokenizing query terms.
    analyzer: TextAnalyzer,
}

impl QueryCompiler {
    /// Creates a new query compiler.
    pub(crate) fn new(schema: PageSchema, language: &str) -> Result<Self, IndexError> {
        let analyzer = build_analyzer_from_name(language)?;
        Ok(Self { schema, analyzer })
    }

    /// Compiles a query expression into a Tantivy query.
    ///
    /// Returns `None` when the expression reduces to nothing searchable
    /// (e.g. every term analyzed away). A `Not` with no positive context
    /// compiles to a must-not-only boolean query, which matches nothing -
    /// exclusion only narrows, it never selects.
    pub(crate) fn compile(&mut self, expr: &QueryExpr) -> Option<Box<dyn Query>> {
        match expr {
            QueryExpr::Term(text) => self.compile_term(text),
            QueryExpr::Not(inner) => {
                let inner = self.compile(inner)?;
                Some(Box::new(BooleanQuery::new(vec![(Occur::MustNot, inner)])))
            }
            QueryExpr::And(exprs) => self.compile_and(exprs),
            QueryExpr::Or(exprs) => self.compile_or(exprs),
        }
    }

    /// Compiles a term into a term query, or a phrase query if analysis
    /// produced multiple tokens.
    fn compile_term(&mut self, text: &str) -> Option<Box<dyn Query>> {
        let tokens = self.tokenize(text);

        match tokens.len() {
            0 => None,
            1 => Some(Box::new(TermQuery::new(
                Term::from_field_text(self.schema.body, &tokens[0]),
                IndexRecordOption::WithFreqs,
            ))),
            _ => {
                let terms: Vec<Term> = tokens
                    .iter()
                    .map(|t| Term::from_field_text(self.schema.body, t))
                    .collect();
                Some(Box::new(PhraseQuery::new(terms)))
            }
        }
    }

    /// Compiles a conjunction.
    ///
    /// Negated children become must-not clauses beside their siblings'
    /// must clauses, giving `a NOT b` its set-difference meaning.
    fn compile_and(&mut self, exprs: &[QueryExpr]) -> Option<Box<dyn Query>> {
        let mut clauses: Vec<(Occur, Box<dyn Query>)> = Vec::with_capacity(exprs.len());

        for expr in exprs {
            match expr {
                QueryExpr::Not(inner) => {
                    if let Some(query) = self.compile(inner) {
                        clauses.push((Occur::MustNot, query));
                    }
                }
                other => {
                    if let Some(query) = self.compile(other) {
                        clauses.push((Occur::Must, query));
                    }
                }
            }
        }

        if clauses.is_empty() {
            return None;
        }

        Some(Box::new(BooleanQuery::new(clauses)))
    }

    /// Compiles a disjunction: at least one branch must match.
    fn compile_or(&mut self, exprs: &[QueryExpr]) -> Option<Box<dyn Query>> {
        let clauses: Vec<(Occur, Box<dyn Query>)> = exprs
            .iter()
            .filter_map(|expr| self.compile(expr))
            .map(|query| (Occur::Should, query))
            .collect();

        if clauses.is_empty() {
            return None;
        }

        Some(Box::new(BooleanQuery::new(clauses)))
    }

    /// Runs a term through the analyzer pipeline.
    fn tokenize(&mut self, text: &str) -> Vec<String> {
        let mut stream = self.analyzer.token_stream(text);
        let mut tokens = Vec::new();
        while let Some(token) = stream.next() {
            tokens.push(token.text.clone());
        }
        tokens
    }
}
