//! Query translation, parsing, and AST for wikidex search.
//!
//! User queries arrive in a small operator language:
//!
//! - **Terms**: `paris` - words that must appear
//! - **AND**: `paris&france` - both sides must match
//! - **OR**: `paris|london` - alternatives
//! - **NOT**: `paris&~texas` - exclusion
//!
//! [`translate`] rewrites the operator characters into match-expression
//! keywords and filters everything outside a fixed allow-list, so no raw
//! user byte ever reaches the index unchecked. [`parse`] then turns the
//! translated expression into a [`QueryExpr`] AST for the index to compile.
//!
//! # Example
//!
//! ```
//! use wikidex_query::{parse, translate};
//!
//! let translated = translate("paris&~texas");
//! assert_eq!(translated, "paris AND  NOT texas");
//!
//! let expr = parse(&translated).unwrap();
//! assert!(expr.is_some());
//! ```

#![warn(missing_docs)]

mod ast;
mod error;
mod lexer;
mod parser;
mod translate;

pub use ast::QueryExpr;
pub use error::ParseError;
pub use lexer::{Token, tokenize};
pub use parser::parse;
pub use translate::translate;
