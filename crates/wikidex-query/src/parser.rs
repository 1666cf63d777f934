//! Match-expression parser.
//!
//! Parses a token stream into a query AST using recursive descent.
//!
//! # Grammar
//!
//! ```text
//! query    → or_expr
//! or_expr  → and_expr ("OR" and_expr)*
//! and_expr → unary ("AND"? unary)*
//! unary    → "NOT" unary | TERM
//! ```
//!
//! # Precedence (highest to lowest)
//!
//! 1. Negation: `NOT`
//! 2. AND (explicit keyword, or implicit between adjacent terms)
//! 3. OR (explicit keyword)
//!
//! `a NOT b` therefore reads as `a AND (NOT b)`, the set-difference meaning
//! the stored expression language gives an infix NOT.

use crate::{
    ast::QueryExpr,
    error::ParseError,
    lexer::{Token, tokenize},
};

/// Recursive descent parser for match expressions.
struct Parser {
    /// Token stream to parse.
    tokens: Vec<Token>,
    /// Current position in token stream.
    position: usize,
}

impl Parser {
    /// Creates a new parser from a token stream.
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parses the token stream into a query expression.
    fn parse(mut self) -> Result<Option<QueryExpr>, ParseError> {
        if self.tokens.is_empty() {
            return Ok(None);
        }

        let expr = self.parse_or_expr()?;

        if self.position < self.tokens.len() {
            return Err(ParseError::new(
                format!("unexpected token: {:?}", self.tokens[self.position]),
                Some(self.position),
            ));
        }

        Ok(Some(expr))
    }

    /// Parses: or_expr → and_expr ("OR" and_expr)*
    fn parse_or_expr(&mut self) -> Result<QueryExpr, ParseError> {
        let mut left = self.parse_and_expr()?;

        while self.check(&Token::Or) {
            self.advance(); // consume OR
            let right = self.parse_and_expr()?;
            left = QueryExpr::or(vec![left, right]);
        }

        Ok(left)
    }

    /// Parses: and_expr → unary ("AND"? unary)*
    fn parse_and_expr(&mut self) -> Result<QueryExpr, ParseError> {
        let mut exprs = Vec::new();

        // Parse at least one unary expression
        exprs.push(self.parse_unary()?);

        loop {
            if self.check(&Token::And) {
                self.advance(); // consume explicit AND
                exprs.push(self.parse_unary()?);
            } else if self.can_start_unary() {
                // Implicit conjunction between adjacent expressions
                exprs.push(self.parse_unary()?);
            } else {
                break;
            }
        }

        Ok(QueryExpr::and(exprs))
    }

    /// Checks if the current token can start a unary expression.
    fn can_start_unary(&self) -> bool {
        matches!(self.peek(), Some(Token::Term(_)) | Some(Token::Not))
    }

    /// Parses: unary → "NOT" unary | TERM
    fn parse_unary(&mut self) -> Result<QueryExpr, ParseError> {
        match self.peek().cloned() {
            Some(Token::Not) => {
                self.advance(); // consume NOT
                let expr = self.parse_unary()?;
                Ok(QueryExpr::Not(Box::new(expr)))
            }

            Some(Token::Term(text)) => {
                self.advance();
                Ok(QueryExpr::Term(text))
            }

            Some(Token::And) => Err(ParseError::new(
                "unexpected AND (needs expression before it)",
                Some(self.position),
            )),

            Some(Token::Or) => Err(ParseError::new(
                "unexpected OR (needs expression before it)",
                Some(self.position),
            )),

            None => Err(ParseError::new("unexpected end of query", None)),
        }
    }

    /// Returns the current token without consuming it.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Checks whether the current token equals the given token.
    fn check(&self, token: &Token) -> bool {
        self.peek() == Some(token)
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.position += 1;
    }
}

/// Parses a match expression into a query AST.
///
/// Returns `Ok(None)` for empty or whitespace-only input, `Ok(Some(expr))`
/// for a valid expression, or a [`ParseError`] for malformed operator use
/// (dangling keywords, operator with no operand).
pub fn parse(input: &str) -> Result<Option<QueryExpr>, ParseError> {
    Parser::new(tokenize(input)).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(text: &str) -> QueryExpr {
        QueryExpr::Term(text.into())
    }

    #[test]
    fn empty_input_is_none() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn single_term() {
        assert_eq!(parse("paris").unwrap(), Some(term("paris")));
    }

    #[test]
    fn explicit_and() {
        assert_eq!(
            parse("cat AND dog").unwrap(),
            Some(QueryExpr::And(vec![term("cat"), term("dog")]))
        );
    }

    #[test]
    fn implicit_and_between_adjacent_terms() {
        assert_eq!(
            parse("cat dog").unwrap(),
            Some(QueryExpr::And(vec![term("cat"), term("dog")]))
        );
    }

    #[test]
    fn or_expression() {
        assert_eq!(
            parse("cat OR dog").unwrap(),
            Some(QueryExpr::Or(vec![term("cat"), term("dog")]))
        );
    }

    #[test]
    fn or_binds_looser_than_and() {
        assert_eq!(
            parse("a b OR c AND d").unwrap(),
            Some(QueryExpr::Or(vec![
                QueryExpr::And(vec![term("a"), term("b")]),
                QueryExpr::And(vec![term("c"), term("d")]),
            ]))
        );
    }

    #[test]
    fn prefix_not() {
        assert_eq!(
            parse("NOT cat").unwrap(),
            Some(QueryExpr::Not(Box::new(term("cat"))))
        );
    }

    #[test]
    fn infix_not_is_conjunction_with_negation() {
        assert_eq!(
            parse("cat NOT dog").unwrap(),
            Some(QueryExpr::And(vec![
                term("cat"),
                QueryExpr::Not(Box::new(term("dog"))),
            ]))
        );
    }

    #[test]
    fn double_negation_nests() {
        assert_eq!(
            parse("NOT NOT cat").unwrap(),
            Some(QueryExpr::Not(Box::new(QueryExpr::Not(Box::new(term(
                "cat"
            ))))))
        );
    }

    #[test]
    fn and_chain_flattens() {
        assert_eq!(
            parse("a AND b AND c").unwrap(),
            Some(QueryExpr::And(vec![term("a"), term("b"), term("c")]))
        );
    }

    #[test]
    fn trailing_and_is_error() {
        assert!(parse("cat AND").is_err());
    }

    #[test]
    fn trailing_or_is_error() {
        assert!(parse("cat OR").is_err());
    }

    #[test]
    fn trailing_not_is_error() {
        assert!(parse("cat NOT").is_err());
    }

    #[test]
    fn leading_or_is_error() {
        assert!(parse("OR cat").is_err());
    }

    #[test]
    fn parses_translated_output() {
        use crate::translate;

        assert_eq!(
            parse(&translate("cat&dog")).unwrap(),
            Some(QueryExpr::And(vec![term("cat"), term("dog")]))
        );
        assert_eq!(
            parse(&translate("~cat")).unwrap(),
            Some(QueryExpr::Not(Box::new(term("cat"))))
        );
        assert_eq!(parse(&translate("';--")).unwrap(), None);
    }
}
