//! Query abstract syntax tree.
//!
//! Represents parsed match expressions before compilation to index queries.

/// A parsed match expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryExpr {
    /// A single search term.
    Term(String),

    /// Negation: results must NOT match this expression.
    Not(Box<Self>),

    /// Conjunction: all sub-expressions must match.
    And(Vec<Self>),

    /// Disjunction: at least one sub-expression must match.
    Or(Vec<Self>),
}

impl QueryExpr {
    /// Creates an And expression, flattening nested Ands.
    pub fn and(exprs: Vec<Self>) -> Self {
        let flattened: Vec<Self> = exprs
            .into_iter()
            .flat_map(|e| match e {
                Self::And(inner) => inner,
                other => vec![other],
            })
            .collect();

        match flattened.len() {
            0 => Self::And(vec![]),
            1 => flattened.into_iter().next().unwrap(),
            _ => Self::And(flattened),
        }
    }

    /// Creates an Or expression, flattening nested Ors.
    pub fn or(exprs: Vec<Self>) -> Self {
        let flattened: Vec<Self> = exprs
            .into_iter()
            .flat_map(|e| match e {
                Self::Or(inner) => inner,
                other => vec![other],
            })
            .collect();

        match flattened.len() {
            0 => Self::Or(vec![]),
            1 => flattened.into_iter().next().unwrap(),
            _ => Self::Or(flattened),
        }
    }
}
