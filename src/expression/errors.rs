use thiserror::Error;

use crate::expression::operator::Operator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),
    #[error("Operator '{operator}' expects {expected} operand(s), found {found}")]
    ArityMismatch {
        operator: Operator,
        expected: usize,
        found: usize,
    },
}
