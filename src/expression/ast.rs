use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;
use crate::utils::{format_number, parse_number};

/// The single variable expressions are differentiated against
pub const VARIABLE: &str = "x";

/// A prefix-notation expression tree
///
/// Atoms keep their source text so that leniently parsed input (unknown
/// symbols, malformed literals) survives a round trip unchanged. Operator
/// dispatch goes through [`Operator`] via [`Expression::operation`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Atom(String),
    List(Vec<Expression>),
}

impl Expression {
    pub fn atom(text: impl Into<String>) -> Self {
        Expression::Atom(text.into())
    }

    pub fn variable() -> Self {
        Expression::Atom(VARIABLE.to_string())
    }

    /// Numeric literal in canonical shortest form
    pub fn number(value: f64) -> Self {
        Expression::Atom(format_number(value))
    }

    pub fn unary(op: Operator, operand: Expression) -> Self {
        Expression::List(vec![Expression::Atom(op.symbol().to_string()), operand])
    }

    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::List(vec![Expression::Atom(op.symbol().to_string()), left, right])
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Expression::Atom(text) if text == VARIABLE)
    }

    /// Value of a numeric literal atom, `None` for lists and non-numeric atoms
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expression::Atom(text) => parse_number(text),
            Expression::List(_) => None,
        }
    }

    pub fn is_number(&self) -> bool {
        self.as_number().is_some()
    }

    /// Split a list node into its operator and operands.
    ///
    /// Returns `Ok(None)` for atoms and for the empty list.
    ///
    /// # Errors
    ///
    /// Returns an error when the head is not a supported operator symbol, or
    /// when the operand count does not match the operator's arity.
    pub fn operation(&self) -> Result<Option<(Operator, &[Expression])>, ExpressionError> {
        let Expression::List(items) = self else {
            return Ok(None);
        };
        let Some((head, operands)) = items.split_first() else {
            return Ok(None);
        };

        let op = match head {
            Expression::Atom(symbol) => symbol.parse::<Operator>()?,
            Expression::List(_) => {
                return Err(ExpressionError::UnsupportedOperator(head.to_string()));
            }
        };

        if operands.len() != op.arity() {
            return Err(ExpressionError::ArityMismatch {
                operator: op,
                expected: op.arity(),
                found: operands.len(),
            });
        }

        Ok(Some((op, operands)))
    }
}
