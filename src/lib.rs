//! Symderive - symbolic differentiation of prefix-notation expressions
//!
//! Expressions are written fully parenthesized with the operator first, for
//! example `(* (sin x) (^ x 2))`, over the single variable `x`. The pipeline
//! tokenizes and reads the text into an [`Expression`] tree, differentiates
//! it, simplifies the result and renders it back to prefix notation.

pub mod calculus;
pub mod expression;
pub mod parser;
pub mod utils;

// Re-export the main public API
pub use calculus::{DerivativeError, differentiate, simplify};
pub use expression::{Expression, ExpressionError, Operator, VARIABLE};
pub use parser::{Token, parse, parse_expression, tokenize};
pub use utils::{UtilsError, validate_expression_input};

/// Differentiate a prefix-notation expression and return the simplified
/// derivative as prefix text.
///
/// # Arguments
///
/// * `input` - One prefix-notation expression over the variable `x`
///
/// # Errors
///
/// This function will return an error if:
/// * The input is empty or contains only whitespace
/// * A list is headed by an operator other than `+ - * / ^ sin cos tan exp ln`
/// * An operator is given the wrong number of operands
///
/// # Examples
///
/// ```
/// use symderive::differentiate_prefix;
///
/// assert_eq!(differentiate_prefix("(^ x 3)").unwrap(), "(* 3 (^ x 2))");
/// assert_eq!(differentiate_prefix("(sin x)").unwrap(), "(cos x)");
/// assert!(differentiate_prefix("(foo x)").is_err());
/// ```
pub fn differentiate_prefix(input: &str) -> Result<String, DerivativeError> {
    validate_expression_input(input)?;

    let expr = parse_expression(input).ok_or(UtilsError::EmptyInput)?;
    let derivative = differentiate(&expr)?;
    Ok(simplify(derivative).to_string())
}
