//! Tokenizer and recursive-descent reader for prefix notation

mod reader;
mod tokenizer;

pub use reader::parse;
pub use tokenizer::{Token, tokenize};

use log::{debug, warn};

use crate::expression::Expression;

/// Tokenize and read the first expression in `input`.
///
/// Returns `None` when the input holds no tokens. Tokens after the first
/// complete expression are ignored.
pub fn parse_expression(input: &str) -> Option<Expression> {
    let tokens = tokenize(input);
    let (expr, rest) = parse(&tokens);

    if !rest.is_empty() {
        warn!(
            "Ignoring {} trailing token(s) after the first expression",
            rest.len()
        );
    }
    if let Some(expr) = &expr {
        debug!("Parsed expression: {}", expr);
    }
    expr
}
