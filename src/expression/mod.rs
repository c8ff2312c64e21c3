//! Expression tree, operators, prefix rendering and the constant check

mod ast;
mod constant;
mod display;
mod errors;
mod operator;

pub use ast::{Expression, VARIABLE};
pub use errors::ExpressionError;
pub use operator::Operator;
