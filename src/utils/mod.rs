//! Utils module split into submodules

mod errors;
mod numeric;
mod validation;

pub use errors::UtilsError;
pub use numeric::{format_number, is_one, is_zero, parse_number};
pub use validation::validate_expression_input;

#[cfg(test)]
mod tests;
