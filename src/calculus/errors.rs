use thiserror::Error;

use crate::expression::ExpressionError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DerivativeError {
    #[error("Expression error: {0}")]
    ExpressionError(#[from] ExpressionError),
    #[error("Input error: {0}")]
    InputError(#[from] UtilsError),
}
