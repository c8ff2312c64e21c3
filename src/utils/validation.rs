use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the input is empty or contains only whitespace.
///
/// Unbalanced parentheses are only reported through the log; the reader
/// accepts them leniently.
pub fn validate_expression_input(input: &str) -> Result<(), UtilsError> {
    debug!("Validating expression input: '{}'", input);

    if input.trim().is_empty() {
        warn!("Expression input is empty");
        return Err(UtilsError::EmptyInput);
    }

    let open = input.chars().filter(|&c| c == '(').count();
    let close = input.chars().filter(|&c| c == ')').count();
    if open != close {
        warn!(
            "Unbalanced parentheses in '{}': {} open, {} close",
            input, open, close
        );
    }

    debug!("Expression input validation successful");
    Ok(())
}
