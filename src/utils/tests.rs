use crate::utils::{UtilsError, parse_number, validate_expression_input};

#[test]
fn test_validate_expression_input_valid() {
    assert!(validate_expression_input("x").is_ok());
    assert!(validate_expression_input("(+ x 1)").is_ok());
    assert!(validate_expression_input("  (sin (* 2 x))  ").is_ok());
}

#[test]
fn test_validate_expression_input_empty() {
    assert_eq!(validate_expression_input(""), Err(UtilsError::EmptyInput));
    assert_eq!(validate_expression_input("   \t"), Err(UtilsError::EmptyInput));
}

#[test]
fn test_validate_expression_input_unbalanced_is_lenient() {
    assert!(validate_expression_input("(+ x 1").is_ok());
    assert!(validate_expression_input("x)").is_ok());
}

#[test]
fn test_parse_number_literals() {
    assert_eq!(parse_number("3"), Some(3.0));
    assert_eq!(parse_number("-2.5"), Some(-2.5));
    assert_eq!(parse_number("1e3"), Some(1000.0));
    assert_eq!(parse_number(".5"), Some(0.5));
}

#[test]
fn test_parse_number_rejects_symbols() {
    assert_eq!(parse_number("x"), None);
    assert_eq!(parse_number("+"), None);
    assert_eq!(parse_number("sin"), None);
    assert_eq!(parse_number("1.2.3"), None);
    assert_eq!(parse_number(""), None);
}
