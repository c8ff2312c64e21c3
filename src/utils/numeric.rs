/// Parse an atom as a double-precision literal
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

/// Magnitudes at or above this are written in exponent form
const EXPONENT_UPPER: f64 = 1e16;
/// Non-zero magnitudes below this are written in exponent form
const EXPONENT_LOWER: f64 = 1e-4;

/// Shortest text that parses back to the same value.
///
/// Plain decimal for everyday magnitudes, exponent form (`1e300`,
/// `1.5e-7`) for very large or very small ones.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    let tiny = magnitude != 0.0 && magnitude < EXPONENT_LOWER;
    if value.is_finite() && (magnitude >= EXPONENT_UPPER || tiny) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

#[inline]
pub fn is_zero(value: f64) -> bool {
    value == 0.0
}

#[inline]
pub fn is_one(value: f64) -> bool {
    value == 1.0
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::{format_number, is_one, is_zero, parse_number};

    #[test]
    fn test_format_number_is_shortest() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-1.0), "-1");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_number_reparses_exactly() {
        for value in [1.0 / 3.0, 1e-7, 123_456.789, -2.5e10] {
            assert_eq!(parse_number(&format_number(value)), Some(value));
        }
    }

    #[test]
    fn test_format_number_uses_exponent_for_extreme_magnitudes() {
        assert_eq!(format_number(1e300), "1e300");
        assert_eq!(format_number(-2.5e20), "-2.5e20");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e15), "1000000000000000");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }

    #[test]
    fn test_exponent_form_reparses_exactly() {
        let values = [1e300, 2_f64.powi(100), 1.5e-7, -3.25e-12, f64::MAX, f64::MIN_POSITIVE];
        for value in values {
            assert_eq!(parse_number(&format_number(value)), Some(value));
        }
    }

    #[test]
    fn test_zero_and_one() {
        assert!(is_zero(0.0));
        assert!(is_zero(-0.0));
        assert!(!is_zero(f64::EPSILON));
        assert!(is_one(1.0));
        assert!(!is_one(1.0 + f64::EPSILON));
    }
}
