//! Manual observation entry
//!
//! The recorder trusts its input, so the numeric guard lives here with the
//! caller: unparsable or non-finite entries yield `None` and nothing is
//! recorded. Rejection is silent by contract; the input field simply keeps
//! its contents.

/// Parse a manually typed dependent value.
///
/// Returns `None` for anything that is not a finite number.
#[must_use]
pub fn parse_manual_entry(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_and_padded_numbers() {
        assert_eq!(parse_manual_entry("2.5"), Some(2.5));
        assert_eq!(parse_manual_entry("  -3 "), Some(-3.0));
        assert_eq!(parse_manual_entry("1e-3"), Some(0.001));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_manual_entry(""), None);
        assert_eq!(parse_manual_entry("   "), None);
        assert_eq!(parse_manual_entry("abc"), None);
        assert_eq!(parse_manual_entry("2.5.1"), None);
    }

    #[test]
    fn test_rejects_non_finite_values() {
        // "NaN" and "inf" parse as f64 but must never reach the recorder.
        assert_eq!(parse_manual_entry("NaN"), None);
        assert_eq!(parse_manual_entry("inf"), None);
        assert_eq!(parse_manual_entry("-infinity"), None);
    }
}
