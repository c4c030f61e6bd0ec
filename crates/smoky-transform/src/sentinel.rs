//! Detection of the `-999` "no data" sentinel.

/// Numeric form of the sentinel.
pub const SENTINEL: f64 = -999.0;

/// Textual form of the sentinel, compared after trimming.
pub const SENTINEL_TEXT: &str = "-999";

/// Returns true if a cell holds the sentinel, numerically or textually.
///
/// `-999`, `-999.0` and `" -999 "` are sentinels; empty or non-numeric text
/// never is.
pub fn is_sentinel(cell: &str) -> bool {
    let trimmed = cell.trim();
    let numeric = trimmed
        .parse::<f64>()
        .is_ok_and(|value| value == SENTINEL);
    numeric || trimmed == SENTINEL_TEXT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_sentinel() {
        assert!(is_sentinel("-999"));
    }

    #[test]
    fn test_float_sentinel() {
        assert!(is_sentinel("-999.0"));
        assert!(is_sentinel("-999.000"));
        assert!(is_sentinel("-9.99e2"));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert!(is_sentinel("  -999  "));
        assert!(is_sentinel("\t-999"));
    }

    #[test]
    fn test_non_sentinels() {
        assert!(!is_sentinel(""));
        assert!(!is_sentinel("999"));
        assert!(!is_sentinel("-9990"));
        assert!(!is_sentinel("-999.5"));
        assert!(!is_sentinel("n/a"));
        assert!(!is_sentinel("-999x"));
        assert!(!is_sentinel("NaN"));
    }
}
