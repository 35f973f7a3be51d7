use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect box strings
    /// Matches three "number unit" segments joined by '×', units limited to m/cm/mm
    /// Examples: "1.000 m × 2.000 m × 3.000 m", "10 cm×20 cm×30 cm", "1 m × 20 cm × 300 mm"
    static ref PUDELKO_PATTERN: Regex = Regex::new(
        r"^\s*(?:[+-]?\d+(?:\.\d+)?\s+(?:mm|cm|m)\s*×\s*){2}[+-]?\d+(?:\.\d+)?\s+(?:mm|cm|m)\s*$"
    )
    .unwrap();
}

/// Check if a string looks like a box in text form.
/// This is a shape check only; [`crate::pudelko::Pudelko::parse`] still validates the values.
pub fn looks_like_pudelko_string(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    PUDELKO_PATTERN.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pudelko_detection() {
        assert!(looks_like_pudelko_string("1.000 m × 2.000 m × 3.000 m"));
        assert!(looks_like_pudelko_string("100.0 cm × 200.0 cm × 300.0 cm"));
        assert!(looks_like_pudelko_string("1000 mm×2000 mm×3000 mm"));
        assert!(looks_like_pudelko_string("1 m × 20 cm × 300 mm"));
        // Shape only, out-of-range values are caught by the parser
        assert!(looks_like_pudelko_string("0 m × 20 m × 3 m"));

        assert!(!looks_like_pudelko_string("1 m × 2 m"));
        assert!(!looks_like_pudelko_string("1 km × 2 m × 3 m"));
        assert!(!looks_like_pudelko_string("1000"));
        assert!(!looks_like_pudelko_string(""));
    }
}
