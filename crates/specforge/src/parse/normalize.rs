//! Per-cell metadata normalization.
//!
//! Legacy specification spreadsheets spell the same metadata many ways:
//! cardinality as "1", "1..1", "1 … 1", "Mandatory"; datatypes with embedded
//! lengths like "String (50)"; sample values buried in prose remarks. The
//! normalizers here are pure `Option`-returning functions: a cell that
//! cannot be normalized degrades to `None` (or keeps its original text), it
//! never aborts the row or the parse.

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static RANGE_ELLIPSIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\s*…\s*\d+").unwrap());

static RANGE_DOTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\s*\.\.\s*\d+").unwrap());

static TYPE_LENGTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d+)\)").unwrap());

static TYPE_LENGTH_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(\d+\)").unwrap());

static SAMPLE_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)Sample\s+Value[:\s]+["']?([^"'\r\n]+)["']?"#).unwrap()
});

/// Trim a cell, collapsing internal whitespace runs to a single space.
///
/// Blank or whitespace-only cells normalize to `None`.
pub fn trim_all(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let collapsed = WHITESPACE_RUN.replace_all(trimmed, " ").into_owned();
    if collapsed.trim().is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Canonicalize a cardinality cell.
///
/// The ellipsis glyph and double-dot separators are rewritten to a triple-dot
/// token via chained replacement: the two-character ".." form is itself
/// turned into "...", so "1..1" becomes "1...1". Legacy documents depend on
/// this exact canonical form, artifacts included.
pub fn normalize_cardinality(value: &str) -> Option<String> {
    let trimmed = trim_all(value)?;
    Some(trimmed.replace('…', "...").replace("..", "..."))
}

/// Normalize a datatype cell. The raw spelling (length suffix included) is
/// preserved; base-type dispatch happens at generation time.
pub fn normalize_data_type(value: &str) -> Option<String> {
    trim_all(value)
}

/// Required/array classification derived from a cardinality string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Occurrence {
    pub required: bool,
    pub array: bool,
}

/// Classify a cardinality string.
///
/// Array: contains the ellipsis glyph, "*", "..", or a two-number range with
/// either separator. Required: starts with "1", or contains "Mandatory" or
/// "Required" in any case. Works on raw and canonicalized spellings alike.
pub fn classify_cardinality(cardinality: Option<&str>) -> Occurrence {
    let Some(value) = cardinality else {
        return Occurrence::default();
    };
    if value.trim().is_empty() {
        return Occurrence::default();
    }

    let array = value.contains('…')
        || value.contains('*')
        || value.contains("..")
        || RANGE_ELLIPSIS.is_match(value)
        || RANGE_DOTS.is_match(value);

    let lower = value.to_lowercase();
    let required = value.starts_with('1') || lower.contains("mandatory") || lower.contains("required");

    Occurrence { required, array }
}

/// Base type for value dispatch: the datatype with any "(<digits>)" length
/// suffix stripped, lowercased and trimmed.
pub fn base_data_type(data_type: &str) -> String {
    TYPE_LENGTH_SUFFIX
        .replace_all(&data_type.to_lowercase(), "")
        .trim()
        .to_string()
}

/// Extract an embedded length from a datatype like "String (50)".
pub fn max_length(data_type: Option<&str>) -> Option<u32> {
    let value = data_type?;
    let captures = TYPE_LENGTH.captures(value)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Extract a literal sample value from a remarks cell.
///
/// Searches for "Sample Value" followed by optional punctuation/quotes; the
/// value runs to the end of the field or the next quote/newline.
pub fn extract_sample_value(remarks: &str) -> Option<String> {
    let cleaned = trim_all(remarks)?;
    let captures = SAMPLE_VALUE.captures(&cleaned)?;
    trim_all(captures.get(1)?.as_str())
}

/// Strip one pair of wrapping double quotes from a literal value.
pub fn strip_wrapping_quotes(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_all_blank() {
        assert_eq!(trim_all(""), None);
        assert_eq!(trim_all("   "), None);
        assert_eq!(trim_all("\r\n\t"), None);
    }

    #[test]
    fn test_trim_all_collapses_runs() {
        assert_eq!(trim_all("  a   b \n c  "), Some("a b c".to_string()));
    }

    #[test]
    fn test_normalize_cardinality_double_dot() {
        assert_eq!(normalize_cardinality("1..1"), Some("1...1".to_string()));
    }

    #[test]
    fn test_normalize_cardinality_chained_artifact() {
        // The ellipsis first becomes "...", whose leading ".." is then
        // rewritten again. This is the pinned legacy behavior.
        assert_eq!(normalize_cardinality("1…1"), Some("1....1".to_string()));
    }

    #[test]
    fn test_normalize_cardinality_plain() {
        assert_eq!(normalize_cardinality(" 1 "), Some("1".to_string()));
        assert_eq!(normalize_cardinality("Mandatory"), Some("Mandatory".to_string()));
    }

    #[test]
    fn test_classify_required_singleton() {
        let occ = classify_cardinality(Some("1"));
        assert!(occ.required);
        assert!(!occ.array);
    }

    #[test]
    fn test_classify_optional_ellipsis_is_array() {
        // "0 … 1" contains the ellipsis glyph, so it classifies as an
        // array under the stated rule even though the upper bound is 1.
        let occ = classify_cardinality(Some("0 … 1"));
        assert!(!occ.required);
        assert!(occ.array);
    }

    #[test]
    fn test_classify_star_and_ranges() {
        assert!(classify_cardinality(Some("1...*")).array);
        assert!(classify_cardinality(Some("0..3")).array);
        assert!(classify_cardinality(Some("2 … 5")).array);
        assert!(!classify_cardinality(Some("Optional")).array);
    }

    #[test]
    fn test_classify_required_keywords() {
        assert!(classify_cardinality(Some("Mandatory")).required);
        assert!(classify_cardinality(Some("required field")).required);
        assert!(!classify_cardinality(Some("Optional")).required);
        assert!(!classify_cardinality(Some("0...1")).required);
    }

    #[test]
    fn test_classify_none() {
        assert_eq!(classify_cardinality(None), Occurrence::default());
        assert_eq!(classify_cardinality(Some("  ")), Occurrence::default());
    }

    #[test]
    fn test_base_data_type_strips_length() {
        assert_eq!(base_data_type("String (50)"), "string");
        assert_eq!(base_data_type("Long (15)"), "long");
        assert_eq!(base_data_type("Boolean"), "boolean");
    }

    #[test]
    fn test_max_length() {
        assert_eq!(max_length(Some("String (50)")), Some(50));
        assert_eq!(max_length(Some("String")), None);
        assert_eq!(max_length(None), None);
    }

    #[test]
    fn test_extract_sample_value_quoted() {
        let remarks = r#"Conditional field. Sample Value: "CGH""#;
        assert_eq!(extract_sample_value(remarks), Some("CGH".to_string()));
    }

    #[test]
    fn test_extract_sample_value_bare() {
        assert_eq!(
            extract_sample_value("Sample Value: ACTIVE"),
            Some("ACTIVE".to_string())
        );
    }

    #[test]
    fn test_extract_sample_value_case_insensitive() {
        assert_eq!(
            extract_sample_value("sample value 12345"),
            Some("12345".to_string())
        );
    }

    #[test]
    fn test_extract_sample_value_absent() {
        assert_eq!(extract_sample_value("Free-text remark only"), None);
        assert_eq!(extract_sample_value(""), None);
    }

    #[test]
    fn test_strip_wrapping_quotes() {
        assert_eq!(strip_wrapping_quotes(r#""CGH""#), "CGH");
        assert_eq!(strip_wrapping_quotes("CGH"), "CGH");
        assert_eq!(strip_wrapping_quotes(r#"""#), "\"");
    }
}
