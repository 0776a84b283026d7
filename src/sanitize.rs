//! Input sanitization for text embedded in manifest string literals
//!
//! Handles:
//! - Stripping double quotes that would terminate a Swift string literal early
//! - Trimming surrounding whitespace and newlines
//! - Validating commit hashes: exactly one 5-40 character lowercase hex word

use regex::Regex;
use std::sync::LazyLock;

// A standalone word of lowercase hex digits, short (5+) or full (40) SHA-1
static COMMIT_HASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9a-f]{5,40}\b").unwrap());

/// Remove every `"` and trim leading/trailing whitespace
pub fn sanitize(raw: &str) -> String {
    raw.replace('"', "").trim().to_string()
}

/// Check whether `raw` holds exactly one plausible commit hash
///
/// Zero matches and multiple matches are both rejected. Uppercase hex is
/// not matched.
pub fn is_valid_commit_hash(raw: &str) -> bool {
    let sanitized = sanitize(raw);
    COMMIT_HASH_RE.find_iter(&sanitized).count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_quotes() {
        assert_eq!(sanitize(r#""1.0.0""#), "1.0.0");
        assert_eq!(sanitize(r#"1."0".0"#), "1.0.0");
    }

    #[test]
    fn test_sanitize_trims_whitespace_and_newlines() {
        assert_eq!(sanitize("  1.2.3\n"), "1.2.3");
        assert_eq!(sanitize("\t\r\nmain \n"), "main");
    }

    #[test]
    fn test_sanitize_keeps_inner_whitespace() {
        assert_eq!(sanitize(" a b "), "a b");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   "), "");
        assert_eq!(sanitize(r#"""""#), "");
    }

    #[test]
    fn test_sanitize_quote_between_whitespace() {
        // Trimming happens after quote removal, so the result is fully trimmed
        assert_eq!(sanitize(r#" " 1.0 " "#), "1.0");
    }

    #[test]
    fn test_sanitize_idempotent() {
        let inputs = [
            "",
            " 1.0.0 ",
            "\"quoted\"",
            " \" x \" ",
            "\n\"\n",
            "a\"b\"c",
            "   \t",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_sanitize_never_returns_quotes() {
        let inputs = ["\"", "\"\"\"", "1\"2", " \"a\" ", "\"\n\""];
        for input in inputs {
            assert!(!sanitize(input).contains('"'), "input: {:?}", input);
        }
    }

    #[test]
    fn test_valid_short_hash() {
        assert!(is_valid_commit_hash("abc123"));
        assert!(is_valid_commit_hash("deadbeef"));
        assert!(is_valid_commit_hash("a1b2c3d"));
    }

    #[test]
    fn test_valid_full_hash() {
        assert!(is_valid_commit_hash(
            "0123456789abcdef0123456789abcdef01234567"
        ));
    }

    #[test]
    fn test_valid_hash_with_surrounding_noise() {
        assert!(is_valid_commit_hash("  \"abc123\"\n"));
        assert!(is_valid_commit_hash("commit abc123"));
    }

    #[test]
    fn test_invalid_no_match() {
        assert!(!is_valid_commit_hash("not a hash at all"));
        assert!(!is_valid_commit_hash(""));
        assert!(!is_valid_commit_hash("xyz"));
    }

    #[test]
    fn test_invalid_multiple_matches() {
        assert!(!is_valid_commit_hash("abc123 def456"));
    }

    #[test]
    fn test_invalid_uppercase() {
        assert!(!is_valid_commit_hash("ABCDEF1"));
        assert!(!is_valid_commit_hash("DEADBEEF"));
    }

    #[test]
    fn test_invalid_length_bounds() {
        assert!(!is_valid_commit_hash("abcd"));
        assert!(is_valid_commit_hash("abcde"));
        // 41 characters is one word that is too long to match
        assert!(!is_valid_commit_hash(
            "0123456789abcdef0123456789abcdef012345678"
        ));
    }

    #[test]
    fn test_invalid_hex_inside_larger_word() {
        assert!(!is_valid_commit_hash("abc123xyz"));
        assert!(!is_valid_commit_hash("gabc123"));
    }
}
