//! Content classification for extracted string literals.
//!
//! Pure functions, no I/O. Classification is a first-match-wins rule table:
//! format detection runs before language detection because a literal with
//! placeholders is a template, not freestanding prose, whatever script it
//! carries. New categories slot in by precedence position.

use crate::model::Category;
use regex::RegexSet;
use std::sync::OnceLock;

/// Placeholder patterns that mark a literal as a format string:
/// printf-style conversions (optionally with digit width), brace
/// placeholders, and `${...}` template placeholders.
const FORMAT_PATTERNS: [&str; 3] = [r"%[0-9]*[sdifg]", r"\{[^}]*\}", r"\$\{[^}]*\}"];

/// CJK Unified Ideographs, the source-script range of the reference
/// deployment (translating from Chinese).
const SOURCE_SCRIPT: std::ops::RangeInclusive<char> = '\u{4e00}'..='\u{9fff}';

fn format_set() -> &'static RegexSet {
    static SET: OnceLock<RegexSet> = OnceLock::new();
    SET.get_or_init(|| RegexSet::new(FORMAT_PATTERNS).expect("format patterns are valid regexes"))
}

/// Strip a single layer of matching surrounding quotes plus whitespace.
pub fn strip_quotes(text: &str) -> &str {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next_back()) {
        (Some('"'), Some('"')) | (Some('\''), Some('\'')) if trimmed.len() >= 2 => {
            trimmed[1..trimmed.len() - 1].trim()
        }
        _ => trimmed,
    }
}

/// Whether the text (after quote stripping) contains a placeholder pattern.
pub fn is_format_string(text: &str) -> bool {
    format_set().is_match(strip_quotes(text))
}

/// Whether the text contains at least one source-script code point.
pub fn contains_source_script(text: &str) -> bool {
    strip_quotes(text).chars().any(|c| SOURCE_SCRIPT.contains(&c))
}

/// Classify a raw literal. First match wins, in this order:
///
/// 1. `Format` — any placeholder pattern present
/// 2. `SourceLanguage` — any source-script code point present
/// 3. `TargetLanguage` — everything else, including the empty string
pub fn classify(text: &str) -> Category {
    if is_format_string(text) {
        Category::Format
    } else if contains_source_script(text) {
        Category::SourceLanguage
    } else {
        Category::TargetLanguage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Quote Stripping Tests ====================

    #[test]
    fn test_strip_quotes_double() {
        assert_eq!(strip_quotes("\"hello\""), "hello");
    }

    #[test]
    fn test_strip_quotes_single() {
        assert_eq!(strip_quotes("'hello'"), "hello");
    }

    #[test]
    fn test_strip_quotes_one_layer_only() {
        assert_eq!(strip_quotes("\"\"nested\"\""), "\"nested\"");
    }

    #[test]
    fn test_strip_quotes_mismatched_left_alone() {
        assert_eq!(strip_quotes("\"hello'"), "\"hello'");
    }

    #[test]
    fn test_strip_quotes_whitespace() {
        assert_eq!(strip_quotes("  \" hello \"  "), "hello");
    }

    #[test]
    fn test_strip_quotes_empty() {
        assert_eq!(strip_quotes(""), "");
        assert_eq!(strip_quotes("\"\""), "");
    }

    #[test]
    fn test_strip_quotes_lone_quote() {
        assert_eq!(strip_quotes("\""), "\"");
    }

    // ==================== Format Detection Tests ====================

    #[test]
    fn test_format_printf_specifiers() {
        assert!(is_format_string("\"Error: %s\""));
        assert!(is_format_string("count=%d"));
        assert!(is_format_string("ratio %f"));
        assert!(is_format_string("%i items"));
        assert!(is_format_string("%g value"));
    }

    #[test]
    fn test_format_printf_with_width() {
        assert!(is_format_string("\"%05d\""));
        assert!(is_format_string("%10s"));
    }

    #[test]
    fn test_format_brace_placeholder() {
        assert!(is_format_string("Hello {name}"));
        assert!(is_format_string("Hello {}"));
    }

    #[test]
    fn test_format_template_placeholder() {
        assert!(is_format_string("Value: ${value}"));
    }

    #[test]
    fn test_format_dominates_source_script() {
        // Placeholders win even when the text is otherwise source-script
        assert!(is_format_string("\"错误日志: %s\""));
        assert!(is_format_string("\"用户信息: {name: %s, id: %d}\""));
        assert_eq!(classify("\"错误日志: %s\""), Category::Format);
    }

    #[test]
    fn test_not_format() {
        assert!(!is_format_string("\"Simple string\""));
        assert!(!is_format_string("\"简单字符串\""));
        assert!(!is_format_string("100% organic"));
    }

    // ==================== Source Script Tests ====================

    #[test]
    fn test_contains_source_script() {
        assert!(contains_source_script("\"并发任务异常：\""));
        assert!(contains_source_script("\"用户信息\""));
        assert!(contains_source_script("mixed 中文 text"));
    }

    #[test]
    fn test_no_source_script() {
        assert!(!contains_source_script("\"Database connection established\""));
        assert!(!contains_source_script("\"Hello World\""));
        assert!(!contains_source_script("Café résumé")); // Latin with diacritics
    }

    // ==================== Classification Tests ====================

    #[test]
    fn test_classify_source_language() {
        assert_eq!(classify("\"并发任务异常：\""), Category::SourceLanguage);
    }

    #[test]
    fn test_classify_target_language() {
        assert_eq!(
            classify("\"Database connection established\""),
            Category::TargetLanguage
        );
    }

    #[test]
    fn test_classify_format_without_source_script() {
        assert_eq!(classify("\"Error: %s\""), Category::Format);
    }

    #[test]
    fn test_classify_empty_string_is_target_language() {
        assert_eq!(classify(""), Category::TargetLanguage);
        assert_eq!(classify("\"\""), Category::TargetLanguage);
        assert_eq!(classify("   "), Category::TargetLanguage);
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_format_marker_always_wins(prefix in "[a-zA-Z0-9 ]{0,10}", suffix in "[a-zA-Z0-9 ]{0,10}") {
            for marker in ["%s", "%d", "{x}", "${x}"] {
                let text = format!("{}{}{}", prefix, marker, suffix);
                prop_assert_eq!(classify(&text), Category::Format);
            }
        }

        #[test]
        fn prop_source_script_without_markers(body in "[\\u4e00-\\u9fff]{1,8}") {
            prop_assert_eq!(classify(&body), Category::SourceLanguage);
        }

        #[test]
        fn prop_ascii_alpha_is_target_language(body in "[a-zA-Z ]{0,20}") {
            prop_assert_eq!(classify(&body), Category::TargetLanguage);
        }

        #[test]
        fn prop_classify_is_deterministic(text in "\\PC{0,30}") {
            prop_assert_eq!(classify(&text), classify(&text));
        }
    }
}
