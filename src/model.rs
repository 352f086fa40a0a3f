use serde::{Deserialize, Serialize};
use std::fmt;

/// Content category of an extracted string literal.
///
/// Computed exactly once at parse time and never recomputed afterwards.
/// Precedence between categories is decided by the classifier rule table,
/// not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// A template containing runtime placeholders (`%s`, `{...}`, `${...}`).
    Format,
    /// Text in the language being translated from (source-script detected).
    SourceLanguage,
    /// Text already in the desired output language; never translated.
    TargetLanguage,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Format => write!(f, "Format"),
            Category::SourceLanguage => write!(f, "Source"),
            Category::TargetLanguage => write!(f, "Target"),
        }
    }
}

/// Outcome of the translation attempt for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationStatus {
    /// No attempt made yet. Records that are never eligible for translation
    /// (Format / TargetLanguage) keep this status through report rendering.
    Pending,
    /// A provider returned a usable translation.
    Success,
    /// All providers declined or none were available.
    Failed,
    /// Something unexpected happened while attempting this one item.
    Error,
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationStatus::Pending => write!(f, "Pending"),
            TranslationStatus::Success => write!(f, "Success"),
            TranslationStatus::Failed => write!(f, "Failed"),
            TranslationStatus::Error => write!(f, "Error"),
        }
    }
}

/// One hardcoded literal occurrence reported by the upstream inspection.
///
/// `line` stays textual on purpose: upstream tools may emit ranges or leave
/// the field blank, so it is never parsed as an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    /// Source-relative path with `file://$PROJECT_DIR$/` / `file://` stripped.
    pub file_path: String,
    /// Package name, empty if the report omitted it.
    pub package: String,
    /// Module name, empty if the report omitted it.
    pub module: String,
    /// 1-based line number as text, empty if absent.
    pub line: String,
    /// Literal text exactly as extracted, including its original quoting.
    pub original_string: String,
    pub category: Category,
    /// Empty until a translation attempt completes.
    pub translated_string: String,
    pub translation_status: TranslationStatus,
}

impl StringRecord {
    /// Build a freshly parsed record. Translation fields start empty/pending.
    pub fn new(
        file_path: String,
        package: String,
        module: String,
        line: String,
        original_string: String,
        category: Category,
    ) -> Self {
        Self {
            file_path,
            package,
            module,
            line,
            original_string,
            category,
            translated_string: String::new(),
            translation_status: TranslationStatus::Pending,
        }
    }

    /// Whether this record belongs to the translatable subset.
    pub fn needs_translation(&self) -> bool {
        self.category == Category::SourceLanguage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(category: Category) -> StringRecord {
        StringRecord::new(
            "src/Main.java".to_string(),
            "com.example".to_string(),
            "app".to_string(),
            "42".to_string(),
            "\"样例\"".to_string(),
            category,
        )
    }

    #[test]
    fn test_new_record_starts_pending_and_untranslated() {
        let record = sample_record(Category::SourceLanguage);
        assert_eq!(record.translation_status, TranslationStatus::Pending);
        assert!(record.translated_string.is_empty());
    }

    #[test]
    fn test_needs_translation_only_for_source_language() {
        assert!(sample_record(Category::SourceLanguage).needs_translation());
        assert!(!sample_record(Category::Format).needs_translation());
        assert!(!sample_record(Category::TargetLanguage).needs_translation());
    }

    #[test]
    fn test_category_display_labels() {
        assert_eq!(Category::Format.to_string(), "Format");
        assert_eq!(Category::SourceLanguage.to_string(), "Source");
        assert_eq!(Category::TargetLanguage.to_string(), "Target");
    }

    #[test]
    fn test_status_display_labels() {
        assert_eq!(TranslationStatus::Pending.to_string(), "Pending");
        assert_eq!(TranslationStatus::Success.to_string(), "Success");
        assert_eq!(TranslationStatus::Failed.to_string(), "Failed");
        assert_eq!(TranslationStatus::Error.to_string(), "Error");
    }

    #[test]
    fn test_record_serde_roundtrip_preserves_unicode() {
        let record = sample_record(Category::SourceLanguage);
        let json = serde_json::to_string(&record).expect("serialize");
        let restored: StringRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, restored);
        assert!(restored.original_string.contains("样例"));
    }
}
