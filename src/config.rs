use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration, read from the environment with defaults matching
/// the tool's documented behavior.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of strings translated per batch (positive)
    pub batch_size: usize,
    /// Pause between translation batches
    pub translation_delay: Duration,
    /// Language code translated from
    pub source_lang: String,
    /// Language code translated to
    pub target_lang: String,
    /// Directory for log, checkpoint and report files
    pub output_dir: PathBuf,
    /// Skip the translation phase entirely
    pub no_translate: bool,
    /// Optional per-request timeout for provider HTTP calls.
    /// None defers to the HTTP client's own defaults.
    pub request_timeout: Option<Duration>,
    /// Markdown report filename (inside output_dir)
    pub markdown_output: String,
    /// Base name for the CSV exports (inside output_dir)
    pub csv_output: String,
    /// Base URL overrides for the translation providers, mainly for tests
    pub google_base_url: Option<String>,
    pub mymemory_base_url: Option<String>,
    pub libretranslate_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let batch_size = std::env::var("I18N_BATCH_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(10);

        let delay_secs: f64 = std::env::var("I18N_TRANSLATION_DELAY")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&s: &f64| s >= 0.0)
            .unwrap_or(1.0);

        let request_timeout = std::env::var("I18N_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|&s| s > 0.0)
            .map(Duration::from_secs_f64);

        Ok(Self {
            batch_size,
            translation_delay: Duration::from_secs_f64(delay_secs),
            source_lang: std::env::var("I18N_SOURCE_LANG").unwrap_or_else(|_| "zh".to_string()),
            target_lang: std::env::var("I18N_TARGET_LANG").unwrap_or_else(|_| "en".to_string()),
            output_dir: std::env::var("I18N_OUTPUT_DIR")
                .unwrap_or_else(|_| "output".to_string())
                .into(),
            no_translate: std::env::var("I18N_NO_TRANSLATE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            request_timeout,
            markdown_output: std::env::var("I18N_MARKDOWN_OUTPUT")
                .unwrap_or_else(|_| "hardcoded_strings.md".to_string()),
            csv_output: std::env::var("I18N_CSV_OUTPUT")
                .unwrap_or_else(|_| "hardcoded_strings".to_string()),
            google_base_url: std::env::var("I18N_GOOGLE_BASE_URL").ok(),
            mymemory_base_url: std::env::var("I18N_MYMEMORY_BASE_URL").ok(),
            libretranslate_base_url: std::env::var("I18N_LIBRETRANSLATE_BASE_URL").ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "I18N_BATCH_SIZE",
            "I18N_TRANSLATION_DELAY",
            "I18N_SOURCE_LANG",
            "I18N_TARGET_LANG",
            "I18N_OUTPUT_DIR",
            "I18N_NO_TRANSLATE",
            "I18N_REQUEST_TIMEOUT",
            "I18N_MARKDOWN_OUTPUT",
            "I18N_CSV_OUTPUT",
            "I18N_GOOGLE_BASE_URL",
            "I18N_MYMEMORY_BASE_URL",
            "I18N_LIBRETRANSLATE_BASE_URL",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().expect("config");
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.translation_delay, Duration::from_secs(1));
        assert_eq!(config.source_lang, "zh");
        assert_eq!(config.target_lang, "en");
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(!config.no_translate);
        assert!(config.request_timeout.is_none());
        assert_eq!(config.markdown_output, "hardcoded_strings.md");
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("I18N_BATCH_SIZE", "5");
        std::env::set_var("I18N_TRANSLATION_DELAY", "0.5");
        std::env::set_var("I18N_NO_TRANSLATE", "true");
        std::env::set_var("I18N_REQUEST_TIMEOUT", "30");
        let config = Config::from_env().expect("config");
        assert_eq!(config.batch_size, 5);
        assert_eq!(config.translation_delay, Duration::from_millis(500));
        assert!(config.no_translate);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_batch_size_falls_back_to_default() {
        clear_env();
        std::env::set_var("I18N_BATCH_SIZE", "0");
        let config = Config::from_env().expect("config");
        assert_eq!(config.batch_size, 10);

        std::env::set_var("I18N_BATCH_SIZE", "not-a-number");
        let config = Config::from_env().expect("config");
        assert_eq!(config.batch_size, 10);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_negative_delay_falls_back_to_default() {
        clear_env();
        std::env::set_var("I18N_TRANSLATION_DELAY", "-2.0");
        let config = Config::from_env().expect("config");
        assert_eq!(config.translation_delay, Duration::from_secs(1));
        clear_env();
    }
}
