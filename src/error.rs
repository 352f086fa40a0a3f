//! Error taxonomy for the extraction pipeline.
//!
//! Everything below "cannot parse this source at all" is absorbed locally:
//! translation failures land in record-level status fields, bad sources are
//! skipped per-source, checkpoint write failures are logged and ignored.
//! Nothing deeper than these types escapes the parser or batch boundaries.

use thiserror::Error;

/// A report source could not be parsed at all. The caller logs and skips the
/// source; a single bad input never aborts a multi-source run.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read report {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("report {path} is not well-formed XML: {source}")]
    Malformed {
        path: String,
        #[source]
        source: roxmltree::Error,
    },
}

/// Why a translation attempt produced no result.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Structural: the gateway was built with an empty provider list.
    /// Surfaced once at construction, not once per item.
    #[error("no translation providers configured")]
    NoProviders,
    /// The input was empty after quote stripping; no provider contacted.
    #[error("input is empty after normalization")]
    EmptyInput,
    /// Every configured provider was tried and declined.
    #[error("all {attempted} translation providers failed")]
    AllProvidersFailed { attempted: usize },
    /// A single provider's request failed; the gateway treats this as a soft
    /// failure and falls through to the next provider.
    #[error("provider {provider} failed: {message}")]
    Provider {
        provider: &'static str,
        message: String,
    },
}

impl TranslateError {
    /// Gateway-reported failures map to `Failed` on the record; anything
    /// else is an unexpected error and maps to `Error`.
    pub fn is_reported_failure(&self) -> bool {
        matches!(
            self,
            TranslateError::NoProviders
                | TranslateError::EmptyInput
                | TranslateError::AllProvidersFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_failures() {
        assert!(TranslateError::NoProviders.is_reported_failure());
        assert!(TranslateError::EmptyInput.is_reported_failure());
        assert!(TranslateError::AllProvidersFailed { attempted: 3 }.is_reported_failure());
    }

    #[test]
    fn test_provider_error_is_unexpected_at_gateway_boundary() {
        let err = TranslateError::Provider {
            provider: "google",
            message: "connection reset".to_string(),
        };
        assert!(!err.is_reported_failure());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TranslateError::NoProviders.to_string(),
            "no translation providers configured"
        );
        let err = TranslateError::AllProvidersFailed { attempted: 2 };
        assert!(err.to_string().contains("2"));
    }
}
