//! Run statistics owned by a single invocation.
//!
//! An earlier design kept process-wide counters; these are now carried as an
//! explicit value passed through the parser and the batch translator so that
//! repeated runs stay independent and tests never share state.

use crate::model::Category;
use serde::{Deserialize, Serialize};

/// Counters accumulated across one run. Never decremented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Every record produced by the parsers.
    pub total: usize,
    /// Records classified as source-language text (the translatable subset).
    pub source_language: usize,
    /// Records classified as already being in the target language.
    pub target_language: usize,
    /// Records translated successfully.
    pub translated: usize,
    /// Records whose translation failed or errored.
    pub failed: usize,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one freshly parsed record. Format entries bump only `total`.
    pub fn record_parsed(&mut self, category: Category) {
        self.total += 1;
        match category {
            Category::SourceLanguage => self.source_language += 1,
            Category::TargetLanguage => self.target_language += 1,
            Category::Format => {}
        }
    }

    pub fn record_translated(&mut self) {
        self.translated += 1;
    }

    pub fn record_failed(&mut self) {
        self.failed += 1;
    }

    /// Point-in-time copy for checkpoints and renderers.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}
