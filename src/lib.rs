//! Extraction, classification and translation of hardcoded string literals
//! flagged by IDEA inspection reports.
//!
//! The pipeline parses inspection XML into [`model::StringRecord`]s,
//! classifies each literal (format string, source-language text, or already
//! target-language), pushes the source-language subset through an ordered
//! chain of external translation providers in paced batches, and renders
//! Markdown and CSV reports plus per-batch progress checkpoints.

pub mod batch;
pub mod checkpoint;
pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod gateway;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod retry;
pub mod stats;

pub use config::Config;
pub use error::{ParseError, TranslateError};
pub use model::{Category, StringRecord, TranslationStatus};
pub use pipeline::{run, RunOutcome};
pub use stats::RunStatistics;
