//! Batch progress checkpoints.
//!
//! A checkpoint is an immutable snapshot written after each non-final batch:
//! batch position, a timestamp, the statistics at that point and the full
//! record list. It is an audit artifact only; nothing in this pipeline ever
//! reads one back to resume a run.

use crate::model::StringRecord;
use crate::stats::RunStatistics;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Human-readable position, e.g. "Batch 2 of 5"
    pub batch_info: String,
    /// 1-based index of the batch just completed
    pub batch_index: usize,
    /// Total number of batches in this run
    pub batch_count: usize,
    /// `YYYY-MM-DD HH:MM:SS` UTC
    pub timestamp: String,
    pub statistics: RunStatistics,
    pub records: Vec<StringRecord>,
}

impl Checkpoint {
    pub fn new(
        batch_index: usize,
        batch_count: usize,
        statistics: &RunStatistics,
        records: &[StringRecord],
    ) -> Self {
        Self {
            batch_info: format!("Batch {} of {}", batch_index, batch_count),
            batch_index,
            batch_count,
            timestamp: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            statistics: statistics.snapshot(),
            records: records.to_vec(),
        }
    }

    /// File name encoding the batch position.
    pub fn file_name(&self) -> String {
        format!(
            "translation_progress_batch_{}_of_{}.json",
            self.batch_index, self.batch_count
        )
    }

    /// Write the checkpoint as pretty-printed UTF-8 JSON into `dir`. The
    /// file handle is scoped to this call, so an error partway through never
    /// leaks it.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        let file = File::create(&path)
            .with_context(|| format!("Failed to create checkpoint file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("Failed to serialize checkpoint to {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush checkpoint {}", path.display()))?;
        Ok(path)
    }
}
