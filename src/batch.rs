//! Batched translation of the source-language subset.
//!
//! Batches run strictly in sequence, one item at a time, so provider request
//! order stays deterministic and inter-batch pacing actually paces. After
//! every batch except the last one a checkpoint is written and the flow
//! sleeps for the configured delay.

use crate::checkpoint::Checkpoint;
use crate::config::Config;
use crate::gateway::Translate;
use crate::model::{StringRecord, TranslationStatus};
use crate::stats::RunStatistics;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};

pub struct BatchTranslator {
    batch_size: usize,
    delay: Duration,
    output_dir: PathBuf,
}

impl BatchTranslator {
    pub fn new(batch_size: usize, delay: Duration, output_dir: PathBuf) -> Self {
        Self {
            // chunks() panics on zero
            batch_size: batch_size.max(1),
            delay,
            output_dir,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.batch_size,
            config.translation_delay,
            config.output_dir.clone(),
        )
    }

    /// Translate every source-language record in place. Per-item failures
    /// and unexpected errors are absorbed into the record's status; nothing
    /// escapes this method.
    pub async fn run(
        &self,
        translator: &dyn Translate,
        records: &mut [StringRecord],
        stats: &mut RunStatistics,
    ) {
        let indices: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.needs_translation())
            .map(|(i, _)| i)
            .collect();

        if indices.is_empty() {
            info!("No source-language strings found for translation");
            return;
        }

        let total = indices.len();
        let batch_count = total.div_ceil(self.batch_size);
        info!(
            "Starting translation of {} strings in {} batches",
            total, batch_count
        );

        let mut completed = 0usize;
        for (batch_idx, chunk) in indices.chunks(self.batch_size).enumerate() {
            for &i in chunk {
                let original = records[i].original_string.clone();
                match translator.translate(&original).await {
                    Ok(translated) => {
                        records[i].translated_string = translated;
                        records[i].translation_status = TranslationStatus::Success;
                        stats.record_translated();
                    }
                    Err(e) if e.is_reported_failure() => {
                        warn!("Translation failed for '{}': {}", original, e);
                        records[i].translation_status = TranslationStatus::Failed;
                        stats.record_failed();
                    }
                    Err(e) => {
                        error!("Translation error for '{}': {}", original, e);
                        records[i].translation_status = TranslationStatus::Error;
                        stats.record_failed();
                    }
                }

                completed += 1;
                info!("[{}/{}] translated", completed, total);
            }

            // Checkpoint and pace after every batch except the final one
            if batch_idx + 1 < batch_count {
                let checkpoint = Checkpoint::new(batch_idx + 1, batch_count, stats, records);
                match checkpoint.write_to(&self.output_dir) {
                    Ok(path) => info!("Progress saved to {}", path.display()),
                    Err(e) => error!("Failed to save progress: {:#}", e),
                }
                tokio::time::sleep(self.delay).await;
            }
        }
    }
}
