//! Top-level run orchestration: parse all sources, translate the
//! source-language subset, render reports.

use crate::batch::BatchTranslator;
use crate::config::Config;
use crate::export;
use crate::gateway::{Translate, TranslationGateway};
use crate::model::StringRecord;
use crate::report::parse_report;
use crate::stats::RunStatistics;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Everything a caller needs after a run: the final record list and the
/// statistics snapshot.
#[derive(Debug)]
pub struct RunOutcome {
    pub records: Vec<StringRecord>,
    pub statistics: RunStatistics,
}

/// Parse the given report files, skipping malformed ones. A bad source is
/// logged and dropped; it never aborts the run.
pub fn parse_sources(sources: &[PathBuf], stats: &mut RunStatistics) -> Vec<StringRecord> {
    let mut records = Vec::new();
    for source in sources {
        match parse_report(source, stats) {
            Ok(parsed) => records.extend(parsed),
            Err(e) => warn!("Skipping report source: {:#}", e),
        }
    }
    records
}

/// Run the full pipeline against the default provider gateway.
pub async fn run(config: &Config, sources: &[PathBuf]) -> Result<RunOutcome> {
    let gateway = TranslationGateway::from_config(config)?;
    run_with_translator(config, sources, &gateway).await
}

/// Run the full pipeline with an injected translation capability.
pub async fn run_with_translator(
    config: &Config,
    sources: &[PathBuf],
    translator: &dyn Translate,
) -> Result<RunOutcome> {
    info!("Starting i18n extraction process");

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let mut stats = RunStatistics::new();
    let mut records = parse_sources(sources, &mut stats);

    if records.is_empty() {
        anyhow::bail!("No strings were extracted from the provided report files");
    }

    if config.no_translate {
        info!("Translation disabled, leaving all records pending");
    } else {
        BatchTranslator::from_config(config)
            .run(translator, &mut records, &mut stats)
            .await;
    }

    // Export failures are logged and absorbed so one broken writer does not
    // lose the other report.
    let markdown_path = config.output_dir.join(&config.markdown_output);
    if let Err(e) = export::write_markdown(&records, &stats, &markdown_path) {
        error!("Failed to export Markdown: {:#}", e);
    }
    if let Err(e) =
        export::write_csv_reports(&records, &stats, &config.output_dir, &config.csv_output)
    {
        error!("Failed to export CSV: {:#}", e);
    }

    info!("Extraction completed successfully");
    info!(
        "Statistics: total={} source={} target={} translated={} failed={}",
        stats.total, stats.source_language, stats.target_language, stats.translated, stats.failed
    );

    Ok(RunOutcome {
        records,
        statistics: stats,
    })
}
