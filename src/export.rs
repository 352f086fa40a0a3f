//! Report renderers: a Markdown summary and a spreadsheet-style CSV export.
//!
//! Renderers are pure consumers of the record list and statistics snapshot.
//! The CSV export mirrors the three logical groupings of the spreadsheet
//! report: all records, statistics, and translation-needed records only.

use crate::model::StringRecord;
use crate::stats::RunStatistics;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Truncate long cells so the Markdown table stays readable. Char-based,
/// since original strings are routinely multi-byte.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// Write the Markdown analysis report: statistics block plus a table of
/// every record.
pub fn write_markdown(
    records: &[StringRecord],
    stats: &RunStatistics,
    output_path: &Path,
) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "# Hardcoded Strings Analysis")?;
    writeln!(w)?;
    writeln!(w, "## Statistics")?;
    writeln!(w)?;
    writeln!(w, "- Total strings: {}", stats.total)?;
    writeln!(w, "- Source-language strings: {}", stats.source_language)?;
    writeln!(w, "- Target-language strings: {}", stats.target_language)?;
    writeln!(w, "- Successfully translated: {}", stats.translated)?;
    writeln!(w, "- Failed translations: {}", stats.failed)?;
    writeln!(w)?;
    writeln!(w, "## Extracted Strings")?;
    writeln!(w)?;
    writeln!(
        w,
        "| File Path | Package | Line | Category | Original String | Translated String | Status |"
    )?;
    writeln!(
        w,
        "|-----------|---------|------|----------|-----------------|-------------------|--------|"
    )?;

    for record in records {
        writeln!(
            w,
            "| {} | {} | {} | {} | {} | {} | {} |",
            truncate(&record.file_path, 50),
            truncate(&record.package, 30),
            record.line,
            record.category,
            truncate(&record.original_string, 40),
            truncate(&record.translated_string, 40),
            record.translation_status,
        )?;
    }

    w.flush()
        .with_context(|| format!("Failed to flush {}", output_path.display()))?;
    info!("Markdown report exported to {}", output_path.display());
    Ok(())
}

fn write_record_rows(writer: &mut csv::Writer<File>, records: &[StringRecord]) -> Result<()> {
    writer.write_record([
        "file_path",
        "package",
        "module",
        "line",
        "category",
        "original_string",
        "translated_string",
        "translation_status",
    ])?;
    for record in records {
        writer.write_record([
            record.file_path.as_str(),
            record.package.as_str(),
            record.module.as_str(),
            record.line.as_str(),
            &record.category.to_string(),
            record.original_string.as_str(),
            record.translated_string.as_str(),
            &record.translation_status.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the three CSV groupings next to each other:
/// `{base}.csv` (all records), `{base}_statistics.csv`,
/// `{base}_translation_needed.csv` (source-language records only).
/// Returns the paths written.
pub fn write_csv_reports(
    records: &[StringRecord],
    stats: &RunStatistics,
    output_dir: &Path,
    base_name: &str,
) -> Result<Vec<PathBuf>> {
    let all_path = output_dir.join(format!("{}.csv", base_name));
    let stats_path = output_dir.join(format!("{}_statistics.csv", base_name));
    let needed_path = output_dir.join(format!("{}_translation_needed.csv", base_name));

    let mut all_writer = csv::Writer::from_path(&all_path)
        .with_context(|| format!("Failed to create {}", all_path.display()))?;
    write_record_rows(&mut all_writer, records)?;

    let mut stats_writer = csv::Writer::from_path(&stats_path)
        .with_context(|| format!("Failed to create {}", stats_path.display()))?;
    stats_writer.write_record(["Metric", "Value"])?;
    stats_writer.write_record(["Total strings", &stats.total.to_string()])?;
    stats_writer.write_record(["Source-language strings", &stats.source_language.to_string()])?;
    stats_writer.write_record(["Target-language strings", &stats.target_language.to_string()])?;
    stats_writer.write_record(["Successfully translated", &stats.translated.to_string()])?;
    stats_writer.write_record(["Failed translations", &stats.failed.to_string()])?;
    stats_writer.flush()?;

    let needed: Vec<StringRecord> = records
        .iter()
        .filter(|r| r.needs_translation())
        .cloned()
        .collect();
    let mut needed_writer = csv::Writer::from_path(&needed_path)
        .with_context(|| format!("Failed to create {}", needed_path.display()))?;
    write_record_rows(&mut needed_writer, &needed)?;

    info!("CSV reports exported to {}", output_dir.display());
    Ok(vec![all_path, stats_path, needed_path])
}
