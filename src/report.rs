//! IDEA inspection report parsing.
//!
//! An inspection export is an XML document whose root holds a flat list of
//! `<problem>` entries. Each entry is turned into one [`StringRecord`],
//! classified on the spot, and counted into the run statistics. Re-parsing
//! the same source always yields the same records.

use crate::classify::classify;
use crate::error::ParseError;
use crate::model::StringRecord;
use crate::stats::RunStatistics;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Fallback extraction from the free-text description, e.g.
/// `Hardcoded string literal: "并发任务异常："`.
fn description_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Hardcoded string literal:\s*(.+)$").expect("description pattern is valid")
    })
}

/// Strip the IDE's URI prefixes so paths are project-relative.
fn normalize_file_path(raw: &str) -> &str {
    raw.strip_prefix("file://$PROJECT_DIR$/")
        .or_else(|| raw.strip_prefix("file://"))
        .unwrap_or(raw)
}

fn child_text<'a>(node: roxmltree::Node<'a, '_>, tag: &str) -> &'a str {
    node.children()
        .find(|n| n.has_tag_name(tag))
        .and_then(|n| n.text())
        .unwrap_or("")
}

/// Parse one inspection report file into records, updating `stats` as
/// records are produced. A malformed file fails as a whole with
/// [`ParseError`]; the caller decides whether to skip it.
pub fn parse_report(path: &Path, stats: &mut RunStatistics) -> Result<Vec<StringRecord>, ParseError> {
    let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let records = parse_report_str(&text, stats).map_err(|source| ParseError::Malformed {
        path: path.display().to_string(),
        source,
    })?;

    info!(
        "Extracted {} hardcoded strings from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parse report XML from memory. Entries with no extractable literal are
/// excluded from the output and from the statistics; only a debug-level
/// count records that they existed.
pub fn parse_report_str(
    xml: &str,
    stats: &mut RunStatistics,
) -> Result<Vec<StringRecord>, roxmltree::Error> {
    let doc = roxmltree::Document::parse(xml)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for problem in doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("problem"))
    {
        let literal = match problem
            .children()
            .find(|n| n.has_tag_name("highlighted_element"))
        {
            // A present-but-empty highlighted element does not fall back to
            // the description; the entry is just skipped.
            Some(node) => node.text().unwrap_or("").to_string(),
            None => description_pattern()
                .captures(child_text(problem, "description"))
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        };

        if literal.is_empty() {
            skipped += 1;
            continue;
        }

        let category = classify(&literal);
        let record = StringRecord::new(
            normalize_file_path(child_text(problem, "file")).to_string(),
            child_text(problem, "package").to_string(),
            child_text(problem, "module").to_string(),
            child_text(problem, "line").to_string(),
            literal,
            category,
        );

        stats.record_parsed(category);
        records.push(record);
    }

    if skipped > 0 {
        debug!("{} problem entries had no extractable literal and were skipped", skipped);
    }

    Ok(records)
}
