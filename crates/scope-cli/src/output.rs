//! Result output as pretty JSON or as a CSV table.

use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use scope_analysis::{AnalysisRow, BatchReport};
use serde::Serialize;

use crate::dry_run::{PreviewReport, PreviewRow};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The full report, including run metadata and retrieved sections
    #[default]
    Json,
    /// One row per email with the verdict columns
    Csv,
}

const VERDICT_COLUMNS: [&str; 7] = [
    "email_body",
    "scope_creep",
    "relevant_scope",
    "justification",
    "suggestion",
    "risk_level",
    "impact_analysis",
];

const PREVIEW_COLUMNS: [&str; 3] = ["email_body", "top_score", "relevant_scope"];

/// Verdict columns of one analysed email, in `VERDICT_COLUMNS` order.
#[derive(Debug, Serialize)]
struct VerdictRecord<'a> {
    email_body: &'a str,
    scope_creep: String,
    relevant_scope: &'a str,
    justification: &'a str,
    suggestion: &'a str,
    risk_level: &'a str,
    impact_analysis: &'a str,
}

impl<'a> From<&'a AnalysisRow> for VerdictRecord<'a> {
    fn from(row: &'a AnalysisRow) -> Self {
        let verdict = &row.verdict;
        Self {
            email_body: &row.email_body,
            scope_creep: verdict.scope_creep.to_string(),
            relevant_scope: &verdict.reference_scope_line,
            justification: &verdict.justification,
            suggestion: &verdict.suggestion,
            risk_level: verdict.risk_level.as_str(),
            impact_analysis: &verdict.impact_analysis,
        }
    }
}

/// In `PREVIEW_COLUMNS` order.
#[derive(Debug, Serialize)]
struct PreviewRecord<'a> {
    email_body: &'a str,
    top_score: Option<f64>,
    relevant_scope: &'a str,
}

impl<'a> From<&'a PreviewRow> for PreviewRecord<'a> {
    fn from(row: &'a PreviewRow) -> Self {
        Self {
            email_body: &row.email_body,
            top_score: row.relevant_sections.first().map(|s| s.score),
            relevant_scope: &row.context,
        }
    }
}

pub fn write_report(report: &BatchReport, format: OutputFormat, path: Option<&Path>) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(report, path),
        OutputFormat::Csv => write_csv(
            &VERDICT_COLUMNS,
            report.rows.iter().map(VerdictRecord::from),
            path,
        ),
    }
}

pub fn write_preview(report: &PreviewReport, format: OutputFormat, path: Option<&Path>) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(report, path),
        OutputFormat::Csv => write_csv(
            &PREVIEW_COLUMNS,
            report.rows.iter().map(PreviewRecord::from),
            path,
        ),
    }
}

/// Write `value` as pretty JSON to `path`, or to stdout when `path` is `None`.
fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize results")?;
    write_bytes(format!("{json}\n").as_bytes(), path)
}

/// Write a header row, then one CSV row per record.
fn write_csv<R: Serialize>(
    columns: &[&str],
    records: impl IntoIterator<Item = R>,
    path: Option<&Path>,
) -> Result<()> {
    let bytes = csv_bytes(columns, records)?;
    write_bytes(&bytes, path)
}

/// The header is written explicitly so an empty batch still yields one.
fn csv_bytes<R: Serialize>(columns: &[&str], records: impl IntoIterator<Item = R>) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(columns)
        .context("failed to write CSV header")?;
    for (i, record) in records.into_iter().enumerate() {
        writer
            .serialize(record)
            .with_context(|| format!("failed to serialize CSV row {i}"))?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow!("failed to flush CSV output: {}", e.error()))
}

fn write_bytes(bytes: &[u8], path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, bytes)
            .with_context(|| format!("failed to write results to {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|()| stdout.flush())
                .context("failed to write results to stdout")
        }
    }
}
