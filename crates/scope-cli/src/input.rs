//! Batch input: the scope document and the email list.

use std::path::Path;

use anyhow::{bail, Context, Result};
use scope_core::constants::EMAIL_BODY_FIELD;
use serde_json::Value;

/// Read the scope document as UTF-8 text.
pub fn read_scope(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scope document {}", path.display()))
}

/// Read emails from a CSV file with an `email_body` column, or from a JSON
/// array / JSON Lines file of `{"email_body": ...}` records.
///
/// Files that are not valid UTF-8 are decoded as Latin-1, which is what
/// spreadsheet exports commonly produce.
pub fn read_emails(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read emails file {}", path.display()))?;
    let content = decode_text(bytes);
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let parsed = if is_csv {
        parse_csv_emails(&content)
    } else {
        parse_emails(&content)
    };
    parsed.with_context(|| format!("invalid emails file {}", path.display()))
}

/// UTF-8 when valid, Latin-1 otherwise. Latin-1 maps every byte to the
/// code point of the same value, so decoding never fails.
fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().iter().map(|&b| char::from(b)).collect(),
    }
}

/// Parse email records. A leading `[` selects JSON array format, a leading
/// `{` selects JSON Lines (blank lines skipped), anything else is read as
/// CSV with a header row.
pub fn parse_emails(content: &str) -> Result<Vec<String>> {
    let content = content.trim_start_matches('\u{feff}');
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if !trimmed.starts_with(['[', '{']) {
        return parse_csv_emails(content);
    }
    if trimmed.starts_with('[') {
        let records: Vec<Value> =
            serde_json::from_str(trimmed).context("emails JSON array does not parse")?;
        records
            .iter()
            .enumerate()
            .map(|(i, record)| email_body(record, i + 1))
            .collect()
    } else {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                let record: Value = serde_json::from_str(line)
                    .with_context(|| format!("line {} is not valid JSON", i + 1))?;
                email_body(&record, i + 1)
            })
            .collect()
    }
}

/// Parse a CSV document whose header row names an `email_body` column.
/// Other columns are ignored. Quoted fields may span lines.
pub fn parse_csv_emails(content: &str) -> Result<Vec<String>> {
    let content = content.trim_start_matches('\u{feff}');
    let mut reader = csv::ReaderBuilder::new().from_reader(content.as_bytes());
    let column = reader
        .headers()
        .context("emails CSV header row does not parse")?
        .iter()
        .position(|header| header.trim() == EMAIL_BODY_FIELD)
        .with_context(|| format!("emails CSV has no {EMAIL_BODY_FIELD} column"))?;

    reader
        .records()
        .enumerate()
        .map(|(i, record)| {
            let record = record.with_context(|| format!("CSV record {} does not parse", i + 1))?;
            record
                .get(column)
                .map(str::to_string)
                .with_context(|| format!("CSV record {} has no {EMAIL_BODY_FIELD} value", i + 1))
        })
        .collect()
}

fn email_body(record: &Value, number: usize) -> Result<String> {
    match record.get(EMAIL_BODY_FIELD) {
        Some(Value::String(body)) => Ok(body.clone()),
        Some(_) => bail!("record {number}: {EMAIL_BODY_FIELD} must be a string"),
        None => bail!("record {number} has no {EMAIL_BODY_FIELD} field"),
    }
}
