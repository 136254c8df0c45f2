//! Polling CSV ingestion for Pollwatch.
//!
//! Reads a comma-delimited polling file and converts its rows into the
//! column-oriented [`PollDataset`] for downstream queries.

use std::io::BufRead;
use std::path::Path;

use poll_core::error::{PollError, Result};
use poll_core::models::{PollDataset, PollRecord};
use tracing::debug;

/// Number of comma-separated fields a well-formed row must carry.
const EXPECTED_FIELDS: usize = 5;

// ── Public API ────────────────────────────────────────────────────────────────

/// Read every line of `path` into memory, closing the handle before
/// returning.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path).map_err(|source| PollError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = std::io::BufReader::new(file);
    reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|source| PollError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Parse raw CSV lines into a [`PollDataset`].
///
/// The first line is a header and is always discarded, whatever it contains.
/// Remaining lines are trimmed; empty lines and lines that do not split into
/// exactly [`EXPECTED_FIELDS`] comma-separated fields are skipped. A field
/// that fails its numeric conversion aborts the whole parse; rows are
/// committed to the store only once every field has converted, so a failed
/// row never leaves the columns out of step.
pub fn parse_dataset(lines: &[String]) -> Result<PollDataset> {
    let mut dataset = PollDataset::default();
    let mut candidates = 0usize;
    let mut skipped = 0usize;

    for (index, raw) in lines.iter().enumerate().skip(1) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        candidates += 1;
        // 1-based line number for log and error messages.
        let line_number = index + 1;

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != EXPECTED_FIELDS {
            debug!(
                "Skipping line {}: expected {} fields, found {}",
                line_number,
                EXPECTED_FIELDS,
                fields.len()
            );
            skipped += 1;
            continue;
        }

        let record = parse_record(&fields, line_number)?;
        dataset.push(record);
    }

    debug!(
        "Parsed {} of {} candidate rows ({} skipped)",
        dataset.len(),
        candidates,
        skipped
    );

    Ok(dataset)
}

/// Read and parse the polling file at `path` in one step.
pub fn load_dataset(path: &Path) -> Result<PollDataset> {
    let lines = read_lines(path)?;
    parse_dataset(&lines)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Parse one well-formed (5-field) row into a [`PollRecord`].
fn parse_record(fields: &[&str], line: usize) -> Result<PollRecord> {
    let month = fields[0].trim().to_string();

    let date_text = fields[1].trim();
    let date = date_text
        .parse::<i32>()
        .map_err(|source| PollError::InvalidInteger {
            field: "date",
            value: date_text.to_string(),
            line,
            source,
        })?;

    // The sample field is composite: a size optionally followed by a
    // space-separated population code, e.g. "1880 LV".
    let sample = fields[2].trim();
    let mut tokens = sample.splitn(2, ' ');
    let size_text = tokens.next().unwrap_or_default();
    let sample_size = size_text
        .parse::<u32>()
        .map_err(|source| PollError::InvalidInteger {
            field: "sample size",
            value: size_text.to_string(),
            line,
            source,
        })?;
    let sample_type = tokens.next().map(str::to_string);

    let harris_result = parse_result(fields[3], "Harris result", line)?;
    let trump_result = parse_result(fields[4], "Trump result", line)?;

    Ok(PollRecord {
        month,
        date,
        sample_size,
        sample_type,
        harris_result,
        trump_result,
    })
}

/// Parse a percentage field, stripping any `%` signs before conversion.
fn parse_result(field: &str, name: &'static str, line: usize) -> Result<f64> {
    let text = field.trim();
    text.replace('%', "")
        .parse::<f64>()
        .map_err(|source| PollError::InvalidFloat {
            field: name,
            value: text.to_string(),
            line,
            source,
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
