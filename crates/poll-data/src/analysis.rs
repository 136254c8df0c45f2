//! Main analysis pipeline for Pollwatch.
//!
//! Orchestrates loading the polling CSV and running the metric queries,
//! returning a [`PollReport`] ready for rendering or JSON output.

use std::path::{Path, PathBuf};

use chrono::Utc;
use poll_core::error::Result;
use poll_core::metrics::{CandidatePair, HighestPolling, PollMetrics};
use tracing::debug;

use crate::reader::load_dataset;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the poll report.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReportMetadata {
    /// ISO-8601 timestamp when this report was generated.
    pub generated_at: String,
    /// The polling data file the report was computed from.
    pub source: PathBuf,
    /// Number of records accepted into the dataset.
    pub rows_analyzed: usize,
    /// Wall-clock seconds spent reading and parsing the file.
    pub load_time_seconds: f64,
}

/// The complete output of [`analyze_polls`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PollReport {
    /// The single highest polling result, or `None` for an empty dataset.
    pub highest_polling: Option<HighestPolling>,
    /// Average results over likely-voter records, Harris first.
    pub likely_voter_average: CandidatePair,
    /// Net change between the latest and earliest comparison windows.
    pub history_change: CandidatePair,
    /// Metadata about this analysis run.
    pub metadata: ReportMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full analysis pipeline over the polling file at `path`.
///
/// 1. Load and parse the CSV into the column-oriented dataset.
/// 2. Run the three metric queries against it.
/// 3. Return a [`PollReport`] with run metadata.
///
/// Fails when the file cannot be read or a row fails numeric conversion;
/// rows dropped by the column-count rule are not an error.
pub fn analyze_polls(path: &Path) -> Result<PollReport> {
    // ── Step 1: Load the dataset ──────────────────────────────────────────────
    let load_start = std::time::Instant::now();
    let dataset = load_dataset(path)?;
    let load_time = load_start.elapsed().as_secs_f64();

    debug!(
        "Loaded {} records from {} in {:.3}s",
        dataset.len(),
        path.display(),
        load_time
    );

    // ── Step 2: Run the queries ───────────────────────────────────────────────
    let highest_polling = PollMetrics::highest_polling_candidate(&dataset);
    let likely_voter_average = PollMetrics::likely_voter_polling_average(&dataset);
    let history_change = PollMetrics::polling_history_change(&dataset);

    // ── Step 3: Build the report ──────────────────────────────────────────────
    let metadata = ReportMetadata {
        generated_at: Utc::now().to_rfc3339(),
        source: path.to_path_buf(),
        rows_analyzed: dataset.len(),
        load_time_seconds: load_time,
    };

    Ok(PollReport {
        highest_polling,
        likely_voter_average,
        history_change,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
