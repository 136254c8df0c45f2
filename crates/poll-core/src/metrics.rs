use std::fmt;

use serde::{Deserialize, Serialize};

use crate::formatting::format_percent;
use crate::models::{is_likely_voter, PollDataset};

/// Number of records in each comparison window of
/// [`PollMetrics::polling_history_change`].
pub const HISTORY_WINDOW: usize = 30;

/// Which candidate posted the single highest polling result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PollLeader {
    Harris,
    Trump,
    /// Both column maxima are exactly equal.
    Even,
}

impl fmt::Display for PollLeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollLeader::Harris => write!(f, "Harris"),
            PollLeader::Trump => write!(f, "Trump"),
            PollLeader::Even => write!(f, "EVEN"),
        }
    }
}

/// The single highest polling result across both candidates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighestPolling {
    /// The candidate holding the highest result, or [`PollLeader::Even`].
    pub leader: PollLeader,
    /// The winning percentage on the 0-100 scale.
    pub percent: f64,
}

impl fmt::Display for HighestPolling {
    /// Renders like `Harris with 57.0%`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with {}", self.leader, format_percent(self.percent, 1))
    }
}

/// A Harris/Trump value pair, Harris first.
///
/// Carries averages for the likely-voter query and net changes for the
/// history query. The zero pair doubles as the "no qualifying data" result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidatePair {
    pub harris: f64,
    pub trump: f64,
}

// ── PollMetrics ───────────────────────────────────────────────────────────────

/// Stateless collection of the descriptive-statistics queries.
pub struct PollMetrics;

impl PollMetrics {
    /// Find the single highest polling result recorded for either candidate.
    ///
    /// Both result columns are scanned in full, so the winning value may come
    /// from any record, not only rows where that candidate led. Returns
    /// `None` when the store is empty and [`PollLeader::Even`] when the two
    /// column maxima are exactly equal.
    pub fn highest_polling_candidate(data: &PollDataset) -> Option<HighestPolling> {
        if data.is_empty() {
            return None;
        }
        let harris_max = column_max(&data.harris_result);
        let trump_max = column_max(&data.trump_result);

        let highest = if harris_max > trump_max {
            HighestPolling {
                leader: PollLeader::Harris,
                percent: harris_max,
            }
        } else if trump_max > harris_max {
            HighestPolling {
                leader: PollLeader::Trump,
                percent: trump_max,
            }
        } else {
            HighestPolling {
                leader: PollLeader::Even,
                percent: harris_max,
            }
        };
        Some(highest)
    }

    /// Average result per candidate over likely-voter records only.
    ///
    /// A record qualifies when its sample-type code contains "LV" in any
    /// case (see [`is_likely_voter`]). Returns the zero pair when no record
    /// qualifies.
    pub fn likely_voter_polling_average(data: &PollDataset) -> CandidatePair {
        let mut harris_sum = 0.0;
        let mut trump_sum = 0.0;
        let mut count = 0usize;

        let rows = data
            .sample_type
            .iter()
            .zip(&data.harris_result)
            .zip(&data.trump_result);
        for ((sample_type, harris), trump) in rows {
            if is_likely_voter(sample_type.as_deref()) {
                harris_sum += harris;
                trump_sum += trump;
                count += 1;
            }
        }

        if count == 0 {
            return CandidatePair::default();
        }
        CandidatePair {
            harris: harris_sum / count as f64,
            trump: trump_sum / count as f64,
        }
    }

    /// Net change per candidate between the two 30-record comparison windows.
    ///
    /// The store keeps source order with the newest poll first, so the head
    /// window holds the latest [`HISTORY_WINDOW`] records and the tail window
    /// the earliest. The change is mean(head window) minus mean(tail window),
    /// positive when recent polling runs higher. Returns the zero pair when
    /// fewer than `2 * HISTORY_WINDOW` records are stored.
    pub fn polling_history_change(data: &PollDataset) -> CandidatePair {
        if data.len() < 2 * HISTORY_WINDOW {
            return CandidatePair::default();
        }
        CandidatePair {
            harris: window_change(&data.harris_result),
            trump: window_change(&data.trump_result),
        }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Maximum of a non-empty result column.
fn column_max(results: &[f64]) -> f64 {
    results.iter().copied().fold(f64::MIN, f64::max)
}

/// mean(head window) - mean(tail window) for a column with at least
/// `2 * HISTORY_WINDOW` entries.
fn window_change(results: &[f64]) -> f64 {
    let latest = mean(&results[..HISTORY_WINDOW]);
    let earliest = mean(&results[results.len() - HISTORY_WINDOW..]);
    latest - earliest
}

/// Arithmetic mean of a non-empty slice.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

// ── Tests ──────────────────────────────────────────────────────────────────────
