mod bootstrap;

use anyhow::{Context, Result};
use poll_core::formatting::{format_percent, format_signed_percent};
use poll_core::settings::Settings;
use poll_data::analysis::{analyze_polls, PollReport};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Pollwatch v{} starting", env!("CARGO_PKG_VERSION"));

    let file = match settings.file {
        Some(path) => path,
        None => bootstrap::discover_data_file()
            .context("no polling data file found; pass one with --file")?,
    };
    tracing::info!("Analyzing {}", file.display());

    let report = analyze_polls(&file)?;
    tracing::info!("Report built from {} records", report.metadata.rows_analyzed);

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}

/// Render the report in the standard text layout.
fn render_report(report: &PollReport) -> String {
    let mut out = String::new();
    match &report.highest_polling {
        Some(highest) => out.push_str(&format!("Highest Polling Candidate: {}\n", highest)),
        None => out.push_str("Highest Polling Candidate: No data available\n"),
    }
    out.push_str("Likely Voter Polling Average:\n");
    out.push_str(&format!(
        "  Harris: {}\n",
        format_percent(report.likely_voter_average.harris, 2)
    ));
    out.push_str(&format!(
        "  Trump: {}\n",
        format_percent(report.likely_voter_average.trump, 2)
    ));
    out.push_str("Polling History Change:\n");
    out.push_str(&format!(
        "  Harris: {}\n",
        format_signed_percent(report.history_change.harris, 2)
    ));
    out.push_str(&format!(
        "  Trump: {}\n",
        format_signed_percent(report.history_change.trump, 2)
    ));
    out
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use poll_core::metrics::{CandidatePair, HighestPolling, PollLeader};
    use poll_data::analysis::ReportMetadata;

    fn sample_report(highest: Option<HighestPolling>) -> PollReport {
        PollReport {
            highest_polling: highest,
            likely_voter_average: CandidatePair {
                harris: 49.34,
                trump: 46.04,
            },
            history_change: CandidatePair {
                harris: 1.53,
                trump: 2.07,
            },
            metadata: ReportMetadata {
                generated_at: "2024-11-05T12:00:00+00:00".to_string(),
                source: "polling_data.csv".into(),
                rows_analyzed: 96,
                load_time_seconds: 0.001,
            },
        }
    }

    #[test]
    fn test_render_report_reference_layout() {
        let report = sample_report(Some(HighestPolling {
            leader: PollLeader::Harris,
            percent: 57.0,
        }));

        let text = render_report(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Highest Polling Candidate: Harris with 57.0%",
                "Likely Voter Polling Average:",
                "  Harris: 49.34%",
                "  Trump: 46.04%",
                "Polling History Change:",
                "  Harris: +1.53%",
                "  Trump: +2.07%",
            ]
        );
    }

    #[test]
    fn test_render_report_without_data() {
        let text = render_report(&sample_report(None));
        assert!(text.starts_with("Highest Polling Candidate: No data available\n"));
    }
}
