use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name probed by data-file discovery.
const DEFAULT_DATA_FILE: &str = "polling_data.csv";

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    // Map CLI level names to tracing directives (tracing uses lowercase).
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Data-file discovery ────────────────────────────────────────────────────────

/// Attempt to locate the default polling data file.
///
/// Checks the following paths in order and returns the first that exists:
/// 1. `./polling_data.csv`
/// 2. `./data/polling_data.csv`
/// 3. `~/.pollwatch/polling_data.csv`
///
/// Returns `None` when no candidate exists.
pub fn discover_data_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    discover_data_file_in(&cwd, dirs::home_dir().as_deref())
}

/// Discovery rooted at explicit directories (used for testing).
pub fn discover_data_file_in(base: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let mut candidates = vec![
        base.join(DEFAULT_DATA_FILE),
        base.join("data").join(DEFAULT_DATA_FILE),
    ];
    if let Some(home) = home {
        candidates.push(home.join(".pollwatch").join(DEFAULT_DATA_FILE));
    }
    candidates.into_iter().find(|p| p.is_file())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
