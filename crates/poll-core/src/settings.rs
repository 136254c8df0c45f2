use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Descriptive statistics over presidential polling data
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pollwatch",
    about = "Descriptive statistics over presidential polling data",
    version
)]
pub struct Settings {
    /// Polling CSV file (auto-discovered if not specified)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Emit the report as pretty-printed JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments and resolve flag interactions.
    pub fn load() -> Self {
        Self::resolve(Self::parse())
    }

    /// Same as [`load`](Self::load) but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args(args: Vec<std::ffi::OsString>) -> Self {
        Self::resolve(Self::parse_from(args))
    }

    /// Apply the `--debug` flag.
    fn resolve(mut settings: Settings) -> Settings {
        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── test_settings_default_values ─────────────────────────────────────────

    #[test]
    fn test_settings_default_values() {
        // Parse with only the binary name (no flags) to get all defaults.
        let settings = Settings::parse_from(["pollwatch"]);

        assert!(settings.file.is_none());
        assert!(!settings.json);
        assert_eq!(settings.log_level, "INFO");
        assert!(!settings.debug);
    }

    // ── test_settings_cli_parsing ─────────────────────────────────────────────

    #[test]
    fn test_settings_cli_explicit_file() {
        let settings = Settings::parse_from(["pollwatch", "--file", "/tmp/polls.csv"]);
        assert_eq!(settings.file, Some(PathBuf::from("/tmp/polls.csv")));
    }

    #[test]
    fn test_settings_cli_json_flag() {
        let settings = Settings::parse_from(["pollwatch", "--json"]);
        assert!(settings.json);
    }

    #[test]
    fn test_settings_cli_log_level() {
        let settings = Settings::parse_from(["pollwatch", "--log-level", "WARNING"]);
        assert_eq!(settings.log_level, "WARNING");
    }

    #[test]
    fn test_settings_cli_rejects_unknown_log_level() {
        let result = Settings::try_parse_from(["pollwatch", "--log-level", "TRACE"]);
        assert!(result.is_err());
    }

    // ── test_load_from_args ──────────────────────────────────────────────────

    #[test]
    fn test_load_from_args_debug_overrides_log_level() {
        let settings = Settings::load_from_args(vec!["pollwatch".into(), "--debug".into()]);
        assert_eq!(settings.log_level, "DEBUG");
        assert!(settings.debug);
    }

    #[test]
    fn test_load_from_args_without_debug_keeps_level() {
        let settings = Settings::load_from_args(vec![
            "pollwatch".into(),
            "--log-level".into(),
            "ERROR".into(),
        ]);
        assert_eq!(settings.log_level, "ERROR");
    }
}
