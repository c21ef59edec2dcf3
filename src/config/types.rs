//! Configuration types and CLI options.
//!
//! `Config` doubles as the clap parser for the binary and as a plain struct
//! for library callers, who can build it with `..Default::default()`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_THREADS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). `Trace` also prints every pipeline stage of every document.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the result set is written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width table followed by the elapsed time
    Table,
    /// One JSON object per document
    Jsonl,
}

/// Command-line options and library configuration.
///
/// # Examples
///
/// ```bash
/// # Count elements for every URL in urls.txt with 4 worker threads
/// dom_census urls.txt 4
///
/// # Read URLs from stdin and emit JSON lines
/// cat urls.txt | dom_census - 2 --output jsonl
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dom_census",
    about = "Counts elements, leaf elements and divs in the HTML behind a list of URLs."
)]
pub struct Config {
    /// File with one URL per line ("-" reads stdin)
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Number of census worker threads (clamped to the available CPUs)
    #[arg(default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Output format: table|jsonl
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Log the canonical tag stream of every document
    #[arg(long)]
    pub show_canonical: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("urls.txt"),
            threads: DEFAULT_THREADS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output: OutputFormat::Table,
            show_canonical: false,
        }
    }
}

impl Config {
    /// Rejects settings the census cannot run with.
    ///
    /// A thread count above the number of CPUs is not an error; the batch
    /// runner clamps it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.threads, 1);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.output, OutputFormat::Table);
        assert!(!config.show_canonical);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_threads() {
        let config = Config {
            threads: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroThreads));
    }

    #[test]
    fn test_validate_accepts_more_threads_than_cpus() {
        let config = Config {
            threads: 10_000,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout_and_blank_user_agent() {
        let config = Config {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeout));

        let config = Config {
            user_agent: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyUserAgent));
    }

    #[test]
    fn test_parse_positional_threads() {
        let config = Config::try_parse_from(["dom_census", "urls.txt", "4"])
            .expect("should parse file and thread count");
        assert_eq!(config.file, PathBuf::from("urls.txt"));
        assert_eq!(config.threads, 4);
    }

    #[test]
    fn test_parse_defaults_and_flags() {
        let config =
            Config::try_parse_from(["dom_census", "-", "--output", "jsonl", "--show-canonical"])
                .expect("should parse flags");
        assert_eq!(config.file, PathBuf::from("-"));
        assert_eq!(config.threads, DEFAULT_THREADS);
        assert_eq!(config.output, OutputFormat::Jsonl);
        assert!(config.show_canonical);
    }

    #[test]
    fn test_parse_rejects_non_numeric_threads() {
        assert!(Config::try_parse_from(["dom_census", "urls.txt", "many"]).is_err());
    }
}
