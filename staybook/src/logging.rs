//! Stderr backend for the `log` facade.
//!
//! The library only emits records through `log::debug!` and friends. The CLI
//! installs a [`Logger`] at start-up, choosing one of three coarse levels
//! from `--verbose`/`--quiet` or `STAYBOOK_LOG_MODE`.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

/// Environment variable consulted when neither `--verbose` nor `--quiet` is given.
pub const LOG_MODE_ENV: &str = "STAYBOOK_LOG_MODE";

/// How much the CLI reports on stderr.
///
/// ```
/// use staybook::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Everything down to debug records.
    Verbose,
}

impl LogLevel {
    /// The `log` filter for this level.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Quiet, Self::Normal, Self::Verbose]
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("invalid log mode: {s:?} (expected quiet, normal or verbose)"))
    }
}

/// Writes `log` records to stderr as `LEVEL: message`.
///
/// ```
/// use log::Log;
/// use staybook::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// let debug = log::Metadata::builder().level(log::Level::Debug).build();
/// assert!(!logger.enabled(&debug));
/// ```
#[derive(Debug, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// A logger at the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The level this logger filters at.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Registers this logger as the process-wide `log` backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a backend is already registered.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let max = self.level.level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max);
        Ok(())
    }

    fn render(record: &Record<'_>) -> String {
        let tag = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug | Level::Trace => "DEBUG",
        };
        format!("{tag}: {}", record.args())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.level_filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            // stderr closed: nowhere left to report
            let _ = writeln!(std::io::stderr().lock(), "{}", Self::render(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Chooses the logger for a CLI invocation.
///
/// `verbose` beats `quiet`, and either flag beats `STAYBOOK_LOG_MODE`. An
/// unrecognised mode in the environment is ignored.
///
/// ```
/// use staybook::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        std::env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|mode| mode.parse().ok())
            .unwrap_or_default()
    };
    Logger::new(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use serial_test::serial;

    fn with_log_mode<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let saved = std::env::var(LOG_MODE_ENV).ok();
        match value {
            Some(v) => std::env::set_var(LOG_MODE_ENV, v),
            None => std::env::remove_var(LOG_MODE_ENV),
        }
        let result = f();
        match saved {
            Some(v) => std::env::set_var(LOG_MODE_ENV, v),
            None => std::env::remove_var(LOG_MODE_ENV),
        }
        result
    }

    #[test]
    fn test_mode_names_round_trip() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Verbose] {
            assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
        assert_eq!(" Quiet ".parse::<LogLevel>().unwrap(), LogLevel::Quiet);
        assert!("loud".parse::<LogLevel>().is_err());
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_enabled_follows_level() {
        let debug = Metadata::builder().level(Level::Debug).build();
        let warn = Metadata::builder().level(Level::Warn).build();
        let error = Metadata::builder().level(Level::Error).build();

        let quiet = Logger::new(LogLevel::Quiet);
        assert!(!quiet.enabled(&error));

        let normal = Logger::default();
        assert!(normal.enabled(&warn));
        assert!(!normal.enabled(&debug));

        assert!(Logger::new(LogLevel::Verbose).enabled(&debug));
    }

    #[test]
    fn test_render_tags_level() {
        let warn = Logger::render(
            &Record::builder()
                .level(Level::Warn)
                .args(format_args!("unit {} is busy", 7))
                .build(),
        );
        assert_eq!(warn, "WARN: unit 7 is busy");

        let trace = Logger::render(
            &Record::builder()
                .level(Level::Trace)
                .args(format_args!("probe"))
                .build(),
        );
        assert_eq!(trace, "DEBUG: probe");
    }

    #[test]
    #[serial]
    fn test_env_mode_used_without_flags() {
        assert_eq!(
            with_log_mode(Some("verbose"), || init_logger(false, false)).level(),
            LogLevel::Verbose
        );
        assert_eq!(
            with_log_mode(Some("quiet"), || init_logger(false, false)).level(),
            LogLevel::Quiet
        );
        assert_eq!(
            with_log_mode(None, || init_logger(false, false)).level(),
            LogLevel::Normal
        );
    }

    #[test]
    #[serial]
    fn test_unknown_env_mode_falls_back_to_normal() {
        let logger = with_log_mode(Some("chatty"), || init_logger(false, false));
        assert_eq!(logger.level(), LogLevel::Normal);
    }

    #[test]
    #[serial]
    fn test_flags_beat_env() {
        assert_eq!(
            with_log_mode(Some("quiet"), || init_logger(true, false)).level(),
            LogLevel::Verbose
        );
        assert_eq!(
            with_log_mode(Some("verbose"), || init_logger(false, true)).level(),
            LogLevel::Quiet
        );
    }
}
