//! Logger configuration and process-wide initialization

use crate::appenders::{ConsoleAppender, FileAppender};
use crate::core::{set_global_logger, LogLevel, Logger, LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn default_level() -> String {
    "info".to_string()
}

/// Settings for the process-wide logger.
///
/// Deserializable so it can sit inside an application's own config file:
///
/// ```
/// use global_file_logger::LoggerConfig;
///
/// let cfg: LoggerConfig = serde_json::from_str(r#"{ "file_path": "app.log" }"#).unwrap();
/// assert_eq!(cfg.level, "info");
/// assert!(!cfg.log_to_stdout);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Minimum severity, case-insensitive (`debug`, `info`, `warn`, ...)
    #[serde(default = "default_level")]
    pub level: String,
    /// Log file; created if absent, always appended to
    pub file_path: PathBuf,
    /// Also write every record to stdout
    #[serde(default)]
    pub log_to_stdout: bool,
}

impl LoggerConfig {
    pub fn new(level: impl Into<String>, file_path: impl Into<PathBuf>, log_to_stdout: bool) -> Self {
        Self {
            level: level.into(),
            file_path: file_path.into(),
            log_to_stdout,
        }
    }

    /// Build a logger without installing it. Warnings go to stderr.
    pub fn build(&self) -> Result<Logger> {
        self.build_with_diagnostics(&mut io::stderr())
    }

    /// Build a logger without installing it, writing warnings to `diagnostics`.
    ///
    /// An unparseable level is not an error: one warning line is written and
    /// [`DEFAULT_LEVEL`](crate::core::DEFAULT_LEVEL) is used. Failing to open
    /// the log file is.
    pub fn build_with_diagnostics(&self, diagnostics: &mut dyn Write) -> Result<Logger> {
        let console = self.log_to_stdout.then(ConsoleAppender::new);
        self.assemble(diagnostics, console)
    }

    fn assemble(
        &self,
        diagnostics: &mut dyn Write,
        console: Option<ConsoleAppender>,
    ) -> Result<Logger> {
        let (level, parse_error) = LogLevel::parse_or_default(&self.level);
        if parse_error.is_some() {
            // Diagnostics are best effort
            let _ = writeln!(
                diagnostics,
                "invalid log level '{}', defaulting to {}",
                self.level, level
            );
        }

        if self.file_path.as_os_str().is_empty() {
            return Err(LoggerError::config("file_path", "log file path must not be empty"));
        }

        let mut builder = Logger::builder()
            .min_level(level)
            .add_caller(true)
            .appender(FileAppender::new(&self.file_path)?);

        if let Some(console) = console {
            builder = builder.appender(console);
        }

        Ok(builder.build())
    }

    /// Build the logger and install it as the process-wide logger.
    ///
    /// Replaces any previously installed logger. Nothing is installed on error.
    pub fn init(&self) -> Result<Arc<Logger>> {
        Ok(install(self.build()?))
    }

    /// Like [`init`](Self::init), but the console destination writes through
    /// `console` instead of stdout. Ignored unless `log_to_stdout` is set.
    pub fn init_with_console(&self, console: ConsoleAppender) -> Result<Arc<Logger>> {
        let console = self.log_to_stdout.then_some(console);
        Ok(install(self.assemble(&mut io::stderr(), console)?))
    }
}

fn install(logger: Logger) -> Arc<Logger> {
    let logger = Arc::new(logger);
    set_global_logger(Arc::clone(&logger));
    logger
}

/// Configure the process-wide logger: `log_file_path` always, stdout too when
/// `log_to_stdout` is set.
///
/// # Example
///
/// ```no_run
/// use global_file_logger::{close_logger, init_logger, logger};
///
/// init_logger("warn", "/tmp/app.log", true)?;
/// logger().error("disk full");
/// close_logger();
/// # Ok::<(), global_file_logger::LoggerError>(())
/// ```
pub fn init_logger(
    log_level: &str,
    log_file_path: impl AsRef<Path>,
    log_to_stdout: bool,
) -> Result<Arc<Logger>> {
    LoggerConfig::new(log_level, log_file_path.as_ref(), log_to_stdout).init()
}
