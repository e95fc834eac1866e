//! Main logger implementation

use super::{
    appender::Appender,
    error::{FlushFailure, LoggerError, Result},
    log_context::{LogContext, LoggerContext},
    log_entry::LogEntry,
    log_level::LogLevel,
};
use parking_lot::RwLock;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe, Location};

/// Synchronous, thread-safe logger fanning each entry out to its appenders.
///
/// Entries below the minimum level are discarded before any formatting.
/// Every appender receives every entry independently: one appender failing
/// or panicking is reported on stderr and does not affect the others.
pub struct Logger {
    min_level: RwLock<LogLevel>,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
    context: LoggerContext,
    add_caller: bool,
}

impl Logger {
    /// A logger with no appenders. Logging through it is a no-op.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: RwLock::new(LogLevel::Info),
            appenders: RwLock::new(Vec::new()),
            context: LoggerContext::new(),
            add_caller: true,
        }
    }

    fn panic_message(panic_info: &(dyn Any + Send)) -> String {
        if let Some(s) = panic_info.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        }
    }

    /// Deliver one entry to every appender with per-appender panic isolation.
    ///
    /// Failures are reported on stderr and never reach the caller.
    fn process_sync(appenders: &mut [Box<dyn Appender>], entry: &LogEntry) {
        for (idx, appender) in appenders.iter_mut().enumerate() {
            let append_result =
                panic::catch_unwind(AssertUnwindSafe(|| appender.append(entry)));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Appender #{} ({}) failed: {}",
                        idx,
                        appender.name(),
                        e
                    );
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} panicked: {}. \
                         Other appenders continue to function.",
                        idx,
                        Self::panic_message(&*panic_info)
                    );
                }
            }
        }
    }

    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        self.appenders.get_mut().push(appender);
    }

    pub fn appender_count(&self) -> usize {
        self.appenders.read().len()
    }

    /// Names of the attached appenders, in delivery order
    pub fn appender_names(&self) -> Vec<String> {
        self.appenders
            .read()
            .iter()
            .map(|a| a.name().to_string())
            .collect()
    }

    /// Change the minimum level. Takes effect for all holders of this logger.
    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// Whether an entry at `level` would be written
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= *self.min_level.read()
    }

    /// Fields attached to every entry written by this logger
    pub fn context(&self) -> &LoggerContext {
        &self.context
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.enabled(level) {
            return;
        }

        let entry = self.entry(level, message.into(), None, Location::caller());
        self.write_entry(&entry);
    }

    /// Log with structured context fields
    #[track_caller]
    pub fn log_with_context(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        context: LogContext,
    ) {
        if !self.enabled(level) {
            return;
        }

        let entry = self.entry(level, message.into(), Some(context), Location::caller());
        self.write_entry(&entry);
    }

    fn entry(
        &self,
        level: LogLevel,
        message: String,
        context: Option<LogContext>,
        location: &'static Location<'static>,
    ) -> LogEntry {
        let mut entry = LogEntry::new(level, message);
        if self.add_caller {
            entry = entry.with_caller(location);
        }

        if context.is_some() || !self.context.is_empty() {
            let mut context = context.unwrap_or_default();
            self.context.merge_into(&mut context);
            entry = entry.with_context(context);
        }

        entry
    }

    fn write_entry(&self, entry: &LogEntry) {
        let mut appenders = self.appenders.write();
        Self::process_sync(&mut appenders, entry);
    }

    /// Flush every appender.
    ///
    /// All appenders are flushed even if an earlier one fails; the failures
    /// are collected into [`LoggerError::Flush`].
    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        let mut failures = Vec::new();

        for appender in appenders.iter_mut() {
            let flush_result = panic::catch_unwind(AssertUnwindSafe(|| appender.flush()));

            let error = match flush_result {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => e,
                Err(panic_info) => LoggerError::other(format!(
                    "panicked during flush: {}",
                    Self::panic_message(&*panic_info)
                )),
            };

            failures.push(FlushFailure {
                appender: appender.name().to_string(),
                source: error,
            });
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(LoggerError::Flush(failures))
        }
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Log at `Fatal`. Only writes the entry; the process keeps running.
    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    /// Helper for structured info logging
    #[track_caller]
    pub fn info_with_context(&self, message: impl Into<String>, context: LogContext) {
        self.log_with_context(LogLevel::Info, message, context);
    }

    /// Helper for structured error logging
    #[track_caller]
    pub fn error_with_context(&self, message: impl Into<String>, context: LogContext) {
        self.log_with_context(LogLevel::Error, message, context);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use global_file_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .appender(ConsoleAppender::new())
///     .add_caller(true)
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    appenders: Vec<Box<dyn Appender>>,
    add_caller: bool,
    context: LoggerContext,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            appenders: Vec::new(),
            add_caller: true,
            context: LoggerContext::new(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Record the `file:line` of each logging call. On by default.
    #[must_use = "builder methods return a new value"]
    pub fn add_caller(mut self, enabled: bool) -> Self {
        self.add_caller = enabled;
        self
    }

    /// Attach a field to every entry this logger writes
    #[must_use = "builder methods return a new value"]
    pub fn field<K, V>(self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<super::log_context::FieldValue>,
    {
        self.context.set(key, value);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut logger = Logger::new();
        logger.set_min_level(self.min_level);
        logger.add_caller = self.add_caller;
        logger.context = self.context;
        for appender in self.appenders {
            logger.add_appender(appender);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
