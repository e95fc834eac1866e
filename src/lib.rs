//! # Global File Logger
//!
//! A process-wide structured logger that writes human-readable lines to a
//! file, optionally duplicated to stdout.
//!
//! ## Usage
//!
//! - Call [`init_logger`] once at startup.
//! - Log from anywhere through [`logger()`] or the level macros.
//! - Call [`close_logger`] (or hold a [`ShutdownGuard`]) before exit.
//!
//! ```no_run
//! use global_file_logger::{info, init_logger, shutdown_guard};
//!
//! fn main() -> Result<(), global_file_logger::LoggerError> {
//!     init_logger("info", "/var/log/app.log", true)?;
//!     let _guard = shutdown_guard();
//!
//!     info!("listening on port {}", 8080);
//!     Ok(())
//! }
//! ```

pub mod appenders;
pub mod config;
pub mod core;
pub mod macros;
pub mod shutdown;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::config::{init_logger, LoggerConfig};
    pub use crate::core::{
        logger, set_global_logger, Appender, FieldValue, LogContext, LogEntry, LogLevel, Logger,
        LoggerBuilder, LoggerContext, LoggerError, Result,
    };
    pub use crate::shutdown::{close_logger, shutdown_guard, ShutdownGuard};
}

pub use crate::appenders::{ConsoleAppender, FileAppender};
pub use crate::config::{init_logger, LoggerConfig};
pub use crate::core::{
    is_initialized, logger, set_global_logger, take_global_logger, Appender, CallerLocation,
    FieldValue, FlushFailure, LineEncoder, LogContext, LogEntry, LogLevel, Logger, LoggerBuilder,
    LoggerContext, LoggerError, Result, DEFAULT_LEVEL,
};
pub use crate::shutdown::{
    close_logger, close_logger_with, is_ignorable_flush_error, report_flush_error,
    shutdown_guard, ShutdownGuard,
};
