//! Core logger types and traits

pub mod appender;
pub mod encoder;
pub mod error;
pub mod global;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;

pub use appender::Appender;
pub use encoder::{LineEncoder, LEVEL_WIDTH, TIME_LAYOUT};
pub use error::{FlushFailure, LoggerError, Result};
pub use global::{is_initialized, logger, set_global_logger, take_global_logger};
pub use log_context::{FieldValue, LogContext, LoggerContext};
pub use log_entry::{CallerLocation, LogEntry};
pub use log_level::{LogLevel, DEFAULT_LEVEL};
pub use logger::{Logger, LoggerBuilder};
