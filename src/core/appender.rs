//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;

    /// Push buffered output down to the destination, syncing it where supported
    fn flush(&mut self) -> Result<()>;

    fn name(&self) -> &str;
}
