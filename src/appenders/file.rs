//! File appender implementation

use crate::core::{Appender, LineEncoder, LogEntry, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Permission bits for newly created log files (rw-r--r--)
pub const LOG_FILE_MODE: u32 = 0o644;

/// Appends encoded entries to a file opened in append mode.
///
/// Each entry is written with a single `write_all`, so concurrent writers to
/// the same file never interleave within a line.
pub struct FileAppender {
    file: File,
    path: PathBuf,
    encoder: LineEncoder,
}

impl FileAppender {
    /// Open `path` for appending, creating it with [`LOG_FILE_MODE`] if absent.
    ///
    /// Missing parent directories are not created.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = Self::open(&path).map_err(|e| LoggerError::open(&path, e))?;

        Ok(Self {
            file,
            path,
            encoder: LineEncoder::new(),
        })
    }

    #[cfg(unix)]
    fn open(path: &Path) -> std::io::Result<File> {
        use std::os::unix::fs::OpenOptionsExt;
        OpenOptions::new()
            .create(true)
            .append(true)
            .mode(LOG_FILE_MODE)
            .open(path)
    }

    #[cfg(not(unix))]
    fn open(path: &Path) -> std::io::Result<File> {
        OpenOptions::new().create(true).append(true).open(path)
    }

    /// Set a custom timestamp layout using a strftime-compatible format string
    #[must_use]
    pub fn with_time_layout(mut self, layout: &str) -> Self {
        self.encoder = self.encoder.with_time_layout(layout);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.encoder.encode(entry);
        self.file.write_all(line.as_bytes()).map_err(|e| {
            LoggerError::io_operation("writing log file", self.path.display().to_string(), e)
        })
    }

    fn flush(&mut self) -> Result<()> {
        self.file.sync_all().map_err(|e| {
            LoggerError::io_operation("syncing log file", self.path.display().to_string(), e)
        })
    }

    fn name(&self) -> &str {
        "file"
    }
}
