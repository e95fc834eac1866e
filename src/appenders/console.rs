//! Console appender implementation

use crate::core::{Appender, LineEncoder, LogEntry, LoggerError, Result};
use std::io::{IsTerminal, Stdout, Write};

enum Target {
    Stdout(Stdout),
    Writer(Box<dyn Write + Send + Sync>),
}

/// Writes encoded entries to stdout, or to any writer supplied by the caller.
///
/// Level labels are coloured only when stdout is a terminal.
pub struct ConsoleAppender {
    target: Target,
    encoder: LineEncoder,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        let stdout = std::io::stdout();
        let use_colors = stdout.is_terminal();
        Self {
            target: Target::Stdout(stdout),
            encoder: LineEncoder::new().with_colors(use_colors),
        }
    }

    /// Write to `writer` instead of stdout. Colours are off; flushing does not sync.
    pub fn with_writer(writer: impl Write + Send + Sync + 'static) -> Self {
        Self {
            target: Target::Writer(Box::new(writer)),
            encoder: LineEncoder::new(),
        }
    }

    /// Override terminal detection
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.encoder = self.encoder.with_colors(use_colors);
        self
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self.target {
            Target::Stdout(ref mut stdout) => stdout,
            Target::Writer(ref mut writer) => writer.as_mut(),
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

/// fsync the stdout descriptor. Pipes and terminals report EINVAL or ENOTTY here.
#[cfg(unix)]
fn sync_stdout(stdout: &Stdout) -> std::io::Result<()> {
    use std::os::fd::AsFd;
    let fd = stdout.as_fd().try_clone_to_owned()?;
    std::fs::File::from(fd).sync_all()
}

#[cfg(not(unix))]
fn sync_stdout(_stdout: &Stdout) -> std::io::Result<()> {
    Ok(())
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.encoder.encode(entry);
        self.writer()
            .write_all(line.as_bytes())
            .map_err(|e| LoggerError::io_operation("writing to console", "stdout", e))
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            Target::Stdout(ref mut stdout) => {
                let mut lock = stdout.lock();
                lock.flush()
                    .map_err(|e| LoggerError::io_operation("flushing console", "stdout", e))?;
                drop(lock);
                sync_stdout(stdout)
                    .map_err(|e| LoggerError::io_operation("syncing console", "stdout", e))
            }
            Target::Writer(ref mut writer) => writer
                .flush()
                .map_err(|e| LoggerError::io_operation("flushing console", "writer", e)),
        }
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_one_line_per_entry() {
        let buffer = SharedBuffer::default();
        let mut appender = ConsoleAppender::with_writer(buffer.clone());

        appender
            .append(&LogEntry::new(LogLevel::Warn, "disk at 90%".to_string()))
            .expect("append");
        appender
            .append(&LogEntry::new(LogLevel::Error, "disk full".to_string()))
            .expect("append");
        appender.flush().expect("writer flush never syncs");

        let output = String::from_utf8(buffer.0.lock().clone()).expect("utf8");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\tWARN \tdisk at 90%"));
        assert!(lines[1].contains("\tERROR\tdisk full"));
    }

    #[test]
    fn test_custom_writer_is_uncoloured() {
        let buffer = SharedBuffer::default();
        let mut appender = ConsoleAppender::with_writer(buffer.clone());
        appender
            .append(&LogEntry::new(LogLevel::Error, "x".to_string()))
            .expect("append");

        let output = buffer.0.lock().clone();
        assert!(!output.contains(&0x1b));
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_forced_colors_escape_level_only() {
        colored::control::set_override(true);
        let buffer = SharedBuffer::default();
        let mut appender = ConsoleAppender::with_writer(buffer.clone()).with_colors(true);
        appender
            .append(&LogEntry::new(LogLevel::Error, "disk full".to_string()))
            .expect("append");

        let output = String::from_utf8(buffer.0.lock().clone()).expect("utf8");
        assert!(output.contains('\u{1b}'));
        assert!(output.ends_with("\tdisk full\n"));
    }
}
