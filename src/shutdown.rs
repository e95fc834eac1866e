//! Flushing the process-wide logger at exit
//!
//! Syncing a pipe or terminal fails with an OS error that only means "this
//! stream cannot be synced". Those codes are whitelisted explicitly so that
//! real I/O failures on the log file are still reported.

use crate::core::{logger, Logger, LoggerError};
use std::error::Error;
use std::io::{self, Write};

/// OS error codes meaning the destination does not support sync
#[cfg(unix)]
pub const IGNORABLE_FLUSH_ERRORS: [i32; 2] = [
    libc::ENOTTY, // inappropriate ioctl for device
    libc::EINVAL, // invalid argument
];

/// OS error codes meaning the destination does not support sync
#[cfg(windows)]
pub const IGNORABLE_FLUSH_ERRORS: [i32; 2] = [
    6,  // ERROR_INVALID_HANDLE
    87, // ERROR_INVALID_PARAMETER
];

#[cfg(not(any(unix, windows)))]
pub const IGNORABLE_FLUSH_ERRORS: [i32; 0] = [];

/// Whether `err`, or anything in its source chain, is a whitelisted
/// "cannot sync this stream" OS error.
pub fn is_ignorable_flush_error(err: &(dyn Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(io_err) = e.downcast_ref::<io::Error>() {
            if io_err
                .raw_os_error()
                .is_some_and(|code| IGNORABLE_FLUSH_ERRORS.contains(&code))
            {
                return true;
            }
        }
        current = e.source();
    }
    false
}

/// Write one diagnostic line per non-ignorable failure in `err`.
///
/// Returns the number of lines written.
pub fn report_flush_error(err: &LoggerError, diagnostics: &mut dyn Write) -> usize {
    let mut reported = 0;
    match err {
        LoggerError::Flush(failures) => {
            for failure in failures {
                if is_ignorable_flush_error(failure) {
                    continue;
                }
                let _ = writeln!(diagnostics, "Error flushing logger: {}", failure);
                reported += 1;
            }
        }
        other => {
            if !is_ignorable_flush_error(other) {
                let _ = writeln!(diagnostics, "Error flushing logger: {}", other);
                reported += 1;
            }
        }
    }
    reported
}

/// Flush `logger`, reporting failures to `diagnostics` instead of returning them.
pub fn close_logger_with(logger: &Logger, diagnostics: &mut dyn Write) {
    if let Err(e) = logger.flush() {
        report_flush_error(&e, diagnostics);
    }
}

/// Flush the process-wide logger. Never fails; problems go to stderr.
///
/// The logger stays installed and usable afterwards.
pub fn close_logger() {
    close_logger_with(&logger(), &mut io::stderr());
}

/// Calls [`close_logger`] when dropped.
///
/// ```no_run
/// use global_file_logger::{init_logger, shutdown_guard};
///
/// fn main() -> Result<(), global_file_logger::LoggerError> {
///     init_logger("info", "app.log", false)?;
///     let _guard = shutdown_guard();
///     // ...
///     Ok(())
/// }
/// ```
#[must_use = "the logger is flushed when the guard is dropped"]
pub struct ShutdownGuard {
    _private: (),
}

pub fn shutdown_guard() -> ShutdownGuard {
    ShutdownGuard { _private: () }
}

impl Drop for ShutdownGuard {
    fn drop(&mut self) {
        close_logger();
    }
}
