//! Error types for the logger system

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unrecognized severity level string
    #[error("invalid log level '{0}'")]
    InvalidLevel(String),

    /// Log file could not be created or opened
    #[error("failed to initialize logger: cannot open log file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// One or more appenders failed to flush
    #[error("{}", join_failures(.0))]
    Flush(Vec<FlushFailure>),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// A single appender's flush failure
#[derive(Debug, thiserror::Error)]
#[error("appender '{appender}': {source}")]
pub struct FlushFailure {
    pub appender: String,
    #[source]
    pub source: LoggerError,
}

fn join_failures(failures: &[FlushFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl LoggerError {
    /// Create an open error for the log file at `path`
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoggerError::Open {
            path: path.into(),
            source,
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("FileAppender", "Invalid path");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::open(
            "/var/log/app.log",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, LoggerError::Open { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::InvalidLevel("loud".to_string());
        assert_eq!(err.to_string(), "invalid log level 'loud'");

        let err = LoggerError::open(
            "/missing/app.log",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            err.to_string(),
            "failed to initialize logger: cannot open log file '/missing/app.log': No such file or directory"
        );
    }

    #[test]
    fn test_open_error_keeps_source() {
        use std::error::Error;

        let err = LoggerError::open("app.log", io::Error::from(io::ErrorKind::NotFound));
        let source = err.source().expect("open error has a source");
        let io_err = source.downcast_ref::<io::Error>().expect("source is io::Error");
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_flush_error_display_lists_each_failure() {
        let err = LoggerError::Flush(vec![
            FlushFailure {
                appender: "file".to_string(),
                source: LoggerError::writer("disk full"),
            },
            FlushFailure {
                appender: "console".to_string(),
                source: LoggerError::other("closed"),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "appender 'file': Writer error: disk full; appender 'console': closed"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("writing log file", "cannot write to file", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing log file"));
        assert!(err.to_string().contains("cannot write to file"));
    }
}
