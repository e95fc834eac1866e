//! Logging macros for ergonomic log message formatting.
//!
//! Each level macro has two forms. With a format string first, the entry goes
//! to the process-wide logger. With a logger expression first, it goes to
//! that logger. Either way the caller location is the macro call site.
//!
//! # Examples
//!
//! ```
//! use global_file_logger::prelude::*;
//! use global_file_logger::info;
//!
//! // Process-wide logger (a no-op until `init_logger` runs)
//! info!("Server started");
//!
//! // Explicit logger
//! let logger = Logger::new();
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message through an explicit logger with automatic formatting.
///
/// # Examples
///
/// ```
/// # use global_file_logger::prelude::*;
/// # let logger = Logger::new();
/// use global_file_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_level {
    ($level:expr, $fmt:literal $($arg:tt)*) => {
        $crate::core::logger().log($level, format!($fmt $($arg)*))
    };
    ($level:expr, $logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $level, $($arg)+)
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::__log_level!($crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// ```
/// # use global_file_logger::prelude::*;
/// # let logger = Logger::new();
/// use global_file_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// debug!("Cache miss for {}", "user:42");
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::__log_level!($crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__log_level!($crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::__log_level!($crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use global_file_logger::prelude::*;
/// # let logger = Logger::new();
/// use global_file_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::__log_level!($crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message. The process is not terminated.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::__log_level!($crate::LogLevel::Fatal, $($arg)+)
    };
}
