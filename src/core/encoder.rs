//! Human-readable line encoding for log entries
//!
//! Every entry encodes to exactly one line of tab-separated fields:
//!
//! ```text
//! 2025-01-08 10:30:45	ERROR	server/handler.rs:42	request failed	{"status":500}
//! ```
//!
//! The caller and field columns are omitted when absent.

use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use std::fmt::Write;

/// strftime layout for the timestamp column
pub const TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of the level column; labels are left-aligned and space padded
pub const LEVEL_WIDTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEncoder {
    time_layout: String,
    use_colors: bool,
}

impl LineEncoder {
    /// Plain encoder, safe for files
    pub fn new() -> Self {
        Self {
            time_layout: TIME_LAYOUT.to_string(),
            use_colors: false,
        }
    }

    /// Colour the level label with ANSI escapes. Only meaningful for terminals.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Use a custom strftime-compatible timestamp layout
    #[must_use]
    pub fn with_time_layout(mut self, layout: impl Into<String>) -> Self {
        self.time_layout = layout.into();
        self
    }

    /// Encode `entry` as one line, including the trailing newline
    pub fn encode(&self, entry: &LogEntry) -> String {
        let mut line = String::with_capacity(64 + entry.message.len());

        // An invalid custom layout makes chrono's Display fail; use the default instead
        let start = line.len();
        if write!(line, "{}", entry.timestamp.format(&self.time_layout)).is_err() {
            line.truncate(start);
            let _ = write!(line, "{}", entry.timestamp.format(TIME_LAYOUT));
        }
        line.push('\t');
        line.push_str(&self.level_label(entry));

        if let Some(caller) = entry.caller {
            line.push('\t');
            line.push_str(&caller.short());
        }

        line.push('\t');
        line.push_str(&entry.message);

        if let Some(ref context) = entry.context {
            if !context.is_empty() {
                line.push('\t');
                line.push_str(&context.to_json());
            }
        }

        line.push('\n');
        line
    }

    fn level_label(&self, entry: &LogEntry) -> String {
        let label = format!("{:width$}", entry.level, width = LEVEL_WIDTH);
        if self.use_colors {
            colorize(label, entry.level)
        } else {
            label
        }
    }
}

#[cfg(feature = "console")]
fn colorize(label: String, level: LogLevel) -> String {
    use colored::Colorize;
    label.color(level.color_code()).to_string()
}

#[cfg(not(feature = "console"))]
fn colorize(label: String, _level: LogLevel) -> String {
    label
}

impl Default for LineEncoder {
    fn default() -> Self {
        Self::new()
    }
}
