//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Many threads can log through one shared logger
//! - Records from different threads never interleave within a line
//! - Flushing while other threads log is safe

use global_file_logger::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 500;

#[test]
fn test_concurrent_writers_produce_whole_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");

    let logger = Arc::new(
        LoggerConfig::new("info", &log_file, false)
            .build()
            .expect("build"),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.info(format!("thread={} seq={}", t, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }
    logger.flush().expect("flush");

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let messages: HashSet<&str> = content
        .lines()
        .map(|line| line.rsplit('\t').next().expect("message column"))
        .collect();

    assert_eq!(content.lines().count(), THREADS * PER_THREAD);
    assert_eq!(messages.len(), THREADS * PER_THREAD, "duplicate or torn lines");
    for t in 0..THREADS {
        assert!(messages.contains(format!("thread={} seq={}", t, PER_THREAD - 1).as_str()));
    }
}

#[test]
fn test_flush_during_logging() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("flush_race.log");

    let logger = Arc::new(
        LoggerConfig::new("debug", &log_file, false)
            .build()
            .expect("build"),
    );

    let writer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..1000 {
                logger.debug(format!("message {}", i));
            }
        })
    };

    for _ in 0..20 {
        logger.flush().expect("flush while logging");
    }
    writer.join().expect("writer panicked");
    logger.flush().expect("final flush");

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), 1000);
}
