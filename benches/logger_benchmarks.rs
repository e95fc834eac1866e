//! Criterion benchmarks for global_file_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use global_file_logger::prelude::*;
use global_file_logger::LineEncoder;
use tempfile::TempDir;

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    group.throughput(Throughput::Elements(1));

    let encoder = LineEncoder::new();
    let entry = LogEntry::new(LogLevel::Info, "Request processed".to_string());
    let with_fields = entry.clone().with_context(
        LogContext::new()
            .with_field("status", 200)
            .with_field("path", "/api/users"),
    );

    group.bench_function("plain", |b| {
        b.iter(|| black_box(encoder.encode(black_box(&entry))));
    });

    group.bench_function("with_fields", |b| {
        b.iter(|| black_box(encoder.encode(black_box(&with_fields))));
    });

    group.finish();
}

fn bench_file_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_logging");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = LoggerConfig::new("info", temp_dir.path().join("bench.log"), false)
        .build()
        .expect("build");

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("filtered_debug", |b| {
        b.iter(|| logger.debug(black_box("Debug message")));
    });

    group.finish();
}

criterion_group!(benches, bench_encoding, bench_file_logging);
criterion_main!(benches);
