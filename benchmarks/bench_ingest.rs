use std::fmt::Write as _;
use std::hint::black_box;
use std::path::PathBuf;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tempfile::TempDir;

use logsift::analysis::analyze;
use logsift::diagnostics::DiagnosticSink;
use logsift::parallel::{IngestionCoordinator, ParallelConfig};
use logsift::parsers::parse_line;
use logsift::record::LogLevel;

const LEVELS: [&str; 4] = ["DEBUG", "INFO", "WARN", "ERROR"];

fn sample_lines(count: usize) -> String {
    let mut out = String::new();
    for i in 0..count {
        // Every 20th line is rejected
        if i % 20 == 19 {
            out.push_str("not a log line\n");
            continue;
        }
        let _ = writeln!(
            out,
            "[2025-08-12T10:{:02}:{:02}.{:03}] [{}] - request {} served in {}ms",
            (i / 60) % 60,
            i % 60,
            i % 1000,
            LEVELS[i % LEVELS.len()],
            i,
            i % 250
        );
    }
    out
}

fn bench_parse_line(c: &mut Criterion) {
    let valid = "[2025-08-12T10:00:08.123] [ERROR] - auth failed for user 42";
    let malformed = "2025-08-12 10:00:08 ERROR auth failed";
    let bad_level = "[2025-08-12T10:00:08] [FATAL] - auth failed";

    let mut group = c.benchmark_group("parse_line");
    group.bench_function("valid", |b| b.iter(|| parse_line(black_box(Some(valid)))));
    group.bench_function("malformed", |b| {
        b.iter(|| parse_line(black_box(Some(malformed))))
    });
    group.bench_function("invalid_level", |b| {
        b.iter(|| parse_line(black_box(Some(bad_level))))
    });
    group.finish();
}

fn fixture(files: usize, lines_per_file: usize) -> (TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().expect("temp dir");
    let content = sample_lines(lines_per_file);
    let paths = (0..files)
        .map(|i| {
            let path = dir.path().join(format!("part{:03}.log", i));
            std::fs::write(&path, &content).expect("write fixture");
            path
        })
        .collect();
    (dir, paths)
}

fn bench_ingest_all(c: &mut Criterion) {
    const FILES: usize = 16;
    const LINES: usize = 5_000;
    let (_dir, paths) = fixture(FILES, LINES);

    let mut group = c.benchmark_group("ingest_all");
    group.sample_size(20);
    group.throughput(Throughput::Elements((FILES * LINES) as u64));

    for workers in [1, 2, 4, 8] {
        let coordinator = IngestionCoordinator::new(ParallelConfig::with_workers(workers));
        group.bench_with_input(BenchmarkId::from_parameter(workers), &paths, |b, paths| {
            b.iter(|| {
                let ingestion = coordinator
                    .ingest_all(black_box(paths), &DiagnosticSink::discard())
                    .expect("ingestion");
                black_box(analyze(&ingestion.records, LogLevel::Error))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse_line, bench_ingest_all);
criterion_main!(benches);
