//! Type definitions for parallel ingestion
//!
//! Contains the work items, per-unit results and configuration.

use std::path::{Path, PathBuf};

use crate::diagnostics::DiagnosticSink;
use crate::ingest::IngestionResult;
use crate::record::LogRecord;
use crate::stats::ProcessingStats;

/// Work performed by one ingestion unit
pub(crate) type UnitFn = fn(&Path, &DiagnosticSink) -> IngestionResult;

/// Configuration for parallel ingestion
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Upper bound on concurrently running ingestion units
    pub num_workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
        }
    }
}

impl ParallelConfig {
    pub fn with_workers(num_workers: usize) -> Self {
        Self { num_workers }
    }
}

/// One file queued for ingestion
#[derive(Debug, Clone)]
pub(crate) struct IngestionUnit {
    pub index: usize,
    pub path: PathBuf,
}

/// Result of one ingestion unit, tagged with its submission index
#[derive(Debug)]
pub(crate) struct UnitResult {
    pub index: usize,
    pub result: IngestionResult,
}

/// Merged outcome of a whole ingestion run
#[derive(Debug, Clone, Default)]
pub struct Ingestion {
    /// Records from every file; each file's records keep their line order
    pub records: Vec<LogRecord>,
    /// Files whose contribution was dropped
    pub failed_files: Vec<PathBuf>,
    pub stats: ProcessingStats,
}

impl Ingestion {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
