//! Aggregation over the merged record collection
//!
//! Runs after ingestion has completed. Both views are pure functions of the
//! input slice and never reorder it.

mod report;

pub use report::AggregateReport;

use std::collections::BTreeMap;

use crate::record::{LogLevel, LogRecord};

/// Default level for the subset view
pub const DEFAULT_TARGET_LEVEL: LogLevel = LogLevel::Error;

/// Count records per level. Levels that never occur are omitted.
pub fn count_by_level(records: &[LogRecord]) -> BTreeMap<LogLevel, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.level()).or_insert(0) += 1;
    }
    counts
}

/// Records whose level equals `target`, in input order
pub fn filter_by_level(records: &[LogRecord], target: LogLevel) -> Vec<LogRecord> {
    records
        .iter()
        .filter(|record| record.level() == target)
        .cloned()
        .collect()
}

/// Build both views for `records`
pub fn analyze(records: &[LogRecord], target: LogLevel) -> AggregateReport {
    AggregateReport {
        total: records.len(),
        counts: count_by_level(records),
        target,
        matching: filter_by_level(records, target),
    }
}
