//! Aggregate report over a merged record collection

use serde::Serialize;
use std::collections::BTreeMap;

use crate::record::{LogLevel, LogRecord};

/// The two views computed over an ingestion run.
///
/// `counts` only holds levels that occur at least once; a level with no
/// records is absent rather than reported as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateReport {
    pub total: usize,
    pub counts: BTreeMap<LogLevel, usize>,
    pub target: LogLevel,
    pub matching: Vec<LogRecord>,
}

impl AggregateReport {
    pub fn count(&self, level: LogLevel) -> usize {
        self.counts.get(&level).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
