use std::time::{Duration, Instant};

/// Statistics collected during ingestion.
///
/// Every ingestion unit fills its own copy; the coordinator folds them together
/// with [`ProcessingStats::merge`] once all units have finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub files_failed: usize,
    pub lines_read: usize,
    pub records_parsed: usize,
    pub lines_rejected: usize,
    pub blank_lines: usize,
    pub processing_time: Duration,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add another unit's counters into this one. Processing time is not summed:
    /// units overlap, so the coordinator records wall time separately.
    pub fn merge(&mut self, other: &ProcessingStats) {
        self.files_processed += other.files_processed;
        self.files_failed += other.files_failed;
        self.lines_read += other.lines_read;
        self.records_parsed += other.records_parsed;
        self.lines_rejected += other.lines_rejected;
        self.blank_lines += other.blank_lines;
    }

    pub fn finish_timer(&mut self, started: Instant) {
        self.processing_time = started.elapsed();
    }

    pub fn format_stats(&self) -> String {
        let mut output = format!(
            "Lines processed: {} total, {} parsed, {} rejected",
            self.lines_read, self.records_parsed, self.lines_rejected
        );

        if self.blank_lines > 0 {
            output.push_str(&format!(", {} blank", self.blank_lines));
        }

        output.push_str(&format!("; {} files", self.files_processed));
        if self.files_failed > 0 {
            output.push_str(&format!(", {} failed", self.files_failed));
        }

        let processing_time_ms = self.processing_time.as_millis();
        output.push_str(&format!(" in {}ms", processing_time_ms));

        if processing_time_ms > 0 && self.lines_read > 0 {
            let lines_per_sec = (self.lines_read as f64 * 1000.0) / processing_time_ms as f64;
            output.push_str(&format!(" ({:.0} lines/s)", lines_per_sec));
        }

        output
    }
}
