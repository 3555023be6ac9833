//! Fan-in of per-unit results
//!
//! Runs only after every worker has been joined, so no locking is needed:
//! each unit handed over its own accumulator through the result channel.

use super::types::{Ingestion, UnitResult};

/// Merge unit results into one collection.
///
/// Files are concatenated in submission order; records within a file keep
/// their line order.
pub(crate) fn merge_unit_results(mut results: Vec<UnitResult>) -> Ingestion {
    results.sort_by_key(|unit| unit.index);

    let total = results.iter().map(|unit| unit.result.records.len()).sum();
    let mut merged = Ingestion {
        records: Vec::with_capacity(total),
        ..Default::default()
    };

    for UnitResult { result, .. } in results {
        merged.stats.merge(&result.stats);
        if result.stats.files_failed > 0 {
            merged.failed_files.push(result.file);
        }
        merged.records.extend(result.records);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticSink;
    use crate::ingest::{ingest_file, IngestionResult};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn unit_from(index: usize, lines: &str) -> (UnitResult, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(lines.as_bytes()).unwrap();
        let result = ingest_file(file.path(), &DiagnosticSink::discard());
        (UnitResult { index, result }, file)
    }

    #[test]
    fn test_merge_orders_by_submission_index() {
        let (second, _f2) = unit_from(1, "[2025-01-01T00:00:02] [WARN] - b1\n[2025-01-01T00:00:03] [WARN] - b2\n");
        let (first, _f1) = unit_from(0, "[2025-01-01T00:00:01] [INFO] - a1\n");

        let merged = merge_unit_results(vec![second, first]);

        let messages: Vec<_> = merged.records.iter().map(|r| r.message()).collect();
        assert_eq!(messages, vec!["a1", "b1", "b2"]);
        assert_eq!(merged.stats.files_processed, 2);
        assert_eq!(merged.stats.records_parsed, 3);
        assert!(merged.failed_files.is_empty());
    }

    #[test]
    fn test_failed_units_are_listed_but_contribute_nothing() {
        let (ok, _f) = unit_from(0, "[2025-01-01T00:00:01] [INFO] - a1\n");
        let failed = UnitResult {
            index: 1,
            result: IngestionResult::failed(PathBuf::from("broken.log")),
        };

        let merged = merge_unit_results(vec![failed, ok]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged.failed_files, vec![PathBuf::from("broken.log")]);
        assert_eq!(merged.stats.files_failed, 1);
    }

    #[test]
    fn test_merge_nothing() {
        let merged = merge_unit_results(Vec::new());
        assert!(merged.is_empty());
        assert_eq!(merged.stats.files_processed, 0);
    }
}
