//! Per-file ingestion: read one file line by line and keep the records that parse.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::decompression::DecompressionReader;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::parsers::{parse_line, ParseFailure};
use crate::record::LogRecord;
use crate::stats::ProcessingStats;

/// Records parsed from a single file, in file order
#[derive(Debug, Clone, Default)]
pub struct IngestionResult {
    pub file: PathBuf,
    pub records: Vec<LogRecord>,
    pub stats: ProcessingStats,
}

impl IngestionResult {
    /// Result for a file whose contribution had to be dropped
    pub fn failed(file: PathBuf) -> Self {
        Self {
            file,
            records: Vec::new(),
            stats: ProcessingStats {
                files_failed: 1,
                ..Default::default()
            },
        }
    }
}

/// File-level failure; aborts ingestion of that file only
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("cannot open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("error reading {} after line {line_number}: {source}", .path.display())]
    Read {
        path: PathBuf,
        line_number: usize,
        source: io::Error,
    },
}

impl IngestError {
    pub fn io_error(&self) -> &io::Error {
        match self {
            IngestError::Open { source, .. } | IngestError::Read { source, .. } => source,
        }
    }
}

/// Ingest `path`, turning a file-level failure into a diagnostic and an empty
/// result.
pub fn ingest_file(path: &Path, sink: &DiagnosticSink) -> IngestionResult {
    match try_ingest_file(path, sink) {
        Ok(result) => result,
        Err(err) => {
            tracing::debug!(file = %path.display(), error = %err, "dropping file");
            sink.report(Diagnostic::File {
                file: path.to_path_buf(),
                error: err.to_string(),
            });
            IngestionResult::failed(path.to_path_buf())
        }
    }
}

/// Ingest `path`, propagating open and read failures.
///
/// Line-level parse failures are reported to `sink` and never abort the file.
pub fn try_ingest_file(path: &Path, sink: &DiagnosticSink) -> Result<IngestionResult, IngestError> {
    let mut reader = DecompressionReader::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut result = IngestionResult {
        file: path.to_path_buf(),
        ..Default::default()
    };
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        let line = read_line_lossy(&mut reader, &mut buf).map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            line_number,
            source,
        })?;
        let Some(line) = line else {
            break;
        };
        line_number += 1;
        result.stats.lines_read += 1;

        match parse_line(Some(&line)) {
            Ok(record) => {
                result.stats.records_parsed += 1;
                result.records.push(record);
            }
            Err(failure) => {
                if failure == ParseFailure::Blank {
                    result.stats.blank_lines += 1;
                } else {
                    result.stats.lines_rejected += 1;
                }
                sink.report(Diagnostic::Parse {
                    file: path.to_path_buf(),
                    line_number,
                    failure,
                });
            }
        }
    }

    result.stats.files_processed = 1;
    Ok(result)
}

/// Read one line without its `\n` / `\r\n` terminator. Invalid UTF-8 is
/// replaced rather than treated as a read error.
fn read_line_lossy<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}
