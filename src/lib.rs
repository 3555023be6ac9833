// Core library for the logsift log analyzer

pub mod analysis;
pub mod cli;
pub mod colors;
pub mod config;
pub mod decompression;
pub mod diagnostics;
pub mod discovery;
pub mod formatters;
pub mod ingest;
pub mod logging;
pub mod parallel;
pub mod parsers;
pub mod platform;
pub mod record;
pub mod stats;
pub mod timestamp;
pub mod tty;

pub use analysis::{analyze, count_by_level, filter_by_level, AggregateReport};
pub use cli::Cli;
pub use config::LogsiftConfig;
pub use diagnostics::{Diagnostic, DiagnosticSink, DiagnosticSummary, ErrorReportStyle};
pub use discovery::{discover_files, DiscoveryConfig, FileOrder};
pub use ingest::{ingest_file, IngestionResult};
pub use parallel::{Ingestion, IngestionCoordinator, ParallelConfig};
pub use parsers::{parse_line, ParseFailure, ParseOutcome};
pub use record::{LogLevel, LogRecord};
pub use stats::ProcessingStats;
