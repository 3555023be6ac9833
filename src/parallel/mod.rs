//! Parallel ingestion module for logsift
//!
//! Fans one ingestion unit per file out to a bounded pool of worker threads
//! and fans the results back in once every unit has finished.
//!
//! # Module Structure
//!
//! - `types`: Work items, per-unit results and configuration
//! - `worker`: Worker thread that runs queued units
//! - `tracker`: Fan-in merge of per-unit results
//! - `processor`: Main IngestionCoordinator orchestration

mod processor;
mod tracker;
mod types;
mod worker;

// Re-export public types
pub use processor::IngestionCoordinator;
pub use types::{Ingestion, ParallelConfig};
pub use worker::install_quiet_panic_hook;
