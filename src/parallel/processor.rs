//! Ingestion coordinator
//!
//! Contains the IngestionCoordinator that fans files out to a bounded worker
//! pool and fans the per-file results back in.

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{bounded, unbounded};
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use crate::diagnostics::DiagnosticSink;
use crate::ingest::ingest_file;

use super::tracker::merge_unit_results;
use super::types::{Ingestion, IngestionUnit, ParallelConfig, UnitFn, UnitResult};
use super::worker::{worker_thread, WORKER_THREAD_PREFIX};

/// Runs one ingestion unit per file on a bounded pool of worker threads.
///
/// Units share nothing; each returns its own records and stats, which are only
/// merged once every worker has been joined. There is no per-unit timeout: a
/// read that never returns keeps its worker busy and holds up the whole run.
pub struct IngestionCoordinator {
    config: ParallelConfig,
    unit_fn: UnitFn,
}

impl IngestionCoordinator {
    pub fn new(config: ParallelConfig) -> Self {
        Self {
            config,
            unit_fn: ingest_file,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_unit_fn(mut self, unit_fn: UnitFn) -> Self {
        self.unit_fn = unit_fn;
        self
    }

    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// Ingest every file and return the merged records.
    ///
    /// Per-file failures are reported to `sink` and never fail the run. An
    /// error is returned only when the pool itself cannot do its job.
    pub fn ingest_all(&self, files: &[PathBuf], sink: &DiagnosticSink) -> Result<Ingestion> {
        let started = Instant::now();

        if self.config.num_workers == 0 {
            return Err(anyhow!("worker budget must be at least 1"));
        }

        if files.is_empty() {
            let mut empty = Ingestion::default();
            empty.stats.finish_timer(started);
            return Ok(empty);
        }

        let num_workers = self.config.num_workers.min(files.len());
        tracing::info!(
            files = files.len(),
            workers = num_workers,
            "dispatching ingestion units"
        );

        // Sized to hold every unit so submission never waits on a worker
        let (work_sender, work_receiver) = bounded::<IngestionUnit>(files.len());
        let (result_sender, result_receiver) = unbounded::<UnitResult>();

        for (index, path) in files.iter().enumerate() {
            work_sender
                .send(IngestionUnit {
                    index,
                    path: path.clone(),
                })
                .map_err(|_| {
                    anyhow!("failed to submit ingestion unit for {}", path.display())
                })?;
        }
        drop(work_sender);

        // Leaving the scope joins every worker, including on the error paths
        thread::scope(|scope| -> Result<()> {
            let mut worker_handles = Vec::with_capacity(num_workers);

            for worker_id in 0..num_workers {
                let work_receiver = work_receiver.clone();
                let result_sender = result_sender.clone();
                let sink = sink.clone();
                let unit_fn = self.unit_fn;

                let handle = thread::Builder::new()
                    .name(format!("{}{}", WORKER_THREAD_PREFIX, worker_id))
                    .spawn_scoped(scope, move || {
                        worker_thread(worker_id, work_receiver, result_sender, sink, unit_fn)
                    })
                    .with_context(|| format!("failed to spawn ingestion worker {}", worker_id))?;
                worker_handles.push(handle);
            }

            let mut first_failure = None;
            for (idx, handle) in worker_handles.into_iter().enumerate() {
                let outcome = match handle.join() {
                    Ok(outcome) => outcome,
                    Err(_) => Err(anyhow!("ingestion worker {} panicked", idx)),
                };
                if let Err(e) = outcome {
                    first_failure.get_or_insert(e);
                }
            }

            first_failure.map_or(Ok(()), Err)
        })?;

        // Every worker has exited; close the last sender so the drain ends
        drop(result_sender);
        let results: Vec<UnitResult> = result_receiver.iter().collect();

        if results.len() != files.len() {
            return Err(anyhow!(
                "ingestion finished with {} of {} units accounted for",
                results.len(),
                files.len()
            ));
        }

        let mut ingestion = merge_unit_results(results);
        ingestion.stats.finish_timer(started);

        tracing::info!(
            records = ingestion.len(),
            failed_files = ingestion.failed_files.len(),
            "ingestion complete"
        );

        Ok(ingestion)
    }
}
