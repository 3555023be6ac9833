//! Worker thread for parallel ingestion
//!
//! Pulls units off the work queue until it is empty, running each one in
//! isolation so a fault in one file cannot take down the others.

use anyhow::{anyhow, Result};
use crossbeam_channel::{Receiver, Sender};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::ingest::IngestionResult;

use super::types::{IngestionUnit, UnitFn, UnitResult};

/// Name prefix of ingestion worker threads
pub(crate) const WORKER_THREAD_PREFIX: &str = "ingest-";

/// Install a panic hook that stays silent on ingestion workers.
///
/// A panicking unit is already reported as a [`Diagnostic::UnitFault`];
/// panics on any other thread go to the previous hook.
pub fn install_quiet_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if !is_worker_thread(std::thread::current().name()) {
            previous(info);
        }
    }));
}

fn is_worker_thread(name: Option<&str>) -> bool {
    name.is_some_and(|name| name.starts_with(WORKER_THREAD_PREFIX))
}

/// Worker thread: ingests queued files one at a time
pub(crate) fn worker_thread(
    worker_id: usize,
    work_receiver: Receiver<IngestionUnit>,
    result_sender: Sender<UnitResult>,
    sink: DiagnosticSink,
    unit_fn: UnitFn,
) -> Result<()> {
    // The queue is filled and closed before workers start, so recv only fails
    // once every unit has been taken
    while let Ok(unit) = work_receiver.recv() {
        tracing::debug!(
            worker = worker_id,
            file = %unit.path.display(),
            "processing file"
        );

        let result = run_unit(&unit, &sink, unit_fn);

        result_sender
            .send(UnitResult {
                index: unit.index,
                result,
            })
            .map_err(|_| anyhow!("result channel closed before worker {} finished", worker_id))?;
    }

    Ok(())
}

/// Run one unit, converting a panic into a per-file failure
fn run_unit(unit: &IngestionUnit, sink: &DiagnosticSink, unit_fn: UnitFn) -> IngestionResult {
    match panic::catch_unwind(AssertUnwindSafe(|| unit_fn(&unit.path, sink))) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::error!(file = %unit.path.display(), %message, "ingestion unit panicked");
            sink.report(Diagnostic::UnitFault {
                file: unit.path.clone(),
                message,
            });
            IngestionResult::failed(unit.path.clone())
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
