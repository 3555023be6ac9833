use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::time::Instant;

use logsift::analysis::analyze;
use logsift::cli::Cli;
use logsift::config::LogsiftConfig;
use logsift::diagnostics::{self, DiagnosticSink, DiagnosticSummary};
use logsift::discovery::discover_files;
use logsift::formatters::create_formatter;
use logsift::logging;
use logsift::parallel::{install_quiet_panic_hook, Ingestion, IngestionCoordinator};
use logsift::platform::ExitCode;
use logsift::tty::should_use_colors_with_mode;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    install_quiet_panic_hook();

    let config = match LogsiftConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("logsift: Error: {:#}", e);
            ExitCode::InvalidUsage.exit();
        }
    };

    let files = match discover_files(&config.input.paths, &config.input.discovery) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("logsift: Error: {:#}", e);
            ExitCode::InvalidUsage.exit();
        }
    };

    if files.is_empty() {
        if !config.output.quiet {
            eprintln!(
                "logsift: No log files found in {}",
                config.input.paths.join(", ")
            );
        }
    } else {
        tracing::info!("Found {} log files", files.len());
    }

    match run(&config, &files) {
        Ok(()) => ExitCode::Success.exit(),
        Err(e) => {
            eprintln!("logsift: Error: {:#}", e);
            ExitCode::GeneralError.exit();
        }
    }
}

fn run(config: &LogsiftConfig, files: &[std::path::PathBuf]) -> Result<()> {
    let started = Instant::now();

    let (ingestion, summary) = ingest(config, files)?;
    let mut stats = ingestion.stats.clone();
    stats.finish_timer(started);

    tracing::info!("Total entries collected: {}", ingestion.len());
    if summary.reportable() > 0 {
        tracing::info!(
            rejected = summary.reportable(),
            blank = summary.count("blank"),
            "some input was skipped"
        );
    }

    let report = analyze(&ingestion.records, config.processing.target_level);
    let use_colors = should_use_colors_with_mode(config.output.color);
    let formatter = create_formatter(config.output.format, use_colors);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(formatter.format(&report).as_bytes())
        .and_then(|_| out.flush())
        .context("Failed to write report")?;

    if config.output.stats {
        eprintln!("{}", stats.format_stats());
    }

    Ok(())
}

/// Run the coordinator with a reporter thread draining diagnostics
fn ingest(
    config: &LogsiftConfig,
    files: &[std::path::PathBuf],
) -> Result<(Ingestion, DiagnosticSummary)> {
    let (sink, receiver) = DiagnosticSink::channel();
    let reporter = diagnostics::spawn_stderr_reporter(config.processing.errors, receiver)
        .context("Failed to start diagnostics reporter")?;

    let coordinator = IngestionCoordinator::new(config.parallel_config());
    let result = coordinator.ingest_all(files, &sink);

    // Closing the last sender lets the reporter finish
    drop(sink);
    let summary = reporter
        .join()
        .map_err(|_| anyhow::anyhow!("diagnostics reporter panicked"))?;

    Ok((result?, summary))
}
