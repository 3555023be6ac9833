use anyhow::Result;

use crate::cli::Cli;
use crate::diagnostics::ErrorReportStyle;
use crate::discovery::DiscoveryConfig;
use crate::formatters::OutputFormat;
use crate::parallel::ParallelConfig;
use crate::record::LogLevel;
use crate::tty::ColorMode;

/// Main configuration struct for logsift
#[derive(Debug, Clone)]
pub struct LogsiftConfig {
    pub input: InputConfig,
    pub processing: ProcessingConfig,
    pub performance: PerformanceConfig,
    pub output: OutputConfig,
}

/// Input configuration
#[derive(Debug, Clone)]
pub struct InputConfig {
    pub paths: Vec<String>,
    pub discovery: DiscoveryConfig,
}

/// Processing configuration
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    pub target_level: LogLevel,
    pub errors: ErrorReportStyle,
}

/// Performance configuration
#[derive(Debug, Clone)]
pub struct PerformanceConfig {
    /// Resolved worker count, never zero
    pub threads: usize,
}

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: ColorMode,
    pub stats: bool,
    pub verbose: u8,
    pub quiet: bool,
}

impl LogsiftConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let discovery = DiscoveryConfig::new(&cli.pattern, !cli.no_recursive, cli.file_order)?;

        Ok(Self {
            input: InputConfig {
                paths: cli.paths.clone(),
                discovery,
            },
            processing: ProcessingConfig {
                target_level: cli.target_level,
                errors: cli.errors,
            },
            performance: PerformanceConfig {
                threads: resolve_threads(cli.threads),
            },
            output: OutputConfig {
                format: cli.output_format,
                color: cli.color,
                stats: cli.stats,
                verbose: cli.verbose,
                quiet: cli.quiet,
            },
        })
    }

    pub fn parallel_config(&self) -> ParallelConfig {
        ParallelConfig::with_workers(self.performance.threads)
    }
}

/// `0` means one worker per CPU
fn resolve_threads(requested: usize) -> usize {
    if requested == 0 {
        num_cpus::get().max(1)
    } else {
        requested
    }
}
