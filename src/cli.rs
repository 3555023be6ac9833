// Command-line interface definitions

use clap::Parser;

use crate::diagnostics::ErrorReportStyle;
use crate::discovery::FileOrder;
use crate::formatters::OutputFormat;
use crate::record::LogLevel;
use crate::tty::ColorMode;

#[derive(Parser, Debug)]
#[command(name = "logsift")]
#[command(about = "Parse bracketed log files in parallel and summarize them by level")]
#[command(
    long_about = "Parse bracketed log files in parallel and summarize them by level\n\nEach line must look like:\n  [2025-08-12T10:00:00] [INFO] - message\n\nLines that do not match are reported on stderr and skipped.\n\nCOMMON EXAMPLES:\n  logsift /var/log/app\n  logsift -j 4 --target-level warn a.log b.log.gz\n  logsift -F json --errors summary logs/"
)]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Files or directories to analyze
    #[arg(default_value = ".")]
    pub paths: Vec<String>,

    /// File-name pattern applied inside directories
    #[arg(long, default_value = "*.log", help_heading = "Input Options")]
    pub pattern: String,

    /// Only look at the top level of each directory
    #[arg(long = "no-recursive", help_heading = "Input Options")]
    pub no_recursive: bool,

    /// Order in which files are processed and merged
    #[arg(
        long = "file-order",
        value_enum,
        default_value_t = FileOrder::Cli,
        help_heading = "Input Options"
    )]
    pub file_order: FileOrder,

    /// Number of files processed concurrently (0 = number of CPUs)
    #[arg(
        short = 'j',
        long,
        default_value_t = 0,
        help_heading = "Performance Options"
    )]
    pub threads: usize,

    /// Level whose entries are listed in the report
    #[arg(
        long = "target-level",
        default_value = "error",
        value_parser = parse_level,
        help_heading = "Analysis Options"
    )]
    pub target_level: LogLevel,

    /// Report format
    #[arg(
        short = 'F',
        long = "output-format",
        value_enum,
        default_value_t = OutputFormat::Text,
        help_heading = "Output Options"
    )]
    pub output_format: OutputFormat,

    /// When to colour the text report
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, help_heading = "Output Options")]
    pub color: ColorMode,

    /// How rejected lines and unreadable files are reported
    #[arg(long, value_enum, default_value_t = ErrorReportStyle::Print, help_heading = "Output Options")]
    pub errors: ErrorReportStyle,

    /// Print processing statistics to stderr
    #[arg(short = 's', long, help_heading = "Output Options")]
    pub stats: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help_heading = "Logging Options")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, conflicts_with = "verbose", help_heading = "Logging Options")]
    pub quiet: bool,
}

fn parse_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::from_name(value).ok_or_else(|| {
        format!(
            "unknown level '{}' (expected one of: {})",
            value,
            LogLevel::ALL
                .iter()
                .map(|level| level.as_str().to_lowercase())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}
