mod default;
mod json;

pub use default::DefaultFormatter;
pub use json::JsonFormatter;

use crate::analysis::AggregateReport;

/// Report output format
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait ReportFormatter {
    fn format(&self, report: &AggregateReport) -> String;
}

pub fn create_formatter(format: OutputFormat, use_colors: bool) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(DefaultFormatter::new(use_colors)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}
