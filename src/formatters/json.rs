use crate::analysis::AggregateReport;

use super::ReportFormatter;

// JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &AggregateReport) -> String {
        match serde_json::to_string_pretty(report) {
            Ok(json) => json + "\n",
            Err(_) => "{}\n".to_string(),
        }
    }
}
