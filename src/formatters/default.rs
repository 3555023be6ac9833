use crate::analysis::AggregateReport;
use crate::colors::ColorScheme;
use crate::record::LogRecord;

use super::ReportFormatter;

// Default formatter (plain text with optional level colors)
pub struct DefaultFormatter {
    colors: ColorScheme,
}

impl DefaultFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self {
            colors: ColorScheme::new(use_colors),
        }
    }

    fn format_record(&self, record: &LogRecord) -> String {
        let c = &self.colors;
        format!(
            "{}[{}]{} {}[{}]{} - {}",
            c.timestamp,
            record.timestamp().format("%Y-%m-%dT%H:%M:%S"),
            c.reset,
            c.level(record.level()),
            record.level(),
            c.reset,
            record.message()
        )
    }
}

impl ReportFormatter for DefaultFormatter {
    fn format(&self, report: &AggregateReport) -> String {
        let c = &self.colors;
        let mut output = format!(
            "{}Total entries collected:{} {}\n",
            c.header, c.reset, report.total
        );

        output.push_str(&format!("\n{}Log count by level:{}\n", c.header, c.reset));
        if report.counts.is_empty() {
            output.push_str("  (none)\n");
        }
        for (level, count) in &report.counts {
            output.push_str(&format!(
                "  - {}{}{}: {}{}{}\n",
                c.level(*level),
                level,
                c.reset,
                c.count,
                count,
                c.reset
            ));
        }

        output.push_str(&format!(
            "\n{}Found {} {} entries:{}\n",
            c.header,
            report.matching.len(),
            report.target,
            c.reset
        ));
        for record in &report.matching {
            output.push_str(&format!("  - {}\n", self.format_record(record)));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::parsers::parse_line;
    use crate::record::LogLevel;

    #[test]
    fn test_text_report() {
        let records: Vec<_> = [
            "[2025-08-12T10:00:08] [ERROR] - auth failed",
            "[2025-08-12T10:00:00] [INFO] - start",
        ]
        .iter()
        .filter_map(|line| parse_line(Some(line)).ok())
        .collect();

        let output = DefaultFormatter::new(false).format(&analyze(&records, LogLevel::Error));

        assert_eq!(
            output,
            "Total entries collected: 2\n\
             \n\
             Log count by level:\n\
             \x20 - INFO: 1\n\
             \x20 - ERROR: 1\n\
             \n\
             Found 1 ERROR entries:\n\
             \x20 - [2025-08-12T10:00:08] [ERROR] - auth failed\n"
        );
    }

    #[test]
    fn test_text_report_empty() {
        let output = DefaultFormatter::new(false).format(&analyze(&[], LogLevel::Warn));
        assert!(output.contains("Total entries collected: 0"));
        assert!(output.contains("  (none)"));
        assert!(output.contains("Found 0 WARN entries:"));
    }

    #[test]
    fn test_colored_levels() {
        let records: Vec<_> = ["[2025-08-12T10:00:08] [ERROR] - boom"]
            .iter()
            .filter_map(|line| parse_line(Some(line)).ok())
            .collect();

        let output = DefaultFormatter::new(true).format(&analyze(&records, LogLevel::Error));
        assert!(output.contains("\x1b[91mERROR\x1b[0m: 1"));
    }
}
