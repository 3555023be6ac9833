use crate::record::LogLevel;

/// ANSI color codes for the text report
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub header: &'static str,      // Bold for section headings
    pub count: &'static str,       // No color for counts
    pub timestamp: &'static str,   // Dim for record timestamps
    pub level_debug: &'static str, // Bright cyan for debug
    pub level_info: &'static str,  // Bright green for info
    pub level_warn: &'static str,  // Bright yellow for warn
    pub level_error: &'static str, // Bright red for error
    pub reset: &'static str,       // Reset to default color
}

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if use_colors {
            Self {
                header: "\x1b[1m",
                count: "",
                timestamp: "\x1b[2m",
                level_debug: "\x1b[96m",
                level_info: "\x1b[92m",
                level_warn: "\x1b[93m",
                level_error: "\x1b[91m",
                reset: "\x1b[0m",
            }
        } else {
            // All empty strings for no-color mode
            Self {
                header: "",
                count: "",
                timestamp: "",
                level_debug: "",
                level_info: "",
                level_warn: "",
                level_error: "",
                reset: "",
            }
        }
    }

    pub fn level(&self, level: LogLevel) -> &'static str {
        match level {
            LogLevel::Debug => self.level_debug,
            LogLevel::Info => self.level_info,
            LogLevel::Warn => self.level_warn,
            LogLevel::Error => self.level_error,
        }
    }
}
